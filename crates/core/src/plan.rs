//! Deck plans: an ordered mapping from slide number to spec.
//!
//! The plan declares the deck's total page count up front. Iteration
//! visits every number from 1 to the total in order; numbers without an
//! entry are rendered as placeholder slides rather than failing, so the
//! finished deck never has gaps in its numbering.

use crate::error::{Error, Result};
use crate::spec::SlideSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered deck plan with a fixed total slide count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckPlan {
    total: u32,
    slides: BTreeMap<u32, SlideSpec>,
}

impl DeckPlan {
    /// Create an empty plan for a deck of `total` slides.
    pub fn new(total: u32) -> Self {
        Self {
            total,
            slides: BTreeMap::new(),
        }
    }

    /// Declared deck length, used for `"k / T"` footers.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Register the spec for a slide number.
    ///
    /// Numbers must lie in `1..=total` and may only be assigned once.
    pub fn insert(&mut self, number: u32, spec: impl Into<SlideSpec>) -> Result<()> {
        if number == 0 || number > self.total {
            return Err(Error::InvalidPlan(format!(
                "slide number {} outside 1..={}",
                number, self.total
            )));
        }
        if self.slides.contains_key(&number) {
            return Err(Error::InvalidPlan(format!(
                "slide number {} assigned twice",
                number
            )));
        }
        self.slides.insert(number, spec.into());
        Ok(())
    }

    /// Look up the spec for a slide number, if one was registered.
    pub fn get(&self, number: u32) -> Option<&SlideSpec> {
        self.slides.get(&number)
    }

    /// Number of explicitly registered slides.
    pub fn registered(&self) -> usize {
        self.slides.len()
    }

    /// Visit every slide number from 1 to the total, in order.
    ///
    /// Yields `None` for numbers with no registered spec; those become
    /// placeholder slides.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Option<&SlideSpec>)> {
        (1..=self.total).map(move |n| (n, self.slides.get(&n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{ContentSpec, SectionSpec};

    #[test]
    fn test_insert_and_iterate_in_order() {
        let mut plan = DeckPlan::new(3);
        plan.insert(2, SectionSpec::new("①", "T")).unwrap();
        plan.insert(1, ContentSpec::new(1, "first")).unwrap();

        let numbers: Vec<(u32, bool)> = plan.iter().map(|(n, s)| (n, s.is_some())).collect();
        assert_eq!(numbers, vec![(1, true), (2, true), (3, false)]);
    }

    #[test]
    fn test_gap_yields_none() {
        let mut plan = DeckPlan::new(7);
        plan.insert(1, ContentSpec::new(1, "only")).unwrap();
        assert!(plan.get(7).is_none());
        assert_eq!(plan.iter().filter(|(_, s)| s.is_none()).count(), 6);
    }

    #[test]
    fn test_insert_rejects_out_of_range() {
        let mut plan = DeckPlan::new(3);
        assert!(plan.insert(0, ContentSpec::new(0, "zero")).is_err());
        assert!(plan.insert(4, ContentSpec::new(4, "past end")).is_err());
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut plan = DeckPlan::new(3);
        plan.insert(2, ContentSpec::new(2, "a")).unwrap();
        let err = plan.insert(2, ContentSpec::new(2, "b")).unwrap_err();
        assert!(err.to_string().contains("assigned twice"));
    }
}
