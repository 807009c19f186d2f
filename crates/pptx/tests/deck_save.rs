//! End-to-end tests: build a deck, save it, and read the artifact back.

use deck_core::{ContentSpec, DeckPlan, SectionSpec, StyleConfig, TitleSpec};
use deck_pptx::{DeckBuilder, PLACEHOLDER_TITLE};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use zip::ZipArchive;

/// Extract the text of every `<a:t>` element in document order.
fn extract_texts(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut texts = Vec::new();
    let mut in_t = false;
    let mut current = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"a:t" => {
                in_t = true;
                current.clear();
            }
            Ok(Event::Text(ref e)) if in_t => {
                current.push_str(&e.unescape().unwrap_or_default());
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"a:t" => {
                in_t = false;
                texts.push(current.clone());
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("XML parsing error: {}", e),
            _ => {}
        }
    }
    texts
}

fn read_slide(archive: &mut ZipArchive<File>, number: usize) -> String {
    let mut content = String::new();
    archive
        .by_name(&format!("ppt/slides/slide{}.xml", number))
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

fn three_slide_plan() -> DeckPlan {
    let mut plan = DeckPlan::new(3);
    plan.insert(1, TitleSpec::new("A", "B", "C", "D")).unwrap();
    plan.insert(2, SectionSpec::new("①", "T").subtitle("S"))
        .unwrap();
    plan.insert(
        3,
        ContentSpec::new(3, "Title").bullets(vec!["x".into(), "y".into()]),
    )
    .unwrap();
    plan
}

#[test]
fn saved_deck_is_a_readable_pptx_with_three_slides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");

    let builder = DeckBuilder::from_plan(StyleConfig::default(), &three_slide_plan()).unwrap();
    let count = builder.save(&path).unwrap();
    assert_eq!(count, 3);

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    assert!(archive.by_name("ppt/slides/slide3.xml").is_ok());
    assert!(archive.by_name("ppt/slides/slide4.xml").is_err());
}

#[test]
fn slide_three_carries_title_bullets_and_footer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");

    let builder = DeckBuilder::from_plan(StyleConfig::default(), &three_slide_plan()).unwrap();
    builder.save(&path).unwrap();

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let texts = extract_texts(&read_slide(&mut archive, 3));

    assert_eq!(texts[0], "Title");
    let x_pos = texts.iter().position(|t| t == "x").unwrap();
    let y_pos = texts.iter().position(|t| t == "y").unwrap();
    assert!(x_pos < y_pos);
    assert_eq!(texts.last().unwrap(), "3 / 3");
}

#[test]
fn unassigned_slide_number_becomes_placeholder_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");

    // Slide 7 exists in the numbering but has no registered spec.
    let mut plan = DeckPlan::new(7);
    plan.insert(1, TitleSpec::new("A", "B", "C", "D")).unwrap();

    let builder = DeckBuilder::from_plan(StyleConfig::default(), &plan).unwrap();
    assert_eq!(builder.save(&path).unwrap(), 7);

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let texts = extract_texts(&read_slide(&mut archive, 7));
    assert_eq!(texts[0], PLACEHOLDER_TITLE);
    assert_eq!(texts[1], "7 / 7");
    // Marker title and footer only: the body region is absent.
    assert_eq!(texts.len(), 2);
}

#[test]
fn two_runs_produce_byte_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.pptx");
    let second_path = dir.path().join("second.pptx");

    DeckBuilder::from_plan(StyleConfig::default(), &three_slide_plan())
        .unwrap()
        .save(&first_path)
        .unwrap();
    DeckBuilder::from_plan(StyleConfig::default(), &three_slide_plan())
        .unwrap()
        .save(&second_path)
        .unwrap();

    let first = std::fs::read(&first_path).unwrap();
    let second = std::fs::read(&second_path).unwrap();
    assert_eq!(first, second);
}
