//! OPC packaging: serializes rendered slides into a `.pptx` ZIP archive.
//!
//! Emits the minimal part set for a well-formed presentation: content
//! types, package relationships, the presentation part, one blank slide
//! master and layout, one theme, and one slide part per rendered slide.
//! No timestamps or revision metadata are written, so the same deck
//! always produces byte-identical output.

use crate::shape::{BoxShape, Paragraph, Shape, TextShape};
use crate::xml::{rel_type, XmlPart, NS_A, NS_CONTENT_TYPES, NS_P, NS_PKG_RELS, NS_R};
use deck_core::{Error, Rect, Result, StyleConfig};
use std::io::{Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";

fn zip_err(e: zip::result::ZipError) -> Error {
    Error::ZipError(e.to_string())
}

/// Write the whole deck as an OPC package to `target`.
pub fn write_package<W: Write + Seek>(
    target: W,
    style: &StyleConfig,
    slides: &[Vec<Shape>],
) -> Result<()> {
    let mut zip = ZipWriter::new(target);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    add_part(&mut zip, options, "[Content_Types].xml", &content_types(slides.len())?)?;
    add_part(&mut zip, options, "_rels/.rels", &root_rels()?)?;
    add_part(
        &mut zip,
        options,
        "ppt/presentation.xml",
        &presentation(style, slides.len())?,
    )?;
    add_part(
        &mut zip,
        options,
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels(slides.len())?,
    )?;
    add_part(
        &mut zip,
        options,
        "ppt/slideMasters/slideMaster1.xml",
        &slide_master()?,
    )?;
    add_part(
        &mut zip,
        options,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &slide_master_rels()?,
    )?;
    add_part(
        &mut zip,
        options,
        "ppt/slideLayouts/slideLayout1.xml",
        &slide_layout()?,
    )?;
    add_part(
        &mut zip,
        options,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &slide_layout_rels()?,
    )?;
    add_part(&mut zip, options, "ppt/theme/theme1.xml", &theme(style)?)?;

    for (idx, shapes) in slides.iter().enumerate() {
        let number = idx + 1;
        add_part(
            &mut zip,
            options,
            &format!("ppt/slides/slide{}.xml", number),
            &slide_part(shapes)?,
        )?;
        add_part(
            &mut zip,
            options,
            &format!("ppt/slides/_rels/slide{}.xml.rels", number),
            &slide_rels()?,
        )?;
    }

    zip.finish().map_err(zip_err)?;
    Ok(())
}

fn add_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: FileOptions,
    name: &str,
    bytes: &[u8],
) -> Result<()> {
    zip.start_file(name, options).map_err(zip_err)?;
    zip.write_all(bytes)?;
    Ok(())
}

fn content_types(slide_count: usize) -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    part.empty(
        "Default",
        &[("Extension", "rels"), ("ContentType", CT_RELATIONSHIPS)],
    )?;
    part.empty(
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;

    let overrides = [
        ("/ppt/presentation.xml", CT_PRESENTATION),
        ("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER),
        ("/ppt/slideLayouts/slideLayout1.xml", CT_SLIDE_LAYOUT),
        ("/ppt/theme/theme1.xml", CT_THEME),
    ];
    for (name, content_type) in overrides {
        part.empty(
            "Override",
            &[("PartName", name), ("ContentType", content_type)],
        )?;
    }
    for number in 1..=slide_count {
        let name = format!("/ppt/slides/slide{}.xml", number);
        part.empty(
            "Override",
            &[("PartName", name.as_str()), ("ContentType", CT_SLIDE)],
        )?;
    }
    part.close("Types")?;
    Ok(part.finish())
}

/// A relationships part from (id, type, target) triples.
fn relationships(entries: &[(String, &str, String)]) -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open("Relationships", &[("xmlns", NS_PKG_RELS)])?;
    for (id, rel, target) in entries {
        part.empty(
            "Relationship",
            &[
                ("Id", id.as_str()),
                ("Type", rel),
                ("Target", target.as_str()),
            ],
        )?;
    }
    part.close("Relationships")?;
    Ok(part.finish())
}

fn root_rels() -> Result<Vec<u8>> {
    relationships(&[(
        "rId1".to_string(),
        rel_type::OFFICE_DOCUMENT,
        "ppt/presentation.xml".to_string(),
    )])
}

fn presentation(style: &StyleConfig, slide_count: usize) -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open(
        "p:presentation",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;

    part.open("p:sldMasterIdLst", &[])?;
    part.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    part.close("p:sldMasterIdLst")?;

    part.open("p:sldIdLst", &[])?;
    for idx in 0..slide_count {
        let id = (256 + idx).to_string();
        let rid = format!("rId{}", idx + 2);
        part.empty("p:sldId", &[("id", id.as_str()), ("r:id", rid.as_str())])?;
    }
    part.close("p:sldIdLst")?;

    let cx = style.canvas_width_emu().0.to_string();
    let cy = style.canvas_height_emu().0.to_string();
    part.empty("p:sldSz", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    part.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;
    part.close("p:presentation")?;
    Ok(part.finish())
}

fn presentation_rels(slide_count: usize) -> Result<Vec<u8>> {
    let mut entries = vec![(
        "rId1".to_string(),
        rel_type::SLIDE_MASTER,
        "slideMasters/slideMaster1.xml".to_string(),
    )];
    for idx in 0..slide_count {
        entries.push((
            format!("rId{}", idx + 2),
            rel_type::SLIDE,
            format!("slides/slide{}.xml", idx + 1),
        ));
    }
    relationships(&entries)
}

/// Write the fixed group-shape header of a `p:spTree` and leave the tree
/// open for the caller's shapes.
fn open_shape_tree(part: &mut XmlPart) -> Result<()> {
    part.open("p:spTree", &[])?;
    part.open("p:nvGrpSpPr", &[])?;
    part.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    part.empty("p:cNvGrpSpPr", &[])?;
    part.empty("p:nvPr", &[])?;
    part.close("p:nvGrpSpPr")?;
    part.open("p:grpSpPr", &[])?;
    part.open("a:xfrm", &[])?;
    part.empty("a:off", &[("x", "0"), ("y", "0")])?;
    part.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
    part.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    part.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    part.close("a:xfrm")?;
    part.close("p:grpSpPr")?;
    Ok(())
}

fn slide_master() -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open(
        "p:sldMaster",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    part.open("p:cSld", &[])?;
    open_shape_tree(&mut part)?;
    part.close("p:spTree")?;
    part.close("p:cSld")?;
    part.empty(
        "p:clrMap",
        &[
            ("bg1", "lt1"),
            ("tx1", "dk1"),
            ("bg2", "lt2"),
            ("tx2", "dk2"),
            ("accent1", "accent1"),
            ("accent2", "accent2"),
            ("accent3", "accent3"),
            ("accent4", "accent4"),
            ("accent5", "accent5"),
            ("accent6", "accent6"),
            ("hlink", "hlink"),
            ("folHlink", "folHlink"),
        ],
    )?;
    part.open("p:sldLayoutIdLst", &[])?;
    part.empty("p:sldLayoutId", &[("id", "2147483649"), ("r:id", "rId1")])?;
    part.close("p:sldLayoutIdLst")?;
    part.close("p:sldMaster")?;
    Ok(part.finish())
}

fn slide_master_rels() -> Result<Vec<u8>> {
    relationships(&[
        (
            "rId1".to_string(),
            rel_type::SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml".to_string(),
        ),
        (
            "rId2".to_string(),
            rel_type::THEME,
            "../theme/theme1.xml".to_string(),
        ),
    ])
}

fn slide_layout() -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open(
        "p:sldLayout",
        &[
            ("xmlns:a", NS_A),
            ("xmlns:r", NS_R),
            ("xmlns:p", NS_P),
            ("type", "blank"),
            ("preserve", "1"),
        ],
    )?;
    part.open("p:cSld", &[("name", "Blank")])?;
    open_shape_tree(&mut part)?;
    part.close("p:spTree")?;
    part.close("p:cSld")?;
    part.open("p:clrMapOvr", &[])?;
    part.empty("a:masterClrMapping", &[])?;
    part.close("p:clrMapOvr")?;
    part.close("p:sldLayout")?;
    Ok(part.finish())
}

fn slide_layout_rels() -> Result<Vec<u8>> {
    relationships(&[(
        "rId1".to_string(),
        rel_type::SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml".to_string(),
    )])
}

fn slide_rels() -> Result<Vec<u8>> {
    relationships(&[(
        "rId1".to_string(),
        rel_type::SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml".to_string(),
    )])
}

/// Minimal theme carrying the deck palette and font family.
fn theme(style: &StyleConfig) -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open("a:theme", &[("xmlns:a", NS_A), ("name", "Deck Theme")])?;
    part.open("a:themeElements", &[])?;

    part.open("a:clrScheme", &[("name", "Deck")])?;
    part.open("a:dk1", &[])?;
    part.empty("a:sysClr", &[("val", "windowText"), ("lastClr", "000000")])?;
    part.close("a:dk1")?;
    part.open("a:lt1", &[])?;
    part.empty("a:sysClr", &[("val", "window"), ("lastClr", "FFFFFF")])?;
    part.close("a:lt1")?;
    let scheme = [
        ("a:dk2", style.text.hex()),
        ("a:lt2", style.quadrant_tint_one.hex()),
        ("a:accent1", style.accent_one.hex()),
        ("a:accent2", style.accent_two.hex()),
        ("a:accent3", style.emphasis.hex()),
        ("a:accent4", style.primary.hex()),
        ("a:accent5", style.muted.hex()),
        ("a:accent6", style.on_dark_muted.hex()),
        ("a:hlink", style.accent_one.hex()),
        ("a:folHlink", style.muted.hex()),
    ];
    for (slot, hex) in &scheme {
        part.open(slot, &[])?;
        part.empty("a:srgbClr", &[("val", hex.as_str())])?;
        part.close(slot)?;
    }
    part.close("a:clrScheme")?;

    part.open("a:fontScheme", &[("name", "Deck")])?;
    for slot in ["a:majorFont", "a:minorFont"] {
        part.open(slot, &[])?;
        part.empty("a:latin", &[("typeface", style.font_family.as_str())])?;
        part.empty("a:ea", &[("typeface", style.font_family.as_str())])?;
        part.empty("a:cs", &[("typeface", "")])?;
        part.close(slot)?;
    }
    part.close("a:fontScheme")?;

    part.open("a:fmtScheme", &[("name", "Deck")])?;
    part.open("a:fillStyleLst", &[])?;
    for _ in 0..3 {
        solid_scheme_fill(&mut part)?;
    }
    part.close("a:fillStyleLst")?;
    part.open("a:lnStyleLst", &[])?;
    for width in ["6350", "12700", "19050"] {
        part.open("a:ln", &[("w", width)])?;
        solid_scheme_fill(&mut part)?;
        part.close("a:ln")?;
    }
    part.close("a:lnStyleLst")?;
    part.open("a:effectStyleLst", &[])?;
    for _ in 0..3 {
        part.open("a:effectStyle", &[])?;
        part.empty("a:effectLst", &[])?;
        part.close("a:effectStyle")?;
    }
    part.close("a:effectStyleLst")?;
    part.open("a:bgFillStyleLst", &[])?;
    for _ in 0..3 {
        solid_scheme_fill(&mut part)?;
    }
    part.close("a:bgFillStyleLst")?;
    part.close("a:fmtScheme")?;

    part.close("a:themeElements")?;
    part.close("a:theme")?;
    Ok(part.finish())
}

fn solid_scheme_fill(part: &mut XmlPart) -> Result<()> {
    part.open("a:solidFill", &[])?;
    part.empty("a:schemeClr", &[("val", "phClr")])?;
    part.close("a:solidFill")
}

/// Serialize one rendered slide into its slide part.
pub fn slide_part(shapes: &[Shape]) -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open(
        "p:sld",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    part.open("p:cSld", &[])?;
    open_shape_tree(&mut part)?;

    // Shape id 1 belongs to the group; visible shapes start at 2.
    for (idx, shape) in shapes.iter().enumerate() {
        let id = idx as u32 + 2;
        match shape {
            Shape::Box(boxed) => emit_box(&mut part, boxed, id)?,
            Shape::Text(text) => emit_text(&mut part, text, id)?,
        }
    }

    part.close("p:spTree")?;
    part.close("p:cSld")?;
    part.open("p:clrMapOvr", &[])?;
    part.empty("a:masterClrMapping", &[])?;
    part.close("p:clrMapOvr")?;
    part.close("p:sld")?;
    Ok(part.finish())
}

fn emit_xfrm(part: &mut XmlPart, bounds: &Rect) -> Result<()> {
    let x = bounds.x().0.to_string();
    let y = bounds.y().0.to_string();
    let cx = bounds.cx().0.to_string();
    let cy = bounds.cy().0.to_string();
    part.open("a:xfrm", &[])?;
    part.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
    part.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    part.close("a:xfrm")
}

fn emit_nv_sp_pr(part: &mut XmlPart, id: u32, text_box: bool) -> Result<()> {
    let id_text = id.to_string();
    let name = format!("Shape {}", id);
    part.open("p:nvSpPr", &[])?;
    part.empty("p:cNvPr", &[("id", id_text.as_str()), ("name", name.as_str())])?;
    if text_box {
        part.empty("p:cNvSpPr", &[("txBox", "1")])?;
    } else {
        part.empty("p:cNvSpPr", &[])?;
    }
    part.empty("p:nvPr", &[])?;
    part.close("p:nvSpPr")
}

fn emit_box(part: &mut XmlPart, shape: &BoxShape, id: u32) -> Result<()> {
    part.open("p:sp", &[])?;
    emit_nv_sp_pr(part, id, false)?;

    part.open("p:spPr", &[])?;
    emit_xfrm(part, &shape.bounds)?;
    part.open("a:prstGeom", &[("prst", shape.geometry.preset())])?;
    part.empty("a:avLst", &[])?;
    part.close("a:prstGeom")?;
    let fill = shape.fill.hex();
    part.open("a:solidFill", &[])?;
    part.empty("a:srgbClr", &[("val", fill.as_str())])?;
    part.close("a:solidFill")?;
    part.open("a:ln", &[])?;
    match &shape.outline {
        Some(color) => {
            let hex = color.hex();
            part.open("a:solidFill", &[])?;
            part.empty("a:srgbClr", &[("val", hex.as_str())])?;
            part.close("a:solidFill")?;
        }
        None => part.empty("a:noFill", &[])?,
    }
    part.close("a:ln")?;
    part.close("p:spPr")?;

    // Autoshapes carry an empty text body.
    part.open("p:txBody", &[])?;
    part.empty("a:bodyPr", &[])?;
    part.empty("a:lstStyle", &[])?;
    part.empty("a:p", &[])?;
    part.close("p:txBody")?;
    part.close("p:sp")
}

fn emit_text(part: &mut XmlPart, shape: &TextShape, id: u32) -> Result<()> {
    part.open("p:sp", &[])?;
    emit_nv_sp_pr(part, id, true)?;

    part.open("p:spPr", &[])?;
    emit_xfrm(part, &shape.bounds)?;
    part.open("a:prstGeom", &[("prst", "rect")])?;
    part.empty("a:avLst", &[])?;
    part.close("a:prstGeom")?;
    part.empty("a:noFill", &[])?;
    part.close("p:spPr")?;

    part.open("p:txBody", &[])?;
    part.empty("a:bodyPr", &[("wrap", "square")])?;
    part.empty("a:lstStyle", &[])?;
    for paragraph in &shape.paragraphs {
        emit_paragraph(part, paragraph)?;
    }
    part.close("p:txBody")?;
    part.close("p:sp")
}

fn emit_paragraph(part: &mut XmlPart, paragraph: &Paragraph) -> Result<()> {
    part.open("a:p", &[])?;

    let algn = paragraph.align.as_ooxml();
    if paragraph.space_after > 0.0 {
        let spc = paragraph.space_after_centipoints().to_string();
        part.open("a:pPr", &[("algn", algn)])?;
        part.open("a:spcAft", &[])?;
        part.empty("a:spcPts", &[("val", spc.as_str())])?;
        part.close("a:spcAft")?;
        part.close("a:pPr")?;
    } else {
        part.empty("a:pPr", &[("algn", algn)])?;
    }

    part.open("a:r", &[])?;
    let sz = paragraph.size_centipoints().to_string();
    if paragraph.bold {
        part.open("a:rPr", &[("sz", sz.as_str()), ("b", "1")])?;
    } else {
        part.open("a:rPr", &[("sz", sz.as_str())])?;
    }
    let hex = paragraph.color.hex();
    part.open("a:solidFill", &[])?;
    part.empty("a:srgbClr", &[("val", hex.as_str())])?;
    part.close("a:solidFill")?;
    part.empty("a:latin", &[("typeface", paragraph.font.as_str())])?;
    part.empty("a:ea", &[("typeface", paragraph.font.as_str())])?;
    part.close("a:rPr")?;
    part.leaf("a:t", &[], &paragraph.text)?;
    part.close("a:r")?;
    part.close("a:p")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{LineDefaults, ShapeGeometry};
    use deck_core::{Alignment, BulletLine, Color, Emu};
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn sample_text_shape() -> Shape {
        let defaults = LineDefaults {
            size: 20.0,
            bold: false,
            color: Color::rgb(0x2C, 0x3E, 0x50),
            font: "Yu Gothic".to_string(),
            align: Alignment::Left,
            space_after: 8.0,
        };
        let bounds = Rect::new(
            Emu::from_inches(1.0),
            Emu::from_inches(1.6),
            Emu::from_inches(11.3),
            Emu::from_inches(5.0),
        )
        .unwrap();
        Shape::Text(TextShape {
            bounds,
            paragraphs: vec![
                defaults.resolve(&BulletLine::plain("x")),
                defaults.resolve(&BulletLine::plain("y")),
            ],
        })
    }

    #[test]
    fn test_content_types_lists_every_slide() {
        let bytes = content_types(3).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("/ppt/slides/slide1.xml"));
        assert!(text.contains("/ppt/slides/slide3.xml"));
        assert!(!text.contains("/ppt/slides/slide4.xml"));
    }

    #[test]
    fn test_slide_part_paragraph_count_and_order() {
        let bytes = slide_part(&[sample_text_shape()]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.matches("<a:r>").count(), 2);
        let x_pos = text.find("<a:t>x</a:t>").unwrap();
        let y_pos = text.find("<a:t>y</a:t>").unwrap();
        assert!(x_pos < y_pos);
    }

    #[test]
    fn test_slide_part_positions_in_emu() {
        let bytes = slide_part(&[sample_text_shape()]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("<a:off x=\"914400\" y=\"1463040\"/>"));
    }

    #[test]
    fn test_box_outline_variants() {
        let bounds = Rect::new(Emu(0), Emu(0), Emu(100), Emu(100)).unwrap();
        let filled = Shape::Box(BoxShape {
            bounds,
            geometry: ShapeGeometry::RoundedRect,
            fill: Color::rgb(0xF7, 0xF9, 0xFC),
            outline: Some(Color::rgb(0x2E, 0x86, 0xC1)),
        });
        let text = String::from_utf8(slide_part(&[filled]).unwrap()).unwrap();
        assert!(text.contains("prst=\"roundRect\""));
        assert!(text.contains("<a:ln><a:solidFill><a:srgbClr val=\"2E86C1\"/></a:solidFill></a:ln>"));

        let plain = Shape::Box(BoxShape {
            bounds,
            geometry: ShapeGeometry::Rect,
            fill: Color::rgb(0x1B, 0x2A, 0x4A),
            outline: None,
        });
        let text = String::from_utf8(slide_part(&[plain]).unwrap()).unwrap();
        assert!(text.contains("<a:ln><a:noFill/></a:ln>"));
    }

    #[test]
    fn test_package_contains_expected_parts() {
        let style = StyleConfig::default();
        let slides = vec![vec![sample_text_shape()], vec![sample_text_shape()]];
        let mut buffer = Cursor::new(Vec::new());
        write_package(&mut buffer, &style, &slides).unwrap();

        buffer.set_position(0);
        let mut archive = ZipArchive::new(buffer).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {}", name);
        }
    }

    #[test]
    fn test_presentation_declares_canvas_size() {
        let style = StyleConfig::default();
        let bytes = presentation(&style, 1).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("<p:sldSz cx=\"12191695\" cy=\"6858000\"/>"));
        assert!(text.contains("r:id=\"rId2\""));
    }

    #[test]
    fn test_package_is_deterministic() {
        let style = StyleConfig::default();
        let slides = vec![vec![sample_text_shape()]];

        let mut first = Cursor::new(Vec::new());
        write_package(&mut first, &style, &slides).unwrap();
        let mut second = Cursor::new(Vec::new());
        write_package(&mut second, &style, &slides).unwrap();
        assert_eq!(first.into_inner(), second.into_inner());
    }

    #[test]
    fn test_theme_carries_palette_and_font() {
        let style = StyleConfig::default();
        let text = String::from_utf8(theme(&style).unwrap()).unwrap();
        assert!(text.contains("val=\"2E86C1\""));
        assert!(text.contains("typeface=\"Yu Gothic\""));
    }

    #[test]
    fn test_slide_part_readable_roundtrip() {
        let style = StyleConfig::default();
        let slides = vec![vec![sample_text_shape()]];
        let mut buffer = Cursor::new(Vec::new());
        write_package(&mut buffer, &style, &slides).unwrap();

        buffer.set_position(0);
        let mut archive = ZipArchive::new(buffer).unwrap();
        let mut content = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert!(content.contains("<a:t>x</a:t>"));
    }
}
