use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::ExportError;
use crate::layout::{DocumentLayout, Page};
use crate::metrics::{encode_win_ansi, FontWeight, PT_PER_MM};

const PRODUCER: &str = "lessonplan";

/// Serialize a laid-out document as PDF bytes.
///
/// Every page shares one resource dictionary holding the two standard
/// Helvetica faces. Layout coordinates (millimetres from the top-left) are
/// converted to PDF user space (points from the bottom-left).
pub fn generate_pdf(layout: &DocumentLayout, title: &str) -> Result<Vec<u8>, ExportError> {
    if layout.pages.is_empty() {
        return Err(ExportError::EmptyLayout);
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary(FontWeight::Regular));
    let bold_id = doc.add_object(font_dictionary(FontWeight::Bold));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FontWeight::Regular.resource_name() => regular_id,
            FontWeight::Bold.resource_name() => bold_id,
        },
    });

    let page_height_pt = layout.page_height * PT_PER_MM;
    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let page_id = add_page(&mut doc, pages_id, page, page_height_pt)?;
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(layout.page_width * PT_PER_MM),
            Object::Real(page_height_pt),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(title), StringFormat::Literal),
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(buf)
}

fn font_dictionary(weight: FontWeight) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => weight.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    page: &Page,
    page_height_pt: f32,
) -> Result<ObjectId, ExportError> {
    let mut operations = Vec::new();

    for line in &page.lines {
        // Blank wrapped lines only move the cursor.
        if line.text.is_empty() {
            continue;
        }
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![
                Object::Name(line.weight.resource_name().as_bytes().to_vec()),
                Object::Real(line.size),
            ],
        ));
        operations.push(Operation::new(
            "Td",
            vec![
                Object::Real(line.x * PT_PER_MM),
                Object::Real(page_height_pt - line.y * PT_PER_MM),
            ],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(&line.text), StringFormat::Literal)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    }))
}
