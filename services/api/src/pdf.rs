//! Invoice rendering. One A4 page, Helvetica, uncompressed content stream.

use anyhow::Context as _;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::domain::types::{Order, User};

/// Render a single-page PDF invoice for `order`, addressed to `user`.
pub fn render_invoice(order: &Order, user: &User) -> anyhow::Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let amount_major = order.amount as f64 / 100.0;
    let lines: Vec<(f32, &str, String)> = vec![
        (18.0, "F1", "Invoice".to_string()),
        (11.0, "F1", format!("Order: {}", order.id)),
        (
            11.0,
            "F1",
            format!("Date: {}", order.created_at.format("%Y-%m-%d %H:%M UTC")),
        ),
        (11.0, "F1", format!("Billed to: {} <{}>", user.name, user.email)),
        (11.0, "F1", format!("Status: {}", order.status.as_str())),
        (13.0, "F1", format!("Total: {amount_major:.2}")),
    ];

    let mut operations = Vec::new();
    let mut y = 780.0;
    for (size, font, text) in &lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![(*font).into(), (*size).into()],
        ));
        operations.push(Operation::new("Td", vec![72.into(), y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(text.as_str())],
        ));
        operations.push(Operation::new("ET", vec![]));
        y -= size * 2.0;
    }

    let content = Content { operations };
    // Left uncompressed so the text survives a byte-level search.
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().context("encode invoice content stream")?,
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).context("serialize invoice pdf")?;
    Ok(bytes)
}
