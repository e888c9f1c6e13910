/// Serialize a finished [`Document`] into single-page PDF bytes

use super::metrics::string_width;
use super::paint::{Align, FontWeight, PaintCommand, Rgb};
use super::Document;
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

// Baseline sits this fraction of the font size below a box's vertical centre.
const BASELINE_DROP: f64 = 0.3;

pub fn write_pdf(document: &Document) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let content_id = Ref::new(4);
    let regular_id = Ref::new(5);
    let bold_id = Ref::new(6);
    let info_id = Ref::new(7);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, document.width as f32, document.height as f32));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources()
        .fonts()
        .pair(REGULAR_FONT, regular_id)
        .pair(BOLD_FONT, bold_id);
    page.finish();

    pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));
    pdf.document_info(info_id)
        .title(TextStr(&document.title))
        .producer(TextStr(concat!("tenweek ", env!("CARGO_PKG_VERSION"))));

    let content = paint_content(document);
    pdf.stream(content_id, &content.finish());
    pdf.finish()
}

fn paint_content(document: &Document) -> Content {
    let mut content = Content::new();
    content.set_line_width(document.line_width as f32);
    let (r, g, b) = Rgb::BLACK.to_unit();
    content.set_stroke_rgb(r, g, b);

    // flip from top-left layout space into PDF's bottom-left space
    let flip = |y: f64, height: f64| (document.height - y - height) as f32;

    for command in &document.commands {
        match command {
            PaintCommand::FillRect { rect, fill } => {
                let (r, g, b) = fill.to_unit();
                content.set_fill_rgb(r, g, b);
                content.rect(
                    rect.x as f32,
                    flip(rect.y, rect.height),
                    rect.width as f32,
                    rect.height as f32,
                );
                content.fill_nonzero_and_stroke();
            }
            PaintCommand::StrokeRect { rect } => {
                content.rect(
                    rect.x as f32,
                    flip(rect.y, rect.height),
                    rect.width as f32,
                    rect.height as f32,
                );
                content.stroke();
            }
            PaintCommand::Text { rect, text, size, weight, align } => {
                let width = string_width(text, *size, *weight);
                let x = match align {
                    Align::Left => rect.x,
                    Align::Center => rect.x + (rect.width - width) / 2.0,
                    Align::Right => rect.right() - width,
                };
                let baseline = rect.y + rect.height / 2.0 + BASELINE_DROP * size;
                let font = match weight {
                    FontWeight::Regular => REGULAR_FONT,
                    FontWeight::Bold => BOLD_FONT,
                };
                let (r, g, b) = Rgb::BLACK.to_unit();
                content.set_fill_rgb(r, g, b);
                content.begin_text();
                content.set_font(font, *size as f32);
                content.next_line(x as f32, flip(baseline, 0.0));
                content.show(Str(&encode(text)));
                content.end_text();
            }
        }
    }
    content
}

// The standard Type1 faces only cover single-byte text.
fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (' '..='~').contains(&c) { c as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::Rect as Box2;

    fn sample() -> Document {
        Document {
            title: "Sample".to_string(),
            width: 792.0,
            height: 612.0,
            line_width: 0.567,
            commands: vec![
                PaintCommand::FillRect { rect: Box2::new(20.0, 20.0, 40.0, 20.0), fill: Rgb::LIGHT_BLUE },
                PaintCommand::StrokeRect { rect: Box2::new(60.0, 20.0, 90.0, 20.0) },
                PaintCommand::Text {
                    rect: Box2::new(20.0, 20.0, 40.0, 20.0),
                    text: "Week".to_string(),
                    size: 10.0,
                    weight: FontWeight::Bold,
                    align: Align::Center,
                },
            ],
        }
    }

    #[test]
    fn writes_a_single_page_pdf() {
        let bytes = write_pdf(&sample());
        assert!(bytes.starts_with(b"%PDF-"));
        let body = String::from_utf8_lossy(&bytes);
        assert!(body.contains("/Helvetica-Bold"));
        assert!(body.contains("/Count 1"));
        assert!(body.contains("792"));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(write_pdf(&sample()), write_pdf(&sample()));
    }

    #[test]
    fn non_ascii_is_replaced() {
        assert_eq!(encode("Café 5k"), b"Caf? 5k".to_vec());
    }
}
