//! Single-page PDF rendering.
//!
//! The layout is fixed and identical for every document type: body text at
//! 12pt Helvetica wrapped to the page width minus margins, and a diagonal
//! light-gray watermark marking the output as unofficial. There is no
//! pagination — content past the bottom edge is clipped.

use printpdf::{
    BuiltinFont, Color, Greyscale, Mm, PdfDocument, Pt, TextMatrix,
};

/// US Letter, in points.
const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;

const BODY_FONT_SIZE: f32 = 12.0;
const LINE_HEIGHT_PT: f32 = 14.0;
/// Left edge of the body text.
const BODY_X_PT: f32 = 50.0;
/// Body text wraps to the page width minus 100pt, mirroring the original
/// layout's margins.
const BODY_MAX_WIDTH_PT: f32 = PAGE_WIDTH_PT - 100.0;

/// Average glyph advance for Helvetica, as a fraction of the font size.
/// Good enough for wrapping body copy; exact metrics are not needed for a
/// review-only artifact.
const AVG_CHAR_WIDTH_FACTOR: f32 = 0.5;

const WATERMARK_TEXT: &str = "MOCK - NOT OFFICIAL";
const WATERMARK_FONT_SIZE: f32 = 50.0;
const WATERMARK_GRAY: f32 = 0.9;
const WATERMARK_ANGLE_DEG: f32 = 45.0;

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("PDF rendering failed: {0}")]
    Render(#[from] printpdf::Error),
}

/// Render `content` onto one watermarked Letter page and return the bytes.
pub fn render_pdf(title: &str, content: &str) -> Result<Vec<u8>, PdfError> {
    let (doc, page, layer) = PdfDocument::new(
        title,
        Mm::from(Pt(PAGE_WIDTH_PT)),
        Mm::from(Pt(PAGE_HEIGHT_PT)),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    // Body text, wrapped and clipped to the single page.
    let max_chars = (BODY_MAX_WIDTH_PT / (BODY_FONT_SIZE * AVG_CHAR_WIDTH_FACTOR)) as usize;
    let mut y = PAGE_HEIGHT_PT - 4.0 * BODY_FONT_SIZE;
    for line in wrap_text(content, max_chars) {
        if y < LINE_HEIGHT_PT {
            break;
        }
        if !line.is_empty() {
            layer.use_text(
                line,
                BODY_FONT_SIZE,
                Mm::from(Pt(BODY_X_PT)),
                Mm::from(Pt(y)),
                &font,
            );
        }
        y -= LINE_HEIGHT_PT;
    }

    // Diagonal watermark across the middle of the page.
    layer.begin_text_section();
    layer.set_font(&font, WATERMARK_FONT_SIZE);
    layer.set_fill_color(Color::Greyscale(Greyscale::new(WATERMARK_GRAY, None)));
    layer.set_text_matrix(TextMatrix::TranslateRotate(
        Pt(PAGE_WIDTH_PT / 2.0 - 100.0),
        Pt(PAGE_HEIGHT_PT / 2.0),
        WATERMARK_ANGLE_DEG,
    ));
    layer.write_text(WATERMARK_TEXT, &font);
    layer.end_text_section();

    Ok(doc.save_to_bytes()?)
}

/// Greedy word wrap.
///
/// Paragraph breaks (`\n`) are preserved; within a paragraph, words are
/// packed onto lines of at most `max_chars` characters. A single word
/// longer than `max_chars` gets its own line rather than being split.
fn wrap_text(content: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in content.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Wrapping --

    #[test]
    fn wrap_respects_max_line_width() {
        let lines = wrap_text("alpha bravo charlie delta echo foxtrot", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "alpha bravo charlie delta echo foxtrot");
    }

    #[test]
    fn wrap_preserves_paragraph_breaks() {
        let lines = wrap_text("first\n\nsecond", 80);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap_text("short line", 80), vec!["short line"]);
    }

    #[test]
    fn wrap_gives_oversized_word_its_own_line() {
        let lines = wrap_text("a superlongunbreakableword b", 10);
        assert!(lines.contains(&"superlongunbreakableword".to_string()));
    }

    // -- Rendering --

    #[test]
    fn render_produces_pdf_bytes() {
        let bytes = render_pdf("PERMIT", "Body text for the permit.").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn render_survives_overflowing_content() {
        // Far more lines than fit on one page; overflow is clipped, not an
        // error.
        let long = "word ".repeat(20_000);
        let bytes = render_pdf("CONTRACT", &long).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn render_survives_empty_content() {
        let bytes = render_pdf("BID", "").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
