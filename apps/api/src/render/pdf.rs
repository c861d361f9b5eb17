//! PDF serialization — paginated layout → byte buffer.
//!
//! Uses printpdf's builtin Helvetica faces so no font files ship with the
//! binary. Document metadata is pinned (epoch dates, fixed id) so the same
//! input always serializes to the same bytes.

use printpdf::{
    BuiltinFont, Color, CustomPdfConformance, IndirectFontRef, Mm, PdfConformance, PdfDocument,
    Pt, Rgb,
};
use thiserror::Error;
use time::OffsetDateTime;

use crate::render::blocks::{classify, BlockKind};
use crate::render::font_metrics::PageConfig;
use crate::render::paginate::{paginate, PageLayout};

const DOCUMENT_TITLE: &str = "Optimized Resume";
const DOCUMENT_ID: &str = "resume-studio-export";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF serialization failed: {0}")]
    Pdf(String),
}

/// Renders resume text into a complete PDF byte buffer.
///
/// Classification and layout are pure; only the final serialization can
/// fail. The returned buffer is ready for download as-is.
pub fn render_resume_pdf(text: &str, config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    let blocks = classify(text);
    let pages = paginate(&blocks, config);
    serialize_pages(&pages, config)
}

fn serialize_pages(pages: &[PageLayout], config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    let width = Mm::from(Pt(config.page_width_pt));
    let height = Mm::from(Pt(config.page_height_pt));

    let (doc, first_page, first_layer) = PdfDocument::new(DOCUMENT_TITLE, width, height, "Layer 1");

    // Pinned metadata: identical input must produce identical bytes.
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_creation_date(OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(OffsetDateTime::UNIX_EPOCH)
        .with_metadata_date(OffsetDateTime::UNIX_EPOCH)
        .with_document_id(DOCUMENT_ID.to_string());

    let body_font = add_font(&doc, BuiltinFont::Helvetica)?;
    let heading_font = add_font(&doc, BuiltinFont::HelveticaBold)?;

    let [hr, hg, hb] = config.heading_color;
    let heading_color = Color::Rgb(Rgb::new(hr, hg, hb, None));
    let body_color = Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None));
    let x = Mm::from(Pt(config.margin_pt));

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, "Layer 1")
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            // Empty paragraphs hold their vertical slot but draw nothing.
            if line.text.is_empty() {
                continue;
            }
            let y = Mm::from(Pt(line.baseline_y_pt));
            match line.kind {
                BlockKind::Heading => {
                    layer.set_fill_color(heading_color.clone());
                    layer.use_text(line.text.as_str(), config.heading_size_pt, x, y, &heading_font);
                }
                BlockKind::Body => {
                    layer.set_fill_color(body_color.clone());
                    layer.use_text(line.text.as_str(), config.body_size_pt, x, y, &body_font);
                }
            }
        }
    }

    doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
}

fn add_font(
    doc: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, RenderError> {
    doc.add_builtin_font(font)
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::font_metrics::default_page_config;

    #[test]
    fn test_output_is_a_pdf() {
        let config = default_page_config();
        let bytes = render_resume_pdf("JOHN DOE\nSoftware Engineer\n", &config).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output must carry the PDF magic");
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let config = default_page_config();
        let text = "SUMMARY\nShipped a search service\n\nEXPERIENCE\nAcme Corp";
        let first = render_resume_pdf(text, &config).unwrap();
        let second = render_resume_pdf(text, &config).unwrap();
        assert_eq!(
            first, second,
            "identical input must serialize to identical bytes"
        );
    }

    #[test]
    fn test_empty_text_still_renders_a_document() {
        let config = default_page_config();
        let bytes = render_resume_pdf("", &config).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_text_renders_without_error() {
        let config = default_page_config();
        let text: String = (0..200)
            .map(|i| format!("Achievement number {i} with measurable impact"))
            .collect::<Vec<_>>()
            .join("\n");
        let bytes = render_resume_pdf(&text, &config).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
