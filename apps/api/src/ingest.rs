//! Document ingestion — uploaded PDF bytes → concatenated page text.

use crate::errors::AppError;

/// Extracts the plain text of every page of a PDF, in page order.
///
/// The result is the ordered concatenation of each page's text; no separator
/// between pages is guaranteed. An image-only page legitimately contributes
/// an empty string — that is accepted, not an error. A document that cannot
/// be parsed as a PDF fails with `AppError::Format` and yields no partial
/// text. No retry: a malformed upload is terminal for the request.
pub fn extract_text(data: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(data)
        .map_err(|e| AppError::Format(format!("uploaded file is not a parseable PDF: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_pdf_bytes_fail_with_format_error() {
        let result = extract_text(b"this is plain text, not a PDF");
        assert!(
            matches!(result, Err(AppError::Format(_))),
            "non-PDF input must surface a format error"
        );
    }

    #[test]
    fn test_empty_input_fails_with_format_error() {
        let result = extract_text(&[]);
        assert!(
            matches!(result, Err(AppError::Format(_))),
            "empty input must surface a format error"
        );
    }

    #[test]
    fn test_truncated_header_fails_with_format_error() {
        // A bare header with no xref table or trailer is not a parseable document.
        let result = extract_text(b"%PDF-1.7\n");
        assert!(result.is_err(), "truncated PDF must not yield partial text");
    }
}
