//! Line classification — splits resume text into heading and body blocks.

/// Visual class of one line of resume text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Section header: larger bold text in the accent color.
    Heading,
    /// Everything else, blank lines included.
    Body,
}

/// One line of the source text, tagged with its visual class.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

/// A line is a heading iff its trimmed form is non-empty and contains no
/// lower-case letters. Digits and punctuation don't disqualify a heading —
/// "EXPERIENCE 2020-2024" still counts.
pub fn is_heading(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.chars().any(|c| c.is_lowercase())
}

/// Splits text on line breaks and classifies every line, in order.
///
/// Blank lines become empty body blocks rather than being dropped — they
/// carry the source text's vertical spacing into the rendered document.
pub fn classify(text: &str) -> Vec<Block> {
    text.split('\n')
        .map(|line| Block {
            kind: if is_heading(line) {
                BlockKind::Heading
            } else {
                BlockKind::Body
            },
            text: line.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_case_line_is_heading() {
        assert!(is_heading("PROFESSIONAL SUMMARY"));
        assert!(is_heading("  CONTACT INFORMATION  "));
    }

    #[test]
    fn test_mixed_case_line_is_body() {
        assert!(!is_heading("Software Engineer"));
        assert!(!is_heading("EXPERIENCe"));
    }

    #[test]
    fn test_blank_and_whitespace_lines_are_body() {
        assert!(!is_heading(""));
        assert!(!is_heading("   "));
    }

    #[test]
    fn test_no_cased_characters_still_counts_as_heading() {
        // Non-empty with no lower-case letters — digits and punctuation qualify.
        assert!(is_heading("2020-2024"));
        assert!(is_heading("---"));
    }

    #[test]
    fn test_unicode_lower_case_disqualifies() {
        assert!(!is_heading("RÉSUMÉ média"));
        assert!(is_heading("RÉSUMÉ"));
    }

    #[test]
    fn test_block_count_equals_line_count() {
        let text = "A\nb\n\nC";
        assert_eq!(classify(text).len(), 4, "one block per line, blanks kept");
    }

    #[test]
    fn test_trailing_newline_yields_trailing_empty_block() {
        let blocks = classify("JOHN DOE\nSoftware Engineer\n");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind, BlockKind::Heading);
        assert_eq!(blocks[0].text, "JOHN DOE");
        assert_eq!(blocks[1].kind, BlockKind::Body);
        assert_eq!(blocks[1].text, "Software Engineer");
        assert_eq!(blocks[2].kind, BlockKind::Body);
        assert_eq!(blocks[2].text, "");
    }

    #[test]
    fn test_empty_input_is_one_empty_body_block() {
        let blocks = classify("");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Body);
    }

    #[test]
    fn test_order_is_preserved() {
        let blocks = classify("SKILLS\nRust\nEDUCATION");
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::Heading, BlockKind::Body, BlockKind::Heading]
        );
    }
}
