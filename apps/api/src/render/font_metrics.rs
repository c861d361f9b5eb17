//! Static font-metric tables for the two builtin faces the renderer uses.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard AFM metrics for Helvetica and Helvetica-Bold. Static tables are
//! enough here: word-wrap only needs to know roughly where a line fills, and
//! the builtin fonts ship fixed metrics anyway.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32. Non-ASCII falls back to an average width.

use crate::render::blocks::BlockKind;

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for the rendered document.
///
/// US letter with 1" margins; body and heading sizes mirror the document
/// styles (11pt default paragraph, 14pt accent heading). `spacer_pt` is the
/// fixed vertical gap appended after every block (0.2" = 14.4pt).
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_pt: f32,
    pub body_size_pt: f32,
    pub heading_size_pt: f32,
    /// Baseline-to-baseline distance as a multiple of font size.
    pub line_height: f32,
    pub spacer_pt: f32,
    /// Accent color for headings, RGB in 0.0–1.0.
    pub heading_color: [f32; 3],
}

impl PageConfig {
    /// Usable text width between the margins, in points.
    pub fn text_width_pt(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_pt
    }

    pub fn font_size_for(&self, kind: BlockKind) -> f32 {
        match kind {
            BlockKind::Heading => self.heading_size_pt,
            BlockKind::Body => self.body_size_pt,
        }
    }
}

/// Returns the default page config: US letter, 1" margins, Helvetica 11pt
/// body, 14pt dark-blue headings, 0.2" spacer after every block.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_pt: 612.0,
        page_height_pt: 792.0,
        margin_pt: 72.0,
        body_size_pt: 11.0,
        heading_size_pt: 14.0,
        line_height: 1.2,
        spacer_pt: 14.4,
        heading_color: [0.0, 0.0, 0.545], // dark blue
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font face.
///
/// All widths are in em units at 1em (i.e., at the configured font size).
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space)
/// through 0x7E (~).
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word-wrap at `max_width_em`, preserving word order.
    ///
    /// Interior runs of whitespace collapse to single spaces, the same way
    /// a paragraph-flow layout treats them. A word wider than the line gets
    /// a line of its own and overflows; there is no mid-word break. Always
    /// returns at least one (possibly empty) line so that blank source lines
    /// keep consuming vertical space.
    pub fn wrap_words(&self, s: &str, max_width_em: f32) -> Vec<String> {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.is_empty() {
            return vec![String::new()];
        }

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_w = self.measure_str(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + self.space_width + word_w > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_w;
            }
        }
        lines.push(current);
        lines
    }
}

/// Returns the metric table for the face a block kind renders in.
pub fn metrics_for(kind: BlockKind) -> &'static FontMetricTable {
    match kind {
        BlockKind::Heading => &HELVETICA_BOLD_TABLE,
        BlockKind::Body => &HELVETICA_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica — body paragraphs.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.513,
    space_width: 0.278,
};

/// Helvetica-Bold — headings.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.540,
    space_width: 0.278,
};

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
