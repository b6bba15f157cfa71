//! Line-count estimation for free-text fields (summaries, descriptions, bullets).
//!
//! Templates render body text in a single face per template, so one average glyph width
//! per template is enough. Estimates only need to be close enough to size boxes; the
//! renderer clips rather than reflows.

use serde::{Deserialize, Serialize};

/// Body-text metrics for a template, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub char_width: f64,
    pub space_width: f64,
    pub line_height: f64,
}

impl TextMetrics {
    pub fn measure_str(&self, s: &str) -> f64 {
        s.chars().count() as f64 * self.char_width
    }

    /// Estimates how many lines `s` occupies when word-wrapped at `width`.
    ///
    /// Greedy wrap. A single word wider than the line still takes one line.
    pub fn estimated_lines(&self, s: &str, width: f64) -> u32 {
        let mut line_count = 0u32;
        let mut current_width = 0.0_f64;

        for word in s.split_whitespace() {
            let word_w = self.measure_str(word);
            if line_count == 0 {
                line_count = 1;
                current_width = word_w;
            } else if current_width + self.space_width + word_w > width {
                line_count = line_count.saturating_add(1);
                current_width = word_w;
            } else {
                current_width += self.space_width + word_w;
            }
        }
        line_count
    }

    /// Height of `s` wrapped at `width`. Empty text has no height.
    pub fn text_height(&self, s: &str, width: f64) -> f64 {
        f64::from(self.estimated_lines(s, width)) * self.line_height
    }
}
