//! Page geometry shared by the accumulator and every packer.
//!
//! All coordinates are absolute layout units before scaling. Page `n` (1-based) spans
//! `[(n - 1) * page_height, n * page_height]`, so a `top` value already encodes the page
//! it belongs to. The renderer multiplies by a scale factor to get CSS pixels.

use serde::{Deserialize, Serialize};

use crate::layout::tables::max_bottom_reserve;
use crate::layout::LayoutError;

/// A4 proportions in millimetre-like units.
pub const PAGE_HEIGHT: f64 = 297.0;
pub const PAGE_WIDTH: f64 = 210.0;

// ────────────────────────────────────────────────────────────────────────────
// Layout parameters
// ────────────────────────────────────────────────────────────────────────────

/// Page size and margins for one packing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutParams {
    pub page_height: f64,
    /// Offset of the first item below the top edge of every page.
    pub margin_page: f64,
    /// Gap placed above headings and section items.
    pub margin_section: f64,
    /// Gap placed above each bullet line inside an item.
    pub margin_bullet: f64,
    /// Hard limit on pages per column. Exceeding it fails the section being packed.
    pub max_pages: u32,
}

/// Returns the default A4 layout parameters.
pub fn default_layout_params() -> LayoutParams {
    LayoutParams {
        page_height: PAGE_HEIGHT,
        margin_page: 10.0,
        margin_section: 4.0,
        margin_bullet: 2.0,
        max_pages: 20,
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        default_layout_params()
    }
}

impl LayoutParams {
    /// Rejects parameters that would make page arithmetic meaningless.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let margins = [
            ("margin_page", self.margin_page),
            ("margin_section", self.margin_section),
            ("margin_bullet", self.margin_bullet),
        ];
        if !self.page_height.is_finite() || self.page_height <= 0.0 {
            return Err(LayoutError::InvalidParams(format!(
                "page_height must be positive, got {}",
                self.page_height
            )));
        }
        for (name, value) in margins {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidParams(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        // Every template's threshold must sit below the page baseline.
        let reserve = max_bottom_reserve();
        if self.margin_page + reserve >= self.page_height {
            return Err(LayoutError::InvalidParams(format!(
                "margin_page ({}) plus a bottom reserve of {reserve} leaves no room on a {} page",
                self.margin_page, self.page_height
            )));
        }
        if self.max_pages == 0 {
            return Err(LayoutError::InvalidParams(
                "max_pages must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Running-height baseline for the given 1-based page.
    pub fn baseline(&self, page: u32) -> f64 {
        self.page_height * f64::from(page.saturating_sub(1)) + self.margin_page
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shapes
// ────────────────────────────────────────────────────────────────────────────

/// Horizontal extent of a column or box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub x: f64,
    pub width: f64,
}

impl Span {
    pub const fn new(x: f64, width: f64) -> Self {
        Self { x, width }
    }

    /// Shrinks the span by `padding` on both sides.
    pub fn inset(self, padding: f64) -> Self {
        Self {
            x: self.x + padding,
            width: (self.width - 2.0 * padding).max(0.0),
        }
    }
}

/// An absolutely-positioned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, span: Span, height: f64) -> Self {
        Self {
            top,
            left: span.x,
            width: span.width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            top: self.top * factor,
            left: self.left * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Vertical footprint of a tentative placement: a leading gap, then the box itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub lead: f64,
    pub height: f64,
}

impl Slot {
    pub fn new(lead: f64, height: f64) -> Self {
        Self { lead, height }
    }

    pub fn is_valid(&self) -> bool {
        self.lead.is_finite() && self.height.is_finite() && self.lead >= 0.0 && self.height >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let params = default_layout_params();
        assert!(params.validate().is_ok());
        assert_eq!(params.page_height, 297.0);
    }

    #[test]
    fn test_baseline_per_page() {
        let params = default_layout_params();
        assert_eq!(params.baseline(1), 10.0);
        assert_eq!(params.baseline(2), 307.0);
        assert_eq!(params.baseline(3), 604.0);
    }

    #[test]
    fn test_validate_rejects_zero_page_height() {
        let params = LayoutParams {
            page_height: 0.0,
            ..default_layout_params()
        };
        assert!(matches!(params.validate(), Err(LayoutError::InvalidParams(_))));
    }

    #[test]
    fn test_validate_rejects_negative_margin() {
        let params = LayoutParams {
            margin_section: -1.0,
            ..default_layout_params()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_margin_larger_than_page() {
        let params = LayoutParams {
            margin_page: 400.0,
            ..default_layout_params()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_page_consumed_by_bottom_reserve() {
        // threshold 18 - 10 = 8 would sit above the baseline at 10
        let params = LayoutParams {
            page_height: 18.0,
            margin_page: 10.0,
            ..default_layout_params()
        };
        assert!(matches!(params.validate(), Err(LayoutError::InvalidParams(_))));

        let params = LayoutParams {
            page_height: 21.0,
            margin_page: 10.0,
            ..default_layout_params()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rect_scaling() {
        let rect = Rect::new(10.0, Span::new(5.0, 50.0), 20.0).scaled(2.0);
        assert_eq!(rect.top, 20.0);
        assert_eq!(rect.left, 10.0);
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn test_span_inset_never_negative() {
        let span = Span::new(0.0, 3.0).inset(2.0);
        assert_eq!(span.x, 2.0);
        assert_eq!(span.width, 0.0);
    }

    #[test]
    fn test_slot_validity() {
        assert!(Slot::new(4.0, 10.0).is_valid());
        assert!(!Slot::new(f64::NAN, 10.0).is_valid());
        assert!(!Slot::new(0.0, -1.0).is_valid());
    }
}
