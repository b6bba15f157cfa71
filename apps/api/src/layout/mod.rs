// Visual resume layout engine.
// Packs resume sections into left/right page columns, repaging columns as they fill,
// and produces per-page lists of absolutely-positioned entries for the renderer.
// Packing is CPU-bound; handlers run it inside tokio::task::spawn_blocking.

pub mod accumulator;
pub mod entry;
pub mod geometry;
pub mod handlers;
pub mod orchestrator;
pub mod packers;
pub mod pages;
pub mod tables;
pub mod text_metrics;

use thiserror::Error;

use crate::layout::entry::Column;

// Re-export the public API consumed by handlers and state.
pub use geometry::{default_layout_params, LayoutParams};
pub use orchestrator::pack_resume;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid layout parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid geometry in section '{section}': {detail}")]
    InvalidGeometry { section: String, detail: String },

    #[error("{column:?} column exceeded the {max_pages}-page limit")]
    PageLimit { column: Column, max_pages: u32 },
}
