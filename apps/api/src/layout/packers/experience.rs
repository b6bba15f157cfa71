use tracing::debug;

use crate::layout::accumulator::Accumulator;
use crate::layout::entry::{Column, Content, Draft, EntryKind, SectionIcon};
use crate::layout::geometry::Slot;
use crate::layout::packers::{date_range, pack_heading, trimmed, PackContext, Timeline};
use crate::layout::LayoutError;
use crate::models::resume::Training;

/// Indent of bullet text relative to the row.
const BULLET_INDENT: f64 = 4.0;

/// Packs training / work-experience rows. Each bullet adds a bullet margin plus its
/// wrapped text height to the row.
pub fn pack_experience(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    training: &[Training],
) -> Result<(), LayoutError> {
    pack_heading(acc, ctx, column, section, "Work Experience", SectionIcon::Training)?;

    let span = ctx.span(column);
    let bullet_width = (span.width - BULLET_INDENT).max(0.0);
    let text = ctx.geometry.text;
    let mut timeline = Timeline::default();

    for (index, item) in training.iter().enumerate().filter(|(_, t)| t.toggle) {
        let bullets: Vec<String> = item
            .bullets
            .iter()
            .map(|b| b.trim())
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect();
        let bullets_height: f64 = bullets
            .iter()
            .map(|b| ctx.margin_bullet() + text.text_height(b, bullet_width))
            .sum();
        let height = ctx.metrics.training_row + bullets_height;

        let content = Content {
            text: Some(item.organization.clone()),
            subtitle: trimmed(&item.designation),
            dates: date_range(item.start_date.as_deref(), item.end_date.as_deref()),
            bullets,
            ..Content::default()
        };
        let placed = acc.place(column, ctx.template, section, |_| {
            Draft::new(
                EntryKind::TrainingRow,
                format!("row{index}"),
                span,
                Slot::new(ctx.margin_section(), height),
                content.clone(),
            )
        })?;
        timeline.record(&placed);
    }

    timeline.finish(acc, ctx, column, section)?;
    debug!(section, count = training.len(), "Packed work experience");
    Ok(())
}
