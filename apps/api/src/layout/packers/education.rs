use tracing::debug;

use crate::layout::accumulator::Accumulator;
use crate::layout::entry::{Column, Content, Destination, Draft, EntryKind, SectionIcon};
use crate::layout::geometry::Slot;
use crate::layout::packers::{
    date_range, non_blank, pack_heading, trimmed, PackContext, Timeline,
};
use crate::layout::tables::BLOCK_EDUCATION_HEIGHT;
use crate::layout::LayoutError;
use crate::models::resume::Education;

/// Packs education rows.
///
/// Row height depends on where the row lands: overflow-block rows are compact. Compact
/// templates (template 5 for pro/expert) drop the leading section margin. Templates with
/// connector lines mark every row but the first input row.
pub fn pack_education(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    education: &[Education],
) -> Result<(), LayoutError> {
    pack_heading(acc, ctx, column, section, "Education", SectionIcon::Education)?;

    let span = ctx.span(column);
    let metrics = ctx.metrics;
    let lead = if metrics.compact_education {
        0.0
    } else {
        ctx.margin_section()
    };
    let mut timeline = Timeline::default();

    for (index, item) in education.iter().enumerate().filter(|(_, e)| e.toggle) {
        let content = Content {
            text: Some(item.institution.clone()),
            subtitle: trimmed(&item.degree),
            dates: date_range(item.start_date.as_deref(), item.end_date.as_deref()),
            detail: non_blank(item.score.as_deref()),
            line: metrics.education_line && index != 0,
            ..Content::default()
        };
        let placed = acc.place(column, ctx.template, section, |dest| {
            let height = match dest {
                Destination::Block => BLOCK_EDUCATION_HEIGHT,
                Destination::Native => metrics.education_row,
            };
            Draft::new(
                EntryKind::EducationRow,
                format!("row{index}"),
                span,
                Slot::new(lead, height),
                content.clone(),
            )
        })?;
        timeline.record(&placed);
    }

    timeline.finish(acc, ctx, column, section)?;
    debug!(section, count = education.len(), "Packed education");
    Ok(())
}
