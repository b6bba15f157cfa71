use crate::layout::accumulator::Accumulator;
use crate::layout::entry::{Column, Content, Draft, EntryKind, SectionIcon};
use crate::layout::geometry::Slot;
use crate::layout::packers::{pack_heading, PackContext};
use crate::layout::LayoutError;

/// Packs the profile summary as a heading and one wrapped paragraph.
pub fn pack_summary(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    summary: Option<&str>,
) -> Result<(), LayoutError> {
    pack_heading(acc, ctx, column, section, "Profile", SectionIcon::Profile)?;

    let Some(summary) = summary.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(());
    };
    let span = ctx.span(column);
    let height = ctx.geometry.text.text_height(summary, span.width);
    acc.place(column, ctx.template, section, |_| {
        Draft::new(
            EntryKind::Summary,
            "paragraph",
            span,
            Slot::new(ctx.margin_bullet(), height),
            Content::text(summary),
        )
    })?;
    Ok(())
}
