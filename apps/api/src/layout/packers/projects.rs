use tracing::debug;

use crate::layout::accumulator::Accumulator;
use crate::layout::entry::{Column, Content, Draft, EntryKind, SectionIcon};
use crate::layout::geometry::Slot;
use crate::layout::packers::{date_range, non_blank, pack_heading, trimmed, PackContext};
use crate::layout::LayoutError;
use crate::models::resume::Project;

pub fn pack_projects(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    projects: &[Project],
) -> Result<(), LayoutError> {
    pack_heading(acc, ctx, column, section, "Projects", SectionIcon::Projects)?;

    let span = ctx.span(column);
    for (index, project) in projects.iter().enumerate().filter(|(_, p)| p.toggle) {
        let description = project.description.trim();
        let height =
            ctx.metrics.project_row + ctx.geometry.text.text_height(description, span.width);
        let content = Content {
            text: Some(project.title.clone()),
            subtitle: non_blank(project.role.as_deref()),
            dates: date_range(project.start_date.as_deref(), project.end_date.as_deref()),
            detail: trimmed(description),
            ..Content::default()
        };
        acc.place(column, ctx.template, section, |_| {
            Draft::new(
                EntryKind::ProjectRow,
                format!("row{index}"),
                span,
                Slot::new(ctx.margin_section(), height),
                content.clone(),
            )
        })?;
    }

    debug!(section, count = projects.len(), "Packed projects");
    Ok(())
}
