use tracing::debug;

use crate::layout::accumulator::Accumulator;
use crate::layout::entry::{Column, Content, Draft, EntryKind, SectionIcon};
use crate::layout::geometry::Slot;
use crate::layout::packers::{pack_heading, PackContext};
use crate::layout::LayoutError;
use crate::models::resume::Skill;

/// Converts a 0–5 rating to the bar percentage, capped at 100.
pub fn rating_percent(rating: f64) -> f64 {
    (rating / 5.0 * 100.0).min(100.0)
}

/// Packs a skill list (technical or soft) as one rated row per enabled skill.
pub fn pack_skills(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    title: &str,
    skills: &[Skill],
) -> Result<(), LayoutError> {
    pack_heading(acc, ctx, column, section, title, SectionIcon::Skills)?;

    let span = ctx.span(column);
    let rule = ctx.metrics.skill_row;
    let slot = Slot::new(rule.lead_sections * ctx.margin_section(), rule.height);

    for (index, skill) in skills.iter().enumerate().filter(|(_, s)| s.toggle) {
        let content = Content {
            rating: Some(rating_percent(skill.rating)),
            ..Content::text(skill.name.as_str())
        };
        acc.place(column, ctx.template, section, |_| {
            Draft::new(
                EntryKind::SkillRow,
                format!("skill{index}"),
                span,
                slot,
                content.clone(),
            )
        })?;
    }

    debug!(section, count = skills.len(), "Packed skills");
    Ok(())
}
