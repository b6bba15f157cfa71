//! Single-label sections: area of interest and hobbies.

use tracing::debug;

use crate::layout::accumulator::Accumulator;
use crate::layout::entry::{Column, Content, Draft, EntryKind, SectionIcon};
use crate::layout::geometry::Slot;
use crate::layout::packers::{pack_heading, PackContext};
use crate::layout::LayoutError;
use crate::models::resume::Tag;

pub fn pack_area_of_interest(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    tags: &[Tag],
) -> Result<(), LayoutError> {
    pack_tags(
        acc,
        ctx,
        column,
        section,
        ("Area of Interest", SectionIcon::Interests),
        EntryKind::InterestRow,
        tags,
    )
}

pub fn pack_hobbies(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    tags: &[Tag],
) -> Result<(), LayoutError> {
    pack_tags(
        acc,
        ctx,
        column,
        section,
        ("Hobbies", SectionIcon::Hobbies),
        EntryKind::HobbyRow,
        tags,
    )
}

fn pack_tags(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    (title, icon): (&str, SectionIcon),
    kind: EntryKind,
    tags: &[Tag],
) -> Result<(), LayoutError> {
    pack_heading(acc, ctx, column, section, title, icon)?;

    let span = ctx.span(column);
    let slot = Slot::new(ctx.margin_bullet(), ctx.metrics.tag_row);
    for (index, tag) in tags.iter().enumerate().filter(|(_, t)| t.toggle) {
        acc.place(column, ctx.template, section, |_| {
            Draft::new(
                kind,
                format!("row{index}"),
                span,
                slot,
                Content::text(tag.name.as_str()),
            )
        })?;
    }

    debug!(section, count = tags.len(), "Packed tags");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::packers::test_support::{kinds, params};
    use crate::models::resume::{ResumeType, Template};

    fn tags(names: &[(&str, bool)]) -> Vec<Tag> {
        names
            .iter()
            .map(|(name, toggle)| Tag {
                name: name.to_string(),
                toggle: *toggle,
            })
            .collect()
    }

    #[test]
    fn test_hobbies_skip_disabled() {
        let params = params(4.0);
        let ctx = PackContext::new(&params, ResumeType::Pro, Template::One);
        let mut acc = Accumulator::new(&params);
        let hobbies = tags(&[("Chess", true), ("Golf", false), ("Running", true)]);
        pack_hobbies(&mut acc, &ctx, Column::Left, "hobbiesInfo", &hobbies).unwrap();

        assert_eq!(
            kinds(&acc.left),
            vec![EntryKind::Heading, EntryKind::HobbyRow, EntryKind::HobbyRow]
        );
        assert_eq!(acc.left[2].props.content.text.as_deref(), Some("Running"));
        assert!(acc.left[2].id.contains("row2"));
        // heading 24, then two rows of 2 + 7
        assert_eq!(acc.left_h, 24.0 + 18.0);
    }

    #[test]
    fn test_area_of_interest_kind() {
        let params = params(4.0);
        let ctx = PackContext::new(&params, ResumeType::Fresher, Template::One);
        let mut acc = Accumulator::new(&params);
        pack_area_of_interest(
            &mut acc,
            &ctx,
            Column::Right,
            "areaOfInterestInfo",
            &tags(&[("Compilers", true)]),
        )
        .unwrap();
        assert_eq!(acc.right[1].kind, EntryKind::InterestRow);
        assert_eq!(acc.right[0].props.content.text.as_deref(), Some("Area of Interest"));
    }
}
