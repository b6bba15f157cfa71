use tracing::debug;

use crate::layout::accumulator::Accumulator;
use crate::layout::entry::{Column, Content, Draft, EntryKind, SectionIcon};
use crate::layout::geometry::Slot;
use crate::layout::packers::{pack_heading, trimmed, PackContext};
use crate::layout::LayoutError;
use crate::models::resume::Extracurricular;

pub fn pack_extracurricular(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    items: &[Extracurricular],
) -> Result<(), LayoutError> {
    pack_heading(
        acc,
        ctx,
        column,
        section,
        "Extracurricular",
        SectionIcon::Extracurricular,
    )?;

    let span = ctx.span(column);
    for (index, item) in items.iter().enumerate().filter(|(_, i)| i.toggle) {
        let description = item.description.trim();
        let height = ctx.metrics.extracurricular_row
            + ctx.geometry.text.text_height(description, span.width);
        let content = Content {
            text: Some(item.title.clone()),
            detail: trimmed(description),
            ..Content::default()
        };
        acc.place(column, ctx.template, section, |_| {
            Draft::new(
                EntryKind::ExtracurricularRow,
                format!("row{index}"),
                span,
                Slot::new(ctx.margin_bullet(), height),
                content.clone(),
            )
        })?;
    }

    debug!(section, count = items.len(), "Packed extracurricular");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::packers::test_support::{kinds, params};
    use crate::models::resume::{ResumeType, Template};

    #[test]
    fn test_rows_use_bullet_margin() {
        let params = params(4.0);
        let ctx = PackContext::new(&params, ResumeType::Fresher, Template::One);
        let mut acc = Accumulator::new(&params);
        let items = vec![
            Extracurricular {
                title: "Debate club".to_string(),
                description: "Captain".to_string(),
                toggle: true,
            },
            Extracurricular {
                title: "Chess".to_string(),
                description: String::new(),
                toggle: true,
            },
        ];
        pack_extracurricular(&mut acc, &ctx, Column::Left, "extraCurricularInfo", &items)
            .unwrap();

        assert_eq!(
            kinds(&acc.left),
            vec![
                EntryKind::Heading,
                EntryKind::ExtracurricularRow,
                EntryKind::ExtracurricularRow
            ]
        );
        // heading ends at 24; first row: lead 2, 10 + one 4.2 line
        assert_eq!(acc.left[1].props.rect.top, 26.0);
        assert_eq!(acc.left[1].props.rect.height, 10.0 + 4.2);
        assert_eq!(acc.left[2].props.rect.height, 10.0);
    }
}
