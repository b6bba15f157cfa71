use tracing::debug;

use crate::layout::accumulator::Accumulator;
use crate::layout::entry::{Column, Content, Draft, EntryKind};
use crate::layout::geometry::{Slot, Span};
use crate::layout::packers::{non_blank, PackContext};
use crate::layout::LayoutError;
use crate::models::resume::PersonalInfo;

const NAME_HEIGHT: f64 = 12.0;
const DESIGNATION_HEIGHT: f64 = 7.0;
const CONTACT_HEIGHT: f64 = 5.0;

/// Packs the personal header: photo (templates with a photo box), name, designation and
/// contact rows. The name stands in for a section title, so no heading is emitted.
pub fn pack_header(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    info: Option<&PersonalInfo>,
) -> Result<(), LayoutError> {
    let Some(info) = info else {
        debug!(section, "No personal info, skipping header");
        return Ok(());
    };
    acc.ensure_room(column, ctx.template)?;
    let span = ctx.span(column);

    if let (Some(size), Some(url)) = (ctx.geometry.photo, non_blank(info.photo_url.as_deref())) {
        let size = size.min(span.width);
        let photo_span = Span::new(span.x + (span.width - size) / 2.0, size);
        acc.place(column, ctx.template, section, |_| {
            Draft::new(
                EntryKind::Photo,
                "photo",
                photo_span,
                Slot::new(ctx.margin_section(), size),
                Content::text(url.as_str()),
            )
        })?;
    }

    acc.place(column, ctx.template, section, |_| {
        Draft::new(
            EntryKind::Name,
            "name",
            span,
            Slot::new(ctx.margin_section(), NAME_HEIGHT),
            Content::text(info.name.as_str()),
        )
    })?;

    if let Some(designation) = non_blank(info.designation.as_deref()) {
        acc.place(column, ctx.template, section, |_| {
            Draft::new(
                EntryKind::DesignationLabel,
                "designation",
                span,
                Slot::new(ctx.margin_bullet(), DESIGNATION_HEIGHT),
                Content::text(designation.as_str()),
            )
        })?;
    }

    for (index, contact) in info.contacts().into_iter().enumerate() {
        acc.place(column, ctx.template, section, |_| {
            Draft::new(
                EntryKind::ContactRow,
                format!("contact{index}"),
                span,
                Slot::new(ctx.margin_bullet(), CONTACT_HEIGHT),
                Content::text(contact),
            )
        })?;
    }
    Ok(())
}
