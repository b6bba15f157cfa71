//! Section packers: one per resume section kind.
//!
//! Every packer follows the same skeleton: make room, emit the heading (and its icon
//! where the template shows icons), place enabled items in input order, then add any
//! trailing decoration. Disabled items cost nothing. Missing data still emits the heading.

pub mod education;
pub mod experience;
pub mod extracurricular;
pub mod header;
pub mod interests;
pub mod projects;
pub mod skills;
pub mod summary;

use crate::layout::accumulator::{Accumulator, Placed};
use crate::layout::entry::{Column, Content, Destination, Draft, EntryKind, SectionIcon};
use crate::layout::geometry::{LayoutParams, Slot, Span};
use crate::layout::tables::{
    section_metrics, template_geometry, SectionMetrics, TemplateGeometry, BLOCK_HEADING_HEIGHT,
};
use crate::layout::LayoutError;
use crate::models::resume::{ResumeType, Template};

/// Width of the vertical timeline connector.
const LINE_WIDTH: f64 = 0.6;
/// Horizontal offset of the timeline connector inside the column.
const LINE_OFFSET: f64 = 2.0;

/// Read-only inputs shared by all packers of one run.
#[derive(Debug, Clone, Copy)]
pub struct PackContext<'a> {
    pub params: &'a LayoutParams,
    pub template: Template,
    pub metrics: SectionMetrics,
    pub geometry: &'static TemplateGeometry,
}

impl<'a> PackContext<'a> {
    pub fn new(params: &'a LayoutParams, resume_type: ResumeType, template: Template) -> Self {
        Self {
            params,
            template,
            metrics: section_metrics(resume_type, template),
            geometry: template_geometry(template),
        }
    }

    /// Content span of a column, inside its padding.
    pub fn span(&self, column: Column) -> Span {
        let outer = match column {
            Column::Left => self.geometry.left,
            Column::Right => self.geometry.right,
        };
        outer.inset(self.geometry.padding)
    }

    pub fn margin_section(&self) -> f64 {
        self.params.margin_section
    }

    pub fn margin_bullet(&self) -> f64 {
        self.params.margin_bullet
    }
}

/// Emits a section heading, plus its icon when the template shows icons.
pub(crate) fn pack_heading(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    section: &str,
    title: &str,
    icon: SectionIcon,
) -> Result<Placed, LayoutError> {
    acc.ensure_room(column, ctx.template)?;

    let span = ctx.span(column);
    let placed = acc.place(column, ctx.template, section, |dest| {
        let height = match dest {
            Destination::Block => BLOCK_HEADING_HEIGHT,
            Destination::Native => ctx.metrics.heading_height,
        };
        Draft::new(
            EntryKind::Heading,
            "heading",
            span,
            Slot::new(ctx.margin_section(), height),
            Content::text(title),
        )
    })?;

    if ctx.metrics.show_icons {
        let size = match placed.destination {
            Destination::Block => BLOCK_HEADING_HEIGHT,
            Destination::Native => ctx.metrics.heading_height,
        };
        let content = Content {
            icon: Some(icon),
            ..Content::default()
        };
        acc.attach(
            column,
            section,
            placed.top,
            Draft::new(
                EntryKind::Logo,
                "icon",
                Span::new(span.x, size),
                Slot::new(0.0, size),
                content,
            ),
        )?;
    }
    Ok(placed)
}

/// Tracks where a timeline connector starts on the column's current page.
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    start: Option<(f64, u32)>,
}

impl Timeline {
    pub fn record(&mut self, placed: &Placed) {
        match self.start {
            Some((_, page)) if page == placed.page => {}
            _ => self.start = Some((placed.top, placed.page)),
        }
    }

    /// Draws the connector from the first row on the current page down to the
    /// column's running height. Only templates with a timeline draw it.
    pub fn finish(
        self,
        acc: &mut Accumulator,
        ctx: &PackContext<'_>,
        column: Column,
        section: &str,
    ) -> Result<(), LayoutError> {
        let Some((top, _)) = self.start else {
            return Ok(());
        };
        if !ctx.geometry.timeline {
            return Ok(());
        }
        let height = acc.height(column) - top;
        let span = ctx.span(column);
        acc.attach(
            column,
            section,
            top,
            Draft::new(
                EntryKind::VerticalLine,
                "line",
                Span::new(span.x + LINE_OFFSET, LINE_WIDTH),
                Slot::new(0.0, height),
                Content::default(),
            ),
        )
    }
}

/// Formats an optional start/end pair the way rows display it.
pub(crate) fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    fn clean(s: Option<&str>) -> Option<&str> {
        s.map(str::trim).filter(|s| !s.is_empty())
    }
    match (clean(start), clean(end)) {
        (Some(start), Some(end)) => Some(format!("{start} – {end}")),
        (Some(start), None) => Some(format!("{start} – Present")),
        (None, Some(end)) => Some(end.to_string()),
        (None, None) => None,
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.and_then(trimmed)
}

/// Trimmed copy of `s`, or `None` when nothing but whitespace is left.
fn trimmed(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
