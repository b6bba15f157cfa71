//! Per-template and per-tier lookup tables.
//!
//! Rows are indexed by `ResumeType::index()`, columns by `Template::index()`. Template
//! numbers outside 1–5 never reach these tables: they deserialize as template 1.

use serde::Serialize;

use crate::layout::geometry::Span;
use crate::layout::text_metrics::TextMetrics;
use crate::models::resume::{ResumeType, Template};

/// Heading height when the heading lands in the overflow block.
pub const BLOCK_HEADING_HEIGHT: f64 = 9.0;
/// Education row height when the row lands in the overflow block.
pub const BLOCK_EDUCATION_HEIGHT: f64 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Section metrics (ResumeType × Template)
// ────────────────────────────────────────────────────────────────────────────

/// A row whose leading gap is a multiple of the section margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowRule {
    pub lead_sections: f64,
    pub height: f64,
}

const fn rule(lead_sections: f64, height: f64) -> RowRule {
    RowRule {
        lead_sections,
        height,
    }
}

#[rustfmt::skip]
const HEADING_HEIGHT: [[f64; 5]; 3] = [
    //  t1    t2    t3    t4    t5
    [10.0, 13.0, 13.0, 10.0, 13.0], // fresher
    [10.0, 13.0, 13.0, 10.0, 10.0], // pro
    [10.0, 10.0, 10.0, 10.0, 10.0], // expert
];

/// Skills: t1 fresher `2ms + 15`, t2/t5 fresher `ms + 17`, t3 fresher `2ms + 12`,
/// t4 fresher `ms + 20`, pro/expert `ms + 15`.
#[rustfmt::skip]
const SKILL_ROW: [[RowRule; 5]; 3] = [
    [rule(2.0, 15.0), rule(1.0, 17.0), rule(2.0, 12.0), rule(1.0, 20.0), rule(1.0, 17.0)],
    [rule(1.0, 15.0), rule(1.0, 15.0), rule(1.0, 15.0), rule(1.0, 15.0), rule(1.0, 15.0)],
    [rule(1.0, 15.0), rule(1.0, 15.0), rule(1.0, 15.0), rule(1.0, 15.0), rule(1.0, 15.0)],
];

#[rustfmt::skip]
const EDUCATION_ROW: [[f64; 5]; 3] = [
    [14.0, 16.0, 18.0, 16.0, 20.0],
    [12.0, 14.0, 16.0, 14.0, 18.0],
    [12.0, 12.0, 14.0, 12.0, 16.0],
];

#[rustfmt::skip]
const TRAINING_ROW: [[f64; 5]; 3] = [
    [16.0, 18.0, 18.0, 16.0, 20.0],
    [18.0, 18.0, 20.0, 18.0, 20.0],
    [20.0, 20.0, 22.0, 20.0, 22.0],
];

#[rustfmt::skip]
const PROJECT_ROW: [[f64; 5]; 3] = [
    [14.0, 14.0, 16.0, 14.0, 16.0],
    [16.0, 16.0, 16.0, 16.0, 18.0],
    [16.0, 16.0, 18.0, 16.0, 18.0],
];

#[rustfmt::skip]
const EXTRACURRICULAR_ROW: [[f64; 5]; 3] = [
    [10.0, 10.0, 12.0, 10.0, 12.0],
    [10.0, 10.0, 10.0, 10.0, 10.0],
    [10.0, 10.0, 10.0, 10.0, 10.0],
];

#[rustfmt::skip]
const TAG_ROW: [[f64; 5]; 3] = [
    [7.0, 8.0, 8.0, 7.0, 8.0],
    [7.0, 7.0, 7.0, 7.0, 7.0],
    [7.0, 7.0, 7.0, 7.0, 7.0],
];

/// Everything a packer needs to know about one `(resumeType, template)` combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionMetrics {
    pub heading_height: f64,
    pub skill_row: RowRule,
    pub education_row: f64,
    pub training_row: f64,
    pub project_row: f64,
    pub extracurricular_row: f64,
    pub tag_row: f64,
    pub show_icons: bool,
    /// Education rows after the first carry a connector line.
    pub education_line: bool,
    /// Education rows drop the leading section margin and advance by raw height.
    pub compact_education: bool,
}

pub fn section_metrics(resume_type: ResumeType, template: Template) -> SectionMetrics {
    let (r, t) = (resume_type.index(), template.index());
    SectionMetrics {
        heading_height: HEADING_HEIGHT[r][t],
        skill_row: SKILL_ROW[r][t],
        education_row: EDUCATION_ROW[r][t],
        training_row: TRAINING_ROW[r][t],
        project_row: PROJECT_ROW[r][t],
        extracurricular_row: EXTRACURRICULAR_ROW[r][t],
        tag_row: TAG_ROW[r][t],
        show_icons: shows_icons(resume_type, template),
        education_line: has_education_line(resume_type, template),
        compact_education: resume_type != ResumeType::Fresher && template == Template::Five,
    }
}

/// Icons: fresher templates 2–5 and pro templates 2–3 only.
fn shows_icons(resume_type: ResumeType, template: Template) -> bool {
    use Template::*;
    match resume_type {
        ResumeType::Fresher => matches!(template, Two | Three | Four | Five),
        ResumeType::Pro => matches!(template, Two | Three),
        ResumeType::Expert => false,
    }
}

fn has_education_line(resume_type: ResumeType, template: Template) -> bool {
    use Template::*;
    match resume_type {
        ResumeType::Fresher => matches!(template, Two | Three | Four | Five),
        ResumeType::Pro | ResumeType::Expert => matches!(template, Two | Three),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template geometry
// ────────────────────────────────────────────────────────────────────────────

/// Page furniture for a template, independent of the resume tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemplateGeometry {
    pub left: Span,
    pub right: Span,
    /// Inner horizontal padding of both columns.
    pub padding: f64,
    /// Height kept free above each page's bottom edge.
    pub bottom_reserve: f64,
    pub text: TextMetrics,
    /// Side length of the square profile photo, if the template shows one.
    pub photo: Option<f64>,
    /// Education and work experience draw a vertical timeline connector.
    pub timeline: bool,
}

const fn text(char_width: f64, line_height: f64) -> TextMetrics {
    TextMetrics {
        char_width,
        space_width: char_width / 2.0,
        line_height,
    }
}

static GEOMETRY: [TemplateGeometry; 5] = [
    TemplateGeometry {
        left: Span::new(0.0, 70.0),
        right: Span::new(70.0, 140.0),
        padding: 6.0,
        bottom_reserve: 0.0,
        text: text(1.6, 4.2),
        photo: Some(34.0),
        timeline: true,
    },
    TemplateGeometry {
        left: Span::new(0.0, 80.0),
        right: Span::new(80.0, 130.0),
        padding: 6.0,
        bottom_reserve: 0.0,
        text: text(1.7, 4.5),
        photo: Some(36.0),
        timeline: false,
    },
    // Full-bleed colour bar along the bottom edge.
    TemplateGeometry {
        left: Span::new(0.0, 75.0),
        right: Span::new(75.0, 135.0),
        padding: 6.0,
        bottom_reserve: 10.0,
        text: text(1.6, 4.2),
        photo: Some(32.0),
        timeline: false,
    },
    TemplateGeometry {
        left: Span::new(0.0, 105.0),
        right: Span::new(105.0, 105.0),
        padding: 8.0,
        bottom_reserve: 0.0,
        text: text(1.5, 4.0),
        photo: None,
        timeline: false,
    },
    TemplateGeometry {
        left: Span::new(0.0, 65.0),
        right: Span::new(65.0, 145.0),
        padding: 5.0,
        bottom_reserve: 0.0,
        text: text(1.7, 4.4),
        photo: None,
        timeline: false,
    },
];

pub fn template_geometry(template: Template) -> &'static TemplateGeometry {
    &GEOMETRY[template.index()]
}

/// Largest bottom reserve of any template.
pub fn max_bottom_reserve() -> f64 {
    GEOMETRY
        .iter()
        .map(|g| g.bottom_reserve)
        .fold(0.0, f64::max)
}
