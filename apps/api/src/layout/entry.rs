//! Positioned visual entries emitted by the packers.
//!
//! The layout core only decides what goes where; the renderer maps each `EntryKind`
//! to a leaf component and places it at `props`.

use serde::{Deserialize, Serialize};

use crate::layout::geometry::{Rect, Slot, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Right,
}

impl Column {
    pub fn opposite(self) -> Column {
        match self {
            Column::Left => Column::Right,
            Column::Right => Column::Left,
        }
    }
}

/// Where an entry is routed when appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// The column's own list: its page is not ahead of the opposite column.
    Native,
    /// The overflow block: the column is on a later page than its sibling.
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Heading,
    Logo,
    VerticalLine,
    Photo,
    Name,
    DesignationLabel,
    ContactRow,
    Summary,
    SkillRow,
    EducationRow,
    TrainingRow,
    ProjectRow,
    ExtracurricularRow,
    InterestRow,
    HobbyRow,
}

impl EntryKind {
    /// Rows that correspond one-to-one with enabled input items.
    pub fn is_section_item(self) -> bool {
        matches!(
            self,
            EntryKind::SkillRow
                | EntryKind::EducationRow
                | EntryKind::TrainingRow
                | EntryKind::ProjectRow
                | EntryKind::ExtracurricularRow
                | EntryKind::InterestRow
                | EntryKind::HobbyRow
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionIcon {
    Profile,
    Skills,
    Education,
    Projects,
    Training,
    Extracurricular,
    Interests,
    Hobbies,
}

/// Section-specific payload carried alongside the geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    /// Percentage, 100 at most.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<SectionIcon>,
    /// Draw a connector to the previous row.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub line: bool,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Props {
    #[serde(flatten)]
    pub rect: Rect,
    #[serde(flatten)]
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub kind: EntryKind,
    pub id: String,
    pub column: Column,
    /// 1-based page the entry belongs to.
    pub page: u32,
    pub props: Props,
    /// Emission order across all lists of one run.
    #[serde(skip)]
    pub(crate) seq: u32,
}

impl Entry {
    /// `top` measured from the top edge of the entry's own page.
    pub fn page_relative_top(&self, page_height: f64) -> f64 {
        self.props.rect.top - page_height * f64::from(self.page.saturating_sub(1))
    }

    /// Copy of the entry with `top` rebased onto its own page.
    pub fn rebased(&self, page_height: f64) -> Entry {
        let mut entry = self.clone();
        entry.props.rect.top = self.page_relative_top(page_height);
        entry
    }

    pub fn scaled(&self, factor: f64) -> Entry {
        Entry {
            props: Props {
                rect: self.props.rect.scaled(factor),
                content: self.props.content.clone(),
            },
            ..self.clone()
        }
    }
}

/// A tentative entry: everything except its final vertical position.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub kind: EntryKind,
    /// Distinguishes entries of one section in their ids.
    pub label: String,
    pub span: Span,
    pub slot: Slot,
    pub content: Content,
}

impl Draft {
    pub fn new(
        kind: EntryKind,
        label: impl Into<String>,
        span: Span,
        slot: Slot,
        content: Content,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            span,
            slot,
            content,
        }
    }
}
