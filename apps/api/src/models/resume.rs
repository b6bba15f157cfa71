#![allow(dead_code)]

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

/// A stored resume document. `document` holds the JSON consumed by the layout engine.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeDocumentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Configuration axes
// ────────────────────────────────────────────────────────────────────────────

/// Seniority tier of the resume. Selects rows of the layout lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeType {
    #[default]
    Fresher,
    Pro,
    Expert,
}

impl ResumeType {
    pub const ALL: [ResumeType; 3] = [ResumeType::Fresher, ResumeType::Pro, ResumeType::Expert];

    pub fn index(self) -> usize {
        match self {
            ResumeType::Fresher => 0,
            ResumeType::Pro => 1,
            ResumeType::Expert => 2,
        }
    }
}

/// Visual template variant (1–5). Any other number behaves as template 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum Template {
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::One,
        Template::Two,
        Template::Three,
        Template::Four,
        Template::Five,
    ];

    pub fn index(self) -> usize {
        u8::from(self) as usize - 1
    }
}

impl From<i64> for Template {
    fn from(number: i64) -> Self {
        match number {
            1 => Template::One,
            2 => Template::Two,
            3 => Template::Three,
            4 => Template::Four,
            5 => Template::Five,
            other => {
                warn!(template = other, "Unknown template, laying out as template 1");
                Template::One
            }
        }
    }
}

impl From<Template> for u8 {
    fn from(template: Template) -> Self {
        match template {
            Template::One => 1,
            Template::Two => 2,
            Template::Three => 3,
            Template::Four => 4,
            Template::Five => 5,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout descriptor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideSequence {
    #[serde(default)]
    pub left: Vec<String>,
    #[serde(default)]
    pub right: Vec<String>,
}

/// Declares which sections appear, in which order, on which side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub sequencelr: SideSequence,
    #[serde(default)]
    pub display: HashMap<String, bool>,
}

impl Layout {
    /// A key with no `display` entry is treated as hidden.
    pub fn is_displayed(&self, key: &str) -> bool {
        self.display.get(key).copied().unwrap_or(false)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    pub designation: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub photo_url: Option<String>,
}

impl PersonalInfo {
    /// Contact fields in display order, skipping blank ones.
    pub fn contacts(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location, &self.linkedin]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .filter(|value| !value.trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed rating on a 0–5 scale.
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "enabled", alias = "optional")]
    pub toggle: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<Skill>,
    #[serde(default)]
    pub soft: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub score: Option<String>,
    #[serde(default = "enabled", alias = "optional")]
    pub toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "enabled", alias = "optional")]
    pub toggle: bool,
}

/// A training or work-experience entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub organization: String,
    #[serde(default)]
    pub designation: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default = "enabled", alias = "optional")]
    pub toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extracurricular {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "enabled", alias = "optional")]
    pub toggle: bool,
}

/// A single-label item (hobby, area of interest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default = "enabled", alias = "optional")]
    pub toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub primary: String,
    pub secondary: String,
    pub text: String,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: "#1f3a5f".to_string(),
            secondary: "#e8eef5".to_string(),
            text: "#222222".to_string(),
        }
    }
}

/// The full input of a packing run. Never mutated by the layout engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub resume_type: ResumeType,
    #[serde(default)]
    pub template: Template,
    #[serde(default)]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default)]
    pub profile_summary: Option<String>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default, alias = "workExperience")]
    pub training: Vec<Training>,
    #[serde(default)]
    pub extracurricular: Vec<Extracurricular>,
    #[serde(default)]
    pub area_of_interest: Vec<Tag>,
    #[serde(default)]
    pub hobbies: Vec<Tag>,
    #[serde(default)]
    pub color_theme: ColorTheme,
}
