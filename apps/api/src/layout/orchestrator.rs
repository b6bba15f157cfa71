//! Runs the section packers in layout order.
//!
//! The left sequence is packed in full before the right sequence. Packers decide between
//! native column and overflow block by comparing page counters, so the order is part of
//! the output contract.
//!
//! Each section packs against a copy of the accumulator and is committed only on success.
//! A failing section is logged and reported in `PackOutcome::skipped`; the rest of the
//! resume still packs.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::layout::accumulator::Accumulator;
use crate::layout::entry::Column;
use crate::layout::geometry::LayoutParams;
use crate::layout::packers::{
    education, experience, extracurricular, header, interests, projects, skills, summary,
    PackContext,
};
use crate::layout::LayoutError;
use crate::models::resume::ResumeDocument;

/// Section keys understood by the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    UserInfo,
    ProfileInfo,
    TechSkills,
    SoftSkills,
    Education,
    Projects,
    WorkExperience,
    Extracurricular,
    AreaOfInterest,
    Hobbies,
}

impl SectionKey {
    /// Unknown keys map to `None` and are skipped by the orchestrator.
    pub fn parse(key: &str) -> Option<Self> {
        let key = match key {
            "userInfo" => SectionKey::UserInfo,
            "profileInfo" => SectionKey::ProfileInfo,
            "techSkillsInfo" => SectionKey::TechSkills,
            "softSkillsInfo" => SectionKey::SoftSkills,
            "educationInfo" => SectionKey::Education,
            "projectInfo" => SectionKey::Projects,
            "workExpInfo" | "trainingInfo" => SectionKey::WorkExperience,
            "extraCurricularInfo" => SectionKey::Extracurricular,
            "areaOfInterestInfo" => SectionKey::AreaOfInterest,
            "hobbiesInfo" => SectionKey::Hobbies,
            _ => return None,
        };
        Some(key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::UserInfo => "userInfo",
            SectionKey::ProfileInfo => "profileInfo",
            SectionKey::TechSkills => "techSkillsInfo",
            SectionKey::SoftSkills => "softSkillsInfo",
            SectionKey::Education => "educationInfo",
            SectionKey::Projects => "projectInfo",
            SectionKey::WorkExperience => "workExpInfo",
            SectionKey::Extracurricular => "extraCurricularInfo",
            SectionKey::AreaOfInterest => "areaOfInterestInfo",
            SectionKey::Hobbies => "hobbiesInfo",
        }
    }
}

/// A section dropped because its packer failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedSection {
    pub key: String,
    pub column: Column,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct PackOutcome {
    pub accumulator: Accumulator,
    pub skipped: Vec<SkippedSection>,
}

/// Packs a resume document into positioned entries.
///
/// Fails only on invalid parameters; section failures are isolated.
pub fn pack_resume(
    doc: &ResumeDocument,
    params: &LayoutParams,
) -> Result<PackOutcome, LayoutError> {
    params.validate()?;

    let ctx = PackContext::new(params, doc.resume_type, doc.template);
    let mut acc = Accumulator::new(params);
    let mut skipped = Vec::new();

    let sides = [
        (Column::Left, &doc.layout.sequencelr.left),
        (Column::Right, &doc.layout.sequencelr.right),
    ];
    for (column, keys) in sides {
        for raw_key in keys {
            if !doc.layout.is_displayed(raw_key) {
                debug!(key = raw_key.as_str(), "Section hidden");
                continue;
            }
            let Some(key) = SectionKey::parse(raw_key) else {
                debug!(key = raw_key.as_str(), "Unknown section key, skipping");
                continue;
            };

            let mut trial = acc.clone();
            match pack_section(&mut trial, &ctx, column, key, doc) {
                Ok(()) => acc = trial,
                Err(e) => {
                    warn!(key = raw_key.as_str(), ?column, "Section failed to pack, skipping: {e}");
                    skipped.push(SkippedSection {
                        key: raw_key.clone(),
                        column,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    info!(
        pages_left = acc.count_l,
        pages_right = acc.count_r,
        entries = acc.entry_count(),
        items = acc.entries().iter().filter(|e| e.kind.is_section_item()).count(),
        skipped = skipped.len(),
        "Resume packed"
    );
    Ok(PackOutcome {
        accumulator: acc,
        skipped,
    })
}

fn pack_section(
    acc: &mut Accumulator,
    ctx: &PackContext<'_>,
    column: Column,
    key: SectionKey,
    doc: &ResumeDocument,
) -> Result<(), LayoutError> {
    let section = key.as_str();
    match key {
        SectionKey::UserInfo => {
            header::pack_header(acc, ctx, column, section, doc.personal_info.as_ref())
        }
        SectionKey::ProfileInfo => {
            summary::pack_summary(acc, ctx, column, section, doc.profile_summary.as_deref())
        }
        SectionKey::TechSkills => {
            skills::pack_skills(acc, ctx, column, section, "Skills", &doc.skills.technical)
        }
        SectionKey::SoftSkills => {
            skills::pack_skills(acc, ctx, column, section, "Soft Skills", &doc.skills.soft)
        }
        SectionKey::Education => {
            education::pack_education(acc, ctx, column, section, &doc.education)
        }
        SectionKey::Projects => projects::pack_projects(acc, ctx, column, section, &doc.projects),
        SectionKey::WorkExperience => {
            experience::pack_experience(acc, ctx, column, section, &doc.training)
        }
        SectionKey::Extracurricular => {
            extracurricular::pack_extracurricular(acc, ctx, column, section, &doc.extracurricular)
        }
        SectionKey::AreaOfInterest => {
            interests::pack_area_of_interest(acc, ctx, column, section, &doc.area_of_interest)
        }
        SectionKey::Hobbies => interests::pack_hobbies(acc, ctx, column, section, &doc.hobbies),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::entry::{Entry, EntryKind};
    use crate::layout::geometry::default_layout_params;
    use crate::layout::packers::test_support::{kinds, params};
    use crate::models::resume::{
        Education, Extracurricular, Layout, PersonalInfo, Project, ResumeType, SideSequence,
        Skill, Tag, Template, Training,
    };

    fn layout(left: &[&str], right: &[&str]) -> Layout {
        let to_vec = |keys: &[&str]| keys.iter().map(|k| k.to_string()).collect::<Vec<_>>();
        Layout {
            sequencelr: SideSequence {
                left: to_vec(left),
                right: to_vec(right),
            },
            display: left
                .iter()
                .chain(right)
                .map(|k| (k.to_string(), true))
                .collect(),
        }
    }

    fn skills(n: usize) -> Vec<Skill> {
        (0..n)
            .map(|i| Skill {
                name: format!("Skill {i}"),
                rating: 4.0,
                toggle: true,
            })
            .collect()
    }

    fn schools(n: usize) -> Vec<Education> {
        (0..n)
            .map(|i| Education {
                institution: format!("School {i}"),
                degree: "BSc".to_string(),
                start_date: None,
                end_date: None,
                score: None,
                toggle: true,
            })
            .collect()
    }

    fn example_doc(skill_count: usize) -> ResumeDocument {
        let mut doc = ResumeDocument {
            layout: layout(&["techSkillsInfo"], &["educationInfo"]),
            resume_type: ResumeType::Fresher,
            template: Template::One,
            education: schools(2),
            ..ResumeDocument::default()
        };
        doc.skills.technical = skills(skill_count);
        doc
    }

    fn assert_no_overflow(entries: &[&Entry], page_height: f64) {
        for entry in entries {
            let rect = &entry.props.rect;
            assert!(
                rect.bottom() <= page_height * f64::from(entry.page) + 1e-9,
                "{} overflows page {}",
                entry.id,
                entry.page
            );
            assert!(rect.top >= page_height * f64::from(entry.page - 1));
        }
    }

    #[test]
    fn test_example_scenario_fits_on_page_one() {
        let outcome = pack_resume(&example_doc(3), &default_layout_params()).unwrap();
        let acc = &outcome.accumulator;

        assert_eq!(
            kinds(&acc.left),
            vec![
                EntryKind::Heading,
                EntryKind::SkillRow,
                EntryKind::SkillRow,
                EntryKind::SkillRow
            ]
        );
        assert_eq!(
            kinds(&acc.right),
            vec![
                EntryKind::Heading,
                EntryKind::EducationRow,
                EntryKind::EducationRow,
                EntryKind::VerticalLine
            ]
        );
        assert!(acc.block.is_empty());
        assert_eq!((acc.count_l, acc.count_r), (1, 1));

        let page1 = acc.page1();
        assert_eq!(page1.left, acc.left);
        assert_eq!(page1.right, acc.right);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_example_overflow_scenario() {
        // heading ends at 50; skills advance 2*30 + 15 = 75 → 125, 200, 275, 350 > 297
        let params = params(30.0);
        let outcome = pack_resume(&example_doc(4), &params).unwrap();
        let acc = &outcome.accumulator;

        assert_eq!(acc.count_l, 2);
        let fourth = acc
            .block
            .iter()
            .find(|e| e.kind == EntryKind::SkillRow)
            .unwrap();
        assert_eq!(fourth.props.rect.top, 297.0 + params.margin_page);
        assert_eq!(fourth.page, 2);

        let page1 = acc.page1();
        assert_eq!(
            kinds(&page1.left),
            vec![
                EntryKind::Heading,
                EntryKind::SkillRow,
                EntryKind::SkillRow,
                EntryKind::SkillRow
            ]
        );
        assert!(page1.left.iter().all(|e| e.page == 1));
    }

    #[test]
    fn test_hidden_and_unknown_keys_are_skipped() {
        let mut doc = example_doc(2);
        doc.layout.sequencelr.left.push("portfolioInfo".to_string());
        doc.layout.display.insert("portfolioInfo".to_string(), true);
        doc.layout.display.insert("educationInfo".to_string(), false);

        let outcome = pack_resume(&doc, &default_layout_params()).unwrap();
        let acc = &outcome.accumulator;
        assert!(acc.right.is_empty());
        assert_eq!(acc.right_h, 10.0);
        assert_eq!(acc.left.len(), 3);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_failing_section_is_skipped_and_others_pack() {
        let params = LayoutParams {
            max_pages: 1,
            ..params(30.0)
        };
        let mut doc = example_doc(4);
        doc.hobbies = vec![Tag {
            name: "Chess".to_string(),
            toggle: true,
        }];
        doc.layout.sequencelr.right.push("hobbiesInfo".to_string());
        doc.layout.display.insert("hobbiesInfo".to_string(), true);

        let outcome = pack_resume(&doc, &params).unwrap();
        let acc = &outcome.accumulator;

        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].key, "techSkillsInfo");
        assert_eq!(outcome.skipped[0].column, Column::Left);
        // the failed section left no trace
        assert!(acc.left.is_empty());
        assert_eq!(acc.count_l, 1);
        // later sections still packed
        assert!(acc.right.iter().any(|e| e.kind == EntryKind::EducationRow));
        assert!(acc.right.iter().any(|e| e.kind == EntryKind::HobbyRow));
    }

    #[test]
    fn test_invalid_params_fail_the_run() {
        let params = LayoutParams {
            page_height: -1.0,
            ..default_layout_params()
        };
        let result = pack_resume(&example_doc(1), &params);
        assert!(matches!(result, Err(LayoutError::InvalidParams(_))));
    }

    #[test]
    fn test_packing_is_deterministic() {
        let doc = example_doc(12);
        let params = params(10.0);
        let a = pack_resume(&doc, &params).unwrap().accumulator;
        let b = pack_resume(&doc, &params).unwrap().accumulator;
        assert_eq!(a, b);
        let ids_a: Vec<_> = a.entries().iter().map(|e| e.id.clone()).collect();
        let ids_b: Vec<_> = b.entries().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_long_resume_respects_page_bounds_and_conservation() {
        let mut doc = example_doc(25);
        doc.skills.technical[3].toggle = false;
        doc.education = schools(30);
        doc.education[0].toggle = false;
        doc.template = Template::Three;
        let params = params(4.0);

        let outcome = pack_resume(&doc, &params).unwrap();
        let acc = &outcome.accumulator;
        assert!(acc.count_l >= 2 && acc.count_r >= 2);

        let entries = acc.entries();
        assert_no_overflow(&entries, params.page_height);

        let items = entries.iter().filter(|e| e.kind.is_section_item()).count();
        assert_eq!(items, 24 + 29);

        // monotonic running height per column within a page
        for column in [Column::Left, Column::Right] {
            let mut last: Option<(u32, f64)> = None;
            for entry in entries
                .iter()
                .filter(|e| e.column == column && e.kind.is_section_item())
            {
                if let Some((page, top)) = last {
                    if page == entry.page {
                        assert!(entry.props.rect.top >= top);
                    } else {
                        assert!(entry.page > page);
                    }
                }
                last = Some((entry.page, entry.props.rect.top));
            }
        }
    }

    #[test]
    fn test_page1_snapshot_is_prefix_of_page_one_entries() {
        let mut doc = example_doc(20);
        doc.education = schools(25);
        let outcome = pack_resume(&doc, &params(4.0)).unwrap();
        let acc = &outcome.accumulator;
        let page1 = acc.page1();

        for (column, snapshot) in [(Column::Left, &page1.left), (Column::Right, &page1.right)] {
            let expected: Vec<&Entry> = acc
                .entries()
                .into_iter()
                .filter(|e| e.column == column && e.page == 1)
                .collect();
            assert_eq!(snapshot.len(), expected.len());
            assert!(snapshot.iter().zip(expected).all(|(a, b)| a == b));
        }
    }

    #[test]
    fn test_right_column_goes_to_block_only_when_ahead() {
        // left stays on page 1, right spills to page 2 → right page-2 rows go to block
        let mut doc = example_doc(1);
        doc.education = schools(30);
        let outcome = pack_resume(&doc, &params(4.0)).unwrap();
        let acc = &outcome.accumulator;
        assert_eq!(acc.count_l, 1);
        assert!(acc.count_r >= 2);
        assert!(acc.block.iter().all(|e| e.column == Column::Right && e.page >= 2));
        assert!(acc.right.iter().all(|e| e.page == 1));
    }

    fn tag(name: &str, toggle: bool) -> Tag {
        Tag {
            name: name.to_string(),
            toggle,
        }
    }

    fn full_doc() -> ResumeDocument {
        let mut doc = ResumeDocument {
            layout: layout(
                &[
                    "userInfo",
                    "profileInfo",
                    "techSkillsInfo",
                    "softSkillsInfo",
                    "areaOfInterestInfo",
                    "hobbiesInfo",
                ],
                &[
                    "educationInfo",
                    "projectInfo",
                    "trainingInfo",
                    "extraCurricularInfo",
                ],
            ),
            resume_type: ResumeType::Fresher,
            template: Template::Two,
            personal_info: Some(PersonalInfo {
                name: "Ada Lovelace".to_string(),
                designation: Some("Analyst".to_string()),
                email: Some("ada@example.com".to_string()),
                phone: Some("+44 20 7946 0000".to_string()),
                ..PersonalInfo::default()
            }),
            profile_summary: Some(
                "Mathematician writing the first published program.".to_string(),
            ),
            education: schools(2),
            projects: vec![
                Project {
                    title: "Analytical Engine notes".to_string(),
                    role: Some("Author".to_string()),
                    start_date: Some("1842".to_string()),
                    end_date: Some("1843".to_string()),
                    description: "Bernoulli numbers on the engine.".to_string(),
                    toggle: true,
                },
                Project {
                    title: "Flying machine".to_string(),
                    role: None,
                    start_date: None,
                    end_date: None,
                    description: String::new(),
                    toggle: false,
                },
            ],
            training: (0..2)
                .map(|i| Training {
                    organization: format!("Org {i}"),
                    designation: "Engineer".to_string(),
                    start_date: Some("2020".to_string()),
                    end_date: None,
                    bullets: vec!["Shipped things".to_string(), "  ".to_string()],
                    toggle: true,
                })
                .collect(),
            extracurricular: vec![Extracurricular {
                title: "Chess club".to_string(),
                description: "Captain".to_string(),
                toggle: true,
            }],
            area_of_interest: vec![tag("Compilers", true), tag("Typesetting", true)],
            hobbies: vec![tag("Music", true), tag("Riding", false)],
            ..ResumeDocument::default()
        };
        doc.skills.technical = skills(3);
        doc.skills.technical[1].toggle = false;
        doc.skills.soft = vec![Skill {
            name: "Mentoring".to_string(),
            rating: 5.0,
            toggle: true,
        }];
        doc
    }

    fn section_entries<'a>(entries: &[&'a Entry], section: &str) -> Vec<&'a Entry> {
        let prefix = format!("{section}-");
        entries
            .iter()
            .copied()
            .filter(|e| e.id.starts_with(&prefix))
            .collect()
    }

    fn count_kind(entries: &[&Entry], kind: EntryKind) -> usize {
        entries.iter().filter(|e| e.kind == kind).count()
    }

    #[test]
    fn test_every_section_key_dispatches_its_own_data() {
        let outcome = pack_resume(&full_doc(), &default_layout_params()).unwrap();
        assert!(outcome.skipped.is_empty());
        let entries = outcome.accumulator.entries();

        let cases = [
            ("techSkillsInfo", EntryKind::SkillRow, 2),
            ("softSkillsInfo", EntryKind::SkillRow, 1),
            ("educationInfo", EntryKind::EducationRow, 2),
            ("projectInfo", EntryKind::ProjectRow, 1),
            ("workExpInfo", EntryKind::TrainingRow, 2),
            ("extraCurricularInfo", EntryKind::ExtracurricularRow, 1),
            ("areaOfInterestInfo", EntryKind::InterestRow, 2),
            ("hobbiesInfo", EntryKind::HobbyRow, 1),
            ("profileInfo", EntryKind::Summary, 1),
        ];
        for (section, kind, expected) in cases {
            let rows = section_entries(&entries, section);
            assert_eq!(count_kind(&rows, kind), expected, "{section}");
            assert_eq!(count_kind(&rows, EntryKind::Heading), 1, "{section}");
            // template 2 shows icons for freshers
            assert_eq!(count_kind(&rows, EntryKind::Logo), 1, "{section}");
        }

        let soft = section_entries(&entries, "softSkillsInfo");
        let soft_row = soft.iter().find(|e| e.kind == EntryKind::SkillRow).unwrap();
        assert_eq!(soft_row.props.content.text.as_deref(), Some("Mentoring"));

        let header = section_entries(&entries, "userInfo");
        assert_eq!(count_kind(&header, EntryKind::Heading), 0);
        assert_eq!(count_kind(&header, EntryKind::Name), 1);
        assert_eq!(count_kind(&header, EntryKind::DesignationLabel), 1);
        assert_eq!(count_kind(&header, EntryKind::ContactRow), 2);
        assert_eq!(count_kind(&header, EntryKind::Photo), 0);

        // the blank bullet is dropped
        let jobs = section_entries(&entries, "workExpInfo");
        assert!(jobs
            .iter()
            .filter(|e| e.kind == EntryKind::TrainingRow)
            .all(|e| e.props.content.bullets == vec!["Shipped things".to_string()]));

        let items = entries.iter().filter(|e| e.kind.is_section_item()).count();
        assert_eq!(items, 2 + 1 + 2 + 1 + 2 + 1 + 2 + 1);
    }

    #[test]
    fn test_page_too_short_for_bottom_reserve_is_rejected() {
        let params = LayoutParams {
            page_height: 18.0,
            margin_page: 10.0,
            ..default_layout_params()
        };
        let mut doc = example_doc(1);
        doc.template = Template::Three;
        let result = pack_resume(&doc, &params);
        assert!(matches!(result, Err(LayoutError::InvalidParams(_))));
    }

    #[test]
    fn test_section_key_aliases() {
        assert_eq!(
            SectionKey::parse("trainingInfo"),
            Some(SectionKey::WorkExperience)
        );
        assert_eq!(SectionKey::parse("nope"), None);
        assert_eq!(
            SectionKey::parse(SectionKey::Hobbies.as_str()),
            Some(SectionKey::Hobbies)
        );
    }
}
