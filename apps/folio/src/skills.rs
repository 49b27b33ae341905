//! Skill Aggregator: one entry per distinct skill name across all experience.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::labels::LabelSelection;
use crate::models::{Document, Role};

/// A skill with the date range of the earliest role it was exercised in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedSkill {
    pub name: String,
    pub label: String,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

/// Collects skills from every role of every work experience, then every internship.
///
/// Same-named skills collapse into one entry that carries the label and dates
/// of the occurrence whose role started earliest. Dates compare as `YYYY-MM`
/// strings. On equal dates the first occurrence wins; a role without a start
/// date neither displaces nor is displaced by another occurrence. Entries are
/// ordered by the first time each name was seen.
pub fn aggregate_skills(document: &Document) -> Vec<AggregatedSkill> {
    let mut skills: Vec<AggregatedSkill> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for role in document.all_roles() {
        for skill in &role.skills {
            match index.get(&skill.name).copied() {
                Some(slot) => {
                    if starts_earlier(role, &skills[slot]) {
                        skills[slot] = occurrence(role, &skill.name, &skill.label);
                    }
                }
                None => {
                    index.insert(skill.name.clone(), skills.len());
                    skills.push(occurrence(role, &skill.name, &skill.label));
                }
            }
        }
    }

    debug!(distinct = skills.len(), "Aggregated skills");
    skills
}

/// Keeps entries whose label is selected. An empty selection keeps everything.
pub fn filter_skills(skills: &[AggregatedSkill], selection: &LabelSelection) -> Vec<AggregatedSkill> {
    if selection.is_empty() {
        return skills.to_vec();
    }
    skills
        .iter()
        .filter(|s| selection.contains(&s.label))
        .cloned()
        .collect()
}

fn starts_earlier(role: &Role, held: &AggregatedSkill) -> bool {
    match (role.from_date.as_deref(), held.from_date.as_deref()) {
        (Some(candidate), Some(current)) => candidate < current,
        _ => false,
    }
}

fn occurrence(role: &Role, name: &str, label: &str) -> AggregatedSkill {
    AggregatedSkill {
        name: name.to_string(),
        label: label.to_string(),
        from_date: role.from_date.clone(),
        to_date: role.to_date.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn names(skills: &[AggregatedSkill]) -> Vec<&str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_earliest_occurrence_wins() {
        let mut doc = empty_document();
        let mut later = role("late", Some("2021-06"), vec![], vec![skill("Go", "backend")]);
        later.to_date = Some("2022-01".into());
        let mut earlier = role("early", Some("2019-01"), vec![], vec![skill("Go", "infra")]);
        earlier.to_date = Some("2020-12".into());
        doc.work_experience.push(work("w1", vec![later, earlier]));

        let skills = aggregate_skills(&doc);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].label, "infra");
        assert_eq!(skills[0].from_date.as_deref(), Some("2019-01"));
        assert_eq!(skills[0].to_date.as_deref(), Some("2020-12"));
    }

    #[test]
    fn test_tie_keeps_first_encountered() {
        let mut doc = empty_document();
        doc.work_experience.push(work(
            "w1",
            vec![
                role("a", Some("2020-03"), vec![], vec![skill("SQL", "backend")]),
                role("b", Some("2020-03"), vec![], vec![skill("SQL", "data")]),
            ],
        ));
        let skills = aggregate_skills(&doc);
        assert_eq!(skills[0].label, "backend");
    }

    #[test]
    fn test_undated_roles_never_swap() {
        let mut doc = empty_document();
        doc.work_experience.push(work(
            "w1",
            vec![
                role("a", None, vec![], vec![skill("Rust", "systems")]),
                role("b", Some("2015-01"), vec![], vec![skill("Rust", "backend")]),
                role("c", Some("2016-01"), vec![], vec![skill("C", "systems")]),
                role("d", None, vec![], vec![skill("C", "embedded")]),
            ],
        ));
        let skills = aggregate_skills(&doc);
        assert_eq!(skills[0].label, "systems");
        assert!(skills[0].from_date.is_none());
        assert_eq!(skills[1].label, "systems");
        assert_eq!(skills[1].from_date.as_deref(), Some("2016-01"));
    }

    #[test]
    fn test_order_is_first_encounter_even_after_replacement() {
        let doc = sample_document();
        let skills = aggregate_skills(&doc);
        assert_eq!(
            names(&skills),
            vec!["Go", "Terraform", "React", "Kubernetes", "PyTorch"]
        );
        // Go first appears under r1 (2021-06) but r2 started 2019-01.
        assert_eq!(skills[0].from_date.as_deref(), Some("2019-01"));
    }

    #[test]
    fn test_internships_included_after_work() {
        let mut doc = empty_document();
        doc.internships.push(internship(
            "i1",
            vec![role("a", Some("2016-01"), vec![], vec![skill("Python", "ml")])],
        ));
        doc.work_experience.push(work(
            "w1",
            vec![role(
                "b",
                Some("2020-01"),
                vec![],
                vec![skill("Java", "backend"), skill("Python", "backend")],
            )],
        ));
        let skills = aggregate_skills(&doc);
        assert_eq!(names(&skills), vec!["Java", "Python"]);
        assert_eq!(skills[1].label, "ml");
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let doc = sample_document();
        assert_eq!(aggregate_skills(&doc), aggregate_skills(&doc));
    }

    #[test]
    fn test_filter_skills_by_label() {
        let skills = aggregate_skills(&sample_document());
        let filtered = filter_skills(&skills, &LabelSelection::new(["infra", "ml"]));
        assert_eq!(names(&filtered), vec!["Terraform", "Kubernetes", "PyTorch"]);
    }

    #[test]
    fn test_filter_skills_empty_selection_keeps_all() {
        let skills = aggregate_skills(&sample_document());
        assert_eq!(filter_skills(&skills, &LabelSelection::default()), skills);
    }

    #[test]
    fn test_filter_skills_matches_label_not_name() {
        let skills = aggregate_skills(&sample_document());
        assert!(filter_skills(&skills, &LabelSelection::new(["Go"])).is_empty());
    }
}
