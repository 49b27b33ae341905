//! Label Index: derives the labels a document actually uses and checks them
//! against the `availableLabels` the producer declared.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Document;

/// The labels a viewer has chosen. Empty means "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSelection(BTreeSet<String>);

impl LabelSelection {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Non-empty intersection test: any of `labels` is selected.
    pub fn matches_any<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        labels.iter().any(|l| self.0.contains(l.as_ref()))
    }

    /// Adds the label if absent, removes it if present.
    pub fn toggle(&mut self, label: &str) {
        if !self.0.remove(label) {
            self.0.insert(label.to_string());
        }
    }

    pub fn is_subset(&self, other: &LabelSelection) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Selected labels that appear nowhere in `known`. They are legal, they just match nothing.
    pub fn unknown<'a>(&'a self, known: &'a BTreeSet<String>) -> Vec<&'a str> {
        self.0
            .iter()
            .filter(|l| !known.contains(*l))
            .map(String::as_str)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Every label used anywhere in the document's content.
///
/// Scans education, highlights and skills under both experience kinds, and
/// publications. `availableLabels` itself is not included.
pub fn collect_labels(document: &Document) -> BTreeSet<String> {
    let mut labels = BTreeSet::new();

    for edu in &document.education {
        labels.extend(edu.labels.iter().cloned());
    }

    for role in document.all_roles() {
        for highlight in &role.highlights {
            labels.extend(highlight.labels.iter().cloned());
        }
        for skill in &role.skills {
            labels.insert(skill.label.clone());
        }
    }

    for publication in &document.publications {
        labels.extend(publication.labels.iter().cloned());
    }

    labels
}

/// Difference between declared and used labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAudit {
    /// Used in content but missing from `availableLabels`.
    pub undeclared: Vec<String>,
    /// Declared in `availableLabels` but used by no item.
    pub unused: Vec<String>,
}

impl LabelAudit {
    pub fn is_consistent(&self) -> bool {
        self.undeclared.is_empty() && self.unused.is_empty()
    }

    /// Human-readable warnings, one per mismatched label.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.undeclared.len() + self.unused.len());
        for label in &self.undeclared {
            out.push(format!(
                "label '{label}' is used in content but not listed in availableLabels"
            ));
        }
        for label in &self.unused {
            out.push(format!(
                "label '{label}' is listed in availableLabels but matches no content"
            ));
        }
        out
    }
}

pub fn audit_labels(document: &Document) -> LabelAudit {
    let used = collect_labels(document);
    let declared: BTreeSet<&str> = document.available_labels.iter().map(String::as_str).collect();

    let undeclared = used
        .iter()
        .filter(|l| !declared.contains(l.as_str()))
        .cloned()
        .collect();

    let mut unused: Vec<String> = Vec::new();
    for label in &document.available_labels {
        if !used.contains(label) && !unused.contains(label) {
            unused.push(label.clone());
        }
    }

    LabelAudit { undeclared, unused }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn test_collect_labels_scans_every_bearer() {
        let mut doc = empty_document();
        doc.education.push(education("e1", &["academia"]));
        doc.work_experience.push(work(
            "w1",
            vec![role(
                "r1",
                Some("2020-01"),
                vec![highlight("Built APIs", &["backend"])],
                vec![skill("Kubernetes", "infra")],
            )],
        ));
        doc.internships.push(internship(
            "i1",
            vec![role(
                "r2",
                Some("2018-06"),
                vec![highlight("Trained models", &["ml", "research"])],
                vec![],
            )],
        ));
        doc.publications.push(publication("p1", &["ml"]));

        let labels: Vec<_> = collect_labels(&doc).into_iter().collect();
        assert_eq!(labels, vec!["academia", "backend", "infra", "ml", "research"]);
    }

    #[test]
    fn test_collect_labels_ignores_declared_only_labels() {
        let mut doc = empty_document();
        doc.available_labels = vec!["backend".into()];
        assert!(collect_labels(&doc).is_empty());
    }

    #[test]
    fn test_collect_labels_does_not_use_skill_names() {
        let mut doc = empty_document();
        doc.work_experience.push(work(
            "w1",
            vec![role("r1", None, vec![], vec![skill("Go", "backend")])],
        ));
        let labels = collect_labels(&doc);
        assert!(labels.contains("backend"));
        assert!(!labels.contains("Go"));
    }

    #[test]
    fn test_audit_reports_both_directions() {
        let mut doc = empty_document();
        doc.available_labels = vec!["backend".into(), "leadership".into()];
        doc.education.push(education("e1", &["backend", "ml"]));

        let audit = audit_labels(&doc);
        assert_eq!(audit.undeclared, vec!["ml"]);
        assert_eq!(audit.unused, vec!["leadership"]);
        assert!(!audit.is_consistent());
        assert_eq!(audit.warnings().len(), 2);
    }

    #[test]
    fn test_audit_consistent_document() {
        let mut doc = empty_document();
        doc.available_labels = vec!["ml".into()];
        doc.publications.push(publication("p1", &["ml"]));
        assert!(audit_labels(&doc).is_consistent());
    }

    #[test]
    fn test_selection_toggle_and_match() {
        let mut sel = LabelSelection::default();
        assert!(sel.is_empty());
        sel.toggle("backend");
        assert!(sel.matches_any(&["frontend", "backend"]));
        assert!(!sel.matches_any::<&str>(&[]));
        sel.toggle("backend");
        assert!(sel.is_empty());
    }

    #[test]
    fn test_selection_unknown_labels() {
        let known: BTreeSet<String> = ["backend".to_string()].into_iter().collect();
        let sel = LabelSelection::new(["backend", "cobol"]);
        assert_eq!(sel.unknown(&known), vec!["cobol"]);
    }
}
