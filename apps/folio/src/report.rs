//! Plain-text views of a document for the command-line tool.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::dates::format_range;
use crate::labels::collect_labels;
use crate::models::{Document, Experience, Role};
use crate::skills::AggregatedSkill;

/// Aggregate counts printed after a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub profile_name: String,
    pub education: usize,
    pub work_experience: usize,
    pub internships: usize,
    pub work_roles: usize,
    pub internship_roles: usize,
    pub publications: usize,
    pub labels: Vec<String>,
}

impl DocumentSummary {
    pub fn from_document(document: &Document) -> Self {
        Self {
            profile_name: document.profile.name.clone(),
            education: document.education.len(),
            work_experience: document.work_experience.len(),
            internships: document.internships.len(),
            work_roles: document.work_experience.iter().map(|w| w.roles.len()).sum(),
            internship_roles: document.internships.iter().map(|i| i.roles.len()).sum(),
            publications: document.publications.len(),
            labels: collect_labels(document).into_iter().collect(),
        }
    }

    pub fn total_roles(&self) -> usize {
        self.work_roles + self.internship_roles
    }
}

impl fmt::Display for DocumentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Profile: {}", self.profile_name)?;
        writeln!(f, "  Education entries: {}", self.education)?;
        writeln!(f, "  Work experiences: {}", self.work_experience)?;
        writeln!(f, "  Internships: {}", self.internships)?;
        writeln!(
            f,
            "  Total roles: {} ({} work, {} internship)",
            self.total_roles(),
            self.work_roles,
            self.internship_roles
        )?;
        writeln!(f, "  Publications: {}", self.publications)?;
        writeln!(f, "  Unique labels: {}", self.labels.len())?;
        write!(f, "  Labels: {}", self.labels.join(", "))
    }
}

/// Renders the sections of a (usually filtered) document. Empty sections get an
/// explicit "No ... found" line instead of disappearing.
pub fn render_outline(document: &Document) -> String {
    let mut out = String::new();

    out.push_str("== Experience ==\n");
    if document.work_experience.is_empty() && document.internships.is_empty() {
        out.push_str("No experience found\n");
    } else {
        for work in &document.work_experience {
            let to = if work.current { None } else { work.to_date.as_deref() };
            render_experience(&mut out, work, &format_range(Some(work.from_date.as_str()), to));
        }
        if !document.internships.is_empty() {
            out.push_str("-- Internships --\n");
        }
        for intern in &document.internships {
            let range = format_range(Some(intern.from_date.as_str()), intern.to_date.as_deref());
            render_experience(&mut out, intern, &range);
        }
    }

    out.push_str("\n== Education ==\n");
    if document.education.is_empty() {
        out.push_str("No education found\n");
    }
    for edu in &document.education {
        let range = format_range(Some(edu.from_date.as_str()), Some(edu.to_date.as_str()));
        let _ = writeln!(
            out,
            "{}, {} in {} ({range})",
            edu.institution, edu.degree, edu.field
        );
        if !edu.courses().is_empty() {
            let _ = writeln!(out, "  Coursework: {}", edu.courses().join(", "));
        }
    }

    out.push_str("\n== Publications ==\n");
    if document.publications.is_empty() {
        out.push_str("No publications found\n");
    }
    for publication in &document.publications {
        let _ = writeln!(
            out,
            "{} ({}, {}) {}",
            publication.title,
            publication.venue,
            publication.date,
            publication.authors.join(", ")
        );
    }

    out
}

fn render_experience<E: Experience>(out: &mut String, experience: &E, range: &str) {
    let _ = writeln!(out, "{} [{range}]", experience.company());
    for role in experience.roles() {
        render_role(out, role);
    }
}

fn render_role(out: &mut String, role: &Role) {
    let range = format_range(role.from_date.as_deref(), role.to_date.as_deref());
    if range.is_empty() {
        let _ = writeln!(out, "  {}", role.position);
    } else {
        let _ = writeln!(out, "  {} [{range}]", role.position);
    }
    for highlight in &role.highlights {
        let _ = writeln!(out, "    - {}", highlight.text);
    }
    if !role.skills.is_empty() {
        let names: Vec<&str> = role.skills.iter().map(|s| s.name.as_str()).collect();
        let _ = writeln!(out, "    Skills: {}", names.join(", "));
    }
}

/// One line per skill: name, label and the span of its earliest role.
pub fn render_skills(skills: &[AggregatedSkill]) -> String {
    if skills.is_empty() {
        return "No skills found\n".to_string();
    }
    let mut out = String::new();
    for skill in skills {
        let range = format_range(skill.from_date.as_deref(), skill.to_date.as_deref());
        let _ = writeln!(out, "{} ({}) {range}", skill.name, skill.label);
    }
    out
}
