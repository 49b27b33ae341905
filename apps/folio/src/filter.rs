//! Filtering Engine: prunes a document down to the items matching a label selection.
//!
//! Every node is pruned bottom-up: leaves are tested against the selection,
//! and a parent survives only if at least one child survived. Survivors keep
//! their original relative order and every non-child field unchanged.

use tracing::debug;

use crate::labels::LabelSelection;
use crate::models::{
    Document, Education, Experience, Highlight, Internship, Publication, Role, Skill,
    WorkExperience,
};

/// A node that can be pruned against a selection.
///
/// `None` means the node and its whole subtree are dropped.
pub trait Prune: Sized {
    fn prune(&self, selection: &LabelSelection) -> Option<Self>;
}

impl Prune for Highlight {
    fn prune(&self, selection: &LabelSelection) -> Option<Self> {
        selection.matches_any(&self.labels).then(|| self.clone())
    }
}

impl Prune for Skill {
    fn prune(&self, selection: &LabelSelection) -> Option<Self> {
        selection.contains(&self.label).then(|| self.clone())
    }
}

impl Prune for Education {
    fn prune(&self, selection: &LabelSelection) -> Option<Self> {
        selection.matches_any(&self.labels).then(|| self.clone())
    }
}

impl Prune for Publication {
    fn prune(&self, selection: &LabelSelection) -> Option<Self> {
        selection.matches_any(&self.labels).then(|| self.clone())
    }
}

impl Prune for Role {
    /// Survives on a matching highlight OR a matching skill; either is enough.
    fn prune(&self, selection: &LabelSelection) -> Option<Self> {
        let highlights = prune_all(&self.highlights, selection);
        let skills = prune_all(&self.skills, selection);

        if highlights.is_empty() && skills.is_empty() {
            return None;
        }

        Some(Role {
            id: self.id.clone(),
            position: self.position.clone(),
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
            description: self.description.clone(),
            highlights,
            skills,
        })
    }
}

impl Prune for WorkExperience {
    fn prune(&self, selection: &LabelSelection) -> Option<Self> {
        prune_experience(self, selection)
    }
}

impl Prune for Internship {
    fn prune(&self, selection: &LabelSelection) -> Option<Self> {
        prune_experience(self, selection)
    }
}

fn prune_experience<E: Experience>(experience: &E, selection: &LabelSelection) -> Option<E> {
    let roles = prune_all(experience.roles(), selection);
    if roles.is_empty() {
        return None;
    }
    Some(experience.with_roles(roles))
}

/// Prunes each item, keeping survivors in their original order.
pub fn prune_all<T: Prune>(items: &[T], selection: &LabelSelection) -> Vec<T> {
    items.iter().filter_map(|item| item.prune(selection)).collect()
}

/// Returns the view of `document` restricted to `selection`.
///
/// An empty selection means "no filter" and returns the document unchanged;
/// a selection matching nothing yields empty collections, not an error.
/// Profile, languages and available labels always pass through.
pub fn filter_document(document: &Document, selection: &LabelSelection) -> Document {
    if selection.is_empty() {
        return document.clone();
    }

    let filtered = Document {
        profile: document.profile.clone(),
        education: prune_all(&document.education, selection),
        work_experience: prune_all(&document.work_experience, selection),
        internships: prune_all(&document.internships, selection),
        publications: prune_all(&document.publications, selection),
        languages: document.languages.clone(),
        available_labels: document.available_labels.clone(),
    };

    debug!(
        education = filtered.education.len(),
        work_experience = filtered.work_experience.len(),
        internships = filtered.internships.len(),
        publications = filtered.publications.len(),
        "Filtered document"
    );

    filtered
}
