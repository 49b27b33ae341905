use serde::{Deserialize, Serialize};

/// The root resume document as published by the data producer.
///
/// Built once per load by the validator and never patched afterwards;
/// filtered views are new `Document` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
    pub internships: Vec<Internship>,
    pub publications: Vec<Publication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    /// Labels offered to the viewer, in display order. Curated by the producer,
    /// so it may differ from what the content actually uses.
    pub available_labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub field: String,
    pub from_date: String,
    pub to_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coursework: Option<Vec<String>>,
    /// Older documents list courses here instead of `coursework`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learnings: Option<Vec<String>>,
    pub labels: Vec<String>,
}

impl Education {
    /// Courses from `coursework`, falling back to `learnings` when it is absent.
    pub fn courses(&self) -> &[String] {
        self.coursework
            .as_deref()
            .or(self.learnings.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub location: String,
    pub from_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    pub current: bool,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    pub id: String,
    pub company: String,
    pub location: String,
    pub from_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub text: String,
    pub labels: Vec<String>,
}

/// A skill exercised in a role. `name` is the identity key; `label` is the
/// single category the skill is filtered by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

/// Shared shape of work experiences and internships: a company holding an
/// ordered list of roles.
pub trait Experience: Sized {
    fn company(&self) -> &str;
    fn roles(&self) -> &[Role];
    /// Rebuilds the entry with a replacement role list, every other field intact.
    fn with_roles(&self, roles: Vec<Role>) -> Self;
}

impl Experience for WorkExperience {
    fn company(&self) -> &str {
        &self.company
    }

    fn roles(&self) -> &[Role] {
        &self.roles
    }

    fn with_roles(&self, roles: Vec<Role>) -> Self {
        Self {
            id: self.id.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
            current: self.current,
            roles,
        }
    }
}

impl Experience for Internship {
    fn company(&self) -> &str {
        &self.company
    }

    fn roles(&self) -> &[Role] {
        &self.roles
    }

    fn with_roles(&self, roles: Vec<Role>) -> Self {
        Self {
            id: self.id.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
            roles,
        }
    }
}

impl Document {
    /// Roles under both work experiences and internships, work first.
    pub fn all_roles(&self) -> impl Iterator<Item = &Role> {
        self.work_experience
            .iter()
            .flat_map(|w| w.roles.iter())
            .chain(self.internships.iter().flat_map(|i| i.roles.iter()))
    }
}
