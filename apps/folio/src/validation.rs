//! Schema validation of a raw JSON document into a typed `Document`.
//!
//! Every violation is collected with the path of the offending node so the
//! caller can report all of them at once. Only a fully valid document is
//! converted; there is no partial result.

use serde_json::{Map, Value};

use crate::dates::parse_month;
use crate::errors::{SchemaError, ValidationErrors};
use crate::models::Document;

const PROFILE_FIELDS: &[&str] = &["name", "title", "summary", "email", "linkedin", "github"];
const EDUCATION_FIELDS: &[&str] = &[
    "id",
    "institution",
    "location",
    "degree",
    "field",
    "fromDate",
    "toDate",
];
const EXPERIENCE_FIELDS: &[&str] = &["id", "company", "location", "fromDate"];
const ROLE_FIELDS: &[&str] = &["id", "position"];
const PUBLICATION_FIELDS: &[&str] = &["id", "title", "venue", "date", "type"];
const COLLECTIONS: &[&str] = &["education", "workExperience", "internships", "publications"];

/// Checks `raw` against the document schema and converts it.
pub fn validate(raw: &Value) -> Result<Document, ValidationErrors> {
    let mut checker = Checker::default();
    checker.document(raw);

    if !checker.errors.is_empty() {
        return Err(ValidationErrors(checker.errors));
    }

    serde_json::from_value(raw.clone())
        .map_err(|e| ValidationErrors(vec![SchemaError::new("$", e.to_string())]))
}

/// Dates on a valid document that do not parse as `YYYY-MM`. Advisory only:
/// they still render verbatim.
pub fn date_warnings(document: &Document) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut check = |path: String, value: Option<&str>| {
        if let Some(v) = value {
            if parse_month(v).is_none() {
                warnings.push(format!("{path}: date '{v}' is not in YYYY-MM form"));
            }
        }
    };

    for (i, edu) in document.education.iter().enumerate() {
        check(format!("Education[{i}].fromDate"), Some(edu.from_date.as_str()));
        check(format!("Education[{i}].toDate"), Some(edu.to_date.as_str()));
    }
    for (i, work) in document.work_experience.iter().enumerate() {
        check(format!("WorkExperience[{i}].fromDate"), Some(work.from_date.as_str()));
        check(format!("WorkExperience[{i}].toDate"), work.to_date.as_deref());
        for (j, role) in work.roles.iter().enumerate() {
            check(format!("WorkExperience[{i}].roles[{j}].fromDate"), role.from_date.as_deref());
            check(format!("WorkExperience[{i}].roles[{j}].toDate"), role.to_date.as_deref());
        }
    }
    for (i, intern) in document.internships.iter().enumerate() {
        check(format!("Internship[{i}].fromDate"), Some(intern.from_date.as_str()));
        check(format!("Internship[{i}].toDate"), intern.to_date.as_deref());
        for (j, role) in intern.roles.iter().enumerate() {
            check(format!("Internship[{i}].roles[{j}].fromDate"), role.from_date.as_deref());
            check(format!("Internship[{i}].roles[{j}].toDate"), role.to_date.as_deref());
        }
    }

    warnings
}

#[derive(Default)]
struct Checker {
    errors: Vec<SchemaError>,
}

impl Checker {
    fn fail(&mut self, path: &str, reason: impl Into<String>) {
        self.errors.push(SchemaError::new(path, reason));
    }

    fn document(&mut self, raw: &Value) {
        let Some(root) = raw.as_object() else {
            self.fail("$", "document must be an object");
            return;
        };

        match root.get("profile") {
            Some(Value::Object(profile)) => self.present_strings(profile, "Profile", PROFILE_FIELDS),
            Some(_) => self.fail("Profile", "profile must be an object"),
            None => self.fail("Profile", "missing required field 'profile'"),
        }

        for &key in COLLECTIONS {
            if !matches!(root.get(key), Some(Value::Array(_))) {
                self.fail(key, format!("{key} must be an array"));
            }
        }

        for (i, edu) in array_items(root, "education") {
            self.education(edu, &format!("Education[{i}]"));
        }
        for (i, work) in array_items(root, "workExperience") {
            self.experience(work, &format!("WorkExperience[{i}]"), true);
        }
        for (i, intern) in array_items(root, "internships") {
            self.experience(intern, &format!("Internship[{i}]"), false);
        }
        for (i, publication) in array_items(root, "publications") {
            self.publication(publication, &format!("Publication[{i}]"));
        }

        match root.get("availableLabels") {
            Some(value) => self.string_array(value, "availableLabels", "availableLabels"),
            None => self.fail("availableLabels", "availableLabels must be an array"),
        }

        match root.get("languages") {
            None | Some(Value::Null) => {}
            Some(Value::Array(languages)) => {
                for (i, lang) in languages.iter().enumerate() {
                    let path = format!("Language[{i}]");
                    match lang.as_object() {
                        Some(obj) => self.present_strings(obj, &path, &["name", "proficiency"]),
                        None => self.fail(&path, "language must be an object"),
                    }
                }
            }
            Some(_) => self.fail("languages", "languages must be an array"),
        }
    }

    fn education(&mut self, value: &Value, path: &str) {
        let Some(obj) = self.object(value, path) else {
            return;
        };
        self.required_strings(obj, path, EDUCATION_FIELDS);
        self.optional_string(obj, path, "description");
        self.labels(obj, path);
        for key in ["coursework", "learnings"] {
            if let Some(list) = obj.get(key) {
                self.string_array(list, path, key);
            }
        }
    }

    fn experience(&mut self, value: &Value, path: &str, is_work: bool) {
        let Some(obj) = self.object(value, path) else {
            return;
        };
        self.present_strings(obj, path, EXPERIENCE_FIELDS);
        self.optional_string(obj, path, "toDate");

        if is_work {
            match obj.get("current") {
                Some(Value::Bool(_)) => {}
                Some(_) => self.fail(path, "'current' must be a boolean"),
                None => self.fail(path, "missing required field 'current'"),
            }
        }

        match obj.get("roles") {
            Some(Value::Array(roles)) if !roles.is_empty() => {
                for (j, role) in roles.iter().enumerate() {
                    self.role(role, &format!("{path}.roles[{j}]"));
                }
            }
            _ => self.fail(path, "roles must be a non-empty array"),
        }
    }

    fn role(&mut self, value: &Value, path: &str) {
        let Some(obj) = self.object(value, path) else {
            return;
        };
        self.required_strings(obj, path, ROLE_FIELDS);
        for key in ["fromDate", "toDate", "description"] {
            self.optional_string(obj, path, key);
        }

        // Absent highlights or skills are an empty list, not an error.
        match obj.get("highlights") {
            None => {}
            Some(Value::Array(highlights)) => {
                for (k, h) in highlights.iter().enumerate() {
                    let hpath = format!("{path}.highlights[{k}]");
                    let Some(hobj) = self.object(h, &hpath) else {
                        continue;
                    };
                    if !is_non_empty_str(hobj.get("text")) {
                        self.fail(&hpath, "missing or invalid 'text'");
                    }
                    self.labels(hobj, &hpath);
                }
            }
            Some(_) => self.fail(path, "highlights must be an array"),
        }

        match obj.get("skills") {
            None => {}
            Some(Value::Array(skills)) => {
                for (k, s) in skills.iter().enumerate() {
                    let spath = format!("{path}.skills[{k}]");
                    let Some(sobj) = self.object(s, &spath) else {
                        continue;
                    };
                    for key in ["name", "label"] {
                        if !is_non_empty_str(sobj.get(key)) {
                            self.fail(&spath, format!("missing or invalid '{key}'"));
                        }
                    }
                }
            }
            Some(_) => self.fail(path, "skills must be an array"),
        }
    }

    fn publication(&mut self, value: &Value, path: &str) {
        let Some(obj) = self.object(value, path) else {
            return;
        };
        self.required_strings(obj, path, PUBLICATION_FIELDS);
        for key in ["link", "description"] {
            self.optional_string(obj, path, key);
        }
        match obj.get("authors") {
            Some(authors) => self.string_array(authors, path, "authors"),
            None => self.fail(path, "missing required field 'authors'"),
        }
        self.labels(obj, path);
    }

    fn object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        let obj = value.as_object();
        if obj.is_none() {
            self.fail(path, "entry must be an object");
        }
        obj
    }

    /// Fields that must hold a non-empty string.
    fn required_strings(&mut self, obj: &Map<String, Value>, path: &str, fields: &[&str]) {
        for &field in fields {
            if !is_non_empty_str(obj.get(field)) {
                self.fail(path, format!("missing or invalid required field '{field}'"));
            }
        }
    }

    /// Fields that must be strings but may be empty, e.g. a profile without a GitHub account.
    fn present_strings(&mut self, obj: &Map<String, Value>, path: &str, fields: &[&str]) {
        for &field in fields {
            if !matches!(obj.get(field), Some(Value::String(_))) {
                self.fail(path, format!("missing or invalid required field '{field}'"));
            }
        }
    }

    fn optional_string(&mut self, obj: &Map<String, Value>, path: &str, field: &str) {
        if let Some(value) = obj.get(field) {
            if !(value.is_string() || value.is_null()) {
                self.fail(path, format!("'{field}' must be a string"));
            }
        }
    }

    fn labels(&mut self, obj: &Map<String, Value>, path: &str) {
        match obj.get("labels") {
            Some(labels) => self.string_array(labels, path, "labels"),
            None => self.fail(path, "missing required field 'labels'"),
        }
    }

    fn string_array(&mut self, value: &Value, path: &str, field: &str) {
        match value.as_array() {
            Some(items) if items.iter().all(Value::is_string) => {}
            Some(_) => self.fail(path, format!("{field} must contain only strings")),
            None => self.fail(path, format!("{field} must be an array")),
        }
    }
}

fn is_non_empty_str(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

fn array_items<'v>(
    root: &'v Map<String, Value>,
    key: &str,
) -> impl Iterator<Item = (usize, &'v Value)> {
    root.get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flat_map(|items| items.iter().enumerate())
}
