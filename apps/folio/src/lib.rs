//! folio: label-filtered views of a structured resume document.
//!
//! The core is pure: [`filter::filter_document`] and
//! [`skills::aggregate_skills`] take an already-validated [`models::Document`]
//! and build new values without touching the input. Loading and validation
//! live at the edge in [`loader`] and [`validation`].

pub mod config;
pub mod dates;
pub mod errors;
pub mod filter;
pub mod labels;
pub mod loader;
pub mod models;
pub mod report;
pub mod skills;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use errors::{LoadError, SchemaError, ValidationErrors};
pub use filter::filter_document;
pub use labels::{audit_labels, collect_labels, LabelAudit, LabelSelection};
pub use models::Document;
pub use skills::{aggregate_skills, filter_skills, AggregatedSkill};
pub use validation::validate;
