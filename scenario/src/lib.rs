//! Scenario metadata descriptor loader.
//!
//! A scenario ships a TOML descriptor naming its railway track file, its
//! timetables and its supporting documents. The descriptor is loaded and
//! checked against an explicit rule list before any of the referenced files
//! are touched; every rule failure is collected and reported in one go, so
//! authors see all problems at once rather than one per run.

#[macro_use]
extern crate failure_derive;

mod validate;


pub use validate::{validate, Violations};

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

/// Scenario descriptor as written by project authors.
///
/// Every field is optional at the deserialization layer so that one load
/// can report all missing required fields together; `load` only returns
/// descriptors that passed the full rule list, which guarantees the
/// required fields are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Descriptor {
    pub name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub year: Option<i32>,
    /// Whether the scenario models a real network.
    pub factual: Option<bool>,
    pub difficulty: Option<i32>,
    /// Alpha-2 country code, or `FN` for fictional networks.
    pub country_code: Option<String>,
    pub version: Option<String>,
    pub minimum_required: Option<String>,
    /// The railway track file consumed by the railway parser.
    pub rly_file: Option<String>,
    pub contributors: Option<Vec<String>>,
    pub ttb_files: Option<Vec<String>>,
    pub doc_files: Option<Vec<String>>,
    pub ssn_files: Option<Vec<String>>,
    pub img_files: Option<Vec<String>>,
    pub graphic_files: Option<Vec<String>>,
    /// Release date in the form `YYYY-MM-DD`.
    pub release_date: Option<String>,
}

#[derive(Debug, Fail)]
pub enum MetadataError {
    #[fail(display = "metadata file not found: {}", _0)]
    NotFound(String),
    #[fail(display = "could not read metadata file: {}", _0)]
    Io(String),
    #[fail(display = "metadata file is not valid TOML: {}", _0)]
    Toml(String),
    #[fail(display = "error in regular expression: {}", _0)]
    RegexError(String),
    #[fail(display = "invalid metadata:\n{}", _0)]
    Validation(Violations),
}

/// Load and validate the descriptor at `path`.
pub fn load(path: &Path) -> Result<Descriptor, MetadataError> {
    if !path.exists() {
        return Err(MetadataError::NotFound(path.display().to_string()));
    }
    debug!("loading scenario metadata from {}", path.display());
    let contents = fs::read_to_string(path)
        .map_err(|e| MetadataError::Io(format!("{}: {}", path.display(), e)))?;
    load_str(&contents)
}

/// Load and validate descriptor contents already held in memory.
pub fn load_str(input: &str) -> Result<Descriptor, MetadataError> {
    let descriptor: Descriptor =
        toml::from_str(input).map_err(|e| MetadataError::Toml(e.to_string()))?;
    let violations = validate(&descriptor)?;
    if violations.is_empty() {
        Ok(descriptor)
    } else {
        Err(MetadataError::Validation(violations))
    }
}
