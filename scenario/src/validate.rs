//! Explicit rule list for scenario descriptors.
//!
//! Rules never stop at the first failure: one pass collects everything
//! wrong with the descriptor into a single `Violations` report.

use std::collections::HashSet;
use std::fmt;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::{Descriptor, MetadataError};

/// All rule failures from one validation pass, in rule order.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    fn push(&mut self, message: String) {
        self.0.push(message);
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for message in &self.0 {
            writeln!(f, "  - {}", message)?;
        }
        Ok(())
    }
}

/// Run the full rule list over `descriptor`.
pub fn validate(descriptor: &Descriptor) -> Result<Violations, MetadataError> {
    let country_re = Regex::new(r"^[A-Z]{2}$")
        .map_err(|e| MetadataError::RegexError(format!("{:?}", e)))?;

    let mut violations = Violations::default();

    required(&mut violations, "name", &descriptor.name);
    required(&mut violations, "author", &descriptor.author);
    required(&mut violations, "country_code", &descriptor.country_code);
    required(&mut violations, "version", &descriptor.version);
    required(&mut violations, "rly_file", &descriptor.rly_file);
    required(&mut violations, "release_date", &descriptor.release_date);
    if descriptor.factual.is_none() {
        violations.push("missing required field 'factual'".to_string());
    }
    required_list(&mut violations, "ttb_files", &descriptor.ttb_files);
    required_list(&mut violations, "doc_files", &descriptor.doc_files);

    let lists = [
        ("contributors", &descriptor.contributors),
        ("ttb_files", &descriptor.ttb_files),
        ("doc_files", &descriptor.doc_files),
        ("ssn_files", &descriptor.ssn_files),
        ("img_files", &descriptor.img_files),
        ("graphic_files", &descriptor.graphic_files),
    ];
    for &(field, list) in &lists {
        if let Some(list) = list {
            unique(&mut violations, field, list);
        }
    }

    if let Some(year) = descriptor.year {
        if year < 1700 {
            violations.push(format!("year {} is out of range, expected 1700 or later", year));
        }
    }

    if let Some(difficulty) = descriptor.difficulty {
        if !(1..=5).contains(&difficulty) {
            violations.push(format!(
                "difficulty {} is out of range, expected 1 to 5",
                difficulty
            ));
        }
    }

    if let Some(ref code) = descriptor.country_code {
        if code != "FN" && !country_re.is_match(code) {
            violations.push(format!("invalid country code \"{}\"", code));
        }
    }

    if let Some(ref version) = descriptor.version {
        semantic_version(&mut violations, "version", version);
    }
    if let Some(ref version) = descriptor.minimum_required {
        semantic_version(&mut violations, "minimum_required", version);
    }

    if let Some(ref date) = descriptor.release_date {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(release) => {
                let today = Local::now().naive_local().date();
                if release > today {
                    violations.push(format!("release_date {} is in the future", date));
                }
            }
            Err(_) => violations.push(format!(
                "expected release_date in the form YYYY-MM-DD, got \"{}\"",
                date
            )),
        }
    }

    Ok(violations)
}

fn required(violations: &mut Violations, field: &str, value: &Option<String>) {
    if value.is_none() {
        violations.push(format!("missing required field '{}'", field));
    }
}

fn required_list(violations: &mut Violations, field: &str, value: &Option<Vec<String>>) {
    if value.is_none() {
        violations.push(format!("missing required field '{}'", field));
    }
}

fn unique(violations: &mut Violations, field: &str, list: &[String]) {
    let mut seen = HashSet::new();
    for item in list {
        if !seen.insert(item) {
            violations.push(format!("duplicate entry \"{}\" in {}", item, field));
        }
    }
}

fn semantic_version(violations: &mut Violations, field: &str, version: &str) {
    if semver::Version::parse(version).is_err() {
        violations.push(format!(
            "invalid semantic version \"{}\" for {}",
            version, field
        ));
    }
}
