#[macro_use]
extern crate failure_derive;

pub mod input;
pub mod railway;

#[cfg(test)]
mod tests;

use std::path::Path;

pub type AppResult<T> = Result<T, failure::Error>;

/// Read and parse the railway file at `path`.
pub fn get_railway(path: &Path) -> AppResult<railway::Railway> {
    let railway = input::railway_file::parse(path)?;
    Ok(railway)
}

/// Parse railway file contents already held in memory, using the default
/// trailing-line policy.
pub fn get_railway_string(contents: &str) -> AppResult<railway::Railway> {
    use crate::input::railway_file::{parse_str, TrailingLines};
    let railway = parse_str(contents, TrailingLines::default())?;
    Ok(railway)
}
