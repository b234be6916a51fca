use std::fmt;

/// Grid coordinate of a single track element.
///
/// Pure value: equality and hashing go by `(x, y)`, which is what allows
/// elements to be looked up by coordinate rather than identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Location {
        Location { x, y }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

/// Boundary point where trains leave the modeled network.
///
/// Wraps a `Location` with a human-readable name. The `"name(x-y)"` form is
/// computed for display only and does not alter location identity; several
/// decorated wrappers may reference the same underlying `Location`.
#[derive(Debug, Clone)]
pub struct RailwayExitLocation {
    location: Location,
    name: String,
}

impl RailwayExitLocation {
    pub fn new(location: Location, name: &str) -> RailwayExitLocation {
        RailwayExitLocation {
            location,
            name: name.to_string(),
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.location)
    }
}

impl fmt::Display for RailwayExitLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.name, self.location)
    }
}

/// Boundary point where trains enter the modeled network.
#[derive(Debug, Clone)]
pub struct RailwayStartLocation {
    location: Location,
    name: String,
}

impl RailwayStartLocation {
    pub fn new(location: Location, name: &str) -> RailwayStartLocation {
        RailwayStartLocation {
            location,
            name: name.to_string(),
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.location)
    }
}

impl fmt::Display for RailwayStartLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.name, self.location)
    }
}
