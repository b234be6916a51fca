//! Topological railway model built from a railway file.

pub mod element;
pub mod location;

pub use element::{ActiveElement, Element, ElementKind, ElementType};
pub use location::{Location, RailwayExitLocation, RailwayStartLocation};

use std::collections::{HashMap, HashSet};

/// The aggregate graph: ordered element storage plus name-indexed lookups
/// for stations, exits and starts.
///
/// Created empty by the parser and mutated only through the `add_*` calls
/// while parsing runs. The parser hands the finished value to the caller by
/// ownership, so downstream consumers only ever hold it (or share `&Railway`
/// across threads) read-only.
///
/// The three label namespaces are independent; a name may appear in more
/// than one. The ordered views keep every insertion, and the name lookups
/// resolve to the most recent registration of a name.
#[derive(Debug, Default)]
pub struct Railway {
    pub program_version: String,
    pub home_location: Location,
    /// Element count announced by the metadata section. Informational: it
    /// does not bound parsing.
    pub active_element_count: i32,

    elements: Vec<Element>,
    named_locations: HashMap<String, Location>,

    stations: Vec<String>,
    exits: Vec<RailwayExitLocation>,
    exit_index: HashMap<String, usize>,
    starts: Vec<RailwayStartLocation>,
    start_index: HashMap<String, usize>,
}

impl Railway {
    pub fn new() -> Railway {
        Default::default()
    }

    /// Append an element to the ordered storage. An element carrying a name
    /// is also registered in the named-location index.
    pub fn add_element(&mut self, element: Element) {
        if let Some(name) = element.name() {
            self.named_locations
                .insert(name.to_string(), element.location);
        }
        self.elements.push(element);
    }

    /// Register a label under the station namespace.
    pub fn add_station(&mut self, name: &str) {
        self.stations.push(name.to_string());
    }

    /// Register `location` as a network exit under `name`.
    pub fn add_exit(&mut self, location: Location, name: &str) {
        self.exit_index.insert(name.to_string(), self.exits.len());
        self.exits.push(RailwayExitLocation::new(location, name));
    }

    /// Register `location` as a network start under `name`.
    pub fn add_start(&mut self, location: Location, name: &str) {
        self.start_index.insert(name.to_string(), self.starts.len());
        self.starts.push(RailwayStartLocation::new(location, name));
    }

    /// Station labels in insertion order, duplicates included.
    pub fn get_stations(&self) -> &[String] {
        &self.stations
    }

    /// Exit labels in insertion order, duplicates included.
    pub fn get_exits(&self) -> Vec<&str> {
        self.exits.iter().map(|e| e.name()).collect()
    }

    /// Start labels in insertion order, duplicates included.
    pub fn get_starts(&self) -> Vec<&str> {
        self.starts.iter().map(|s| s.name()).collect()
    }

    /// Location registered for a named element. Exact match; `None` when
    /// the name is unknown.
    pub fn get_location_from_string(&self, name: &str) -> Option<Location> {
        self.named_locations.get(name).copied()
    }

    /// Exit registered under `name`. Exact match; `None` when the label is
    /// unknown, so callers can probe optimistically.
    pub fn get_exit_from_string(&self, name: &str) -> Option<&RailwayExitLocation> {
        self.exit_index.get(name).map(|&i| &self.exits[i])
    }

    /// Start registered under `name`. Exact match; `None` when the label is
    /// unknown.
    pub fn get_start_from_string(&self, name: &str) -> Option<&RailwayStartLocation> {
        self.start_index.get(name).map(|&i| &self.starts[i])
    }

    /// Elements in file order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// First element stored at the given coordinate.
    pub fn element_at(&self, location: Location) -> Option<&Element> {
        self.elements.iter().find(|e| e.location == location)
    }

    /// Distinct names carried by stored elements, in insertion order.
    pub fn named_element_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.elements
            .iter()
            .filter_map(|e| e.name())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}
