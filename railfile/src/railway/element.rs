use super::location::Location;

/// Closed set of element categories appearing in a railway file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Active,
    Named,
    Inactive,
    Text,
}

/// One track element. Fields shared by every category live here; the
/// category-specific payload is in `kind`.
#[derive(Debug, Clone)]
pub struct Element {
    pub speed_tag: Option<i32>,
    pub location: Location,
    pub name: Option<String>,
    pub kind: ElementKind,
}

#[derive(Debug, Clone)]
pub enum ElementKind {
    Active(ActiveElement),
    /// Location tagged with a human-readable identifier. The identifier is
    /// the element's `name`, which is always present and non-empty.
    Named,
    /// Reserved category, currently carries no data.
    Inactive,
    /// Reserved category, currently carries no data.
    Text,
}

/// Payload of a switchable track element, with independent main/side route
/// length and speed limits. The side values are absent for elements with a
/// single route.
#[derive(Debug, Clone)]
pub struct ActiveElement {
    pub length_main: i32,
    pub length_side: Option<i32>,
    pub speed_main: i32,
    pub speed_side: Option<i32>,
    pub active_name: String,
}

impl Element {
    /// Active element as decoded from the file. An empty `name` line means
    /// the element carries no name.
    pub fn active(
        speed_tag: i32,
        location: Location,
        name: &str,
        active: ActiveElement,
    ) -> Element {
        Element {
            speed_tag: Some(speed_tag),
            location,
            name: if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            },
            kind: ElementKind::Active(active),
        }
    }

    /// Named element: a location tagged with a non-empty identifier.
    pub fn named(location: Location, name: &str) -> Element {
        Element {
            speed_tag: None,
            location,
            name: Some(name.to_string()),
            kind: ElementKind::Named,
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self.kind {
            ElementKind::Active(_) => ElementType::Active,
            ElementKind::Named => ElementType::Named,
            ElementKind::Inactive => ElementType::Inactive,
            ElementKind::Text => ElementType::Text,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The active payload, if this is an active element.
    pub fn active_data(&self) -> Option<&ActiveElement> {
        match self.kind {
            ElementKind::Active(ref active) => Some(active),
            _ => None,
        }
    }
}
