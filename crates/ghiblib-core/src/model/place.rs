use serde::{Deserialize, Serialize};
use std::fmt;

/// A setting or location in a film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub description: String,
}

impl Place {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Description: {}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_display() {
        let place = Place::new("Irontown", "A fortified ironworks");
        assert_eq!(place.to_string(), "Name: Irontown\nDescription: A fortified ironworks");
    }
}
