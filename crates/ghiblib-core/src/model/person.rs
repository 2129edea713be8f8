use serde::{Deserialize, Serialize};
use std::fmt;

/// A character appearing in a film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,

    /// Free text; may list several roles in one string.
    pub roles: String,

    pub description: String,
}

impl Person {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        roles: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            roles: roles.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Role: {}", self.roles)?;
        write!(f, "Description: {}", self.description)
    }
}
