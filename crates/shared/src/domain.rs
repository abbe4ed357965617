use serde::{Deserialize, Serialize};

/// One entry of the friends-and-family dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Given name.
    pub name: String,
    /// Family name.
    pub lname: String,
    pub relation: String,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        lname: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lname: lname.into(),
            relation: relation.into(),
        }
    }

    /// "first last", the only concatenated form the filter matches against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lname)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleDocument {
    pub people: Vec<Person>,
}

impl PeopleDocument {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
