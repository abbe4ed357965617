//! Row view-models for the people list.
//!
//! The list container is an owned collection of [`ListEntry`] values that is
//! replaced wholesale on every render; no incremental diffing happens.

use serde::Serialize;
use shared::domain::Person;

pub const HEADER_CELLS: [&str; 3] = ["Last Name", "First Name", "Relation"];
pub const ENTRY_CLASS: &str = "person";
pub const HEADER_CLASS: &str = "header";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// Lowercased first name followed by lowercased last name; `None` for the header.
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Last name, first name, relation.
    pub cells: [String; 3],
}

impl ListEntry {
    pub fn header() -> Self {
        Self {
            id: None,
            classes: vec![ENTRY_CLASS.to_string(), HEADER_CLASS.to_string()],
            cells: HEADER_CELLS.map(str::to_string),
        }
    }

    pub fn for_person(person: &Person) -> Self {
        Self {
            id: Some(row_id(person)),
            classes: vec![ENTRY_CLASS.to_string()],
            cells: [
                person.lname.clone(),
                person.name.clone(),
                person.relation.clone(),
            ],
        }
    }

    pub fn is_header(&self) -> bool {
        self.classes.iter().any(|class| class == HEADER_CLASS)
    }
}

/// Identifier shared by every row rendered for people with the same names.
pub fn row_id(person: &Person) -> String {
    format!(
        "{}{}",
        person.name.to_lowercase(),
        person.lname.to_lowercase()
    )
}

/// Header entry followed by one entry per person, in the given order.
pub fn render_entries<'a, I>(people: I) -> Vec<ListEntry>
where
    I: IntoIterator<Item = &'a Person>,
{
    std::iter::once(ListEntry::header())
        .chain(people.into_iter().map(ListEntry::for_person))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListContainer {
    entries: Vec<ListEntry>,
}

impl ListContainer {
    /// Drops every existing entry and installs `entries` in their place.
    pub fn replace(&mut self, entries: Vec<ListEntry>) {
        self.entries = entries;
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Entries after the header.
    pub fn rows(&self) -> impl Iterator<Item = &ListEntry> {
        self.entries.iter().filter(|entry| !entry.is_header())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
