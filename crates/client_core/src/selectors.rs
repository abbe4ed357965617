//! First-name and last-name dropdown models and their one-time population.

use serde::Serialize;
use shared::domain::Person;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectControl {
    placeholder: Option<SelectOption>,
    options: Vec<SelectOption>,
}

impl SelectControl {
    /// A control whose only child is an empty-valued prompt option.
    pub fn with_placeholder(label: impl Into<String>) -> Self {
        Self {
            placeholder: Some(SelectOption {
                value: String::new(),
                label: label.into(),
            }),
            options: Vec::new(),
        }
    }

    pub fn placeholder(&self) -> Option<&SelectOption> {
        self.placeholder.as_ref()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn append(&mut self, option: SelectOption) {
        self.options.push(option);
    }

    /// Placeholder plus appended options.
    pub fn child_count(&self) -> usize {
        usize::from(self.placeholder.is_some()) + self.options.len()
    }
}

/// Session-scoped "populate once" flag for the two name selectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectorPopulation {
    #[default]
    Unpopulated,
    Populated,
}

/// Appends one option per person to each control: first names to
/// `first_names`, last names to `last_names`. Never clears existing options.
pub fn populate_selectors<'a, I>(
    people: I,
    first_names: &mut SelectControl,
    last_names: &mut SelectControl,
) where
    I: IntoIterator<Item = &'a Person>,
{
    for person in people {
        first_names.append(SelectOption::new(person.name.clone()));
        last_names.append(SelectOption::new(person.lname.clone()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSelectors {
    pub first_names: SelectControl,
    pub last_names: SelectControl,
    #[serde(skip)]
    population: SelectorPopulation,
}

impl Default for NameSelectors {
    fn default() -> Self {
        Self {
            first_names: SelectControl::with_placeholder("First Name"),
            last_names: SelectControl::with_placeholder("Last Name"),
            population: SelectorPopulation::Unpopulated,
        }
    }
}

impl NameSelectors {
    pub fn population(&self) -> SelectorPopulation {
        self.population
    }

    /// Populates both selectors the first time it sees a non-empty result.
    ///
    /// Returns whether options were appended. Once populated, later calls are
    /// no-ops regardless of what the controls currently hold.
    pub fn populate_once(&mut self, people: &[&Person]) -> bool {
        if self.population == SelectorPopulation::Populated || people.is_empty() {
            return false;
        }
        populate_selectors(
            people.iter().copied(),
            &mut self.first_names,
            &mut self.last_names,
        );
        self.population = SelectorPopulation::Populated;
        true
    }
}

#[cfg(test)]
#[path = "tests/selectors_tests.rs"]
mod tests;
