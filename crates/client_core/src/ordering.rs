//! Last-name-then-first-name ordering of people.

use std::cmp::Ordering;

use shared::domain::Person;

/// Orders two people by lowercased last name, then lowercased first name.
///
/// Comparison is plain lexicographic ordering of the lowercased strings, with
/// no locale-aware collation. People equal on both keys compare `Equal`.
pub fn compare_people(a: &Person, b: &Person) -> Ordering {
    a.lname
        .to_lowercase()
        .cmp(&b.lname.to_lowercase())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Returns a new sequence of the same records in [`compare_people`] order.
///
/// The sort is stable, so order-equivalent records keep their input order.
pub fn sort_people<'a, I>(people: I) -> Vec<&'a Person>
where
    I: IntoIterator<Item = &'a Person>,
{
    let mut sorted: Vec<&Person> = people.into_iter().collect();
    sorted.sort_by(|a, b| compare_people(a, b));
    sorted
}

#[cfg(test)]
#[path = "tests/ordering_tests.rs"]
mod tests;
