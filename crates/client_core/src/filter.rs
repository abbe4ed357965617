use shared::domain::Person;

/// True when any of the person's name fields starts with `needle`.
///
/// `needle` must already be lowercased. The checked haystacks are the first
/// name, last name, relation and "first last"; "last first" is not checked.
pub fn matches_prefix(person: &Person, needle: &str) -> bool {
    person.name.to_lowercase().starts_with(needle)
        || person.lname.to_lowercase().starts_with(needle)
        || person.relation.to_lowercase().starts_with(needle)
        || person.full_name().to_lowercase().starts_with(needle)
}

/// Selects the people matching `sub_string` case-insensitively, keeping input order.
///
/// An empty `sub_string` matches everyone. No trimming or normalization is applied.
pub fn filter_people<'a, I>(people: I, sub_string: &str) -> Vec<&'a Person>
where
    I: IntoIterator<Item = &'a Person>,
{
    let needle = sub_string.to_lowercase();
    people
        .into_iter()
        .filter(|person| matches_prefix(person, &needle))
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
