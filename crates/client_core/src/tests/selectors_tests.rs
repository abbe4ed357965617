use super::*;

fn family() -> Vec<Person> {
    vec![
        Person::new("Jo", "Park", "Sister"),
        Person::new("Al", "Parker", "Friend"),
    ]
}

#[test]
fn option_value_and_label_match_name() {
    let option = SelectOption::new("Jo");
    assert_eq!(option.value, "Jo");
    assert_eq!(option.label, "Jo");
}

#[test]
fn populate_appends_first_and_last_names() {
    let people = family();
    let mut first = SelectControl::default();
    let mut last = SelectControl::default();

    populate_selectors(&people, &mut first, &mut last);

    assert_eq!(
        first.options(),
        &[SelectOption::new("Jo"), SelectOption::new("Al")]
    );
    assert_eq!(
        last.options(),
        &[SelectOption::new("Park"), SelectOption::new("Parker")]
    );
}

#[test]
fn populate_always_appends() {
    let people = family();
    let mut first = SelectControl::with_placeholder("First Name");
    let mut last = SelectControl::default();

    populate_selectors(&people, &mut first, &mut last);
    populate_selectors(&people, &mut first, &mut last);

    assert_eq!(first.options().len(), 4);
    assert_eq!(first.child_count(), 5);
}

#[test]
fn name_selectors_start_with_placeholders_only() {
    let selectors = NameSelectors::default();

    assert_eq!(selectors.first_names.child_count(), 1);
    assert_eq!(selectors.last_names.child_count(), 1);
    assert_eq!(
        selectors.first_names.placeholder().map(|p| p.value.as_str()),
        Some("")
    );
    assert_eq!(selectors.population(), SelectorPopulation::Unpopulated);
}

#[test]
fn populate_once_runs_a_single_time() {
    let people = family();
    let refs: Vec<&Person> = people.iter().collect();
    let mut selectors = NameSelectors::default();

    assert!(selectors.populate_once(&refs));
    assert!(!selectors.populate_once(&refs));

    assert_eq!(selectors.first_names.options().len(), 2);
    assert_eq!(selectors.last_names.options().len(), 2);
    assert_eq!(selectors.population(), SelectorPopulation::Populated);
}

#[test]
fn empty_result_leaves_selectors_unpopulated() {
    let mut selectors = NameSelectors::default();

    assert!(!selectors.populate_once(&[]));
    assert_eq!(selectors.first_names.options().len(), 0);
    assert_eq!(selectors.population(), SelectorPopulation::Unpopulated);

    let people = family();
    let refs: Vec<&Person> = people.iter().collect();
    assert!(selectors.populate_once(&refs));
}
