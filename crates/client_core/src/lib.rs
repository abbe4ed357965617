//! Friends-and-family directory: load the people dataset, filter it by a
//! name prefix, sort it by last then first name and render list rows and
//! name dropdowns for a front end to display.

pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod filter;
pub mod loader;
pub mod ordering;
pub mod orchestrator;
pub mod render;
pub mod selectors;

pub use config::{load_settings, Settings};
pub use error::LoadError;
pub use events::{query_for, DirectoryEvent, EventRouter, QueryReport};
pub use filter::filter_people;
pub use loader::{DataLocation, FilePeopleSource, HttpPeopleSource, PeopleSource};
pub use orchestrator::{DirectoryDocument, QueryOrchestrator, QueryOutcome, QueryState};
pub use ordering::{compare_people, sort_people};
pub use render::{render_entries, ListContainer, ListEntry};
pub use selectors::{NameSelectors, SelectControl, SelectOption};
