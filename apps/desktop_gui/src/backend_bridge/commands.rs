//! Backend commands queued from UI to backend worker.

use client_core::DirectoryEvent;

pub enum BackendCommand {
    /// A document or control signal to route to the query pipeline.
    Event(DirectoryEvent),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Event(DirectoryEvent::DocumentLoaded) => "document_loaded",
            Self::Event(DirectoryEvent::NameInput(_)) => "name_input",
            Self::Event(DirectoryEvent::FirstNameSelected(_)) => "first_name_selected",
            Self::Event(DirectoryEvent::LastNameSelected(_)) => "last_name_selected",
        }
    }
}
