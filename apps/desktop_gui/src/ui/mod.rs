//! UI layer for desktop GUI: the directory window.

pub mod app;

pub use app::DirectoryApp;
