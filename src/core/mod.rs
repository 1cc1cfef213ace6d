//! Business logic shared by the web handlers.

pub mod add;
pub mod del;
pub mod edit;
pub mod format;
pub mod list;
