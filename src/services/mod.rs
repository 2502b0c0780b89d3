//! Service implementations for the Draftsmith API endpoints.

pub mod coauthor;
pub mod documents;
pub mod drafts;
pub mod help;
