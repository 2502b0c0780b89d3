//! Document and section CRUD.

mod service;
mod types;


pub use service::{DocumentsService, DocumentsServiceImpl};
pub use types::{
    Document, DocumentSummary, RegisterAttachmentRequest, Section, UpdateSectionRequest,
};
