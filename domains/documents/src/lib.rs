//! Documents domain: document metadata with tiered visibility

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::entities::{
    Document, DocumentListing, DocumentView, DocumentVisibility, NewDocument, UserDocumentView,
};
pub use repository::DocumentRepository;
pub use service::DocumentService;
