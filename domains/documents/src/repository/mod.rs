//! Repository implementations for Documents domain

pub mod documents;

pub use documents::DocumentRepository;
