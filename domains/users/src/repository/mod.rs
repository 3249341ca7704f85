//! Repository implementations for Users domain

pub mod users;

pub use users::UserRepository;
