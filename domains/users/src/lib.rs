//! Users domain: accounts, roles, credential lookup

pub mod domain;
pub mod repository;

pub use domain::entities::{NewUser, User, UserCredentials};
pub use repository::UserRepository;
