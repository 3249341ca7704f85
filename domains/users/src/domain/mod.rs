//! Domain layer for the Users domain

pub mod entities;
