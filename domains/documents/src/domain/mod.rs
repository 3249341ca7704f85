//! Domain layer for the Documents domain

pub mod entities;
pub mod visibility;
