//! Identifier source domain entities.

pub mod model;

pub use model::IdentifierSource;
