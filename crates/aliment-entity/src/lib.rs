//! # aliment-entity
//!
//! Domain entity for the Aliment service.

pub mod aliment;

pub use aliment::Aliment;
