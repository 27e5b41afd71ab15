//! Repository contracts and concrete implementations.

pub mod aliment;
