//! Repository layer — entity-scoped database operations.

mod medicine;

pub use medicine::*;
