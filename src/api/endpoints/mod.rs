//! API endpoint handlers.
//!
//! Handlers are thin: they extract parameters, call into the catalog,
//! matcher, report or pharmacy modules, and shape the JSON response.

pub mod chat;
pub mod health;
pub mod medicines;
pub mod pharmacies;
pub mod search;
