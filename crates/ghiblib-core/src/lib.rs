//! Core domain model for ghiblib.
//!
//! This crate defines the film catalog model (Work, Person, Place), the
//! in-memory [`Catalog`] with its queries and typed field updates, and the
//! JSON document format used to save and restore a catalog.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{FieldUpdate, Person, Place, Work, WorkField};
