//! tupledesc - tuple descriptors for a tuple-oriented storage engine
//!
//! A [`TupleDesc`] describes the shape of a tuple: field types, optional
//! names, byte size and offsets.

pub mod observability;
pub mod schema;

pub use schema::{FieldType, SchemaError, SchemaResult, TdItem, TupleDesc};
