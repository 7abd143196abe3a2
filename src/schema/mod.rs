//! Tuple descriptor subsystem
//!
//! A descriptor is the ordered, immutable list of (type, optional name)
//! fields that a tuple follows. Tuple storage, page layout and query
//! operators all consume it read-only.
//!
//! # Design Principles
//!
//! - At least one field per descriptor
//! - Field order is the tuple's index space
//! - Size is the sum of fixed field widths
//! - Equality and hashing cover every (type, name) pair, in order
//! - No mutation after construction

mod config;
mod descriptor;
mod errors;
mod types;

pub use config::{TypeConfig, DEFAULT_STRING_LEN};
pub use descriptor::{TdItem, TupleDesc};
pub use errors::{ErrorSeverity, SchemaError, SchemaErrorCode, SchemaResult};
pub use types::{FieldType, INT_WIDTH, STRING_PREFIX_WIDTH};
