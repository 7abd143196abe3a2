//! Field types and their fixed byte widths
//!
//! Supported types:
//! - int: 32-bit signed integer, 4 bytes
//! - string: fixed-length string, 4-byte length prefix plus `max_len` bytes
//!
//! Every type has a fixed width, so every tuple of a given descriptor has
//! the same serialized size.

use std::fmt;

use super::config::TypeConfig;

/// Width of an int field in bytes.
pub const INT_WIDTH: usize = 4;

/// Width of the length prefix stored ahead of string payloads.
pub const STRING_PREFIX_WIDTH: usize = 4;

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// 32-bit signed integer
    Int,
    /// Fixed-length string
    String {
        /// Maximum payload length in bytes
        max_len: usize,
    },
}

impl FieldType {
    /// String type with the default payload length
    pub fn string() -> Self {
        Self::string_with(&TypeConfig::default())
    }

    /// String type with the payload length from `config`
    pub fn string_with(config: &TypeConfig) -> Self {
        FieldType::String {
            max_len: config.default_string_len,
        }
    }

    /// Number of bytes this type occupies in a serialized tuple
    pub fn byte_width(&self) -> usize {
        match self {
            FieldType::Int => INT_WIDTH,
            FieldType::String { max_len } => max_len + STRING_PREFIX_WIDTH,
        }
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::String { .. } => "string",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Int => write!(f, "int"),
            FieldType::String { max_len } => write!(f, "string({})", max_len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_widths() {
        assert_eq!(FieldType::Int.byte_width(), 4);
        assert_eq!(FieldType::string().byte_width(), 132);
        assert_eq!(FieldType::String { max_len: 0 }.byte_width(), 4);
    }

    #[test]
    fn test_string_with_config() {
        let config = TypeConfig::with_string_len(16);
        let ty = FieldType::string_with(&config);
        assert_eq!(ty, FieldType::String { max_len: 16 });
        assert_eq!(ty.byte_width(), 20);
    }

    #[test]
    fn test_string_lengths_distinguish_types() {
        assert_ne!(
            FieldType::String { max_len: 8 },
            FieldType::String { max_len: 16 }
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(FieldType::Int.type_name(), "int");
        assert_eq!(FieldType::string().type_name(), "string");
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldType::Int.to_string(), "int");
        assert_eq!(FieldType::String { max_len: 10 }.to_string(), "string(10)");
    }
}
