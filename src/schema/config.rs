//! Field type configuration
//!
//! Read-only settings consulted when building field types. There is no
//! file or environment loading; callers construct the struct directly.

/// Default payload length, in bytes, of a fixed-length string field.
pub const DEFAULT_STRING_LEN: usize = 128;

/// Configuration for building [`FieldType`](super::FieldType) values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeConfig {
    /// Payload length of string fields built with `FieldType::string_with`.
    pub default_string_len: usize,
}

impl Default for TypeConfig {
    fn default() -> Self {
        Self {
            default_string_len: DEFAULT_STRING_LEN,
        }
    }
}

impl TypeConfig {
    /// Create config with a custom string payload length.
    pub fn with_string_len(default_string_len: usize) -> Self {
        Self {
            default_string_len,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TypeConfig::default();
        assert_eq!(config.default_string_len, 128);
    }

    #[test]
    fn test_config_custom_string_len() {
        let config = TypeConfig::with_string_len(32);
        assert_eq!(config.default_string_len, 32);
    }
}
