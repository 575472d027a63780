/// Configuration shared by every point codec.
///
/// Only the formats a flag applies to look at it; the rest ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Indent JSON, XML and SOAP output for humans.
    pub pretty: bool,

    /// Behavior for malformed lines in the custom text format.
    /// - `false`: skip the line and log a warning
    /// - `true`: fail the whole decode, and require the `X;Y;Z` header
    pub strict_custom: bool,
}

impl Default for CodecConfig {
    /// Pretty output and lenient custom-format decoding.
    fn default() -> Self {
        Self {
            pretty: true,
            strict_custom: false,
        }
    }
}

impl CodecConfig {
    pub fn new(pretty: bool, strict_custom: bool) -> Self {
        Self { pretty, strict_custom }
    }

    /// Single-line output where the format allows it.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            strict_custom: false,
        }
    }

    /// Reject malformed custom-format lines instead of skipping them.
    pub fn strict() -> Self {
        Self {
            pretty: true,
            strict_custom: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = CodecConfig::default();
        assert!(config.pretty);
        assert!(!config.strict_custom);
    }

    #[test]
    fn test_named_configurations() {
        assert_eq!(CodecConfig::compact(), CodecConfig::new(false, false));
        assert_eq!(CodecConfig::strict(), CodecConfig::new(true, true));
    }

    #[test]
    fn test_clone_and_debug() {
        let config = CodecConfig::strict();
        let cloned = config.clone();
        assert_eq!(config, cloned);

        let debug_string = format!("{:?}", config);
        assert!(debug_string.contains("CodecConfig"));
    }
}
