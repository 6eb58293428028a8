//! Output configuration for jackc

/// Default cap on accepted source size: 10 MiB.
pub const DEFAULT_MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Spaces of indentation per open tag when printing the trace (0 = flat)
    pub indent_width: usize,
    /// Largest source file, in bytes, the CLI will read
    pub max_source_size: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent_width: 0,
            max_source_size: DEFAULT_MAX_SOURCE_SIZE,
        }
    }
}

impl OutputConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the maximum source size
    pub fn with_max_source_size(mut self, bytes: u64) -> Self {
        self.max_source_size = bytes;
        self
    }
}
