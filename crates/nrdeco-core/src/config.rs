//! Configuration types for generation.

/// What the wrapper does with interface methods that take no `context.Context`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UntracedMethods {
    /// No wrapper method is emitted; the embedded interface still promotes it.
    #[default]
    Omit,
    /// An explicit forwarding method without a segment is emitted.
    Forward,
}

/// Configuration for a generation run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Version embedded in the generated header
    pub(crate) version: String,
    /// Handling of methods without a capability parameter
    pub(crate) untraced: UntracedMethods,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            untraced: UntracedMethods::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version string written into generated files.
    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = value.into();
        self
    }

    /// Set the policy for methods without a capability parameter.
    pub fn untraced(mut self, value: UntracedMethods) -> Self {
        self.untraced = value;
        self
    }
}
