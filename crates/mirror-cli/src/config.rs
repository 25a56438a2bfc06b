use mirror_codegen::Mode;

/// Configuration for Mirror CLI operations
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Mode applied to every record, overriding the schema file
    pub mode: Option<Mode>,

    /// Fail on references to records the schema file does not declare
    pub strict_references: bool,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mode override
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Enable or disable strict reference checking
    pub fn strict_references(mut self, strict: bool) -> Self {
        self.strict_references = strict;
        self
    }
}
