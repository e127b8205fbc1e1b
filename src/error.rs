use anyhow::anyhow;

pub type Result<T> = std::result::Result<T, LibError>;

/// Request-level failures. These abort validation before any check runs and
/// are surfaced to the caller directly, never as findings inside a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    InputTooLarge,
}

#[derive(Debug)]
pub struct LibError {
    pub kind: ErrorKind,
    pub code: &'static str,
    pub public: &'static str,
    pub source: anyhow::Error,
}

impl LibError {
    pub fn malformed(public: &'static str, source: anyhow::Error) -> Self {
        Self {
            kind: ErrorKind::MalformedInput,
            code: "malformed_input",
            public,
            source,
        }
    }

    pub fn too_large(public: &'static str, source: anyhow::Error) -> Self {
        Self {
            kind: ErrorKind::InputTooLarge,
            code: "input_too_large",
            public,
            source,
        }
    }

    pub fn message(public: &'static str) -> Self {
        Self::malformed(public, anyhow!(public))
    }
}

impl std::fmt::Display for LibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.public, self.code)
    }
}

impl std::error::Error for LibError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}
