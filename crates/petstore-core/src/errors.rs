//! Error facility for the petstore workspace
//!
//! A single structured error type with a stable kind taxonomy. Store and
//! server code builds errors through the `with_*` context helpers and
//! propagates them unmodified; there is no local recovery anywhere in the
//! system.

/// Result type alias using PetError
pub type Result<T> = std::result::Result<T, PetError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling
/// and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl PetErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            PetErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            PetErrorKind::NotFound => "ERR_NOT_FOUND",
            PetErrorKind::Io => "ERR_IO",
            PetErrorKind::Serialization => "ERR_SERIALIZATION",
            PetErrorKind::Persistence => "ERR_PERSISTENCE",
            PetErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the kind classification plus optional operation context and a
/// human-readable message.
#[derive(Debug, Clone)]
pub struct PetError {
    kind: PetErrorKind,
    op: Option<String>,
    message: String,
}

impl PetError {
    /// Create a new error with the specified kind
    pub fn new(kind: PetErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> PetErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for PetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for PetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_are_stable() {
        assert_eq!(PetErrorKind::Persistence.code(), "ERR_PERSISTENCE");
        assert_eq!(PetErrorKind::NotFound.code(), "ERR_NOT_FOUND");
        assert_eq!(PetErrorKind::Io.code(), "ERR_IO");
    }

    #[test]
    fn test_display_includes_op_and_message() {
        let err = PetError::new(PetErrorKind::Persistence)
            .with_op("insert")
            .with_message("disk full");

        let rendered = err.to_string();
        assert!(rendered.contains("ERR_PERSISTENCE"));
        assert!(rendered.contains("insert"));
        assert!(rendered.contains("disk full"));
    }

    #[test]
    fn test_kind_accessor() {
        let err = PetError::new(PetErrorKind::NotFound);
        assert_eq!(err.kind(), PetErrorKind::NotFound);
        assert!(err.op().is_none());
        assert!(err.message().is_empty());
    }
}
