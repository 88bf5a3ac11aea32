//! Error facility for scholar-control
//!
//! A single structured error type crosses every boundary of the persistence
//! layer. Storage failures, constraint violations, and validation failures
//! are all expressed as an [`ScError`] carrying a stable kind, the entity
//! (table) involved, and the operation that failed.

/// Result type alias using ScError
pub type Result<T> = std::result::Result<T, ScError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic error
/// handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScErrorKind {
    /// Caller handed the repository something unusable (e.g. empty update)
    InvalidInput,
    /// A single-record fetch matched more than one row
    AmbiguousMatch,
    /// A schema CHECK, UNIQUE, or FOREIGN KEY constraint was violated
    ConstraintViolation,
    /// The storage engine reported a failure that is not a constraint
    Persistence,
    /// Migration apply/revert failed
    Migration,
    /// Serialization of a structured column failed
    Serialization,
    /// Filesystem/environment failure outside the storage engine
    Io,
    /// Internal invariant broken
    Internal,
}

impl ScErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ScErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ScErrorKind::AmbiguousMatch => "ERR_AMBIGUOUS_MATCH",
            ScErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ScErrorKind::Persistence => "ERR_PERSISTENCE",
            ScErrorKind::Migration => "ERR_MIGRATION",
            ScErrorKind::Serialization => "ERR_SERIALIZATION",
            ScErrorKind::Io => "ERR_IO",
            ScErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Built with a fluent API: classification first, then whatever context the
/// call site has.
///
/// ```
/// use scholar_core::errors::{ScError, ScErrorKind};
///
/// let err = ScError::new(ScErrorKind::Persistence)
///     .with_entity("students")
///     .with_op("get_all")
///     .with_message("database is locked");
/// assert_eq!(err.code(), "ERR_PERSISTENCE");
/// ```
#[derive(Debug, Clone)]
pub struct ScError {
    kind: ScErrorKind,
    op: Option<String>,
    entity: Option<String>,
    message: String,
    source: Option<Box<ScError>>,
}

impl ScError {
    /// Create a new error with the specified kind
    pub fn new(kind: ScErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the entity (table) name the operation was acting on
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ScError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ScErrorKind {
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

    /// Get the entity name, if any
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ScError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ScError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(entity) = &self.entity {
            write!(f, " {}", entity)?;
        }
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ScError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
