//! Error facility for Loam
//!
//! Provides a structured error type with a stable kind taxonomy and
//! builder-style context. Underlying library errors (rusqlite, serde) are
//! wrapped with their original messages rather than remapped.

/// Result type alias using LoamError
pub type Result<T> = std::result::Result<T, LoamError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoamErrorKind {
    // Declaration
    InvalidInput,
    MissingPrimaryKey,
    DuplicatePrimaryKey,
    DuplicateColumn,
    DuplicateTable,

    // Session / seed validation
    UnknownTable,
    UnknownColumn,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl LoamErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LoamErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            LoamErrorKind::MissingPrimaryKey => "ERR_MISSING_PRIMARY_KEY",
            LoamErrorKind::DuplicatePrimaryKey => "ERR_DUPLICATE_PRIMARY_KEY",
            LoamErrorKind::DuplicateColumn => "ERR_DUPLICATE_COLUMN",
            LoamErrorKind::DuplicateTable => "ERR_DUPLICATE_TABLE",
            LoamErrorKind::UnknownTable => "ERR_UNKNOWN_TABLE",
            LoamErrorKind::UnknownColumn => "ERR_UNKNOWN_COLUMN",
            LoamErrorKind::NotFound => "ERR_NOT_FOUND",
            LoamErrorKind::Io => "ERR_IO",
            LoamErrorKind::Serialization => "ERR_SERIALIZATION",
            LoamErrorKind::Persistence => "ERR_PERSISTENCE",
            LoamErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for classification plus optional operation, table, and
/// column context for debugging.
#[derive(Debug, Clone)]
pub struct LoamError {
    kind: LoamErrorKind,
    op: Option<String>,
    table: Option<String>,
    column: Option<String>,
    message: String,
    source: Option<Box<LoamError>>,
}

impl LoamError {
    /// Create a new error with the specified kind
    pub fn new(kind: LoamErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            column: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table name context
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add column name context
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: LoamError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> LoamErrorKind {
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

    /// Get the table name context, if any
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Get the column name context, if any
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&LoamError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for LoamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = &self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(column) = &self.column {
            write!(f, " (column: {})", column)?;
        }
        Ok(())
    }
}

impl std::error::Error for LoamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(LoamErrorKind::InvalidInput.code(), "ERR_INVALID_INPUT");
        assert_eq!(LoamErrorKind::Persistence.code(), "ERR_PERSISTENCE");
        assert_eq!(LoamErrorKind::UnknownColumn.code(), "ERR_UNKNOWN_COLUMN");
    }

    #[test]
    fn test_builder_context() {
        let err = LoamError::new(LoamErrorKind::UnknownColumn)
            .with_op("session_add")
            .with_table("games")
            .with_column("publisher")
            .with_message("column not declared");

        assert_eq!(err.kind(), LoamErrorKind::UnknownColumn);
        assert_eq!(err.op(), Some("session_add"));
        assert_eq!(err.table(), Some("games"));
        assert_eq!(err.column(), Some("publisher"));

        let rendered = err.to_string();
        assert!(rendered.contains("ERR_UNKNOWN_COLUMN"));
        assert!(rendered.contains("games"));
    }
}
