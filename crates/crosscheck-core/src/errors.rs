use thiserror::Error;

/// Result type alias using XcError
pub type Result<T> = std::result::Result<T, XcError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in structured logs and in
/// test assertions. Backend invocation failures are *not* errors of the
/// run; they are carried as [`InvocationFailure`] values and only converted
/// to `XcError` when logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XcErrorKind {
    // Input
    InvalidInput,
    /// A scenario row could not be mapped onto its request
    InvalidScenario,
    /// Configuration file or flag is unusable
    Config,

    // Invocation
    Transport,
    Timeout,
    HttpStatus,
    MalformedResponse,
    Serialization,

    // Integration/IO
    Io,

    // Internal
    /// A category state transition was attempted out of order
    InvalidState,
    Internal,
}

impl XcErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            XcErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            XcErrorKind::InvalidScenario => "ERR_INVALID_SCENARIO",
            XcErrorKind::Config => "ERR_CONFIG",
            XcErrorKind::Transport => "ERR_TRANSPORT",
            XcErrorKind::Timeout => "ERR_TIMEOUT",
            XcErrorKind::HttpStatus => "ERR_HTTP_STATUS",
            XcErrorKind::MalformedResponse => "ERR_MALFORMED_RESPONSE",
            XcErrorKind::Serialization => "ERR_SERIALIZATION",
            XcErrorKind::Io => "ERR_IO",
            XcErrorKind::InvalidState => "ERR_INVALID_STATE",
            XcErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus enough context
/// (operation, category, scenario file line) to point a human at the cause.
#[derive(Debug, Clone)]
pub struct XcError {
    kind: XcErrorKind,
    op: Option<String>,
    category: Option<String>,
    line: Option<usize>,
    message: String,
}

impl XcError {
    /// Create a new error with the specified kind
    pub fn new(kind: XcErrorKind) -> Self {
        Self {
            kind,
            op: None,
            category: None,
            line: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add category context
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a 1-based scenario file line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> XcErrorKind {
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

    /// Get the category context, if any
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Get the scenario line context, if any
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for XcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(category) = &self.category {
            write!(f, " (category: {})", category)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for XcError {}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> XcError {
    XcError::new(XcErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a configuration error
pub fn config_error(reason: impl Into<String>) -> XcError {
    XcError::new(XcErrorKind::Config)
        .with_op("load_config")
        .with_message(reason)
}

/// Create a scenario row error
pub fn scenario_error(source: &str, line: usize, reason: impl Into<String>) -> XcError {
    XcError::new(XcErrorKind::InvalidScenario)
        .with_op("load_scenarios")
        .with_line(line)
        .with_message(format!("{}: {}", source, reason.into()))
}

// ========== End Error Facility ==========

/// One backend did not return a usable response
///
/// Returned as data from [`crate::invoke::Backend::send`]; a failure on one
/// side never prevents the other side from being invoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationFailure {
    /// Connection refused, DNS failure, TLS failure
    #[error("{backend}: transport error: {message}")]
    Transport { backend: String, message: String },

    /// The transport timeout elapsed before a response arrived
    #[error("{backend}: request timed out: {message}")]
    Timeout { backend: String, message: String },

    /// The backend answered with a non-success status
    #[error("{backend}: HTTP status {status}: {message}")]
    HttpStatus {
        backend: String,
        status: u16,
        message: String,
    },

    /// The body could not be decoded into the response contract
    #[error("{backend}: malformed response: {message}")]
    Malformed { backend: String, message: String },

    /// The request could not be encoded
    #[error("{backend}: request could not be serialized: {message}")]
    Serialization { backend: String, message: String },
}

impl InvocationFailure {
    /// Label of the backend that failed
    pub fn backend(&self) -> &str {
        match self {
            InvocationFailure::Transport { backend, .. }
            | InvocationFailure::Timeout { backend, .. }
            | InvocationFailure::HttpStatus { backend, .. }
            | InvocationFailure::Malformed { backend, .. }
            | InvocationFailure::Serialization { backend, .. } => backend,
        }
    }

    /// Error kind this failure is classified as
    pub fn kind(&self) -> XcErrorKind {
        match self {
            InvocationFailure::Transport { .. } => XcErrorKind::Transport,
            InvocationFailure::Timeout { .. } => XcErrorKind::Timeout,
            InvocationFailure::HttpStatus { .. } => XcErrorKind::HttpStatus,
            InvocationFailure::Malformed { .. } => XcErrorKind::MalformedResponse,
            InvocationFailure::Serialization { .. } => XcErrorKind::Serialization,
        }
    }
}

/// Conversion from InvocationFailure to XcError, used when logging
impl From<InvocationFailure> for XcError {
    fn from(failure: InvocationFailure) -> Self {
        XcError::new(failure.kind())
            .with_op("backend_send")
            .with_message(failure.to_string())
    }
}

impl From<serde_json::Error> for XcError {
    fn from(err: serde_json::Error) -> Self {
        XcError::new(XcErrorKind::Serialization).with_message(err.to_string())
    }
}
