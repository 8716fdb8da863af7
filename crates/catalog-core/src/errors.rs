use catalog_core_types::{RequestContext, RequestId, TraceId};
use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// depending on the shape of the domain error enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    InvalidReference,
    NotFound,
    AlreadyExists,

    // Association
    DuplicateAssociation,
    InvariantViolation,

    // Encoding of read projections
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidReference => "ERR_INVALID_REFERENCE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::DuplicateAssociation => "ERR_DUPLICATE_ASSOCIATION",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    related_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            related_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the id of the aggregate the operation ran on
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the id of the aggregate on the other side of an association
    pub fn with_related_id(mut self, id: impl Into<String>) -> Self {
        self.related_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Stamp the request and trace ids of the calling context
    pub fn with_context(self, ctx: &RequestContext) -> Self {
        let err = self.with_request_id(ctx.request_id.clone());
        match &ctx.trace_id {
            Some(trace_id) => err.with_trace_id(trace_id.clone()),
            None => err,
        }
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn related_id(&self) -> Option<&str> {
        self.related_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(related_id) = &self.related_id {
            write!(f, " (related_id: {})", related_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(trace_id) = &self.trace_id {
            write!(f, " (trace_id: {})", trace_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for catalog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    // ===== Lookup Errors =====
    #[error("Cluster not found: {cluster_id}")]
    ClusterNotFound { cluster_id: String },

    #[error("Command not found: {command_id}")]
    CommandNotFound { command_id: String },

    /// An aggregate with this id is already in the store
    #[error("Entity already exists: {entity_id}")]
    AlreadyExists { entity_id: String },

    // ===== Validation Errors =====
    /// A required descriptive field is blank
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// A file or tag reference could not be constructed
    #[error("Invalid {kind} reference: {reason}")]
    InvalidReference { kind: String, reason: String },

    // ===== Association Errors =====
    /// The command is already associated with the cluster
    #[error("A command with id {command_id} is already added to cluster {cluster_id}")]
    DuplicateAssociation {
        cluster_id: String,
        command_id: String,
    },

    /// A wholesale replacement list names the same command more than once
    #[error("List of commands to set on cluster {cluster_id} contains {command_id} more than once")]
    DuplicateCommandsInList {
        cluster_id: String,
        command_id: String,
    },

    // ===== Invariant Violations =====
    /// Cluster lists a command whose back-references do not include the cluster
    #[error("Cluster {cluster_id} lists command {command_id}, which has no back-reference")]
    MissingBackReference {
        cluster_id: String,
        command_id: String,
    },

    /// Command references a cluster that does not list it
    #[error("Command {command_id} references cluster {cluster_id}, which does not list it")]
    DanglingBackReference {
        cluster_id: String,
        command_id: String,
    },

    /// Cluster's command list holds the same command twice
    #[error("Cluster {cluster_id} lists command {command_id} more than once")]
    DuplicateCommandEntry {
        cluster_id: String,
        command_id: String,
    },

    #[error("Cluster {cluster_id} lists unknown command {command_id}")]
    UnknownCommandRef {
        cluster_id: String,
        command_id: String,
    },

    #[error("Command {command_id} references unknown cluster {cluster_id}")]
    UnknownClusterRef {
        cluster_id: String,
        command_id: String,
    },

    // ===== Encoding Errors =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<CatalogError> for ExError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ClusterNotFound { cluster_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(cluster_id)
                .with_message("Cluster not found"),

            CatalogError::CommandNotFound { command_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(command_id)
                .with_message("Command not found"),

            CatalogError::AlreadyExists { entity_id } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(entity_id)
                .with_message("Entity already exists"),

            CatalogError::InvalidField { field, reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid {}: {}", field, reason)),

            CatalogError::InvalidReference { kind, reason } => {
                ExError::new(ExErrorKind::InvalidReference)
                    .with_message(format!("Invalid {} reference: {}", kind, reason))
            }

            CatalogError::DuplicateAssociation {
                cluster_id,
                command_id,
            } => ExError::new(ExErrorKind::DuplicateAssociation)
                .with_op("add_command")
                .with_entity_id(cluster_id)
                .with_related_id(command_id)
                .with_message("Command is already added"),

            CatalogError::DuplicateCommandsInList {
                cluster_id,
                command_id,
            } => ExError::new(ExErrorKind::DuplicateAssociation)
                .with_op("replace_commands")
                .with_entity_id(cluster_id)
                .with_related_id(command_id)
                .with_message("List of commands to set cannot contain duplicates"),

            CatalogError::MissingBackReference {
                cluster_id,
                command_id,
            } => ExError::new(ExErrorKind::InvariantViolation)
                .with_entity_id(cluster_id)
                .with_related_id(command_id)
                .with_message("Command does not reference the cluster back"),

            CatalogError::DanglingBackReference {
                cluster_id,
                command_id,
            } => ExError::new(ExErrorKind::InvariantViolation)
                .with_entity_id(command_id)
                .with_related_id(cluster_id)
                .with_message("Cluster does not list the command"),

            CatalogError::DuplicateCommandEntry {
                cluster_id,
                command_id,
            } => ExError::new(ExErrorKind::InvariantViolation)
                .with_entity_id(cluster_id)
                .with_related_id(command_id)
                .with_message("Command listed more than once"),

            CatalogError::UnknownCommandRef {
                cluster_id,
                command_id,
            } => ExError::new(ExErrorKind::InvariantViolation)
                .with_entity_id(cluster_id)
                .with_related_id(command_id)
                .with_message("Cluster lists unknown command"),

            CatalogError::UnknownClusterRef {
                cluster_id,
                command_id,
            } => ExError::new(ExErrorKind::InvariantViolation)
                .with_entity_id(command_id)
                .with_related_id(cluster_id)
                .with_message("Command references unknown cluster"),

            CatalogError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization {
            message: err.to_string(),
        }
    }
}
