//! Error handling and result types for UnrolledList operations.
//!
//! Every fallible operation reports an [`UnrolledListError`]. Callers that only
//! care about the cause can branch on [`UnrolledListError::kind`], which groups
//! variants into the three classes the list distinguishes: a bad position, a
//! failed allocation, and an internal consistency failure.

/// Error type for unrolled list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnrolledListError {
    /// A position argument was outside the valid range for the operation.
    IndexOutOfRange(String),
    /// Invalid node capacity specified.
    InvalidCapacity(String),
    /// A node or node slot could not be allocated.
    AllocationError(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Chain links refer to a node that does not exist.
    CorruptedList(String),
}

/// Coarse classification of an [`UnrolledListError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Memory for a node could not be obtained.
    NoMemory = 0,
    /// A position was out of range.
    OutOfRange = 1,
    /// The structure or its arguments are inconsistent.
    DataError = 2,
}

impl UnrolledListError {
    /// Create an IndexOutOfRange error for `index` against a list of `len` elements
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange(format!(
            "Subscript {} is out of range for list of length {}",
            index, len
        ))
    }

    /// Create an IndexOutOfRange error for an access that needs at least one element
    pub fn empty_list(operation: &str) -> Self {
        Self::IndexOutOfRange(format!("Cannot {} on an empty list", operation))
    }

    /// Create an InvalidCapacity error with context
    pub fn invalid_capacity(capacity: usize, min_required: usize) -> Self {
        Self::InvalidCapacity(format!(
            "Capacity {} is invalid (minimum required: {})",
            capacity, min_required
        ))
    }

    /// Create an AllocationError with context
    pub fn allocation_error(resource: &str, reason: &str) -> Self {
        Self::AllocationError(format!("Failed to allocate {}: {}", resource, reason))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a CorruptedList error naming the missing node
    pub fn corrupted_list(node_id: u32, details: &str) -> Self {
        Self::CorruptedList(format!("node {}: {}", node_id, details))
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange(_) => ErrorKind::OutOfRange,
            Self::AllocationError(_) => ErrorKind::NoMemory,
            Self::InvalidCapacity(_)
            | Self::DataIntegrityError(_)
            | Self::CorruptedList(_) => ErrorKind::DataError,
        }
    }

    /// Numeric error code, stable across releases.
    pub fn code(&self) -> i32 {
        self.kind() as i32
    }

    /// Human-readable description without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::IndexOutOfRange(msg)
            | Self::InvalidCapacity(msg)
            | Self::AllocationError(msg)
            | Self::DataIntegrityError(msg)
            | Self::CorruptedList(msg) => msg,
        }
    }

    /// Check if this error is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange(_))
    }

    /// Check if this error is a capacity error
    pub fn is_capacity_error(&self) -> bool {
        matches!(self, Self::InvalidCapacity(_))
    }
}

impl std::fmt::Display for UnrolledListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnrolledListError::IndexOutOfRange(msg) => write!(f, "Index out of range: {}", msg),
            UnrolledListError::InvalidCapacity(msg) => write!(f, "Invalid capacity: {}", msg),
            UnrolledListError::AllocationError(msg) => write!(f, "Allocation error: {}", msg),
            UnrolledListError::DataIntegrityError(msg) => {
                write!(f, "Data integrity error: {}", msg)
            }
            UnrolledListError::CorruptedList(msg) => write!(f, "Corrupted list: {}", msg),
        }
    }
}

impl std::error::Error for UnrolledListError {}

impl From<std::collections::TryReserveError> for UnrolledListError {
    fn from(err: std::collections::TryReserveError) -> Self {
        Self::allocation_error("node storage", &err.to_string())
    }
}

/// Public result type for list operations that may fail
pub type ListResult<T> = Result<T, UnrolledListError>;

/// Result type for element access
pub type AccessResult<T> = Result<T, UnrolledListError>;

/// Result type for list modification operations
pub type ModifyResult<T> = Result<T, UnrolledListError>;

/// Result type for list construction and validation
pub type InitResult<T> = Result<T, UnrolledListError>;

/// Result extension trait for improved error handling
pub trait ListResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> ListResult<T>;

    /// Prefix the error message with the failing operation's name
    fn with_operation(self, operation: &str) -> ListResult<T>;

    /// Log error and continue with default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> ListResultExt<T> for Result<T, UnrolledListError> {
    fn with_context(self, context: &str) -> ListResult<T> {
        self.map_err(|e| match e {
            UnrolledListError::IndexOutOfRange(msg) => {
                UnrolledListError::IndexOutOfRange(format!("{}: {}", context, msg))
            }
            UnrolledListError::InvalidCapacity(msg) => {
                UnrolledListError::InvalidCapacity(format!("{}: {}", context, msg))
            }
            UnrolledListError::AllocationError(msg) => {
                UnrolledListError::AllocationError(format!("{}: {}", context, msg))
            }
            UnrolledListError::DataIntegrityError(msg) => {
                UnrolledListError::data_integrity(context, &msg)
            }
            UnrolledListError::CorruptedList(msg) => {
                UnrolledListError::CorruptedList(format!("{}: {}", context, msg))
            }
        })
    }

    fn with_operation(self, operation: &str) -> ListResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "unrolled list operation failed, using default");
                T::default()
            }
        }
    }
}
