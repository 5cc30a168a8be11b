//! Tagged result of a single call to the orders service.

/// Remote failures the orchestration layer knows how to explain to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The remote rejected the payload (HTTP 400).
    BadRequest,
    /// The addressed order does not exist (HTTP 404).
    NotFound,
    /// The remote refused the operation in the order's current state (HTTP 412 / 417).
    PreconditionFailed,
}

impl FailureKind {
    /// Classifies an HTTP status. `None` means the status carries no known meaning.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(Self::BadRequest),
            404 => Some(Self::NotFound),
            412 | 417 => Some(Self::PreconditionFailed),
            _ => None,
        }
    }
}

/// Outcome of exactly one remote call.
///
/// Transport errors, timeouts, undecodable fetch bodies and unclassified statuses all
/// collapse into `UnknownFailure`; callers never see raw transport errors.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutcome<T> {
    Success(T),
    KnownFailure(FailureKind),
    UnknownFailure,
}

impl<T> OperationOutcome<T> {
    /// Classifies a non-success HTTP status.
    pub fn from_failed_status(status: u16) -> Self {
        match FailureKind::from_status(status) {
            Some(kind) => Self::KnownFailure(kind),
            None => Self::UnknownFailure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::KnownFailure(FailureKind::BadRequest) => "bad_request",
            Self::KnownFailure(FailureKind::NotFound) => "not_found",
            Self::KnownFailure(FailureKind::PreconditionFailed) => "precondition_failed",
            Self::UnknownFailure => "unknown_failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(FailureKind::from_status(400), Some(FailureKind::BadRequest));
        assert_eq!(FailureKind::from_status(404), Some(FailureKind::NotFound));
        assert_eq!(FailureKind::from_status(412), Some(FailureKind::PreconditionFailed));
        assert_eq!(FailureKind::from_status(417), Some(FailureKind::PreconditionFailed));
        assert_eq!(FailureKind::from_status(409), None);
        assert_eq!(FailureKind::from_status(503), None);

        let outcome: OperationOutcome<()> = OperationOutcome::from_failed_status(500);
        assert_eq!(outcome, OperationOutcome::UnknownFailure);
    }
}
