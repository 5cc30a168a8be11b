//! Static mapping from (operation, outcome) to the local [`Response`] contract.
//!
//! Each operation owns one [`ResponseRow`]. A row always carries an internal-error entry and
//! carries an entry for a failure kind only if the operation recognises that kind. The
//! mapping is pure: the same inputs always produce the same response.

use super::outcome::{FailureKind, OperationOutcome};
use crate::model::{Response, ResponseStatus};
use std::fmt;

/// The five order operations exposed by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    FetchAll,
    FetchOne,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Create,
        Operation::FetchAll,
        Operation::FetchOne,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::FetchAll => "fetch_all",
            Self::FetchOne => "fetch",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Responses one operation can produce.
#[derive(Debug)]
pub struct ResponseRow {
    /// `None` for the fetch operations, which return data instead of a `Response`.
    pub success: Option<Response>,
    pub bad_request: Option<Response>,
    pub not_found: Option<Response>,
    pub precondition_failed: Option<Response>,
    pub internal_error: Response,
}

impl ResponseRow {
    fn for_kind(&self, kind: FailureKind) -> Option<&Response> {
        match kind {
            FailureKind::BadRequest => self.bad_request.as_ref(),
            FailureKind::NotFound => self.not_found.as_ref(),
            FailureKind::PreconditionFailed => self.precondition_failed.as_ref(),
        }
    }
}

static CREATE: ResponseRow = ResponseRow {
    success: Some(Response::fixed(ResponseStatus::Created, "Order created successfully")),
    bad_request: Some(Response::fixed(
        ResponseStatus::BadRequest,
        "Order placement failed: Invalid order details.",
    )),
    not_found: None,
    precondition_failed: None,
    internal_error: Response::fixed(
        ResponseStatus::InternalError,
        "Order could not be placed due to an internal error.",
    ),
};

static FETCH_ALL: ResponseRow = ResponseRow {
    success: None,
    bad_request: None,
    not_found: None,
    precondition_failed: None,
    internal_error: Response::fixed(
        ResponseStatus::InternalError,
        "Fetch All operation failed. Please try again or contact Dev team",
    ),
};

static FETCH_ONE: ResponseRow = ResponseRow {
    success: None,
    bad_request: None,
    not_found: Some(Response::fixed(
        ResponseStatus::NotFound,
        "Order not found for the given ID.",
    )),
    precondition_failed: None,
    internal_error: Response::fixed(
        ResponseStatus::InternalError,
        "Fetch operation failed. Please try again or contact Dev team",
    ),
};

static UPDATE: ResponseRow = ResponseRow {
    success: Some(Response::fixed(ResponseStatus::Ok, "Order updated successfully")),
    bad_request: None,
    not_found: Some(Response::fixed(ResponseStatus::NotFound, "Order to update not found.")),
    precondition_failed: None,
    internal_error: Response::fixed(
        ResponseStatus::InternalError,
        "Update operation failed. Please try again or contact Dev team",
    ),
};

static DELETE: ResponseRow = ResponseRow {
    success: Some(Response::fixed(ResponseStatus::Ok, "Order deleted successfully")),
    bad_request: None,
    not_found: Some(Response::fixed(ResponseStatus::NotFound, "Order to delete not found.")),
    precondition_failed: Some(Response::fixed(
        ResponseStatus::PreconditionFailed,
        "Delete operation failed. Please try again or contact the Dev team.",
    )),
    internal_error: Response::fixed(
        ResponseStatus::InternalError,
        "Delete operation failed. Please try again or contact Dev team",
    ),
};

/// Returns the response row of `operation`.
pub fn row(operation: Operation) -> &'static ResponseRow {
    match operation {
        Operation::Create => &CREATE,
        Operation::FetchAll => &FETCH_ALL,
        Operation::FetchOne => &FETCH_ONE,
        Operation::Update => &UPDATE,
        Operation::Delete => &DELETE,
    }
}

/// Whether `operation` has a dedicated response for `kind`.
pub fn recognizes(operation: Operation, kind: FailureKind) -> bool {
    row(operation).for_kind(kind).is_some()
}

/// Narrows an outcome to what `operation` recognises: unknown kinds become `UnknownFailure`.
pub fn narrow<T>(operation: Operation, outcome: OperationOutcome<T>) -> OperationOutcome<T> {
    match outcome {
        OperationOutcome::KnownFailure(kind) if !recognizes(operation, kind) => {
            OperationOutcome::UnknownFailure
        }
        other => other,
    }
}

/// Maps an outcome to the local response.
///
/// Success maps to the row's default success entry (the internal-error entry for the
/// fetch operations, which have none: their success carries data, not a `Response`).
pub fn translate<T>(operation: Operation, outcome: &OperationOutcome<T>) -> Response {
    let row = row(operation);
    match outcome {
        OperationOutcome::Success(_) => row
            .success
            .clone()
            .unwrap_or_else(|| row.internal_error.clone()),
        OperationOutcome::KnownFailure(kind) => row
            .for_kind(*kind)
            .cloned()
            .unwrap_or_else(|| row.internal_error.clone()),
        OperationOutcome::UnknownFailure => row.internal_error.clone(),
    }
}
