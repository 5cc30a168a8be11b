use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Status codes of the local response contract.
///
/// Serialised as the numeric string the orders service uses (`"201"`, `"404"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "201")]
    Created,
    #[serde(rename = "200")]
    Ok,
    #[serde(rename = "400")]
    BadRequest,
    #[serde(rename = "404")]
    NotFound,
    #[serde(rename = "417")]
    PreconditionFailed,
    #[serde(rename = "500")]
    InternalError,
}

impl ResponseStatus {
    /// Numeric HTTP status carrying the same code.
    pub fn as_u16(self) -> u16 {
        match self {
            Self::Created => 201,
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::PreconditionFailed => 417,
            Self::InternalError => 500,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Created | Self::Ok)
    }
}

/// Status code plus human-readable message returned for every mutating call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: ResponseStatus,
    pub status_msg: Cow<'static, str>,
}

impl Response {
    /// Builds a response from a fixed message. Used by the static response tables.
    pub const fn fixed(status_code: ResponseStatus, status_msg: &'static str) -> Self {
        Self {
            status_code,
            status_msg: Cow::Borrowed(status_msg),
        }
    }

    pub fn new(status_code: ResponseStatus, status_msg: impl Into<String>) -> Self {
        Self {
            status_code,
            status_msg: Cow::Owned(status_msg.into()),
        }
    }
}
