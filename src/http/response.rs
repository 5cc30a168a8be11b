use crate::account_actor::AccountError;
use crate::model::{Response, ResponseStatus};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as HttpResponse};
use axum::Json;

fn http_status(status: ResponseStatus) -> StatusCode {
    match status {
        ResponseStatus::Created => StatusCode::CREATED,
        ResponseStatus::Ok => StatusCode::OK,
        ResponseStatus::BadRequest => StatusCode::BAD_REQUEST,
        ResponseStatus::NotFound => StatusCode::NOT_FOUND,
        ResponseStatus::PreconditionFailed => StatusCode::EXPECTATION_FAILED,
        ResponseStatus::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> HttpResponse {
        (http_status(self.status_code), Json(self)).into_response()
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> HttpResponse {
        let status = match &self {
            AccountError::NotFound(_) => ResponseStatus::NotFound,
            AccountError::AlreadyExists(_) | AccountError::ValidationError(_) => {
                ResponseStatus::BadRequest
            }
            AccountError::ActorCommunicationError(_) => ResponseStatus::InternalError,
        };
        Response::new(status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_matches_response_code() {
        for status in [
            ResponseStatus::Created,
            ResponseStatus::Ok,
            ResponseStatus::BadRequest,
            ResponseStatus::NotFound,
            ResponseStatus::PreconditionFailed,
            ResponseStatus::InternalError,
        ] {
            assert_eq!(http_status(status).as_u16(), status.as_u16());
        }
    }

    #[test]
    fn test_account_errors_map_to_status() {
        let response = AccountError::NotFound("a@x.io".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AccountError::AlreadyExists("a@x.io".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AccountError::ActorCommunicationError("closed".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
