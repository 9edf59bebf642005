//! Field-level validation responses.

use std::collections::BTreeMap;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use cartkit_app::domain::validation::FieldErrors;

/// Validation failure body: one message per offending field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidationErrorResponse {
    pub errors: BTreeMap<String, String>,
}

/// Render `errors` as the response body and return the status to send with it.
pub(crate) fn render_field_errors(res: &mut Response, errors: FieldErrors) -> StatusCode {
    res.render(Json(ValidationErrorResponse {
        errors: errors.into_inner(),
    }));

    StatusCode::BAD_REQUEST
}
