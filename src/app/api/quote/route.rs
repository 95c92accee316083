use axum::{extract::State, Json};

use super::schema::QuoteRequestBody;
use crate::{
    app::{
        api::schema::SubmissionResponse, delivery::deliver, error::AppResult,
        extractor::FormJson, AppState,
    },
    domain::quote::QuoteSubmission,
};

#[tracing::instrument(name = "Submit quote request", skip(state, body))]
pub async fn submit_quote(
    State(state): State<AppState>,
    FormJson(body): FormJson<QuoteRequestBody>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = QuoteSubmission::try_from(body)?;
    let receipt = deliver(&state, &submission).await?;

    Ok(Json(SubmissionResponse::delivered(
        "Thank you! Your quote request has been received. We'll be in touch shortly.",
        receipt,
    )))
}
