use axum::{extract::State, Json};

use super::schema::ContactRequestBody;
use crate::{
    app::{
        api::schema::SubmissionResponse, delivery::deliver, error::AppResult,
        extractor::FormJson, AppState,
    },
    domain::contact::ContactSubmission,
};

#[tracing::instrument(name = "Submit contact form", skip(state, body))]
pub async fn submit_contact(
    State(state): State<AppState>,
    FormJson(body): FormJson<ContactRequestBody>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = ContactSubmission::try_from(body)?;
    let receipt = deliver(&state, &submission).await?;

    Ok(Json(SubmissionResponse::delivered(
        "Thank you for your message! We'll get back to you soon.",
        receipt,
    )))
}
