use axum::{extract::State, Json};

use super::schema::SurveyRequestBody;
use crate::{
    app::{
        api::schema::SubmissionResponse, delivery::deliver, error::AppResult,
        extractor::FormJson, AppState,
    },
    domain::survey::SurveySubmission,
};

#[tracing::instrument(name = "Submit solar survey request", skip(state, body))]
pub async fn submit_survey(
    State(state): State<AppState>,
    FormJson(body): FormJson<SurveyRequestBody>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SurveySubmission::try_from(body)?;
    let receipt = deliver(&state, &submission).await?;

    Ok(Json(SubmissionResponse::delivered(
        "Thank you! Your solar survey request has been received. We'll call you to confirm the appointment.",
        receipt,
    )))
}
