use axum::{extract::State, Json};

use super::schema::TalentRequestBody;
use crate::{
    app::{
        api::schema::SubmissionResponse, delivery::deliver, error::AppResult,
        extractor::FormJson, AppState,
    },
    domain::talent::TalentSubmission,
};

#[tracing::instrument(name = "Submit talent pool application", skip(state, body))]
pub async fn submit_talent(
    State(state): State<AppState>,
    FormJson(body): FormJson<TalentRequestBody>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = TalentSubmission::try_from(body)?;
    if let Some(resume) = &submission.resume {
        tracing::debug!(
            filename = %resume.filename,
            size_bytes = resume.size_bytes(),
            "application includes a resume"
        );
    }
    let receipt = deliver(&state, &submission).await?;

    Ok(Json(SubmissionResponse::delivered(
        "Thank you for joining our talent pool! We'll reach out when a matching opportunity opens up.",
        receipt,
    )))
}
