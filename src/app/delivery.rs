use anyhow::Context;

use super::{
    error::{AppError, AppResult},
    AppState,
};
use crate::{domain::email::EmailAddress, notification::Notify};

/// Where the submitter's confirmation ended up.
pub struct Receipt {
    pub test_mode: bool,
    pub recipient: EmailAddress,
}

/// Sends the company notification, then the confirmation.
///
/// A failed company email fails the request and the confirmation is skipped. A
/// failed confirmation is only logged.
#[tracing::instrument(
    name = "Deliver form notifications",
    skip(state, submission),
    fields(form = S::FORM, submitter = %submission.submitter())
)]
pub async fn deliver<S: Notify>(state: &AppState, submission: &S) -> AppResult<Receipt> {
    let pair = submission
        .notifications(&state.brands)
        .context("Failed to render the notification emails.")?;
    let policy = &state.recipients;

    let company_recipient = policy.resolve(&pair.company.to);
    if policy.testing_mode() {
        tracing::debug!(
            intended = %pair.company.to,
            actual = %company_recipient,
            "testing mode: redirecting company email"
        );
    }
    state
        .email_client
        .send_email(company_recipient, &pair.company.email)
        .await
        .with_context(|| format!("Failed to send the {} email to the company.", S::FORM))
        .map_err(|source| AppError::Delivery {
            test_mode: policy.testing_mode(),
            source,
        })?;

    let confirmation_recipient = policy.resolve(&pair.confirmation.to);
    if let Err(e) = state
        .email_client
        .send_email(confirmation_recipient, &pair.confirmation.email)
        .await
    {
        tracing::warn!(
            detail = %e,
            "Failed to send the confirmation email. The submission itself was delivered."
        );
    }

    Ok(Receipt {
        test_mode: policy.testing_mode(),
        recipient: confirmation_recipient.clone(),
    })
}
