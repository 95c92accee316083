use axum::{routing::post, Router};

use crate::app::AppState;

pub mod route;
pub mod schema;

pub fn router() -> Router<AppState> {
    Router::new().route("/solar-survey", post(route::submit_survey))
}
