use axum::Router;

use crate::app::AppState;

pub mod contact;
pub mod health;
pub mod quote;
pub mod schema;
pub mod survey;
pub mod talent;

pub fn router() -> Router<AppState> {
    let forms = contact::router()
        .merge(quote::router())
        .merge(talent::router())
        .merge(survey::router());

    health::router().nest("/api", forms)
}
