use std::{io, net::SocketAddr};

use anyhow::{anyhow, Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method, Request},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Settings,
    domain::{brand::BrandDirectory, recipient::RecipientPolicy},
    email::EmailClient,
};

mod api;
mod delivery;
mod error;
mod extractor;

#[derive(Clone)]
pub struct AppState {
    email_client: EmailClient,
    recipients: RecipientPolicy,
    brands: BrandDirectory,
}

fn app_router() -> Router<AppState> {
    api::router()
}

pub struct App {
    listener: TcpListener,
    address: SocketAddr,
    state: AppState,
    cors: CorsLayer,
    max_body_bytes: usize,
}

impl App {
    pub async fn with(config: Settings) -> anyhow::Result<Self> {
        let email_client = EmailClient::new(
            config.email_client.base_url.clone(),
            config
                .email_client
                .sender()
                .map_err(|e| anyhow!("The sender email {}.", e))?,
            config.email_client.authorization_token.clone(),
            config.email_client.timeout(),
        );
        let recipients = config
            .email_client
            .recipient_policy()
            .map_err(|e| anyhow!("The verified recipient {}.", e))?;
        let brands = config
            .brands
            .directory()
            .map_err(|e| anyhow!("A brand inbox {}.", e))?;

        if recipients.testing_mode() {
            tracing::warn!("testing mode is on: every email goes to the verified recipient");
        }

        let cors = cors_layer(&config.application.allowed_origins)?;

        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await
        .context("The listener should be able to bind the address.")?;
        let address = listener
            .local_addr()
            .context("The listener should have a local address.")?;

        Ok(Self {
            listener,
            address,
            state: AppState {
                email_client,
                recipients,
                brands,
            },
            cors,
            max_body_bytes: config.application.max_body_bytes,
        })
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn port(&self) -> u16 {
        self.address.port()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router()
            .with_state(self.state)
            .layer(DefaultBodyLimit::max(self.max_body_bytes))
            .layer(self.cors)
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        axum::serve(self.listener, app.into_make_service()).await
    }
}

fn cors_layer(allowed_origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("{} is not a valid origin.", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]))
}
