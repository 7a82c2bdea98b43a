#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::extract::ConnectInfo;
use axum::routing::{get, post};
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tokio::sync::mpsc;
use tower::Layer;

use shorturls::api::handlers::{
    create_handler, fallback_handler, list_handler, liveness_handler, resolve_handler,
};
use shorturls::api::middleware::request_log;
use shorturls::application::services::ShortUrlService;
use shorturls::domain::entities::{NewShortUrl, ShortUrl};
use shorturls::domain::log_event::{LogEntry, RequestLogger};
use shorturls::domain::repositories::ShortUrlRepository;
use shorturls::error::AppError;
use shorturls::state::AppState;

/// In-memory store honoring the repository contract, including shortcode
/// uniqueness and newest-first listing.
pub struct InMemoryRepository {
    records: Mutex<Vec<ShortUrl>>,
    next_id: AtomicI64,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Snapshot of the stored records, insertion order.
    pub fn snapshot(&self) -> Vec<ShortUrl> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut records = self.records.lock().unwrap();

        if records.iter().any(|r| r.shortcode == new_url.shortcode) {
            return Err(AppError::conflict(
                "Shortcode already exists",
                json!({ "shortcode": new_url.shortcode }),
            ));
        }

        let record = ShortUrl::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            new_url.shortcode,
            new_url.original_url,
            new_url.created_at,
            new_url.expiry_date,
        );
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<ShortUrl>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.shortcode == shortcode).cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<ShortUrl>, AppError> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

pub fn create_test_state() -> (
    AppState,
    Arc<InMemoryRepository>,
    mpsc::Receiver<LogEntry>,
) {
    let repository = Arc::new(InMemoryRepository::new());
    let (logger, log_rx) = RequestLogger::channel(100);
    let service = Arc::new(ShortUrlService::new(repository.clone()));

    (AppState::new(service, logger), repository, log_rx)
}

/// Builds the application router with the contract routes and the request
/// logging middleware, plus a mock `ConnectInfo` so handlers and middleware
/// see a client address without a real socket.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness_handler))
        .route("/shorturls", post(create_handler).get(list_handler))
        .route("/shorturls/{shortcode}", get(resolve_handler))
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            request_log::layer,
        ))
        .with_state(state)
        .layer(MockConnectInfoLayer)
}

/// Seeds a record directly through the repository with the given timestamp
/// offsets relative to now (in days).
pub async fn seed_record(
    repo: &InMemoryRepository,
    shortcode: &str,
    url: &str,
    created_days_ago: i64,
    expires_in_days: i64,
) -> ShortUrl {
    let now = Utc::now();
    repo.insert(NewShortUrl {
        shortcode: shortcode.to_string(),
        original_url: url.to_string(),
        created_at: now - Duration::days(created_days_ago),
        expiry_date: now + Duration::days(expires_in_days),
    })
    .await
    .unwrap()
}

/// Seeds a record whose expiry is already in the past.
pub async fn seed_expired_record(
    repo: &InMemoryRepository,
    shortcode: &str,
    url: &str,
) -> ShortUrl {
    let now = Utc::now();
    repo.insert(NewShortUrl {
        shortcode: shortcode.to_string(),
        original_url: url.to_string(),
        created_at: now - Duration::days(2),
        expiry_date: now - Duration::days(1),
    })
    .await
    .unwrap()
}

/// Seeds a record with an explicit creation timestamp.
pub async fn seed_record_created_at(
    repo: &InMemoryRepository,
    shortcode: &str,
    url: &str,
    created_at: DateTime<Utc>,
) -> ShortUrl {
    repo.insert(NewShortUrl {
        shortcode: shortcode.to_string(),
        original_url: url.to_string(),
        created_at,
        expiry_date: created_at + Duration::days(30),
    })
    .await
    .unwrap()
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
