//! Local stand-in for the translation endpoint, used by tests

use axum::{extract::Query, http::StatusCode, routing::get, Router};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::core::config::TranslatorConfig;

const PATH: &str = "/translate_a/single";

type Recorded = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Serves a fixed status and body, recording every query it receives
pub struct MockEndpoint {
    pub url: String,
    requests: Recorded,
}

impl MockEndpoint {
    pub async fn start(status: u16, body: &'static str) -> Self {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Like `start`, but every response is held back for `delay`
    pub async fn start_delayed(status: u16, body: &'static str, delay: Duration) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        let requests: Recorded = Arc::default();
        let recorder = Arc::clone(&requests);

        let app = Router::new().route(
            PATH,
            get(move |Query(params): Query<HashMap<String, String>>| {
                let recorder = Arc::clone(&recorder);
                async move {
                    recorder.lock().unwrap().push(params);
                    tokio::time::sleep(delay).await;
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}{}", addr, PATH),
            requests,
        }
    }

    pub fn config(&self) -> TranslatorConfig {
        TranslatorConfig::with_endpoint(self.url.clone())
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

/// URL of a port nothing listens on
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, PATH)
}
