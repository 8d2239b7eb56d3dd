//! A scripted stand-in for the api server, for testing code built on a [`Clientset`]
//!
//! Enabled by the `mock` feature.
//!
//! Each test scripts the requests it expects with [`Exchange`]s, runs them on the
//! [`ApiServerVerifier`] returned by [`testcontext`], drives the [`Clientset`], and
//! finally awaits the scenario through [`timeout_after_1s`] to get the bodies sent.
use anyhow::Result;
use http::{Method, Request, Response, StatusCode};
use http_body_util::BodyExt;
use kube::{client::Body, Client};
use serde_json::Value;

use crate::Clientset;

type ApiServerHandle = tower_test::mock::Handle<Request<Body>, Response<Body>>;

/// Serves a fixed sequence of exchanges, asserting each request matches
pub struct ApiServerVerifier(ApiServerHandle);

/// One expected request and the answer to give it
pub struct Exchange {
    method: Method,
    path: String,
    status: StatusCode,
    response: Value,
}

impl Exchange {
    /// Expect `method` on `path` and answer 200 with `response`
    pub fn new(method: Method, path: &str, response: Value) -> Self {
        Self {
            method,
            path: path.to_string(),
            status: StatusCode::OK,
            response,
        }
    }

    /// Answer with a different status code
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl ApiServerVerifier {
    /// Serve `exchanges` in order; the handle resolves to the json bodies the client sent
    ///
    /// If the client makes more calls than scripted it sees a closed service error.
    /// Await the handle via [`timeout_after_1s`] to catch calls that never happened.
    pub fn run(self, exchanges: Vec<Exchange>) -> tokio::task::JoinHandle<Vec<Value>> {
        tokio::spawn(async move { self.serve(exchanges).await.expect("scenario completed without errors") })
    }

    async fn serve(mut self, exchanges: Vec<Exchange>) -> Result<Vec<Value>> {
        let mut bodies = vec![];
        for (i, exchange) in exchanges.into_iter().enumerate() {
            let (request, send) = self
                .0
                .next_request()
                .await
                .unwrap_or_else(|| panic!("service not called {}", i + 1));
            assert_eq!(request.method(), exchange.method);
            assert_eq!(request.uri().path(), exchange.path);
            let body = request.into_body().collect().await?.to_bytes();
            bodies.push(if body.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&body)?
            });
            let response = Response::builder()
                .status(exchange.status)
                .body(Body::from(serde_json::to_vec(&exchange.response)?))?;
            send.send_response(response);
        }
        Ok(bodies)
    }
}

/// Await a scenario, failing if it does not finish within a second
pub async fn timeout_after_1s<T>(handle: tokio::task::JoinHandle<T>) -> T {
    tokio::time::timeout(std::time::Duration::from_secs(1), handle)
        .await
        .expect("timeout on mock apiserver")
        .expect("scenario succeeded")
}

/// A clientset backed by a mock service, defaulting to namespace `default`
pub fn testcontext() -> (Clientset, ApiServerVerifier) {
    let (mock_service, handle) = tower_test::mock::pair::<Request<Body>, Response<Body>>();
    let mock_client = Client::new(mock_service, "default");
    (Clientset::new(mock_client), ApiServerVerifier(handle))
}

/// The body of a `Status` failure response, as the api server would send it
pub fn status_failure(code: u16, reason: &str, message: &str) -> Value {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
}
