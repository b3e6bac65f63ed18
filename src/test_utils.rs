// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request seen by the [`MockService`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body: String,
}

impl RecordedRequest {
    /// Parse the request body as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

type Responses = HashMap<(String, String), VecDeque<(u16, String)>>;

/// A mock HTTP service that answers from scripted responses keyed on method
/// and exact path, and records every request it receives.
///
/// Responses for a key are served in order; the last one repeats. Unscripted
/// GETs answer 404 and unscripted POSTs answer 201 echoing the request body.
#[derive(Clone, Default)]
pub struct MockService {
    responses: Arc<Mutex<Responses>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.push("GET", path, status, body)
    }

    /// Queue a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.push("POST", path, status, body)
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Every request received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests with the given method, in arrival order
    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    fn push(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
        self
    }

    fn next_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(&(method.to_string(), path.to_string()))?;

        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let query = req.uri().query().unwrap_or_default().to_string();
        let response = self.next_response(&method, &path);
        let requests = self.requests.clone();

        Box::pin(async move {
            let bytes = req
                .into_body()
                .collect()
                .await
                .map_err(|e| tower::BoxError::from(e.to_string()))?
                .to_bytes();
            let body = String::from_utf8_lossy(&bytes).into_owned();

            requests.lock().unwrap().push(RecordedRequest {
                method: method.clone(),
                path,
                query,
                body: body.clone(),
            });

            let (status, body) = match response {
                Some(scripted) => scripted,
                None if method == "POST" => (201, body),
                None => (404, not_found_json("object", "unknown")),
            };

            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Create a 409 already exists response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    status_json(409, "AlreadyExists", &format!("{} \"{}\" already exists", resource, name))
}

/// Create a failure Status response with an arbitrary code and reason
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a Supabase parent JSON response
pub fn supabase_json(name: &str, namespace: &str, uid: &str) -> String {
    serde_json::json!({
        "apiVersion": "supabase.com/v1",
        "kind": "Supabase",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": uid
        },
        "spec": {}
    })
    .to_string()
}

/// API paths of the objects the reconciler touches for a parent in `namespace`
pub mod paths {
    pub fn supabase(namespace: &str, name: &str) -> String {
        format!("/apis/supabase.com/v1/namespaces/{}/supabases/{}", namespace, name)
    }

    pub fn deployments(namespace: &str) -> String {
        format!("/apis/apps/v1/namespaces/{}/deployments", namespace)
    }

    pub fn deployment(namespace: &str, name: &str) -> String {
        format!("{}/{}", deployments(namespace), name)
    }

    pub fn services(namespace: &str) -> String {
        format!("/api/v1/namespaces/{}/services", namespace)
    }

    pub fn service(namespace: &str, name: &str) -> String {
        format!("{}/{}", services(namespace), name)
    }
}
