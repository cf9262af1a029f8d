//! Shared helpers for the router integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use candy_axum::{AxumContext, CorsConfig, create_router};
use candy_core::CandyService;
use candy_db::{CoreFactory, TestDb};

pub const BOUNDARY: &str = "candy-test-boundary";

/// A router over an in-memory database and a temporary uploads directory.
pub struct TestApp {
    pub router: Router,
    pub candies: Arc<CandyService>,
    pub uploads_dir: PathBuf,
    _db: TestDb,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = TestDb::new().await.unwrap();
        let dir = TempDir::new().unwrap();
        let uploads_dir = dir.path().join("uploads");

        let candies = Arc::new(
            CoreFactory::build_candy_service(db.pool().clone(), &uploads_dir, 5)
                .await
                .unwrap(),
        );
        let ctx = AxumContext::new(Arc::clone(&candies), &uploads_dir).unwrap();

        Self {
            router: create_router(ctx, &CorsConfig::AllowAll),
            candies,
            uploads_dir,
            _db: db,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }
}

/// One part of a multipart body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(method: &str, uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn candy_parts<'a>(name: &'a str, kind: &'a str, description: &'a str) -> Vec<Part<'a>> {
    vec![
        Part::Text("nombre", name),
        Part::Text("tipo", kind),
        Part::Text("descripcion", description),
    ]
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_string(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
