//! Raw HTTP bootstrap listener.
//!
//! # Responsibilities
//! - Accept connections and serve each on its own task
//! - Dispatch on exact (method, path) pairs via a single match, with an
//!   explicit 404 default
//! - For POST on the root path, accumulate the body, then parse it as JSON
//!   and log the result exactly once
//!
//! # Design Decisions
//! - Built directly on hyper, no framework; this listener exists to show
//!   the HTTP layer without the router abstraction
//! - A malformed POST body is a rejected accumulation: it is logged at
//!   error level and the response is still written

use std::convert::Infallible;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::header::CONTENT_TYPE;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

/// Run the bootstrap listener until the shutdown signal fires.
pub async fn run(
    listener: TcpListener,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "Bootstrap listener starting");

    loop {
        tokio::select! {
            _ = shutdown.recv() => {
                tracing::info!("Bootstrap listener stopped");
                return Ok(());
            }
            accepted = listener.accept() => {
                let (stream, peer_addr) = accepted?;
                tracing::debug!(peer_addr = %peer_addr, "Connection accepted");

                let io = TokioIo::new(stream);
                tokio::spawn(async move {
                    if let Err(e) = http1::Builder::new()
                        .serve_connection(io, service_fn(dispatch))
                        .await
                    {
                        tracing::error!(error = %e, "Error serving bootstrap connection");
                    }
                });
            }
        }
    }
}

/// Single dispatch over (method, path); the first match wins and everything
/// else falls through to 404.
async fn dispatch(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match (method, path.as_str()) {
        (Method::GET, "/") => text(StatusCode::OK, "Hello World!\n"),
        (Method::POST, "/") => accumulate_and_log(req).await,
        (_, "/something") => text(StatusCode::OK, "Nothing!\n"),
        _ => text(StatusCode::NOT_FOUND, "Not Found\n"),
    };

    Ok(response)
}

/// Two-phase body handling: buffer every frame, then resolve the accumulated
/// bytes exactly once at end-of-stream.
async fn accumulate_and_log(req: Request<Incoming>) -> Response<Full<Bytes>> {
    match req.into_body().collect().await {
        Ok(collected) => {
            let data = collected.to_bytes();
            match serde_json::from_slice::<serde_json::Value>(&data) {
                Ok(value) => tracing::info!(body = %value, "Parsed POST body"),
                Err(e) => tracing::error!(error = %e, "POST body is not valid JSON"),
            }
        }
        Err(e) => tracing::error!(error = %e, "Failed to read POST body"),
    }

    text(StatusCode::OK, "POST Successful\n")
}

fn text(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap()
}
