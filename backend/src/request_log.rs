use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

/// Logs `method path - ip` for every request. The client address is only
/// known when the server is started with connect info.
pub async fn log_request(req: Request, next: Next) -> Response {
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".into());

    tracing::info!(
        method = %req.method(),
        path = %req.uri().path(),
        ip = %ip,
        "{} {} - {}",
        req.method(),
        req.uri().path(),
        ip
    );

    next.run(req).await
}
