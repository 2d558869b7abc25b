//! HTTP to HTTPS redirect server.

use std::net::SocketAddr;

use axum::http::uri::{Authority, Uri};
use axum::response::Redirect;
use axum::routing::any;
use axum::Router;
use axum_extra::extract::Host;

/// Spawn an HTTP server that redirects all requests to HTTPS.
///
/// Runs in the background and does not block.
pub fn spawn_redirect_server(http_port: u16, https_port: u16) {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], http_port));

        tracing::info!(http_port, https_port, "Starting HTTP->HTTPS redirect server");

        let app = Router::new().fallback(any(move |Host(host): Host, uri: Uri| async move {
            let target = https_url(&host, &uri, https_port);
            tracing::debug!(from = %uri, to = %target, "Redirecting HTTP to HTTPS");
            Redirect::permanent(&target)
        }));

        if let Err(e) = axum_server::bind(addr).serve(app.into_make_service()).await {
            tracing::error!(error = %e, "HTTP redirect server failed");
        }
    });
}

/// Build the HTTPS URL for a plain HTTP request.
fn https_url(host: &str, uri: &Uri, https_port: u16) -> String {
    // Authority::host keeps IPv6 brackets and drops the port
    let host = host
        .parse::<Authority>()
        .map(|authority| authority.host().to_owned())
        .unwrap_or_else(|_| host.to_owned());
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    if https_port == 443 {
        format!("https://{}{}", host, path)
    } else {
        format!("https://{}:{}{}", host, https_port, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_plain_port_and_keeps_path() {
        let uri: Uri = "/chat?x=1".parse().unwrap();
        assert_eq!(https_url("pfm.example:80", &uri, 443), "https://pfm.example/chat?x=1");
    }

    #[test]
    fn keeps_ipv6_brackets() {
        let uri: Uri = "/health".parse().unwrap();
        assert_eq!(https_url("[::1]:80", &uri, 8443), "https://[::1]:8443/health");
        assert_eq!(https_url("[::1]", &uri, 443), "https://[::1]/health");
    }

    #[test]
    fn includes_non_default_https_port() {
        let uri: Uri = "/health".parse().unwrap();
        assert_eq!(https_url("pfm.example", &uri, 8443), "https://pfm.example:8443/health");
    }
}
