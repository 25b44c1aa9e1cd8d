use dotenvy::dotenv;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config;
mod handlers {
    pub mod contact_handlers;
}

use config::Config;
use handlers::contact_handlers::{self, Inbox};

async fn health_check() -> &'static str {
    "OK"
}

#[derive(Default)]
pub struct AppState {
    /// Contact submissions received since startup.
    pub inbox: Mutex<Inbox>,
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.is_development() {
        AllowOrigin::from(Any)
    } else {
        match &config.frontend_url {
            Some(url) => AllowOrigin::exact(url.clone()),
            None => {
                tracing::warn!("FRONTEND_URL is not set, cross-origin requests are refused");
                AllowOrigin::list(std::iter::empty())
            }
        }
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(origin)
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE])
}

pub fn build_router(state: Arc<AppState>, config: &Config) -> Router {
    let index = config.static_dir.join("index.html");
    let site = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(config))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}, build the frontend first",
            config.static_dir.display()
        );
    }

    let state = Arc::new(AppState::default());
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("Serving {} on http://{}", config.static_dir.display(), config.addr());
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    struct Site {
        dir: tempfile::TempDir,
        state: Arc<AppState>,
    }

    impl Site {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("index.html"), "<html>khemchand</html>").unwrap();
            std::fs::write(dir.path().join("app.js"), "console.log('app')").unwrap();
            Site { dir, state: Arc::new(AppState::default()) }
        }

        fn router(&self) -> Router {
            self.router_with(&[])
        }

        fn router_with(&self, vars: &[(&str, &str)]) -> Router {
            let config = Config::from_lookup(|key| match key {
                "STATIC_DIR" => Some(self.dir.path().display().to_string()),
                _ => vars.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string()),
            })
            .unwrap();
            build_router(self.state.clone(), &config)
        }
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_contact(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let site = Site::new();
        let response = site
            .router()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "OK");
    }

    #[tokio::test]
    async fn contact_without_message_is_rejected() {
        let site = Site::new();
        let response = site
            .router()
            .oneshot(post_contact(r#"{"name":"Asha","email":"asha@example.com","message":"  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "Name, email, and message are required");
        assert!(site.state.inbox.lock().await.is_empty());
    }

    #[tokio::test]
    async fn valid_contact_lands_in_inbox() {
        let site = Site::new();
        let response = site
            .router()
            .oneshot(post_contact(
                r#"{"name":"Asha Verma","email":"asha@example.com","company":"Northern Works","message":"Need USFD testing"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["message"], "Message received");

        let inbox = site.state.inbox.lock().await;
        assert_eq!(inbox.len(), 1);
        let first = inbox.iter().next().unwrap();
        assert_eq!(first.request.name, "Asha Verma");
        assert_eq!(first.request.company.as_deref(), Some("Northern Works"));
    }

    #[tokio::test]
    async fn contact_missing_field_is_bad_request() {
        let site = Site::new();
        let response = site
            .router()
            .oneshot(post_contact(r#"{"name":"Asha","email":"asha@example.com"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "Name, email, and message are required");
        assert!(site.state.inbox.lock().await.is_empty());
    }

    #[tokio::test]
    async fn contact_with_broken_json_is_bad_request() {
        let site = Site::new();
        let response = site.router().oneshot(post_contact("{\"name\":")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"].is_string());
    }

    fn health_from(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/health")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn production_only_allows_frontend_origin() {
        let site = Site::new();
        let router = site.router_with(&[
            ("ENVIRONMENT", "production"),
            ("FRONTEND_URL", "https://khemchandgroup.com"),
        ]);

        let response = router.clone().oneshot(health_from("https://khemchandgroup.com")).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN].to_str().unwrap(),
            "https://khemchandgroup.com"
        );

        let response = router.oneshot(health_from("https://elsewhere.example")).await.unwrap();
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn production_without_frontend_url_refuses_cross_origin() {
        let site = Site::new();
        let response = site
            .router_with(&[("ENVIRONMENT", "production")])
            .oneshot(health_from("https://elsewhere.example"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn development_allows_any_origin() {
        let site = Site::new();
        let response = site.router().oneshot(health_from("http://localhost:8080")).await.unwrap();
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN].to_str().unwrap(), "*");
    }

    #[tokio::test]
    async fn static_files_are_served() {
        let site = Site::new();
        let response = site
            .router()
            .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "console.log('app')");
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let site = Site::new();
        let response = site
            .router()
            .oneshot(Request::builder().uri("/leadership").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "<html>khemchand</html>");
    }
}
