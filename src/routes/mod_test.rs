use std::collections::BTreeSet;

use super::*;
use crate::config::ServerConfig;

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

// =============================================================================
// Client route table
// =============================================================================

#[tokio::test]
async fn route_list_covers_exactly_the_client_routes() {
    let paths: BTreeSet<String> =
        generate_route_list(client::app::App).iter().map(|route| route.path().to_owned()).collect();
    let expected: BTreeSet<String> = ["/", "/posts", "/posts/{slug}", "/about", "/login", "/stats", "/newpost"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(paths, expected);
}

// =============================================================================
// Server-rendered pages
// =============================================================================

async fn spawn_app() -> String {
    let config = ServerConfig { port: 0, api_upstream: None, api_timeout_secs: 1 };
    let router = app(AppState::from_config(&config).unwrap()).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn render(base: &str, path: &str) -> (reqwest::StatusCode, String) {
    let response = reqwest::get(format!("{base}{path}")).await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn open_pages_render_on_the_server() {
    let base = spawn_app().await;

    let (status, home) = render(&base, "/").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(home.contains("Home View"));
    assert!(home.contains("nav-shell"));

    let (_, about) = render(&base, "/about").await;
    assert!(about.contains("About View"));
}

#[tokio::test]
async fn protected_pages_are_wrapped_in_the_session_guard() {
    let base = spawn_app().await;

    // No session has been restored on the server, so the guard renders
    // neither the page nor a redirect.
    let (status, stats) = render(&base, "/stats").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(stats.contains("nav-shell"));
    assert!(!stats.contains("Stats View"));

    let (status, new_post) = render(&base, "/newpost").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(!new_post.contains("Add New"));
}

#[tokio::test]
async fn unknown_paths_render_not_found() {
    let base = spawn_app().await;
    let (_, body) = render(&base, "/no/such/page").await;
    assert!(body.contains("404: Page Not Found"));
}
