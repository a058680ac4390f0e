//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and site pages at `/`. Unknown paths get
/// the HTML not-found page. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::pages::routes())
        .fallback(crate::pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use clinic_app::services::site_service::SiteService;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(SiteService::builtin().unwrap())
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = build(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_render_every_page() {
        for (uri, heading) in [
            ("/", "Discover Holistic Healing at Osteopraktik"),
            ("/services", "Select a Service"),
            ("/about", "Meet Our Team"),
            ("/contact", "Send Us a Message"),
        ] {
            let (status, body) = get(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains(heading), "{uri} should contain {heading}");
        }
    }

    #[tokio::test]
    async fn should_render_collapsed_menu_by_default() {
        let (_, body) = get("/about").await;
        assert!(body.contains("menu=open"));
        assert!(body.contains(r#"aria-expanded="false""#));
        assert!(!body.contains(r#"class="mobile-menu""#));
    }

    #[tokio::test]
    async fn should_render_expanded_menu_with_plain_links() {
        let (_, body) = get("/about?menu=open").await;
        assert!(body.contains(r#"class="mobile-menu""#));
        assert!(body.contains(r#"aria-expanded="true""#));
        // Neither the toggle nor the menu links keep the menu open.
        assert!(!body.contains("menu=open"));
    }

    #[tokio::test]
    async fn should_show_first_service_by_default() {
        let (status, body) = get("/services").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<h2 class="detail-name">Massage Therapy</h2>"#));
        assert!(body.contains(r#"<p class="detail-price">$80</p>"#));
    }

    #[tokio::test]
    async fn should_show_selected_service_in_detail_panel() {
        let (status, body) = get("/services?service=3").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<h2 class="detail-name">Physiotherapy</h2>"#));
        assert!(body.contains(r#"<p class="detail-price">$100</p>"#));
        assert!(body.contains("45-60 minutes"));
        assert_eq!(body.matches(r#"<li class="benefit">"#).count(), 4);
    }

    #[tokio::test]
    async fn should_mark_only_the_selected_service() {
        let (_, body) = get("/services?service=3").await;
        assert_eq!(body.matches(r#"class="selected""#).count(), 1);
        let selected = body.find(r#"class="selected""#).unwrap();
        let physio = body.find("<strong>Physiotherapy</strong>").unwrap();
        let osteo = body.find("<strong>Osteopathy</strong>").unwrap();
        assert!(osteo < selected && selected < physio);
    }

    #[tokio::test]
    async fn should_render_error_page_for_unreadable_query() {
        let response = build(test_state())
            .oneshot(
                Request::builder()
                    .uri("/services?service=1&service=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"), "{content_type}");

        let (status, body) = get("/about?menu=open&menu=closed").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("<h1>400</h1>"));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_service_selection() {
        let (status, _) = get("/services?service=42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_bad_request_for_malformed_service_selection() {
        let (status, _) = get("/services?service=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_render_not_found_page_for_unknown_path() {
        let (status, body) = get("/privacy").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("privacy"));
    }

    #[tokio::test]
    async fn should_list_services_as_json() {
        let (status, body) = get("/api/services").await;
        assert_eq!(status, StatusCode::OK);
        let services: serde_json::Value = serde_json::from_str(&body).unwrap();
        let names: Vec<_> = services
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "Massage Therapy",
                "Osteopathy",
                "Physiotherapy",
                "Acupuncture",
                "Chiropractic Care"
            ]
        );
    }

    #[tokio::test]
    async fn should_get_service_as_json() {
        let (status, body) = get("/api/services/2").await;
        assert_eq!(status, StatusCode::OK);
        let service: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(service["name"], "Osteopathy");
        assert_eq!(service["price"], 120);
    }

    #[tokio::test]
    async fn should_map_api_errors_to_status_codes() {
        let (status, body) = get("/api/services/9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("error"));

        let (status, _) = get("/api/services/nine").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
