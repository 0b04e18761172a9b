// Site integration tests: pages, JSON records and HTMX widget endpoints
// driven through the router.
//
// Run with: cargo test --test site_integration_tests

#[cfg(feature = "server")]
mod site_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use empc_site::{create_router, AppState, SiteConfig};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    fn create_test_app() -> axum::Router {
        create_router(AppState::new(SiteConfig::default()))
    }

    async fn get(uri: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn hx_get(uri: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("HX-Request", "true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn text_response(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
    }

    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    // =========================================================================
    // Section 1: Health and pages
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["routes"], 13);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_home_page() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = text_response(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"expanding-cards\""));
        assert!(html.contains("id=\"carousel-team\""));
    }

    #[tokio::test]
    async fn test_every_registered_route_renders() {
        let routes = [
            "/",
            "/therapies/gestalt",
            "/therapies/tcc",
            "/therapies/nutrition",
            "/therapies/sexologie",
            "/therapies/familiales",
            "/groupal/mbct",
            "/groupal/mecl",
            "/tarifs",
            "/equipe/dr-deblangey",
            "/equipe/yoga",
            "/mentions-legales",
            "/confidentialite",
        ];
        for route in routes {
            let response = get(route).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", route);
        }
    }

    #[tokio::test]
    async fn test_composed_page_has_fixed_section_order() {
        let html = text_response(get("/therapies/tcc").await).await;
        let hero = html.find("section-hero ").unwrap();
        let indications = html.find("section-indications ").unwrap();
        let pricing = html.find("section-pricing ").unwrap();
        let cta = html.find("section-cta ").unwrap();
        assert!(hero < indications && indications < pricing && pricing < cta);
    }

    #[tokio::test]
    async fn test_trailing_slash_served() {
        let response = get("/tarifs/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = text_response(response).await;
        assert!(html.contains("class=\"price-row\""));
    }

    #[tokio::test]
    async fn test_unknown_page_is_404_with_suggestions() {
        let response = get("/nulle-part").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = text_response(response).await;
        assert_eq!(html.matches("class=\"suggestion\"").count(), 4);
    }

    // =========================================================================
    // Section 2: JSON page records
    // =========================================================================

    #[tokio::test]
    async fn test_composed_page_record() {
        let response = get("/api/pages/therapies/gestalt").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["type"], "composed");
        assert_eq!(body["page"]["slug"], "/therapies/gestalt");
        let sections = body["page"]["sections"].as_array().unwrap();
        assert_eq!(sections[0]["section"]["kind"], "hero");
        assert_eq!(sections.last().unwrap()["section"]["kind"], "call_to_action");
    }

    #[tokio::test]
    async fn test_home_record() {
        let body = json_response(get("/api/pages").await).await;
        assert_eq!(body["type"], "home");
        assert_eq!(body["page"]["therapy_cards"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_unknown_record_is_json_404() {
        let response = get("/api/pages/absent").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_response(response).await;
        assert!(body["error"].is_string());
    }

    // =========================================================================
    // Section 3: FAQ widget
    // =========================================================================

    #[tokio::test]
    async fn test_faq_toggle_opens_one() {
        let response = hx_get("/widgets/faq/therapies/tcc?toggle=1").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = text_response(response).await;
        assert_eq!(html.matches("faq-item is-open").count(), 1);
        assert!(html.contains("aria-labelledby=\"faq-question-1\">"));
        // Closed answers stay in the markup, hidden.
        assert_eq!(html.matches("class=\"faq-answer\"").count(), 4);
        assert_eq!(html.matches("\" hidden>").count(), 3);
    }

    #[tokio::test]
    async fn test_faq_toggle_open_item_closes_it() {
        let html = text_response(hx_get("/widgets/faq/therapies/tcc?open=1&toggle=1").await).await;
        assert_eq!(html.matches("faq-item is-open").count(), 0);
    }

    #[tokio::test]
    async fn test_faq_switch_item() {
        let html = text_response(hx_get("/widgets/faq/therapies/tcc?open=0&toggle=2").await).await;
        assert_eq!(html.matches("faq-item is-open").count(), 1);
        assert!(html.contains("aria-labelledby=\"faq-question-2\">"));
        assert!(html.contains("aria-labelledby=\"faq-question-0\" hidden>"));
    }

    #[tokio::test]
    async fn test_faq_without_htmx_redirects() {
        let response = get("/widgets/faq/therapies/tcc?toggle=1").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/therapies/tcc");
    }

    #[tokio::test]
    async fn test_faq_on_page_without_faq() {
        let response = hx_get("/widgets/faq/tarifs?toggle=0").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // =========================================================================
    // Section 4: Carousels
    // =========================================================================

    #[tokio::test]
    async fn test_gallery_next_clamps_at_end() {
        let html = text_response(hx_get("/widgets/carousel/mbct?index=4&action=next").await).await;
        assert!(html.contains("data-index=\"4\""));
    }

    #[tokio::test]
    async fn test_gallery_goto_clamps() {
        let html = text_response(hx_get("/widgets/carousel/mbct?index=0&action=goto&to=99").await).await;
        assert!(html.contains("data-index=\"4\""));
    }

    #[tokio::test]
    async fn test_gallery_drag_past_threshold_advances() {
        let html = text_response(
            hx_get("/widgets/carousel/mbct?index=1&action=drag&offset=-240&velocity=0&width=600").await,
        )
        .await;
        assert!(html.contains("data-index=\"2\""));
    }

    #[tokio::test]
    async fn test_gallery_short_drag_snaps_back() {
        let html = text_response(
            hx_get("/widgets/carousel/mbct?index=1&action=drag&offset=-60&velocity=0&width=600").await,
        )
        .await;
        assert!(html.contains("data-index=\"1\""));
    }

    #[tokio::test]
    async fn test_gallery_page_wires_drag_and_thumb_strip() {
        let html = text_response(get("/groupal/mbct").await).await;
        assert!(html.contains("id=\"carousel-mbct\" data-index=\"0\" data-drag-url=\""));
        assert!(html.contains("data-scroll-left=\""));
        assert!(html.contains("carousel.dataset.dragUrl"));
        assert!(html.contains("strip.dataset.scrollLeft"));
    }

    #[tokio::test]
    async fn test_team_carousel_prev_at_start() {
        let response = hx_get("/widgets/carousel/team?index=0&action=prev").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = text_response(response).await;
        assert!(html.contains("id=\"carousel-team\""));
    }

    #[tokio::test]
    async fn test_carousel_without_htmx_redirects_to_host() {
        let response = get("/widgets/carousel/mecl?index=0&action=next").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/groupal/mecl");
    }

    #[tokio::test]
    async fn test_unknown_carousel() {
        let response = hx_get("/widgets/carousel/absent?index=0").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // =========================================================================
    // Section 5: Expanding cards and menu
    // =========================================================================

    #[tokio::test]
    async fn test_cards_activate_wide() {
        let html = text_response(hx_get("/widgets/cards?active=2&width=1024").await).await;
        assert!(html.contains("grid-template-columns: 1fr 1fr 5fr 1fr 1fr 1fr"));
    }

    #[tokio::test]
    async fn test_cards_activate_by_pointer_and_focus() {
        let hovered = text_response(hx_get("/widgets/cards?active=3&via=pointer_enter&width=1024").await).await;
        assert!(hovered.contains("grid-template-columns: 1fr 1fr 1fr 5fr 1fr 1fr"));

        let focused = text_response(hx_get("/widgets/cards?active=4&via=focus&width=1024").await).await;
        assert!(focused.contains("grid-template-columns: 1fr 1fr 1fr 1fr 5fr 1fr"));
        // Collapsed cards keep their content block.
        assert_eq!(focused.matches("expanding-card-content is-hidden").count(), 5);
    }

    #[tokio::test]
    async fn test_cards_narrow_viewport_stacks() {
        let html = text_response(hx_get("/widgets/cards?active=0&width=500").await).await;
        assert!(html.contains("grid-template-rows: 5fr 1fr 1fr 1fr 1fr 1fr"));
    }

    #[tokio::test]
    async fn test_cards_out_of_range_keeps_default() {
        let html = text_response(hx_get("/widgets/cards?active=42&width=1024").await).await;
        assert!(html.contains("grid-template-columns: 5fr 1fr 1fr 1fr 1fr 1fr"));
    }

    #[tokio::test]
    async fn test_menu_toggle_then_escape() {
        let open = text_response(hx_get("/widgets/menu?open=false&action=toggle&path=%2Ftarifs").await).await;
        assert!(open.contains("<nav class=\"mobile-menu-panel\""));

        let closed = text_response(hx_get("/widgets/menu?open=true&action=escape&path=%2Ftarifs").await).await;
        assert!(!closed.contains("<nav class=\"mobile-menu-panel\""));
    }

    #[tokio::test]
    async fn test_menu_redirect_ignores_foreign_paths() {
        let response = get("/widgets/menu?open=false&action=toggle&path=https%3A%2F%2Fexample.com").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }
}
