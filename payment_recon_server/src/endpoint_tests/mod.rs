mod helpers;
mod mocks;
mod reconcile;

mod misc {
    use actix_web::{
        body::MessageBody,
        http::{header, Method, StatusCode},
        test,
        test::TestRequest,
        App,
    };

    use crate::{routes::health, server::cors_config};

    #[actix_web::test]
    async fn health_endpoint() {
        let app = test::init_service(App::new().service(health)).await;
        let req = TestRequest::get().uri("/health").to_request();
        let (_req, res) = test::call_service(&app, req).await.into_parts();
        let status = res.status();
        let body = res.into_body().try_into_bytes().unwrap();
        assert!(status.is_success());
        assert_eq!(body, "👍️\n");
    }

    // The pre-flight answer must carry the literal wildcard, not an echo of the calling origin.
    #[actix_web::test]
    async fn preflight_allows_any_origin_with_a_literal_wildcard() {
        let app = test::init_service(App::new().wrap(cors_config()).service(health)).await;
        let req = TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/health")
            .insert_header((header::ORIGIN, "https://shop.example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let origin = res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).expect("No allowed-origin header");
        assert_eq!(origin, "*");
    }
}
