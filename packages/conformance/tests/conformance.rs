//! End-to-end conformance tests for `paintshop-client`.
//!
//! Each test spawns a scripted stub backend (real TCP, real HTTP) via
//! [`paintshop_conformance::spawn_backend`], points an [`ApiClient`] at it and
//! checks both what the client sent and what it made of the answer.
//!
//! # Coverage
//!
//! | Test | Behaviour |
//! |------|-----------|
//! | `success_body_is_returned_unchanged` | 2xx passthrough |
//! | `search_becomes_query_parameter` | query building |
//! | `raw_get_appends_params` | `get` with params |
//! | `path_slots_are_percent_encoded` | slot rendering |
//! | `no_authorization_header_without_token` | header defaults |
//! | `login_stores_session_and_token_is_sent` | login + bearer |
//! | `unsuccessful_login_leaves_session_empty` | login guard |
//! | `rejected_register_carries_field_errors` | 422 envelope |
//! | `admin_login_sets_admin_marker` | admin login |
//! | `unauthorized_customer_is_sent_to_login` | 401 customer |
//! | `unauthorized_admin_is_sent_to_admin_login` | 401 admin |
//! | `forbidden_in_admin_context_ends_admin_session` | 403 admin |
//! | `forbidden_in_customer_context_is_plain_failure` | 403 customer |
//! | `missing_message_uses_fallback` | fallback message |
//! | `html_unauthorized_still_expires_session` | non-JSON error body |
//! | `non_json_success_is_network_error` | non-JSON 2xx |
//! | `empty_success_body_is_null` | empty 2xx |
//! | `logout_clears_session_even_when_backend_fails` | logout |
//! | `product_image_upload_is_multipart` | multipart body |
//! | `upload_failure_uses_upload_fallback` | multipart error |
//! | `upload_unauthorized_redirects` | multipart 401 |
//! | `set_default_address_uses_patch` | addresses.setDefault |
//! | `hero_media_delete_sends_path` | DELETE with body |
//! | `cart_add_sends_item` | JSON bodies |
//! | `list_filters_reach_admin_lists` | admin list query |
//! | `post_and_put_send_json` | `post` / `put` wrappers |
//! | `patch_sends_json_body` | `patch` wrapper |
//! | `delete_sends_no_body` | `delete` wrapper |
//! | `delete_with_sends_json_body` | `delete_with` wrapper |
//! | `upload_posts_multipart` | `upload` wrapper |

use std::sync::Arc;

use paintshop::{ApiError, Context, LoginView, Session};
use paintshop_api::{ErrorBody, ListQuery};
use paintshop_client::{ApiClient, ClientConfig, FilePart, Navigator, RecordingNavigator, Upload};
use paintshop_conformance::{spawn_backend, Backend, Scripted};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Harness {
    backend: Backend,
    client: ApiClient,
    session: Arc<Session>,
    nav: Arc<RecordingNavigator>,
}

async fn harness(context: Context) -> Harness {
    let backend = spawn_backend().await;
    let mut config = ClientConfig::new(backend.api_base.clone());
    config.context = context;
    config.timeout = Some(std::time::Duration::from_secs(5));

    let session = Arc::new(Session::in_memory());
    let nav = Arc::new(RecordingNavigator::new());
    let client = ApiClient::with_session(
        &config,
        Arc::clone(&session),
        Arc::clone(&nav) as Arc<dyn Navigator>,
    )
    .unwrap();

    Harness {
        backend,
        client,
        session,
        nav,
    }
}

fn signed_in(h: &Harness) {
    h.session.establish("tok-1", &json!({"id": 1, "name": "Ada"})).unwrap();
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

#[tokio::test]
async fn success_body_is_returned_unchanged() {
    let h = harness(Context::Customer).await;
    let body = json!({"data": [{"id": 1, "name": "Royal Satin"}], "meta": {"total": 1}});
    h.backend.on("GET", "/products", Scripted::json(200, body.clone()));

    let got = h.client.products().list(&ListQuery::default()).await.unwrap();
    assert_eq!(got, body);

    let req = h.backend.last();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/products");
    assert_eq!(req.header("accept"), Some("application/json"));
    assert_eq!(req.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn search_becomes_query_parameter() {
    let h = harness(Context::Customer).await;
    h.client.products().search("blue").await.unwrap();
    assert_eq!(h.backend.last().path, "/products?search=blue");

    h.client.products().search("sky blue").await.unwrap();
    assert_eq!(h.backend.last().path, "/products?search=sky%20blue");
}

#[tokio::test]
async fn raw_get_appends_params() {
    let h = harness(Context::Customer).await;
    h.client.get("/products", &[("search", "blue")]).await.unwrap();
    let req = h.backend.last();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/products?search=blue");
}

#[tokio::test]
async fn path_slots_are_percent_encoded() {
    let h = harness(Context::Customer).await;
    signed_in(&h);
    h.client.orders().get("ORD 7/2").await.unwrap();
    assert_eq!(h.backend.last().path, "/orders/ORD%207%2F2");

    h.client.reviews().list(42).await.unwrap();
    assert_eq!(h.backend.last().path, "/products/42/reviews");
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let h = harness(Context::Customer).await;
    h.client.categories().list().await.unwrap();
    assert_eq!(h.backend.last().header("authorization"), None);
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_stores_session_and_token_is_sent() {
    let h = harness(Context::Customer).await;
    h.backend.on(
        "POST",
        "/login",
        Scripted::json(
            200,
            json!({"success": true, "token": "t-42", "user": {"id": 42, "email": "ada@example.com"}}),
        ),
    );

    h.client.auth().login("ada@example.com", "pw").await.unwrap();
    let sent = h.backend.last().json().unwrap();
    assert_eq!(sent, json!({"email": "ada@example.com", "password": "pw"}));

    assert_eq!(h.session.token().unwrap().as_deref(), Some("t-42"));
    assert_eq!(h.session.user().unwrap().unwrap()["id"], 42);
    assert!(!h.session.is_admin());

    h.client.cart().list().await.unwrap();
    assert_eq!(h.backend.last().header("authorization"), Some("Bearer t-42"));
}

#[tokio::test]
async fn unsuccessful_login_leaves_session_empty() {
    let h = harness(Context::Customer).await;
    h.backend.on(
        "POST",
        "/login",
        Scripted::json(200, json!({"success": false, "message": "Invalid credentials"})),
    );

    let got = h.client.auth().login("ada@example.com", "bad").await.unwrap();
    assert_eq!(got["success"], false);
    assert!(!h.session.is_authenticated());
    assert_eq!(h.session.user().unwrap(), None);
}

#[tokio::test]
async fn rejected_register_carries_field_errors() {
    let h = harness(Context::Customer).await;
    h.backend.on(
        "POST",
        "/register",
        Scripted::error(
            422,
            &ErrorBody::new("The given data was invalid.")
                .with_errors(json!({"email": ["The email has already been taken."]})),
        ),
    );

    let err = h
        .client
        .auth()
        .register("Ada", "ada@example.com", "pw", "pw")
        .await
        .unwrap_err();
    let env = err.envelope();
    assert_eq!(env.status, Some(422));
    assert_eq!(env.message, "The given data was invalid.");
    assert_eq!(env.errors["email"], vec!["The email has already been taken."]);
    assert!(!h.session.is_authenticated());
    assert!(h.nav.redirects().is_empty());

    let sent = h.backend.last().json().unwrap();
    assert_eq!(sent["password_confirmation"], "pw");
}

#[tokio::test]
async fn admin_login_sets_admin_marker() {
    let h = harness(Context::Admin).await;
    h.backend.on(
        "POST",
        "/admin/login",
        Scripted::json(200, json!({"success": true, "token": "adm", "user": {"id": 1, "role": "admin"}})),
    );

    h.client.auth().admin_login("root@example.com", "pw").await.unwrap();
    assert!(h.session.is_admin());
    assert_eq!(h.session.token().unwrap().as_deref(), Some("adm"));
}

#[tokio::test]
async fn logout_clears_session_even_when_backend_fails() {
    let h = harness(Context::Admin).await;
    signed_in(&h);
    h.session.mark_admin().unwrap();
    h.backend.on("POST", "/logout", Scripted::error(500, &ErrorBody::new("boom")));

    let err = h.client.auth().logout().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(!h.session.is_authenticated());
    assert!(!h.session.is_admin());
    assert_eq!(h.session.user().unwrap(), None);

    let req = h.backend.last();
    assert_eq!(req.header("authorization"), Some("Bearer tok-1"));
    assert_eq!(req.json(), Some(json!({})));
}

// ---------------------------------------------------------------------------
// Status classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_customer_is_sent_to_login() {
    let h = harness(Context::Customer).await;
    signed_in(&h);
    h.backend.on("GET", "/cart", Scripted::error(401, &ErrorBody::new("Unauthenticated.")));

    let err = h.client.cart().list().await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired { .. }));
    assert_eq!(err.to_string(), "Session expired. Please login again.");
    assert!(!h.session.is_authenticated());
    assert_eq!(h.session.user().unwrap(), None);
    assert_eq!(h.nav.redirects(), vec![LoginView::Customer]);
}

#[tokio::test]
async fn unauthorized_admin_is_sent_to_admin_login() {
    let h = harness(Context::Admin).await;
    signed_in(&h);
    h.backend.on("GET", "/admin/dashboard/stats", Scripted::json(401, json!({})));

    let err = h.client.admin().dashboard().stats().await.unwrap_err();
    assert!(err.ends_session());
    assert_eq!(h.nav.last(), Some(LoginView::Admin));
    assert_eq!(LoginView::Admin.page(), "admin-login.html");
}

#[tokio::test]
async fn forbidden_in_admin_context_ends_admin_session() {
    let h = harness(Context::Admin).await;
    signed_in(&h);
    h.session.mark_admin().unwrap();
    h.backend.on("GET", "/admin/orders", Scripted::error(403, &ErrorBody::new("Forbidden")));

    let err = h
        .client
        .admin()
        .orders()
        .list(&ListQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::AdminSessionExpired { .. }));
    assert_eq!(err.to_string(), "Admin session expired. Please login again.");
    assert!(!h.session.is_authenticated());
    assert!(!h.session.is_admin());
    assert_eq!(h.nav.redirects(), vec![LoginView::Admin]);
}

#[tokio::test]
async fn forbidden_in_customer_context_is_plain_failure() {
    let h = harness(Context::Customer).await;
    signed_in(&h);
    h.backend.on(
        "GET",
        "/orders/ORD-1",
        Scripted::error(403, &ErrorBody::new("This order is not yours")),
    );

    let err = h.client.orders().get("ORD-1").await.unwrap_err();
    match &err {
        ApiError::RequestFailed { status, message, .. } => {
            assert_eq!(*status, 403);
            assert_eq!(message, "This order is not yours");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
    assert!(h.session.is_authenticated());
    assert!(h.nav.redirects().is_empty());
}

#[tokio::test]
async fn missing_message_uses_fallback() {
    let h = harness(Context::Customer).await;
    h.backend.on("GET", "/gallery", Scripted::error(500, &ErrorBody::default()));

    let err = h.client.gallery().list().await.unwrap_err();
    assert_eq!(err.envelope().message, "Request failed");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn html_unauthorized_still_expires_session() {
    let h = harness(Context::Customer).await;
    signed_in(&h);
    h.backend.on("GET", "/wishlist", Scripted::html(401, "<html>login</html>"));

    let err = h.client.wishlist().list().await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired { .. }));
    assert!(!h.session.is_authenticated());
}

#[tokio::test]
async fn non_json_success_is_network_error() {
    let h = harness(Context::Customer).await;
    signed_in(&h);
    h.backend.on("GET", "/settings/hero", Scripted::html(200, "<html>maintenance</html>"));

    let err = h.client.settings().get_hero().await.unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }));
    assert_eq!(err.status(), None);
    assert!(h.session.is_authenticated());
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let h = harness(Context::Customer).await;
    signed_in(&h);
    h.backend.on("DELETE", "/cart/clear", Scripted::empty(200));

    let got = h.client.cart().clear().await.unwrap();
    assert_eq!(got, Value::Null);
    assert_eq!(h.backend.last().method, "DELETE");
}

// ---------------------------------------------------------------------------
// Uploads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn product_image_upload_is_multipart() {
    let h = harness(Context::Admin).await;
    signed_in(&h);
    h.backend.on(
        "POST",
        "/admin/images/upload",
        Scripted::json(201, json!({"success": true, "image": {"id": 9}})),
    );

    let image = FilePart::new("ignored", "door.png", b"PNGDATA".to_vec()).with_mime("image/png");
    let got = h.client.admin().images().upload(3, image, true).await.unwrap();
    assert_eq!(got["image"]["id"], 9);

    let req = h.backend.last();
    let content_type = req.header("content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data"), "{content_type}");
    assert_eq!(req.header("authorization"), Some("Bearer tok-1"));
    assert_eq!(req.header("accept"), Some("application/json"));

    let body = req.body_text();
    assert!(body.contains("name=\"product_id\""));
    assert!(body.contains("name=\"image\"; filename=\"door.png\""));
    assert!(body.contains("name=\"is_primary\"\r\n\r\n1"));
    assert!(body.contains("PNGDATA"));
}

#[tokio::test]
async fn upload_failure_uses_upload_fallback() {
    let h = harness(Context::Admin).await;
    signed_in(&h);
    h.backend.on("POST", "/admin/gallery", Scripted::error(422, &ErrorBody::default().with_errors(json!({"image": ["too big"]}))));

    let form = Upload::new()
        .text("title", "Lobby")
        .file(FilePart::new("image", "lobby.jpg", vec![0xff, 0xd8]));
    let err = h.client.admin().gallery().upload(form).await.unwrap_err();
    let env = err.envelope();
    assert_eq!(env.message, "Upload failed");
    assert_eq!(env.status, Some(422));
    assert_eq!(env.errors["image"], vec!["too big"]);
}

#[tokio::test]
async fn upload_unauthorized_redirects() {
    let h = harness(Context::Admin).await;
    signed_in(&h);
    h.backend.on("POST", "/admin/settings/hero/video", Scripted::json(401, json!({})));

    let form = Upload::new().file(FilePart::new("video", "hero.mp4", vec![0; 16]));
    let err = h.client.admin().settings().upload_hero_video(form).await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired { .. }));
    assert_eq!(h.nav.redirects(), vec![LoginView::Admin]);
    assert!(!h.session.is_authenticated());
}

// ---------------------------------------------------------------------------
// Endpoint shapes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_default_address_uses_patch() {
    let h = harness(Context::Customer).await;
    signed_in(&h);
    h.client.addresses().set_default(5).await.unwrap();

    let req = h.backend.last();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/addresses/5/default");
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn hero_media_delete_sends_path() {
    let h = harness(Context::Admin).await;
    signed_in(&h);
    h.client
        .admin()
        .settings()
        .delete_hero_image("hero/images/a.jpg")
        .await
        .unwrap();

    let req = h.backend.last();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/admin/settings/hero/image");
    assert_eq!(req.json(), Some(json!({"path": "hero/images/a.jpg"})));
}

#[tokio::test]
async fn cart_add_sends_item() {
    let h = harness(Context::Customer).await;
    signed_in(&h);
    h.client.cart().add(11, 2, None).await.unwrap();
    let req = h.backend.last();
    assert_eq!(req.path, "/cart/items");
    assert_eq!(req.json().unwrap()["product_id"], 11);
    assert_eq!(req.json().unwrap()["quantity"], 2);

    h.client.cart().update(4, 5).await.unwrap();
    let req = h.backend.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("PUT", "/cart/items/4"));
    assert_eq!(req.json(), Some(json!({"quantity": 5})));
}

#[tokio::test]
async fn list_filters_reach_admin_lists() {
    let h = harness(Context::Admin).await;
    signed_in(&h);
    let query = ListQuery {
        status: Some("pending".into()),
        page: Some(2),
        ..ListQuery::default()
    };
    h.client.admin().reviews().list(&query).await.unwrap();
    assert_eq!(h.backend.last().path, "/admin/reviews?status=pending&page=2");

    h.client.admin().orders().update_status(8, "shipped").await.unwrap();
    let req = h.backend.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("PUT", "/admin/orders/8"));
    assert_eq!(req.json(), Some(json!({"status": "shipped"})));
}

// ---------------------------------------------------------------------------
// Convenience wrappers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_and_put_send_json() {
    let h = harness(Context::Customer).await;
    signed_in(&h);

    h.client.post("/reviews", &json!({"product_id": 2, "rating": 5})).await.unwrap();
    let req = h.backend.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("POST", "/reviews"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.json(), Some(json!({"product_id": 2, "rating": 5})));

    h.client.put("/profile", &json!({"name": "Ada L."})).await.unwrap();
    let req = h.backend.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("PUT", "/profile"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.json(), Some(json!({"name": "Ada L."})));
}

#[tokio::test]
async fn patch_sends_json_body() {
    let h = harness(Context::Customer).await;
    signed_in(&h);
    h.client.patch("/addresses/1/default", &json!({})).await.unwrap();

    let req = h.backend.last();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/addresses/1/default");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.body_text(), "{}");
}

#[tokio::test]
async fn delete_sends_no_body() {
    let h = harness(Context::Customer).await;
    signed_in(&h);
    h.client.delete("/cart/items/3").await.unwrap();

    let req = h.backend.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("DELETE", "/cart/items/3"));
    assert!(req.body.is_empty());
    assert_eq!(req.header("authorization"), Some("Bearer tok-1"));
}

#[tokio::test]
async fn delete_with_sends_json_body() {
    let h = harness(Context::Admin).await;
    signed_in(&h);
    h.client
        .delete_with("/admin/settings/hero/video", &json!({"path": "x"}))
        .await
        .unwrap();

    let req = h.backend.last();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/admin/settings/hero/video");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.json(), Some(json!({"path": "x"})));
}

#[tokio::test]
async fn upload_posts_multipart() {
    let h = harness(Context::Admin).await;
    signed_in(&h);
    let form = Upload::new()
        .text("caption", "Front porch")
        .file(FilePart::new("image", "porch.jpg", b"JPEGDATA".to_vec()).with_mime("image/jpeg"));
    h.client.upload("/admin/settings/hero/image", form).await.unwrap();

    let req = h.backend.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("POST", "/admin/settings/hero/image"));
    let content_type = req.header("content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data"), "{content_type}");
    let body = req.body_text();
    assert!(body.contains("name=\"caption\""));
    assert!(body.contains("Front porch"));
    assert!(body.contains("filename=\"porch.jpg\""));
    assert!(body.contains("JPEGDATA"));
}
