//! Admin flows: gate, dashboard, order actions, CSV export.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use tower::ServiceExt;

use merch_store_core::OrderStatus;
use merch_store_integration_tests::{
    TEST_ADMIN_PASSWORD, body_string, get, location, post_form, session_cookie, test_app,
};
use merch_store_storefront::store::OrderStore;

/// Place an order through the storefront, returning its order number.
///
/// Order numbers are time-derived, so placements are spaced out by a few
/// milliseconds to keep them distinct.
async fn place_order(app: &axum::Router, name: &str) -> String {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let response = app
        .clone()
        .oneshot(post_form("/cart/add", "item_id=tshirts", None))
        .await
        .unwrap();
    let cookie = session_cookie(&response).expect("session cookie");

    let response = app
        .clone()
        .oneshot(post_form(
            "/cart/checkout",
            &format!("customer_name={name}&size=L"),
            Some(&cookie),
        ))
        .await
        .unwrap();
    let confirmation = location(&response).expect("redirect target");
    confirmation
        .rsplit('/')
        .next()
        .expect("order number")
        .to_owned()
}

/// Log in to the admin gate, returning the authenticated session cookie.
async fn admin_login(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(post_form(
            "/admin/login",
            &format!("password={TEST_ADMIN_PASSWORD}"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/admin"));
    session_cookie(&response).expect("session cookie")
}

#[tokio::test]
async fn dashboard_requires_the_gate() {
    let (app, _store) = test_app();
    let response = app.oneshot(get("/admin", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/admin/login"));
}

#[tokio::test]
async fn wrong_password_keeps_the_gate_closed() {
    let (app, _store) = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/admin/login", "password=wrong", None))
        .await
        .unwrap();
    // the form re-renders; no redirect to the dashboard
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    assert!(body_string(response).await.contains("didn't work"));

    // even with whatever session that attempt produced, the gate is closed
    let response = app
        .oneshot(get("/admin", cookie.as_deref()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/admin/login"));
}

#[tokio::test]
async fn login_survives_subsequent_requests_until_logout() {
    let (app, _store) = test_app();
    let cookie = admin_login(&app).await;

    // the gate stays open across requests on the same session
    let response = app
        .clone()
        .oneshot(get("/admin", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_form("/admin/logout", "", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.oneshot(get("/admin", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/admin/login"));
}

#[tokio::test]
async fn dashboard_shows_summary_and_orders() {
    let (app, _store) = test_app();
    place_order(&app, "Jesse").await;
    place_order(&app, "Robin").await;
    let cookie = admin_login(&app).await;

    let response = app.oneshot(get("/admin", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Jesse"));
    assert!(body.contains("Robin"));
    // 2 x (8.44 + 1.25)
    assert!(body.contains("$19.38"));
}

#[tokio::test]
async fn completing_an_order_flips_only_that_order() {
    let (app, store) = test_app();
    let first = place_order(&app, "Jesse").await;
    place_order(&app, "Robin").await;
    let cookie = admin_login(&app).await;

    let response = app
        .clone()
        .oneshot(post_form(
            &format!("/admin/orders/{first}/complete"),
            "",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let orders = store.list().unwrap();
    let statuses: Vec<OrderStatus> = orders.iter().map(|o| o.status).collect();
    assert!(statuses.contains(&OrderStatus::Completed));
    assert!(statuses.contains(&OrderStatus::Pending));

    // status filter narrows the table
    let response = app
        .oneshot(get("/admin?status=Completed", Some(&cookie)))
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(body.contains("Jesse"));
    assert!(!body.contains("Robin"));
}

#[tokio::test]
async fn completing_an_unknown_order_is_a_404() {
    let (app, store) = test_app();
    place_order(&app, "Jesse").await;
    let cookie = admin_login(&app).await;
    let before = store.list().unwrap();

    let response = app
        .oneshot(post_form(
            "/admin/orders/ORD-999999/complete",
            "",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.list().unwrap(), before);
}

#[tokio::test]
async fn deleting_an_order_removes_it() {
    let (app, store) = test_app();
    let first = place_order(&app, "Jesse").await;
    let cookie = admin_login(&app).await;

    let response = app
        .oneshot(post_form(
            &format!("/admin/orders/{first}/delete"),
            "",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(store.list().unwrap().is_empty());
}

#[tokio::test]
async fn csv_export_has_a_header_and_one_row_per_order() {
    let (app, _store) = test_app();
    place_order(&app, "Jesse").await;
    place_order(&app, "Robin").await;
    let cookie = admin_login(&app).await;

    let response = app
        .oneshot(get("/admin/orders.csv", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/csv")
    );
    assert_eq!(
        response
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"orders.csv\"")
    );

    let body = body_string(response).await;
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines.first().copied(),
        Some("Order Number,Customer,Size,Date,Total,Status")
    );
    for row in lines.iter().skip(1) {
        assert_eq!(row.split(',').count(), 6);
        assert!(row.ends_with("Pending"));
    }
}
