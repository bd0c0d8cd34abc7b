// dinein-client/tests/catalog_and_account.rs
// 菜单、桌台、顾客与订阅集成测试

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use dinein_client::menu::{self, MenuView};
use dinein_client::models::{CategoryImage, TableStatus};
use dinein_client::plans::{BuyDecision, PlansView};
use dinein_client::profile::ProfileEditor;
use dinein_client::tables::{TableBoard, TableRefresher, fetch_tables};
use dinein_client::{ClientConfig, ClientError, DineInClient, qr};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> DineInClient {
    let client = DineInClient::new(ClientConfig::new(server.uri())).unwrap();
    client.session().set_business_id(1).unwrap();
    client
}

#[tokio::test]
async fn test_tables_and_unexpected_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tables/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tables": [
                { "id": 1, "tableNumber": 1, "status": "Booked" },
                { "id": 2, "tableNumber": 2, "status": "Available" }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tables/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rows": [] })))
        .mount(&server)
        .await;

    let client = client(&server);
    let tables = fetch_tables(&client).await.unwrap();
    assert_eq!(tables.len(), 2);
    assert!(tables[0].is_booked());
    assert_eq!(tables[1].status, TableStatus::Available);

    let err = client.tables(2).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(ref m) if m == "Unexpected response format"));
}

#[tokio::test]
async fn test_table_refresher_publishes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tables/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tables": [{ "id": 1, "tableNumber": 1, "status": "Available" }]
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let refresher = TableRefresher::spawn(&client, Duration::from_millis(20));
    let mut rx = refresher.subscribe();

    let board = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            rx.changed().await.unwrap();
            let board = rx.borrow().clone();
            if let TableBoard::Ready(_) = board {
                return board;
            }
        }
    })
    .await
    .unwrap();
    assert_eq!(board.tables().len(), 1);

    refresher.stop().await;
    assert!(server.received_requests().await.unwrap_or_default().len() >= 1);
}

#[tokio::test]
async fn test_menu_load_and_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("businessId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Veg Saoji", "price": 180.0, "category": "Main Course",
              "metadata": { "spiciness": 4, "images": ["/veg.png"] } },
            { "id": 2, "name": "Lassi", "price": 60.0, "category": "Drinks", "isActive": false }
        ])))
        .mount(&server)
        .await;

    let client = client(&server);
    let mut view = MenuView::load(&client).await.unwrap();
    assert_eq!(view.dishes().len(), 2);

    view.select_category("main course");
    let visible = view.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].spiciness, 4);
    assert_eq!(visible[0].image, "/veg.png");

    view.add_to_cart(1).unwrap();
    let staged = client.session().newly_added_items();
    assert_eq!(staged[0].name, "Veg Saoji");

    view.set_active(2, true);
    view.remove(1);
    assert_eq!(view.dishes().len(), 1);
    assert!(view.dishes()[0].is_active);
}

#[tokio::test]
async fn test_category_crud() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(query_param("businessId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 5, "name": "Drinks" }])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .and(header("authorization", "Bearer staff-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 6 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/categories/5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/categories/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.session().set_auth_token("staff-token").unwrap();

    let categories = menu::list_categories(&client).await.unwrap();
    assert_eq!(categories[0].name, "Drinks");

    let image = CategoryImage {
        file_name: "desserts.png".into(),
        mime_type: "image/png".into(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    };
    menu::add_category(&client, "Desserts", Some(image)).await.unwrap();
    menu::edit_category(&client, 5, "Cold Drinks", None).await.unwrap();
    menu::delete_category(&client, 5).await.unwrap();
}

#[tokio::test]
async fn test_profile_edit_and_save() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/me"))
        .and(header("authorization", "Bearer cust-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9, "name": "Asha", "email": "asha@example.com", "mobile": "9876543210", "points": 12
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/customers/customer/9/full"))
        .and(body_json(json!({ "name": "Asha K", "mobile": "9876543210" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(matches!(ProfileEditor::load(&client).await, Err(ClientError::Unauthorized)));

    client.session().set_customer_token("cust-token").unwrap();
    let mut editor = ProfileEditor::load(&client).await.unwrap();
    editor.start_editing();
    editor.set_name("Asha K");
    editor.save().await.unwrap();

    assert!(!editor.is_editing());
    assert_eq!(editor.customer().name, "Asha K");
    editor.start_editing();
    editor.set_name("Someone else");
    editor.cancel();
    assert_eq!(editor.form().name, "Asha K");
}

#[tokio::test]
async fn test_plans_with_active_subscription() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/status/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subscription": { "status": "active", "name": "Basic", "expiresAt": "2026-12-31" }
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let claims = URL_SAFE_NO_PAD.encode(json!({ "businessId": 1, "role": "owner" }).to_string());
    client.session().set_auth_token(&format!("h.{}.s", claims)).unwrap();

    let view = PlansView::load(&client).await;
    let sub = view.subscription().unwrap();
    assert_eq!(sub.expires_at.as_deref(), Some("2026-12-31"));

    let plans = view.plans();
    assert_eq!(view.buy(&plans[1]), BuyDecision::AlreadySubscribed);
    match view.buy(&plans[2]) {
        BuyDecision::Checkout { plan, redirect } => {
            assert_eq!(plan.id, "pro");
            assert_eq!(redirect.path, "/PlanCheckoutPage");
        }
        other => panic!("unexpected decision: {:?}", other),
    }
}

#[tokio::test]
async fn test_dashboard_reads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("month", "2026-03"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
        .mount(&server)
        .await;
    for (endpoint, body) in [
        ("/api/customers", json!([{ "id": 1 }])),
        ("/api/ratings", json!({ "average": 4.5 })),
        ("/api/top-dishes", json!([{ "name": "Veg Saoji", "count": 30 }])),
    ] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }

    let client = client(&server);
    assert_eq!(client.orders_for_month(Some("2026-03")).await.unwrap()[0]["id"], 1);
    assert!(client.customers().await.unwrap().is_array());
    assert_eq!(client.ratings().await.unwrap()["average"], 4.5);
    assert_eq!(client.top_dishes().await.unwrap()[0]["count"], 30);
}

#[test]
fn test_qr_onboarding_and_logout() {
    let client = DineInClient::new(ClientConfig::default()).unwrap();
    let redirect = qr::apply_table_qr(client.session(), "12/table-7").unwrap();
    assert_eq!(redirect.path, "/restaurant");
    assert_eq!(client.session().business_id(), Some(12));
    assert_eq!(client.session().table_number(), Some(7));

    assert!(qr::apply_table_qr(client.session(), "garbage").is_err());

    client.session().set_auth_token("t").unwrap();
    client.session().set_role("staff").unwrap();
    let redirect = client.logout().unwrap();
    assert_eq!(redirect.path, "/login");
    assert!(client.session().auth_token().is_none());
    assert!(client.session().role().is_none());
}
