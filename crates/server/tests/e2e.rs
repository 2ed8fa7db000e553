use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Use DATABASE_URL from environment; if not present, skip tests gracefully
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip e2e tests. Provide .env.test or env var.");
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {}", e);
    }

    let app: Router = routes::build_router(ServerState { db }, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_store_employee_lifecycle() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    // Create a store with a sparse payload
    let store_name = format!("Aquarium {}", Uuid::new_v4());
    let res = c
        .post(format!("{}/pet_store", app.base_url))
        .json(&json!({"petStoreName": store_name, "petStoreAddress": "1 Main St"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let store = res.json::<serde_json::Value>().await?;
    let store_id = store["petStoreId"].as_i64().expect("new store gets an id");
    assert_eq!(store["petStoreName"], store_name.as_str());

    // Attach an employee
    let res = c
        .post(format!("{}/pet_store/{}/employee", app.base_url, store_id))
        .json(&json!({"employeeFirstName": "Jo"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let emp = res.json::<serde_json::Value>().await?;
    assert!(emp["employeeId"].as_i64().is_some());
    assert_eq!(emp["employeeFirstName"], "Jo");

    // Full view carries the employee
    let res = c.get(format!("{}/pet_store/{}", app.base_url, store_id)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let full = res.json::<serde_json::Value>().await?;
    let employees = full["employees"].as_array().unwrap();
    assert!(employees.iter().any(|e| e["employeeFirstName"] == "Jo"));

    // Summary list clears relations
    let res = c.get(format!("{}/pet_store", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let list = res.json::<serde_json::Value>().await?;
    let summary = list
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["petStoreId"].as_i64() == Some(store_id))
        .expect("store listed");
    assert!(summary["employees"].as_array().unwrap().is_empty());
    assert!(summary["customers"].as_array().unwrap().is_empty());

    // PUT: path id wins, absent fields are cleared
    let renamed = format!("Reef World {}", Uuid::new_v4());
    let res = c
        .put(format!("{}/pet_store/{}", app.base_url, store_id))
        .json(&json!({"petStoreName": renamed}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["petStoreId"].as_i64(), Some(store_id));
    assert_eq!(updated["petStoreName"], renamed.as_str());
    assert!(updated["petStoreAddress"].is_null());

    // Delete and verify the 404 afterwards
    let res = c.delete(format!("{}/pet_store/{}", app.base_url, store_id)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["message"].as_str().unwrap().contains("successful"));

    let res = c.get(format!("{}/pet_store/{}", app.base_url, store_id)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["message"].as_str().unwrap().contains("not found"));
    Ok(())
}

#[tokio::test]
async fn e2e_customer_association_and_error_mapping() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    let create_store = |name: String| {
        let c = c.clone();
        let base = app.base_url.clone();
        async move {
            let res = c
                .post(format!("{}/pet_store", base))
                .json(&json!({"petStoreName": name}))
                .send()
                .await?;
            assert_eq!(res.status(), StatusCode::CREATED);
            let body = res.json::<serde_json::Value>().await?;
            Ok::<i64, anyhow::Error>(body["petStoreId"].as_i64().unwrap())
        }
    };

    let store_a = create_store(format!("Store A {}", Uuid::new_v4())).await?;
    let store_b = create_store(format!("Store B {}", Uuid::new_v4())).await?;

    // Customer signs up at store A
    let res = c
        .post(format!("{}/pet_store/{}/customer", app.base_url, store_a))
        .json(&json!({"customerFirstName": "Pat", "customerEmail": "pat@example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let customer = res.json::<serde_json::Value>().await?;
    let customer_id = customer["customerId"].as_i64().unwrap();

    // Same customer id under store B: invalid association -> 400
    let res = c
        .post(format!("{}/pet_store/{}/customer", app.base_url, store_b))
        .json(&json!({"customerId": customer_id, "customerFirstName": "Pat"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["message"].as_str().unwrap().contains("does not shop"));

    // Employee under a store that no longer exists -> 404
    let res = c.delete(format!("{}/pet_store/{}", app.base_url, store_b)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let res = c
        .post(format!("{}/pet_store/{}/employee", app.base_url, store_b))
        .json(&json!({"employeeFirstName": "Jo"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Deleting an unknown store maps to 404 too
    let res = c.delete(format!("{}/pet_store/{}", app.base_url, store_b)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Cleanup
    let res = c.delete(format!("{}/pet_store/{}", app.base_url, store_a)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}
