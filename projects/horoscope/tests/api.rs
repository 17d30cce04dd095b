use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    extract::Path,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use projects_horoscope::config::AppConfig;
use projects_horoscope::db::create_pool;
use projects_horoscope::router;
use projects_horoscope::sign::Sign;

// Connection refused immediately, so enrichment degrades without waiting.
const UNREACHABLE_PROVIDER: &str = "http://127.0.0.1:1/api/horoscope";

fn test_app(dir: &TempDir, horoscope_base_url: &str) -> Result<Router> {
    let db_path = dir.path().join("horoscope-test.db");
    let database_url = db_path.to_string_lossy().to_string();
    let pool = create_pool(&database_url)?;

    let config = AppConfig {
        database_url,
        bind_addr: "127.0.0.1:0".parse()?,
        horoscope_base_url: horoscope_base_url.to_string(),
    };

    Ok(router(pool, config))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, String)> {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))?,
        None => Request::builder().method(method).uri(uri).body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;

    Ok((status, String::from_utf8(bytes.to_vec())?))
}

/// Local stand-in for the horoscope provider, serving the same JSON shape.
async fn spawn_stub_provider() -> Result<String> {
    let stub = Router::new().route(
        "/api/horoscope/{sign}",
        get(|Path(sign): Path<String>| async move {
            Json(json!({
                "horoscope": format!("Great day for {sign}."),
                "sign": sign,
                "date": "2026-08-08",
            }))
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, stub).await;
    });

    Ok(format!("http://{addr}/api/horoscope"))
}

#[tokio::test]
async fn setup_db_then_list_returns_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(&dir, UNREACHABLE_PROVIDER)?;

    let (status, body) = send(&app, "POST", "/setup_db", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body)?, json!({ "ok": true }));

    let (status, body) = send(&app, "GET", "/users", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Vec<Value>>(&body)?, Vec::<Value>::new());

    Ok(())
}

#[tokio::test]
async fn create_with_invalid_sign_returns_400_and_persists_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(&dir, UNREACHABLE_PROVIDER)?;
    send(&app, "POST", "/setup_db", None).await?;

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Bob", "sign": "ophiuchus" })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Invalid zodiac sign"));
    for sign in Sign::ALL {
        assert!(body.contains(sign.as_str()));
    }

    let (_, body) = send(&app, "GET", "/users", None).await?;
    assert_eq!(serde_json::from_str::<Vec<Value>>(&body)?, Vec::<Value>::new());

    Ok(())
}

#[tokio::test]
async fn create_lowercases_sign_and_survives_enrichment_failure() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(&dir, UNREACHABLE_PROVIDER)?;
    send(&app, "POST", "/setup_db", None).await?;

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Ann", "sign": "LEO" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body)?, json!({ "ok": true }));

    let (status, body) = send(&app, "GET", "/users/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    let user: Value = serde_json::from_str(&body)?;
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "Ann");
    assert_eq!(user["sign"], "leo");
    assert_eq!(user["horoscope"], Value::Null);

    Ok(())
}

#[tokio::test]
async fn every_sign_in_the_set_is_accepted() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(&dir, UNREACHABLE_PROVIDER)?;
    send(&app, "POST", "/setup_db", None).await?;

    for sign in Sign::ALL {
        let (status, _) = send(
            &app,
            "POST",
            "/users",
            Some(json!({ "name": "Ann", "sign": sign.as_str().to_uppercase() })),
        )
        .await?;
        assert_eq!(status, StatusCode::OK, "sign {sign} was rejected");
    }

    let (_, body) = send(&app, "GET", "/users", None).await?;
    let all: Vec<Value> = serde_json::from_str(&body)?;
    assert_eq!(all.len(), Sign::ALL.len());
    for (user, sign) in all.iter().zip(Sign::ALL) {
        assert_eq!(user["sign"], sign.as_str());
    }

    Ok(())
}

#[tokio::test]
async fn list_orders_users_by_id() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(&dir, UNREACHABLE_PROVIDER)?;
    send(&app, "POST", "/setup_db", None).await?;

    for (name, sign) in [("Ann", "leo"), ("Bob", "virgo"), ("Cal", "aries")] {
        send(
            &app,
            "POST",
            "/users",
            Some(json!({ "name": name, "sign": sign })),
        )
        .await?;
    }

    let (_, body) = send(&app, "GET", "/users", None).await?;
    let all: Vec<Value> = serde_json::from_str(&body)?;
    let ids: Vec<i64> = all.iter().map(|user| user["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(all[0]["name"], "Ann");
    assert_eq!(all[2]["name"], "Cal");

    Ok(())
}

#[tokio::test]
async fn get_unknown_user_returns_404() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(&dir, UNREACHABLE_PROVIDER)?;
    send(&app, "POST", "/setup_db", None).await?;

    let (status, body) = send(&app, "GET", "/users/42", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "User not found");

    Ok(())
}

#[tokio::test]
async fn delete_existing_user_removes_it() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(&dir, UNREACHABLE_PROVIDER)?;
    send(&app, "POST", "/setup_db", None).await?;
    send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Ann", "sign": "leo" })),
    )
    .await?;

    let (status, body) = send(&app, "DELETE", "/users/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body)?,
        json!({ "ok": true, "message": "User 1 deleted" })
    );

    let (status, _) = send(&app, "GET", "/users/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/users", None).await?;
    assert_eq!(serde_json::from_str::<Vec<Value>>(&body)?, Vec::<Value>::new());

    Ok(())
}

#[tokio::test]
async fn delete_unknown_user_returns_404() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(&dir, UNREACHABLE_PROVIDER)?;
    send(&app, "POST", "/setup_db", None).await?;

    let (status, body) = send(&app, "DELETE", "/users/42", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "User not found");

    Ok(())
}

#[tokio::test]
async fn enrichment_success_stores_horoscope_text() -> Result<()> {
    let provider_url = spawn_stub_provider().await?;
    let dir = TempDir::new()?;
    let app = test_app(&dir, &provider_url)?;
    send(&app, "POST", "/setup_db", None).await?;

    let (status, _) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Ann", "sign": "leo" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/users/1", None).await?;
    let user: Value = serde_json::from_str(&body)?;
    assert_eq!(user["horoscope"], "Great day for leo.");

    Ok(())
}

#[tokio::test]
async fn setup_db_resets_existing_data() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(&dir, UNREACHABLE_PROVIDER)?;
    send(&app, "POST", "/setup_db", None).await?;
    send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Ann", "sign": "leo" })),
    )
    .await?;

    send(&app, "POST", "/setup_db", None).await?;

    let (_, body) = send(&app, "GET", "/users", None).await?;
    assert_eq!(serde_json::from_str::<Vec<Value>>(&body)?, Vec::<Value>::new());

    Ok(())
}
