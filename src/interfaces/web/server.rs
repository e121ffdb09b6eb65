use super::{
    PlantState, create_plant, delete_plant, get_plant, health, list_plants, not_found,
    update_plant,
};
use crate::domain::plant::PlantRepository;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// APIルーターを構築
pub fn build_router(plants: Arc<dyn PlantRepository>) -> Router {
    let state = Arc::new(PlantState::new(plants));

    let api = Router::new()
        .route("/health", get(health))
        .route("/plants", get(list_plants).post(create_plant))
        .route(
            "/plants/{id}",
            get(get_plant).patch(update_plant).delete(delete_plant),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Webサーバーを起動し、シャットダウンシグナルまで待機する
pub async fn create_server(
    host: &str,
    port: u16,
    plants: Arc<dyn PlantRepository>,
) -> anyhow::Result<()> {
    info!("Starting rootnote API server...");

    // Parse socket address
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let app = build_router(plants);

    let listener = TcpListener::bind(&addr).await?;

    info!("API listening on http://{addr}");
    println!("🌱 API server started successfully!");
    println!("   URL: http://{addr}/api/plants");
    println!("   Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::SqlitePlantRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let store = SqlitePlantRepository::open_in_memory().unwrap();
        build_router(Arc::new(store))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = app();

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/plants",
            Some(json!({ "commonName": "Basil" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["id"], 1);
        assert_eq!(created["commonName"], "Basil");
        assert!(created["variety"].is_null());
        assert!(created["lastWateredOn"].is_null());

        let (status, fetched) = send(&app, Method::GET, "/api/plants/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_or_empty_common_name() {
        let app = app();

        for body in [json!({}), json!({ "commonName": "" }), json!({ "variety": "Genovese" })] {
            let (status, error) = send(&app, Method::POST, "/api/plants", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error["status_code"], 400);
        }

        let (_, plants) = send(&app, Method::GET, "/api/plants", None).await;
        assert_eq!(plants, json!([]));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/plants")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"commonName\":"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_returns_all_plants() {
        let app = app();
        for name in ["Basil", "Mint", "Tomato"] {
            send(&app, Method::POST, "/api/plants", Some(json!({ "commonName": name }))).await;
        }

        let (status, plants) = send(&app, Method::GET, "/api/plants", None).await;
        assert_eq!(status, StatusCode::OK);
        let plants = plants.as_array().unwrap();
        assert_eq!(plants.len(), 3);
        assert_eq!(plants[2]["commonName"], "Tomato");
    }

    #[tokio::test]
    async fn test_patch_updates_only_supplied_fields() {
        let app = app();
        send(
            &app,
            Method::POST,
            "/api/plants",
            Some(json!({ "commonName": "Basil", "notes": "kitchen" })),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/plants/1",
            Some(json!({ "variety": "Genovese" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changes"], 1);
        assert_eq!(body["plant"]["variety"], "Genovese");
        assert_eq!(body["plant"]["commonName"], "Basil");
        assert_eq!(body["plant"]["notes"], "kitchen");
    }

    #[tokio::test]
    async fn test_patch_accepts_full_record_echoed_by_client() {
        let app = app();
        let (_, mut plant) = send(
            &app,
            Method::POST,
            "/api/plants",
            Some(json!({ "commonName": "Basil" })),
        )
        .await;
        plant["lastWateredOn"] = json!("2024-05-01");

        let (status, body) = send(&app, Method::PATCH, "/api/plants/1", Some(plant)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["plant"]["lastWateredOn"], "2024-05-01");
        assert_eq!(body["plant"]["id"], 1);
    }

    #[tokio::test]
    async fn test_patch_rejects_empty_body() {
        let app = app();
        send(&app, Method::POST, "/api/plants", Some(json!({ "commonName": "Basil" }))).await;

        let (status, error) = send(&app, Method::PATCH, "/api/plants/1", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["message"], "No fields to update");
    }

    #[tokio::test]
    async fn test_missing_ids_return_404() {
        let app = app();

        let (status, _) = send(&app, Method::GET, "/api/plants/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::PATCH,
            "/api/plants/7",
            Some(json!({ "notes": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, error) = send(&app, Method::DELETE, "/api/plants/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["error"], "Not Found");
    }

    #[tokio::test]
    async fn test_invalid_id_returns_400() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/api/plants/basil", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete() {
        let app = app();
        send(&app, Method::POST, "/api/plants", Some(json!({ "commonName": "Basil" }))).await;

        let (status, body) = send(&app, Method::DELETE, "/api/plants/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changes"], 1);

        let (_, plants) = send(&app, Method::GET, "/api/plants", None).await;
        assert_eq!(plants, json!([]));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/plants/unknown/route", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status_code"], 404);
    }
}
