use axum::Json;

// GET /
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "running",
        "service": "Garagebook Booking API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
