use axum::Json;

use solace_core::models::crisis::{CrisisResource, crisis_resources};

pub async fn list_crisis_resources() -> Json<Vec<CrisisResource>> {
    Json(crisis_resources())
}
