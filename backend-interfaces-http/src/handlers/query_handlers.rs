use axum::extract::State;
use axum::Json;

use backend_application::dtos::DataSnapshot;
use backend_application::queries::{data_queries, stats_queries};
use backend_application::AppState;
use backend_domain::StatsSnapshot;

pub async fn list_data(State(state): State<AppState>) -> Json<DataSnapshot> {
    Json(data_queries::list_data(&state).await)
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(stats_queries::get_stats(&state).await)
}
