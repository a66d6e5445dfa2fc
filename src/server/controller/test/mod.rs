use axum::{
    body::to_bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, factory};

use crate::server::state::AppState;


/// Reads a JSON response body into the given DTO type.
async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
