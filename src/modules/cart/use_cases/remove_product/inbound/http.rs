use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::cart::core::product::ProductId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    state.cart.remove_product(product_id).await;
    Json(state.cart.cart().await)
}
