use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::cart::core::product::ProductId;
use crate::shell::state::AppState;

/// Adds one unit of the product. The response is the resulting cart; rejections and failures are
/// reported through the notifier, not the status code.
pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    state.cart.add_product(product_id).await;
    Json(state.cart.cart().await)
}
