use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateProductAmountBody {
    pub amount: u32,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    body: Result<Json<UpdateProductAmountBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    state
        .cart
        .update_product_amount(UpdateProductAmount {
            product_id,
            amount: body.amount,
        })
        .await;
    Json(state.cart.cart().await).into_response()
}
