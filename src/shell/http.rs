use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::cart::use_cases::add_product::inbound::http as add_http;
use crate::modules::cart::use_cases::get_cart::inbound::http as get_http;
use crate::modules::cart::use_cases::remove_product::inbound::http as remove_http;
use crate::modules::cart::use_cases::update_product_amount::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cart", get(get_http::handle))
        .route(
            "/cart/products/{product_id}",
            post(add_http::handle)
                .delete(remove_http::handle)
                .patch(update_http::handle),
        )
        .with_state(state)
}
