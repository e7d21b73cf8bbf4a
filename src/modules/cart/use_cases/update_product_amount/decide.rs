use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::{DecideError, Decision};
use crate::modules::cart::core::events::CartEvent;
use crate::modules::cart::core::stock::Stock;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;

pub fn decide_update_product_amount(
    _cart: &Cart,
    command: &UpdateProductAmount,
    stock: &Stock,
) -> Decision {
    if !stock.covers(command.amount) {
        return Decision::Rejected {
            reason: DecideError::InsufficientStock {
                product_id: command.product_id,
                requested: command.amount,
                available: stock.amount,
            },
        };
    }
    Decision::Accepted {
        events: vec![CartEvent::ProductAmountUpdated {
            product_id: command.product_id,
            amount: command.amount,
        }],
    }
}
