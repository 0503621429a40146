//! Shared handler test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use shopcarts_app::{
    context::AppContext,
    domain::shopcarts::{
        MockShopcartsService,
        models::{CartItem, Shopcart},
    },
};

use crate::state::State;

/// Build a service with the mocked shopcarts service injected as state.
pub(crate) fn shopcarts_service(service: MockShopcartsService, router: Router) -> Service {
    let app = AppContext {
        shopcarts: Arc::new(service),
    };

    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(router),
    )
}

pub(crate) fn make_shopcart(id: i64, customer_id: i64) -> Shopcart {
    Shopcart {
        id: id.into(),
        customer_id: customer_id.into(),
        items: Vec::new(),
    }
}

pub(crate) fn make_item(shopcart_id: i64, product_id: i64, quantity: u32, price: f64) -> CartItem {
    CartItem {
        shopcart_id: shopcart_id.into(),
        product_id: product_id.into(),
        quantity,
        price,
    }
}
