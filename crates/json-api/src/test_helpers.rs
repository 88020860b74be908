//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use solarcart_app::{
    context::{AppContext, CartBackend},
    domain::{
        carts::{CartsService, MockCartsService},
        catalog::{CatalogService, MockCatalogService},
    },
};

use crate::state::State;

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_products().never();
    catalog.expect_get_product().never();

    catalog
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_list_items().never();
    carts.expect_get_item().never();
    carts.expect_add_item().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear().never();

    carts
}

pub(crate) fn state_with(
    carts: Arc<dyn CartsService>,
    catalog: Arc<dyn CatalogService>,
) -> Arc<State> {
    State::from_app_context(AppContext {
        carts,
        catalog,
        cart_backend: CartBackend::Memory,
    })
}

fn service_with(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

/// Service for cart handler tests; the catalog must not be touched.
pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service_with(
        state_with(Arc::new(carts), Arc::new(strict_catalog_mock())),
        route,
    )
}

/// Service for catalog handler tests; the cart must not be touched.
pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service_with(
        state_with(Arc::new(strict_carts_mock()), Arc::new(catalog)),
        route,
    )
}
