use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};

use brecho_catalog::NewCartItem;
use brecho_core::{CartItemId, DomainError, ProductId};

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::SessionContext;
use crate::middleware;

pub fn router() -> Router {
    // Session-scoped routes need the x-session-id header; line-item routes are
    // addressed by id alone.
    let by_session = Router::new()
        .route("/", get(list_cart).post(add_to_cart).delete(clear_cart))
        .route("/summary", get(cart_summary))
        .route_layer(axum::middleware::from_fn(middleware::session_middleware));

    let by_item = Router::new().route("/:id", patch(update_quantity).delete(remove_item));

    by_session.merge(by_item)
}

fn parse_item_id(id: &str) -> Result<CartItemId, axum::response::Response> {
    id.parse().map_err(errors::domain_error_to_response)
}

pub async fn list_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    match services.store().list_cart_items(session.session_id()) {
        Ok(lines) => (StatusCode::OK, Json(lines)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn cart_summary(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    match services.store().cart_summary(session.session_id()) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn add_to_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    body: Result<Json<dto::AddToCartRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let product_id: ProductId = match body.product_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if body.quantity == 0 {
        return errors::domain_error_to_response(DomainError::validation(
            "quantity must be at least 1",
        ));
    }

    // Products are never deleted, so this check cannot go stale before the insert.
    if services.store().get_product(&product_id).is_none() {
        return errors::domain_error_to_response(DomainError::not_found("product"));
    }

    let line = services.store().add_to_cart(NewCartItem {
        product_id,
        quantity: body.quantity,
        session_id: session.session_id().clone(),
    });
    tracing::info!(
        cart_item_id = %line.id,
        product_id = %line.product_id,
        quantity = line.quantity,
        "added to cart"
    );

    (StatusCode::CREATED, Json(line)).into_response()
}

pub async fn update_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateQuantityRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    // Zero or negative quantity removes the line; go through the removal path
    // so an unknown id still reports 404.
    if body.quantity <= 0 {
        return removal_response(services.store().remove_from_cart(&id));
    }

    match services.store().update_cart_item_quantity(&id, body.quantity) {
        Some(line) => (StatusCode::OK, Json(line)).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found("cart item")),
    }
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    removal_response(services.store().remove_from_cart(&id))
}

/// 200 `{"removed": true}` or 404; removals always carry a JSON body.
fn removal_response(removed: bool) -> axum::response::Response {
    if removed {
        (StatusCode::OK, Json(serde_json::json!({ "removed": true }))).into_response()
    } else {
        errors::domain_error_to_response(DomainError::not_found("cart item"))
    }
}

pub async fn clear_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let cleared = services.store().clear_cart(session.session_id());
    tracing::info!(session_id = %session.session_id(), "cart cleared");
    (StatusCode::OK, Json(serde_json::json!({ "cleared": cleared }))).into_response()
}
