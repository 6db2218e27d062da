//! Route handlers.
//!
//! Cart-touching handlers all follow the same shape: open the session from
//! the request headers, derive the next cart with the pure primitives, then
//! commit the session into a `Set-Cookie` header. A rejected request
//! returns before anything is committed, so the previously stored cart
//! survives untouched.

use axum::extract::{Path, Query, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use storefront_commerce::browse::{Pagination, SortKey, PAGE_SIZE};
use storefront_commerce::cart::{resolve_quantity, Cart, CartItem, PricingBreakdown};
use storefront_data::{Product, ProductQuery};
use storefront_session::CartSession;

use crate::error::AppError;
use crate::intent::{CartForm, CartIntent};
use crate::state::AppState;

/// Uniform success body for cart mutations.
#[derive(Debug, Serialize)]
pub struct SuccessBody {
    pub status: &'static str,
    pub message: String,
}

impl SuccessBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}

/// Query parameters for the listing page.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

/// Listing page payload.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub products: Vec<Product>,
    pub total: i64,
    pub categories: Vec<String>,
    pub pagination: Pagination,
    /// Page numbers for the page controls.
    pub pages: Vec<i64>,
    pub sort: &'static str,
}

/// Cart page payload.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub cart: Cart,
    pub item_count: i64,
    #[serde(flatten)]
    pub pricing: PricingBreakdown,
}

/// `GET /`: catalog listing with filter, sort and pagination.
pub async fn listing(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ListingResponse>, AppError> {
    let sort = SortKey::parse(params.sort.as_deref().unwrap_or_default());
    let page = params
        .page
        .as_deref()
        .and_then(|p| p.parse::<i64>().ok())
        .unwrap_or(1)
        .max(1);
    let skip = (page - 1) * PAGE_SIZE;

    let query = ProductQuery::page(params.category.clone(), sort, PAGE_SIZE, skip);

    // Independent reads, fetched concurrently.
    let (listing, categories) = tokio::try_join!(
        state.catalog.list_products(&query),
        state.catalog.list_categories(),
    )?;

    let pagination = Pagination::new(page, listing.total);

    Ok(Json(ListingResponse {
        products: listing.products,
        total: listing.total,
        categories,
        pages: pagination.visible_pages(),
        pagination,
        sort: sort.as_str(),
    }))
}

/// `GET /products/{id}`: product detail.
pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    // A non-numeric detail id is just an unknown resource.
    let id = parse_product_id(&id).ok_or(AppError::NotFound)?;
    let product = state.catalog.get_product(id).await?;
    Ok(Json(product))
}

/// `GET /cart`: the session's cart plus its derived pricing.
pub async fn view_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CartResponse>, AppError> {
    let session = CartSession::open(cookie_header(&headers), &state.sessions);
    let cart = session.cart();

    Ok(Json(CartResponse {
        item_count: cart.item_count(),
        pricing: PricingBreakdown::for_cart(&cart),
        cart,
    }))
}

/// `POST /cart`: form-intent cart mutations.
pub async fn cart_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CartForm>,
) -> Result<impl IntoResponse, AppError> {
    let intent = CartIntent::try_from(form)?;
    let mut session = CartSession::open(cookie_header(&headers), &state.sessions);

    let message = match intent {
        CartIntent::UpdateQuantity { item_id, quantity } => {
            session.set_cart(session.cart().with_quantity(item_id, quantity));
            "Cart updated"
        }
        CartIntent::RemoveItem { item_id } => {
            session.set_cart(session.cart().without(item_id));
            "Item removed from cart"
        }
        CartIntent::ClearCart => {
            session.clear();
            "Cart cleared"
        }
    };

    committed(&session, &state, SuccessBody::new(message))
}

/// Form body for add-to-cart.
#[derive(Debug, Default, Deserialize)]
pub struct AddToCartForm {
    #[serde(default)]
    pub quantity: Option<String>,
}

/// `POST /products/{id}/cart`: add a product to the cart.
///
/// Stock is fetched fresh from the catalog and never trusted from the
/// client; the requested quantity is clamped server-side before the cart
/// ever sees it.
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_product_id(&id)
        .ok_or_else(|| AppError::Validation("Invalid product".to_owned()))?;
    let product = state.catalog.get_product(id).await?;

    let requested = form
        .quantity
        .as_deref()
        .and_then(|q| q.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN);
    let quantity = resolve_quantity(requested, product.stock.unwrap_or(0))?;

    let mut session = CartSession::open(cookie_header(&headers), &state.sessions);
    let cart = session.cart().upsert(CartItem {
        id: product.id,
        title: product.title.clone(),
        price: product.price,
        thumbnail: product.thumbnail.clone(),
        quantity,
    });
    session.set_cart(cart);

    tracing::info!(product_id = id, quantity, "added to cart");
    committed(
        &session,
        &state,
        SuccessBody::new(format!("Added {} to cart", product.title)),
    )
}

/// Commit the session and attach it to a success response.
fn committed(
    session: &CartSession,
    state: &AppState,
    body: SuccessBody,
) -> Result<impl IntoResponse, AppError> {
    let cookie = session.commit(&state.sessions)?;
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(body)))
}

fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(COOKIE).and_then(|value| value.to_str().ok())
}

fn parse_product_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
