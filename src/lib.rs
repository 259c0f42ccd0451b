use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

/// Shared application state. One pool, created at startup and cloned
/// (cheaply, it is reference-counted) into every service.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

pub fn app(pool: PgPool) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(user_routes())
        .merge(tax_profile_routes())
        .merge(invoice_routes())
        .merge(invoice_item_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pool })
}

fn user_routes() -> Router<AppState> {
    use axum::routing::{delete, put};
    use handlers::users;

    // create and login stay public; everything else requires a bearer token
    let public = Router::new()
        .route("/users/create", post(users::create_user))
        .route("/users/login", post(users::login));

    let protected = Router::new()
        .route("/users", get(users::get_all_users))
        .route("/users/paginated", get(users::get_users_paginated))
        .route("/users/email/:email", get(users::get_user_by_email))
        .route("/users/:id", get(users::get_user_by_id))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user))
        .route_layer(axum::middleware::from_fn(middleware::auth::bearer_auth));

    public.merge(protected)
}

fn tax_profile_routes() -> Router<AppState> {
    use axum::routing::{delete, put};
    use handlers::tax_profiles;

    let public =
        Router::new().route("/tax-profiles/create", post(tax_profiles::create_tax_profile));

    let protected = Router::new()
        .route("/tax-profiles", get(tax_profiles::get_all_tax_profiles))
        .route("/tax-profiles/paginated", get(tax_profiles::get_tax_profiles_paginated))
        .route("/tax-profiles/:id", get(tax_profiles::get_tax_profile_by_id))
        .route("/tax-profiles/:id", put(tax_profiles::update_tax_profile))
        .route("/tax-profiles/:id", delete(tax_profiles::delete_tax_profile))
        .route_layer(axum::middleware::from_fn(middleware::auth::bearer_auth));

    public.merge(protected)
}

fn invoice_routes() -> Router<AppState> {
    use axum::routing::{delete, put};
    use handlers::invoices;

    let public = Router::new().route("/invoices/create", post(invoices::create_invoice));

    let protected = Router::new()
        .route("/invoices", get(invoices::get_all_invoices))
        .route("/invoices/paginated", get(invoices::get_invoices_paginated))
        .route("/invoices/:id", get(invoices::get_invoice_by_id))
        .route("/invoices/:id", put(invoices::update_invoice))
        .route("/invoices/:id", delete(invoices::delete_invoice))
        .route_layer(axum::middleware::from_fn(middleware::auth::bearer_auth));

    public.merge(protected)
}

fn invoice_item_routes() -> Router<AppState> {
    use axum::routing::{delete, put};
    use handlers::invoice_items;

    let public =
        Router::new().route("/invoice-items/create", post(invoice_items::create_invoice_item));

    let protected = Router::new()
        .route("/invoice-items", get(invoice_items::get_all_invoice_items))
        .route("/invoice-items/paginated", get(invoice_items::get_invoice_items_paginated))
        .route("/invoice-items/:id", get(invoice_items::get_invoice_item_by_id))
        .route("/invoice-items/:id", put(invoice_items::update_invoice_item))
        .route("/invoice-items/:id", delete(invoice_items::delete_invoice_item))
        .route_layer(axum::middleware::from_fn(middleware::auth::bearer_auth));

    public.merge(protected)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Invoicing API",
        "version": version,
        "endpoints": {
            "users": "/users, /users/paginated, /users/:id, /users/email/:email (protected); /users/create, /users/login (public)",
            "tax_profiles": "/tax-profiles/* (protected except /create)",
            "invoices": "/invoices/* (protected except /create)",
            "invoice_items": "/invoice-items/* (protected except /create)",
            "health": "/health (public)"
        }
    }))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match db::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
