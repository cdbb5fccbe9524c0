use axum::Router;

mod api_key;
mod health;

pub fn configure_routes(router: Router) -> Router {
    router
        .merge(health::configure())
        .nest("/api", api_key::configure())
}
