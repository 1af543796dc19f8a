/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cloning is cheap: the pool is reference-counted internally. Server
/// configuration is consumed when the router is built and is not kept here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gazette_db::DbPool,
}
