/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async Seoul sales SDK instance. Handles dispatching blocking SDK
    /// operations to a thread pool internally.
    pub sdk: seoul_sales_sdk::AsyncSeoulSalesSdk,
}
