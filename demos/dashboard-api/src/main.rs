mod error;
mod routes;
mod state;

use std::env;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

#[tokio::main]
async fn main() {
    let source = env::args()
        .nth(1)
        .or_else(|| env::var("SEOUL_SALES_CSV").ok());
    let Some(source) = source else {
        eprintln!("Usage: seoul-dashboard-api <sales.csv>");
        eprintln!("   or: SEOUL_SALES_CSV=<sales.csv> seoul-dashboard-api");
        std::process::exit(2);
    };

    eprintln!("Initializing Seoul sales SDK...");
    let sdk = seoul_sales_sdk::AsyncSeoulSalesSdk::builder()
        .source_path(&source)
        .build()
        .await
        .expect("Failed to initialize Seoul sales SDK");
    let meta = sdk.meta().await.expect("Failed to load the sales dataset");
    eprintln!(
        "Dataset ready: {} records across {} quarters from {}",
        meta.record_count, meta.period_count, meta.source_path
    );

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route("/api/meta", get(routes::meta::get_meta))
        .route("/api/options", get(routes::options::get_options))
        .route("/api/summary", get(routes::summary::get_summary))
        .route("/api/export", get(routes::export::export_csv))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = "0.0.0.0:3000";
    eprintln!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
