use std::net::SocketAddr;
use std::path::PathBuf;

use jeepney_server::dataset::{DatasetSource, RouteStore};
use jeepney_server::planner::PlannerConfig;
use jeepney_server::web::{AppState, create_router};

/// Dataset file used when no source is configured.
const DEFAULT_ROUTES_PATH: &str = "D1_routes.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Dataset source from the environment; a file path wins over a URL
    let source = match std::env::var("JEEPNEY_ROUTES_PATH") {
        Ok(path) => DatasetSource::File(PathBuf::from(path)),
        Err(_) => match std::env::var("JEEPNEY_ROUTES_URL") {
            Ok(url) => DatasetSource::Url(url),
            Err(_) => {
                eprintln!(
                    "Warning: JEEPNEY_ROUTES_PATH not set. Using {DEFAULT_ROUTES_PATH}."
                );
                DatasetSource::File(PathBuf::from(DEFAULT_ROUTES_PATH))
            }
        },
    };

    // Load the dataset (fail fast if unavailable)
    println!("Loading route dataset...");
    let store = RouteStore::load(source)
        .await
        .expect("Failed to load route dataset");
    println!("Loaded {} routes", store.snapshot().await.len());

    // Build app state and router
    let state = AppState::new(store, PlannerConfig::default());
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Jeepney Route Server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  GET  /routes          - List all routes");
    println!("  GET  /route/:name     - Fetch one route by name");
    println!("  GET  /nearest         - Nearest route to a point");
    println!("  POST /trip/plan       - Plan a multi-route trip");
    println!("  GET  /routes/relevant - Relevance-filtered routes");
    println!("  POST /dataset/reload  - Reload the route dataset");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
