use sensorsync::{config, content, routes, state, style};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let style = style::StyleSheet::load(config.stylesheet_path.as_deref()).expect("stylesheet load failed");

    // No geocoding provider ships with the binary; address endpoints fail to load.
    let content = content::PageContent::load(config.content_path.as_deref(), None)
        .await
        .expect("page content load failed");

    let state = state::AppState::new(content, style, config.default_theme);
    let app = routes::app(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.expect("failed to bind");

    tracing::info!(%addr, theme = %config.default_theme, "sensorsync listening");
    axum::serve(listener, app).await.expect("server failed");
}
