use anyhow::Context;
use registrar_core::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    registrar_observability::init();

    let settings = Settings::from_env().context("failed to load settings")?;
    tracing::info!(?settings, "settings loaded");

    let app = registrar_api::app::bootstrap(&settings);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr()))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
