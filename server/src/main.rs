use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = todo_env_server::config::load_settings()?;

    rolling_logger::init_logger(&settings.log_dir, "TodoEnvServer")
        .context("failed to init rolling logger")?;
    let _ = rolling_logger::info(&format!("Server starting on {}", settings.bind));

    todo_env_server::run(settings).await
}
