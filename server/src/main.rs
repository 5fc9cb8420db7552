use todo_server::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    rolling_logger::init_logger(&config.log_dir, "todo-server")?;
    tracing::info!(log_dir = %config.log_dir.display(), "logging initialized");

    todo_server::run(config).await
}
