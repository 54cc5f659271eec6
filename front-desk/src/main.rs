use front_desk::{AppState, Config, cli, init_logger_with_file, print_banner};

fn main() -> anyhow::Result<()> {
    // Environment first: .env, then logging per config.
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!(data_dir = %config.data_dir, "front-desk starting...");

    let mut state = AppState::initialize(&config);
    cli::run(&mut state)?;

    tracing::info!("front-desk shut down");
    Ok(())
}
