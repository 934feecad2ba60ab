use anyhow::Result;
use profile_editor::app::App;
use profile_editor::cli;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };
    // CLI --log-level takes precedence, then RUST_LOG, then config (applied in App::new).
    profile_editor::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting profile-editor {}", profile_editor::VERSION);

    // Runtime for the async wgpu adapter/device requests
    let runtime = Arc::new(Runtime::new()?);

    let app = App::new(Arc::clone(&runtime), runtime_options)?;
    let result = app.run();

    log::info!("Event loop exited, shutting down runtime");
    if let Ok(rt) = Arc::try_unwrap(runtime) {
        rt.shutdown_timeout(std::time::Duration::from_secs(2));
    }

    if let Err(ref e) = result {
        eprintln!("profile-editor: error: {e:#}");
    }
    result
}
