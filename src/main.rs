use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};
use transferscan::bootstrap::run;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(e) = run().await {
        tracing::error!("transferscan error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

/// `RUST_LOG` selects levels (default `info`); `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = dotenvy::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    if json {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}
