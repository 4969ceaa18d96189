//! Diagnostics for the catalog binary.
//!
//! The terminal UI owns stdout and stderr while it runs, so tracing output
//! can only go to a file. Set `CATALOG_LOG=/path/to/catalog.log` to get
//! state transitions, navigation and fetch failures; `RUST_LOG` narrows or
//! widens the filter (default `info`, e.g. `RUST_LOG=catalog=debug` to see
//! superseded fetches).

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the file subscriber when `CATALOG_LOG` is set; otherwise does
/// nothing and every `tracing` macro is a no-op.
pub fn init_tracing() {
    let Ok(base) = std::env::var("CATALOG_LOG") else {
        return;
    };
    let path = session_log_path(&base);

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            // the UI is not up yet, stderr is still readable
            eprintln!("Warning: cannot create log file {}: {}", path.display(), err);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// `{base}.{unix_seconds}.{pid}`: one file per catalog session.
fn session_log_path(base: &str) -> PathBuf {
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base, started, std::process::id()))
}
