//! Logging for the UN-EX tools
//!
//! All diagnostics go to **stderr**. Standard output is reserved for the
//! programs' own results (the chart's one-line confirmation, the simulator
//! report), so log noise never mixes with them.
//!
//! Verbosity follows `RUST_LOG` and defaults to `info`.

pub mod stage_timer;

pub use stage_timer::StageTimer;

/// Install the global stderr subscriber. Safe to call more than once.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
