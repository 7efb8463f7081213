//! `optionals-demo` -- prints every optional-handling demonstration.
//!
//! Results go to stdout, log lines to stderr.
//!
//! # Environment variables
//!
//! | Variable      | Required | Default | Description                    |
//! |---------------|----------|---------|--------------------------------|
//! | `RUST_LOG`    | no       | `optionals_demo=info,optionals_core=info` | Log filter |
//! | `DEMO_FORMAT` | no       | `text`  | Output format, `text` or `json` |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod demo;

use config::OutputFormat;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "optionals_demo=info,optionals_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = config::output_format().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    tracing::info!(?format, "Running optionals demo");

    let sections = demo::run_all();

    let rendered = match format {
        OutputFormat::Text => demo::render_text(&sections),
        OutputFormat::Json => demo::render_json(&sections).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to render output");
            std::process::exit(1);
        }),
    };

    print!("{rendered}");
}
