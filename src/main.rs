//! # finedust Main Entry Point
//!
//! Checks the service key, then hands stdin/stdout to the prompt loop.

use anyhow::Result;
use finedust::cmd_args::CommandLineArgs;
use finedust::config::{self, AppConfig};
use finedust::{AirQualityService, AppController, ReqwestTransport, StdinLineSource};
use std::io::Write;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn main() -> Result<()> {
    init_tracing_subscriber()?;

    // No options besides --help/--version, but let clap reject stray arguments
    let _cmd_args = CommandLineArgs::parse();

    let app_config = AppConfig::default();
    if let Some(code) = placeholder_key_exit_code(&app_config, &mut std::io::stdout())? {
        std::process::exit(code);
    }

    let transport = ReqwestTransport::new()?;
    let service = AirQualityService::new(transport, app_config);
    let mut app = AppController::new(service, StdinLineSource::new(), std::io::stdout());

    app.run()
}

const PLACEHOLDER_KEY_EXIT_CODE: i32 = 1;

/// Exit status to stop with when no real service key is configured,
/// after writing the instructions for obtaining one to `out`
fn placeholder_key_exit_code<W: Write>(app_config: &AppConfig, out: &mut W) -> Result<Option<i32>> {
    if app_config.has_service_key() {
        return Ok(None);
    }

    tracing::error!("Service key is still the placeholder value");
    writeln!(out, "🛑 Warning: put your data.go.kr API key into SERVICE_KEY in src/config.rs.")?;
    writeln!(out, "1. Go to https://www.data.go.kr/")?;
    writeln!(
        out,
        "2. Search for the air pollution information API (한국환경공단 에어코리아) and apply for access"
    )?;
    writeln!(out, "3. Copy the general authentication key (Decoding) from My Page and paste it in")?;
    out.flush()?;
    Ok(Some(PLACEHOLDER_KEY_EXIT_CODE))
}

fn init_tracing_subscriber() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_env(config::LOG_LEVEL_ENV_VAR)
                .add_directive("reqwest=warn".parse()?)
                .add_directive("hyper=warn".parse()?)
                .add_directive("hyper_util=warn".parse()?)
                .add_directive("rustls=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
    Ok(())
}
