use anyhow::Result;
use healthform_api::{app, args::parse_args, prepare_upload_dir};
use tracing::{debug, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    configure_tracing();

    let args = parse_args();
    debug!("{:?}", &args);

    let config = args.service_config();
    prepare_upload_dir(&config.upload_dir)?;

    let listener = tokio::net::TcpListener::bind(args.bind_address()).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    // We block here until the process is killed.
    axum::serve(listener, app(config)).await?;

    Ok(())
}

fn configure_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE) // Makes #[instrument] output something
        .with_env_filter(filter)
        .init();
}
