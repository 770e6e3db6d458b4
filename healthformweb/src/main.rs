use std::{sync::Arc, thread, time::Duration};

use anyhow::Result;
use healthformweb::{app, args::parse_args, client::HttpSubmissionSender, AppState};
use tracing::{debug, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    configure_tracing();

    let args = parse_args();
    debug!("{:?}", &args);

    let sender = HttpSubmissionSender::new(args.backend_url.clone());
    info!("Forwarding submissions to {}", sender.url());
    let state = AppState::new(Arc::new(sender));

    let listener = tokio::net::TcpListener::bind(args.bind_address()).await?;
    let addr = listener.local_addr()?;
    let url = format!("http://localhost:{}", addr.port());
    info!("Listening on {url}");

    // Use a background thread to open the correct URL in the browser. We wait
    // for a bit to ensure axum is started up.
    if args.auto_open {
        thread::spawn(|| {
            thread::sleep(Duration::from_secs_f32(0.5));
            // Ignore any errors, this is a "nice-to-have" anyway.
            let _ = opener::open_browser(url);
        });
    }

    // We block here. Closing the browser window does
    // not shut down the app.
    axum::serve(listener, app(state, args.max_upload_bytes())).await?;

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
