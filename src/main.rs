use anyhow::Result;
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use habla::transcribe::SpeechEngine;
use habla::{tls, AppState, Config, GoogleWebTranslator};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "habla", about = "Record, transcribe, translate")]
struct Cli {
    /// Config file (without extension)
    #[arg(long, default_value = "config/habla")]
    config: String,

    /// Override the configured listening port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;
    if let Some(port) = cli.port {
        cfg.service.port = port;
    }

    info!("habla v0.1.0");
    info!(
        "Languages: {} -> {} / {}",
        cfg.language.source, cfg.language.target1, cfg.language.target2
    );

    let engine = build_engine(&cfg)?;
    info!("Speech engine ready: {}", engine.name());

    let translator = Arc::new(GoogleWebTranslator::new(&cfg.translation)?);
    info!("Translation endpoint: {}", cfg.translation.endpoint);

    let bind: IpAddr = cfg.service.bind.parse()?;
    let port = cfg.service.port;
    let state = AppState::new(engine, translator, Arc::new(cfg.clone()));
    let app = habla::create_router(state);

    // Startup aborts on certificate or bind failure; nothing else is fatal.
    let (cert_pem, key_pem) = tls::generate_self_signed_cert(cfg.service.cert_validity_days)?;
    let tls_config = RustlsConfig::from_pem(cert_pem.into_bytes(), key_pem.into_bytes()).await?;

    let addr = SocketAddr::from((bind, port));
    info!(
        "Go to: https://{}:{} (accept the self-signed certificate warning)",
        tls::local_ip(),
        port
    );

    axum_server::bind_rustls(addr, tls_config)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

#[cfg(feature = "whisper-runtime")]
fn build_engine(cfg: &Config) -> Result<Arc<dyn SpeechEngine>> {
    let engine = habla::transcribe::WhisperEngine::load(&cfg.model, &cfg.language.source)?;
    Ok(Arc::new(engine))
}

#[cfg(not(feature = "whisper-runtime"))]
fn build_engine(_cfg: &Config) -> Result<Arc<dyn SpeechEngine>> {
    anyhow::bail!(
        "this binary was built without a speech engine; rebuild with --features whisper-runtime"
    )
}
