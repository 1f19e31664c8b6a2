use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use common::{init_logging, settings::Settings};
use server::error::ServerError;
use server::routes;
use server::state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[arg(short = 'C', long, default_value = "config")]
    config_dir: String,
}

struct NotfallplanServer {
    settings: Arc<Settings>,
}

impl NotfallplanServer {
    fn new(config_dir: &str) -> Result<Self, ServerError> {
        Ok(Self {
            settings: Arc::new(Settings::with_config_dir(config_dir)?),
        })
    }

    async fn run(&self) -> Result<(), ServerError> {
        let server = &self.settings.server;
        let addr = SocketAddr::from(([127, 0, 0, 1], server.port));

        info!("Serving {} on {}", server.site_root, addr);
        info!("Backend API at {}", self.settings.frontend.api_url);

        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

        let app = routes::routes(AppState::new(&self.settings), &server.site_root);

        match (&server.public_key, &server.private_key) {
            (Some(public_key), Some(private_key)) => {
                let config = RustlsConfig::from_pem(
                    public_key.clone().into_bytes(),
                    private_key.clone().into_bytes(),
                )
                .await
                .map_err(ServerError::Tls)?;

                axum_server::bind_rustls(addr, config)
                    .serve(app.into_make_service())
                    .await
                    .map_err(ServerError::Serve)
            }
            _ => axum_server::bind(addr)
                .serve(app.into_make_service())
                .await
                .map_err(ServerError::Serve),
        }
    }
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let app = match NotfallplanServer::new(&args.config_dir) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let _guard = init_logging(&app.settings.logger);

    if let Err(err) = app.run().await {
        error!("{}", err);
        std::process::exit(1);
    }
}
