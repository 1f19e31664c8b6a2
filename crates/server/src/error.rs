use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to load settings: `{0}`")]
    Settings(#[from] common::settings::ConfigError),

    #[error("invalid TLS configuration: `{0}`")]
    Tls(std::io::Error),

    #[error("server failed: `{0}`")]
    Serve(std::io::Error),
}
