//! HTTP Hunt Server
//!
//! Wires the default positioner, simulator, hunter and prey together and
//! serves them over HTTP until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, instrument};

use crate::core::position::Position;
use crate::core::positioner::DefaultPositioner;
use crate::core::speed::{Speed, SpeedError};
use crate::hunt::hunter::{WhiteShark, WhiteSharkConfig};
use crate::hunt::prey::Tuna;
use crate::hunt::simulator::{DefaultCatchSimulator, SimulatorConfig};
use crate::network::handler::HuntHandler;

/// Environment variable for the bind address.
pub const ENV_BIND_ADDR: &str = "HUNT_BIND_ADDR";
/// Environment variable for the catch time budget.
pub const ENV_MAX_TIME_TO_CATCH: &str = "HUNT_MAX_TIME_TO_CATCH";
/// Environment variable for the initial hunter speed.
pub const ENV_HUNTER_SPEED: &str = "HUNT_HUNTER_SPEED";
/// Environment variable for the initial prey speed.
pub const ENV_PREY_SPEED: &str = "HUNT_PREY_SPEED";

/// Invalid server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Value could not be parsed.
    #[error("{var}: cannot parse {value:?}")]
    Parse {
        /// Offending variable.
        var: &'static str,
        /// Raw value.
        value: String,
    },

    /// Negative or non-finite time budget.
    #[error("{var}: time budget must be a non-negative number, got {value}")]
    InvalidBudget {
        /// Offending variable.
        var: &'static str,
        /// Parsed value.
        value: f64,
    },

    /// Invalid initial speed.
    #[error("{var}: {source}")]
    InvalidSpeed {
        /// Offending variable.
        var: &'static str,
        /// Validation failure.
        source: SpeedError,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub bind_addr: SocketAddr,
    /// Upper bound on closing time for a catch.
    pub max_time_to_catch: f64,
    /// Hunter speed until first configured.
    pub hunter_speed: Speed,
    /// Prey speed until first configured.
    pub prey_speed: Speed,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_time_to_catch: 3.0,
            hunter_speed: Speed::new(4.0).unwrap_or(Speed::ZERO),
            prey_speed: Speed::new(1.0).unwrap_or(Speed::ZERO),
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = parse(ENV_BIND_ADDR, value)?;
        }

        if let Some(value) = lookup(ENV_MAX_TIME_TO_CATCH) {
            let budget: f64 = parse(ENV_MAX_TIME_TO_CATCH, value)?;
            if !budget.is_finite() || budget < 0.0 {
                return Err(ConfigError::InvalidBudget {
                    var: ENV_MAX_TIME_TO_CATCH,
                    value: budget,
                });
            }
            config.max_time_to_catch = budget;
        }

        if let Some(value) = lookup(ENV_HUNTER_SPEED) {
            config.hunter_speed = parse_speed(ENV_HUNTER_SPEED, value)?;
        }

        if let Some(value) = lookup(ENV_PREY_SPEED) {
            config.prey_speed = parse_speed(ENV_PREY_SPEED, value)?;
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse { var, value })
}

fn parse_speed(var: &'static str, value: String) -> Result<Speed, ConfigError> {
    let raw: f64 = parse(var, value)?;
    Speed::new(raw).map_err(|source| ConfigError::InvalidSpeed { var, source })
}

/// Hunt server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("Failed to bind: {0}")]
    BindFailed(#[source] std::io::Error),

    /// Serving connections failed.
    #[error("Serve error: {0}")]
    Serve(#[source] std::io::Error),
}

/// The hunt server.
pub struct HuntServer {
    /// Server configuration.
    config: ServerConfig,
    /// Actor state shared by the routes.
    handler: HuntHandler,
    /// Shutdown signal; latches once set.
    shutdown_tx: watch::Sender<bool>,
}

impl HuntServer {
    /// Create a server with a white shark hunting a tuna, both at the origin.
    pub fn new(config: ServerConfig) -> Self {
        let simulator = DefaultCatchSimulator::new(SimulatorConfig {
            max_time_to_catch: config.max_time_to_catch,
            positioner: Arc::new(DefaultPositioner::new()),
        });
        let hunter = WhiteShark::new(WhiteSharkConfig {
            speed: config.hunter_speed,
            position: Position::ORIGIN,
            simulator: Arc::new(simulator),
        });
        let prey = Tuna::new(config.prey_speed, Position::ORIGIN);

        Self::with_handler(config, HuntHandler::new(hunter, prey))
    }

    /// Create a server around an existing handler.
    pub fn with_handler(config: ServerConfig, handler: HuntHandler) -> Self {
        let (shutdown_tx, _) = watch::channel(false);

        Self {
            config,
            handler,
            shutdown_tx,
        }
    }

    /// Shared actor state.
    pub fn handler(&self) -> &HuntHandler {
        &self.handler
    }

    /// Bind the configured address and serve until shutdown.
    #[instrument(skip(self), fields(addr = %self.config.bind_addr))]
    pub async fn run(&self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.config.bind_addr)
            .await
            .map_err(ServerError::BindFailed)?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until shutdown.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), ServerError> {
        if let Ok(addr) = listener.local_addr() {
            info!("Hunt server listening on {}", addr);
        }

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let app = self.handler.clone().router();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_rx.wait_for(|stop| *stop) => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
                info!("Shutdown signal received");
            })
            .await
            .map_err(ServerError::Serve)
    }

    /// Signal shutdown.
    pub fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_time_to_catch, 3.0);
        assert_eq!(config.hunter_speed.get(), 4.0);
        assert_eq!(config.prey_speed.get(), 1.0);
    }

    #[test]
    fn test_server_config_from_lookup() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "127.0.0.1:9000"),
            (ENV_MAX_TIME_TO_CATCH, " 12.5 "),
            (ENV_HUNTER_SPEED, "7"),
            (ENV_PREY_SPEED, "0"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.max_time_to_catch, 12.5);
        assert_eq!(config.hunter_speed.get(), 7.0);
        assert!(config.prey_speed.is_zero());
    }

    #[test]
    fn test_server_config_rejects_invalid_values() {
        let err = ServerConfig::from_lookup(lookup(&[(ENV_BIND_ADDR, "nowhere")])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { var: ENV_BIND_ADDR, .. }));

        let err = ServerConfig::from_lookup(lookup(&[(ENV_MAX_TIME_TO_CATCH, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBudget { .. }));

        let err = ServerConfig::from_lookup(lookup(&[(ENV_HUNTER_SPEED, "-3")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSpeed { var: ENV_HUNTER_SPEED, source: SpeedError::Negative(_) }
        ));
        assert_eq!(err.to_string(), "HUNT_HUNTER_SPEED: speed must be non-negative, got -3");
    }

    #[tokio::test]
    async fn test_server_initial_state() {
        let server = HuntServer::new(ServerConfig::default());

        let hunter = server.handler().hunter_subject().await;
        assert_eq!(hunter.speed.get(), 4.0);
        assert_eq!(hunter.position, Position::ORIGIN);
        assert_eq!(server.handler().prey_subject().await.speed.get(), 1.0);
    }

    #[tokio::test]
    async fn test_server_serves_and_shuts_down() {
        let server = Arc::new(HuntServer::new(ServerConfig::default()));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let running = server.clone();
        let handle = tokio::spawn(async move { running.serve(listener).await });

        // Hunter and prey share the origin, so the hunt succeeds.
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"POST /hunter/hunt HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.ends_with(r#"{"data":null,"message":"prey hunted"}"#));

        server.shutdown();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_before_serve_is_kept() {
        let server = HuntServer::new(ServerConfig::default());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        server.shutdown();

        let result = tokio::time::timeout(Duration::from_secs(5), server.serve(listener)).await;
        assert!(result.expect("serve should stop on an earlier shutdown").is_ok());
    }
}
