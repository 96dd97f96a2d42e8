//! hack.chat command bot.
//!
//! Joins a channel, answers `-help`, `-cat`, `-owo`, `-game`, `-guess`,
//! `-time` and the admin-only commands, and reconnects every 10 seconds after
//! a disconnect. Stop with Ctrl+C.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hcbot
//! cargo run --bin hcbot -- --channel lounge --nickname CatBot --super-admin 48wNI7
//! HCBOT_PASSWORD=secret cargo run --bin hcbot
//! ```

use std::time::Duration;

use clap::Parser;

use hcbot::{
    config::{
        BotConfig, DEFAULT_CHANNEL, DEFAULT_COLOR, DEFAULT_NICKNAME, DEFAULT_PASSWORD,
        DEFAULT_SUPER_ADMIN, DEFAULT_URL, RECONNECT_DELAY_SECS,
    },
    infrastructure::transport::WebSocketTransport,
    run_bot,
    usecase::CommandInterpreter,
};
use hcbot_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hcbot")]
#[command(about = "Command bot for hack.chat style chat rooms", long_about = None)]
struct Args {
    /// WebSocket URL of the chat service
    #[arg(short = 'u', long, env = "HCBOT_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Channel to join
    #[arg(short = 'c', long, env = "HCBOT_CHANNEL", default_value = DEFAULT_CHANNEL)]
    channel: String,

    /// Initial nickname
    #[arg(short = 'n', long, env = "HCBOT_NICKNAME", default_value = DEFAULT_NICKNAME)]
    nickname: String,

    /// Join password (the server derives the bot's trip from it)
    #[arg(short = 'p', long, env = "HCBOT_PASSWORD", default_value = DEFAULT_PASSWORD, hide_env_values = true)]
    password: String,

    /// Trip code of the permanent super admin
    #[arg(short = 'a', long, env = "HCBOT_SUPER_ADMIN", default_value = DEFAULT_SUPER_ADMIN)]
    super_admin: String,

    /// Initial display color (RRGGBB)
    #[arg(long, env = "HCBOT_COLOR", default_value = DEFAULT_COLOR)]
    color: String,

    /// Seconds to wait before reconnecting
    #[arg(long, env = "HCBOT_RECONNECT_SECS", default_value_t = RECONNECT_DELAY_SECS)]
    reconnect_secs: u64,

    /// Default log level (overridden by RUST_LOG)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

impl From<Args> for BotConfig {
    fn from(args: Args) -> Self {
        Self {
            url: args.url,
            channel: args.channel,
            nickname: args.nickname,
            password: args.password,
            super_admin: args.super_admin,
            color: args.color,
            reconnect_delay: Duration::from_secs(args.reconnect_secs),
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(&[env!("CARGO_PKG_NAME"), "hcbot_shared"], &args.log_level);

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::warn!("A TLS crypto provider was already installed");
    }

    let config = BotConfig::from(args);
    let interpreter = match CommandInterpreter::from_config(&config) {
        Ok(interpreter) => interpreter,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_bot(WebSocketTransport::new(), interpreter, config, shutdown_signal()).await
    {
        tracing::error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
