//! Interactive mode for the server.
//!
//! Prompts for the bind address, port, dataset seed, and default cluster
//! count before starting the server. Values from the environment are
//! offered as defaults.

use dialoguer::{Confirm, Input};

use crate::config::ServerConfig;

/// Runs the server in interactive mode, prompting for configuration.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Safety Map Server");
    println!();

    let defaults = ServerConfig::from_env();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr.clone())
        .interact_text()
        .unwrap_or_else(|_| defaults.bind_addr.clone());

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(defaults.port)
        .interact_text()
        .unwrap_or(defaults.port);

    let seed_str: String = Input::new()
        .with_prompt("Dataset seed (leave empty for random)")
        .allow_empty(true)
        .default(defaults.seed.map(|s| s.to_string()).unwrap_or_default())
        .interact_text()
        .unwrap_or_default();
    let seed = seed_str.trim().parse().ok();

    let default_k: usize = Input::new()
        .with_prompt("Default number of zones")
        .default(defaults.default_k)
        .validate_with(|k: &usize| if *k > 0 { Ok(()) } else { Err("must be at least 1") })
        .interact_text()
        .unwrap_or(defaults.default_k);

    let config = ServerConfig {
        bind_addr,
        port,
        seed,
        default_k,
        default_hour: defaults.default_hour,
    };

    if !Confirm::new()
        .with_prompt(format!(
            "Start server on {}:{}?",
            config.bind_addr, config.port
        ))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server_with(config).await
}
