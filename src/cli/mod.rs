use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "classroom-sessions")]
#[command(about = "Classroom session store and login service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the service selected by MODE (default)
    Serve,
    /// Health check a running service
    Health {
        /// Base URL of either service (sessions listen on :8080, login on :5000)
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Validate configuration
    Config {
        /// Validate config without starting service
        #[arg(long)]
        validate: bool,
    },
    /// Show service status and stored session count
    Status {
        /// Base URL of the session store (default port 8080)
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    run_commands(cli.command.unwrap_or(Commands::Serve)).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Serve => match crate::infra::boot::run_server().await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "server error");
                ExitCode::FAILURE
            }
        },
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("✅ {} is healthy", url);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Health check of {} failed: {}", url, e);
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate: _ } => match validate_config() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Configuration validation failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Status { url } => match show_status(&url).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("❌ Status check failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

const HEALTH_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(500);

/// Both services expose `/healthz`, so this works against either port.
async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let response = reqwest::Client::new()
        .get(format!("{}/healthz", url.trim_end_matches('/')))
        .timeout(HEALTH_TIMEOUT)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()).into())
    }
}

fn validate_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = crate::infra::config::Config::from_env();

    if !matches!(config.mode.as_str(), "sessions" | "login") {
        return Err(format!(
            "Invalid MODE: {}. Must be 'sessions' or 'login'",
            config.mode
        )
        .into());
    }

    if config.port == 0 {
        return Err("PORT cannot be 0".into());
    }

    if config.mode == "sessions" && !config.static_dir.is_dir() {
        return Err(format!(
            "STATIC_DIR is not a directory: {}",
            config.static_dir.display()
        )
        .into());
    }

    Ok(())
}

async fn show_status(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();

    let health_response = client
        .get(format!("{}/healthz", url))
        .timeout(std::time::Duration::from_secs(5))
        .send()
        .await?;

    println!(
        "🏥 Health Status: {}",
        if health_response.status().is_success() {
            "✅ Healthy"
        } else {
            "❌ Unhealthy"
        }
    );

    let sessions_response = client
        .get(format!("{}/api/sessions", url))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await;

    match sessions_response {
        Ok(resp) if resp.status().is_success() => {
            match resp.json::<serde_json::Map<String, serde_json::Value>>().await {
                Ok(sessions) => println!("📚 Sessions: {} stored", sessions.len()),
                Err(_) => println!("📚 Sessions: ❌ Unreadable response"),
            }
        }
        Ok(resp) => {
            println!("📚 Sessions: ❌ HTTP {}", resp.status());
        }
        Err(_) => {
            println!("📚 Sessions: ❌ Unavailable");
        }
    }

    println!("\n📋 Configuration:");
    println!(
        "  Mode: {}",
        std::env::var("MODE").unwrap_or_else(|_| "sessions".into())
    );
    println!(
        "  Port: {}",
        std::env::var("PORT").unwrap_or_else(|_| "default".into())
    );
    println!(
        "  Sessions File: {}",
        std::env::var("SESSIONS_FILE")
            .unwrap_or_else(|_| crate::infra::store::DEFAULT_SESSIONS_FILE.into())
    );
    println!(
        "  Log Level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );

    Ok(())
}
