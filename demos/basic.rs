//! Basic usage example

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Loaded from DATABASE_URL; stays empty when unset
    #[env("DATABASE_URL")]
    pub database_url: String,

    // With default value
    #[env("SERVER_ADDR,default:127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[env("MAX_CONNECTIONS,default:10")]
    pub max_connections: u32,

    // Boolean type
    #[env("DEBUG_MODE,default:false")]
    pub debug_mode: bool,

    // Base64-encoded bytes
    #[env("SIGNING_KEY,default:c2VjcmV0")]
    pub signing_key: Vec<u8>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Signing Key: {} bytes", config.signing_key.len());

    Ok(())
}
