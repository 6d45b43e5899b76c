//! Example seeding the environment from a key=value file

use envbind::EnvBind;
use std::io::Write;

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env("APP_HOST,default:localhost")]
    pub host: String,

    #[env("APP_PORT,default:8080")]
    pub port: u16,

    #[env("APP_RATIO,default:0.5")]
    pub ratio: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut seed = tempfile::NamedTempFile::new()?;
    writeln!(seed, "// values for local development")?;
    writeln!(seed, "APP_HOST=dev.internal")?;
    writeln!(seed, "APP_PORT=3000")?;
    writeln!(seed, "this line is ignored")?;

    let config = Config::from_env_file(seed.path())?;

    println!("Configuration seeded from {}:", seed.path().display());
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);
    println!("  Ratio: {}", config.ratio);

    Ok(())
}
