//! Example binding against an in-memory environment instead of the process

use envbind::{Binder, EnvBind, MapEnv};
use std::io::Write;

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env("WORKERS,default:4")]
    pub workers: u8,

    #[env("QUEUE,default:jobs")]
    pub queue: String,
}

fn main() -> anyhow::Result<()> {
    let env: MapEnv = [("WORKERS", "16")].into_iter().collect();
    let config: Config = Binder::new(env).bind()?;
    println!("Workers: {}, queue: {}", config.workers, config.queue);

    let env: MapEnv = [("WORKERS", "1000")].into_iter().collect();
    match Binder::new(env).bind::<Config>() {
        Ok(config) => println!("Unexpected success: {config:?}"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Seed an isolated environment from a file and read it back afterwards
    let mut seed = tempfile::NamedTempFile::new()?;
    writeln!(seed, "QUEUE=emails")?;

    let mut binder = Binder::new(MapEnv::new());
    let config: Config = binder.load_file(seed.path())?;
    println!("Seeded queue: {}", config.queue);

    let env = binder.into_env();
    println!("Seeded variables: {}", env.len());

    Ok(())
}
