// The annotation must be a single string literal

use envbind::EnvBind;

#[allow(dead_code)]
#[derive(Default, EnvBind)]
struct Config {
    #[env(PORT)]
    pub port: u16,
}

fn main() {}
