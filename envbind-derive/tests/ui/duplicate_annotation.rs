// A field is bound to exactly one variable

use envbind::EnvBind;

#[allow(dead_code)]
#[derive(Default, EnvBind)]
struct Config {
    #[env("PORT")]
    #[env("APP_PORT")]
    pub port: u16,
}

fn main() {}
