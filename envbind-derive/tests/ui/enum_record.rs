// Enums are not records and cannot be bound

use envbind::EnvBind;

#[allow(dead_code)]
#[derive(EnvBind)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}
