// Tuple structs have no field names to attach bindings to

use envbind::EnvBind;

#[allow(dead_code)]
#[derive(Default, EnvBind)]
struct Port(pub u16);

fn main() {}
