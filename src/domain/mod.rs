// Domain layer: core models, the state table and ports (interfaces). No I/O here.

pub mod model;
pub mod ports;
pub mod state;
