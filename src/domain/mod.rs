// Domain layer: core models, ports and the producer interval computation.
// No I/O here; file and network access live in adapters and core.

pub mod model;
pub mod ports;

pub mod services;
