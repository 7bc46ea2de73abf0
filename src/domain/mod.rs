// Domain layer: receipt models and ports (interfaces). No transport or runtime dependencies.

pub mod model;
pub mod ports;
