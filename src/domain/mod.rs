// Domain layer: core models and ports (interfaces). No process or runtime concerns here.

pub mod model;
pub mod ports;
