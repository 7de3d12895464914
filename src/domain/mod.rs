// Domain layer: report models and ports. No HTTP or environment access here.

pub mod model;
pub mod ports;
