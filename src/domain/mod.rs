// Domain layer: report models and ports (interfaces) shared by both demos.

pub mod model;
pub mod ports;
