// Domain layer: response models, ports, and the greeting service. No HTTP or filesystem here.

pub mod model;
pub mod ports;

pub mod services;
