// Domain layer: gift/listing models and the ports the controller depends on.

pub mod model;
pub mod ports;
