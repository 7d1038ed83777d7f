// Domain layer: the service model and the ports the simulator is driven through.

pub mod model;
pub mod ports;
