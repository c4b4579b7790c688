// Domain layer: request/response and project models plus the ports the services are built on.

pub mod model;
pub mod ports;
