// Domain layer: parameter bags, the CMCI response envelope and the handler port.

pub mod model;
pub mod ports;
