// Domain layer: plain records handed in by the web layer, and the ports the helpers read through.

pub mod model;
pub mod ports;
