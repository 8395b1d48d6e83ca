// Domain layer: problem models, numeral readings and ports. No rendering here.

pub mod korean;
pub mod model;
pub mod ports;
