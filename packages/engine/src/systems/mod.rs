//! Systems - the passes that make up one simulation step
//!
//! Flow -> repeat { Pressure -> Viscosity }. Each pass is a free function
//! over `&mut Grid`; the world decides order and counts.

pub mod random;
pub mod flow;
pub mod pressure;
pub mod viscosity;

pub use flow::apply_flow;
pub use pressure::resolve_pressure;
pub use random::{xorshift32, Offset, OffsetSource, Rng};
pub use viscosity::apply_viscosity;
