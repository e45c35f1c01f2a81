//! Filter Design
//!
//! Order estimation for equiripple (Parks-McClellan) FIR filters. The functions here
//! only produce the order, band edges, magnitudes and weights; computing the taps is
//! left to a Remez exchange implementation.
pub use remezord::FirpmSpec;
pub use remezord::firpmord;
pub use remezord::remezord;
pub use remezord::remlpord;

pub mod optfir;
mod remezord;
