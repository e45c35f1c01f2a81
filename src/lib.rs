//! Helpers for FIR filter design and spectral inspection.
//!
//! - [`firdes`]: minimum order estimation for equiripple FIR filters
//!   ([`firdes::remlpord`], [`firdes::firpmord`]) and dB-based builders in
//!   [`firdes::optfir`]
//! - [`windows`]: Hanning, Hamming, Blackman and Kaiser windows
//! - [`spectrum`]: sampling the DTFT of a finite sequence with a zero-padded FFT
//!
//! ## Example
//! ```
//! use firord::firdes;
//!
//! fn main() -> Result<(), firord::Error> {
//!     // lowpass at 8 kHz: pass band up to 1.5 kHz, stop band from 2 kHz
//!     let spec = firdes::firpmord(&[1500.0, 2000.0], &[1.0, 0.0], &[0.01, 0.001], 8000.0)?;
//!     println!("order {}, bands {:?}", spec.order, spec.band_edges);
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

#[macro_use]
extern crate tracing;

pub use num_complex;

pub use error::Error;

pub mod config;
mod error;
pub mod firdes;
pub mod logging;
pub mod math;
pub mod spectrum;
pub mod windows;
