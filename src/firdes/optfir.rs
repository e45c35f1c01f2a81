//! Specifications for optimal FIR filters from ripple and attenuation in dB.
//!
//! Each builder estimates the order with [`firpmord`] and adds `nextra_taps` on top,
//! since the estimate tends to be too low. Without `nextra_taps`,
//! [`Config::extra_taps`](crate::config::Config::extra_taps) is used.
use crate::config;
use crate::firdes::remezord::FirpmSpec;
use crate::firdes::remezord::firpmord;
use crate::Error;

/// Convert a stopband attenuation in dB to an absolute deviation.
pub fn stopband_atten_to_dev(atten_db: f64) -> f64 {
    10.0_f64.powf(-atten_db / 20.)
}

/// Convert a passband ripple in dB to an absolute deviation.
pub fn passband_ripple_to_dev(ripple_db: f64) -> f64 {
    let g = 10.0_f64.powf(ripple_db / 20.);
    (g - 1.) / (g + 1.)
}

fn add_taps(
    mut spec: FirpmSpec,
    nextra_taps: Option<usize>,
    even: bool,
) -> Result<FirpmSpec, Error> {
    let nextra_taps = nextra_taps.unwrap_or_else(|| config::config().extra_taps);
    let overflow = || Error::OrderOverflow(spec.order as f64);
    let mut order = spec.order.checked_add(nextra_taps).ok_or_else(overflow)?;
    // ntaps = order + 1 has to be odd
    if even && order % 2 == 1 {
        order = order.checked_add(1).ok_or_else(overflow)?;
    }
    spec.order = order;
    Ok(spec)
}

/// Low pass filter.
///
/// Args:
/// - `gain`: filter gain in the passband (linear)
/// - `fs`: sampling rate
/// - `freq1`: end of pass band (in Hz)
/// - `freq2`: start of stop band (in Hz)
/// - `passband_ripple_db`: pass band ripple in dB (should be small, < 1)
/// - `stopband_atten_db`: stop band attenuation in dB (should be large, >= 60)
/// - `nextra_taps`: extra taps to add to the estimated order
///
/// Example usage:
/// ```
/// use firord::firdes::optfir;
///
/// let spec = optfir::low_pass(1.0, 48_000.0, 10_000.0, 12_000.0, 0.1, 60.0, Some(2))?;
/// assert_eq!(spec.magnitudes, vec![1.0, 0.0]);
/// # Ok::<(), firord::Error>(())
/// ```
pub fn low_pass(
    gain: f64,
    fs: f64,
    freq1: f64,
    freq2: f64,
    passband_ripple_db: f64,
    stopband_atten_db: f64,
    nextra_taps: Option<usize>,
) -> Result<FirpmSpec, Error> {
    let passband_dev = passband_ripple_to_dev(passband_ripple_db);
    let stopband_dev = stopband_atten_to_dev(stopband_atten_db);
    let spec = firpmord(
        &[freq1, freq2],
        &[gain, 0.0],
        &[passband_dev, stopband_dev],
        fs,
    )?;
    add_taps(spec, nextra_taps, false)
}

/// High pass filter, with stop band up to `freq1` and pass band from `freq2`.
///
/// The resulting order is even, i.e., the filter has an odd number of taps.
pub fn high_pass(
    gain: f64,
    fs: f64,
    freq1: f64,
    freq2: f64,
    passband_ripple_db: f64,
    stopband_atten_db: f64,
    nextra_taps: Option<usize>,
) -> Result<FirpmSpec, Error> {
    let passband_dev = passband_ripple_to_dev(passband_ripple_db);
    let stopband_dev = stopband_atten_to_dev(stopband_atten_db);
    let spec = firpmord(
        &[freq1, freq2],
        &[0.0, gain],
        &[stopband_dev, passband_dev],
        fs,
    )?;
    add_taps(spec, nextra_taps, true)
}

/// Band pass filter.
///
/// Stop band up to `freq_sb1`, pass band from `freq_pb1` to `freq_pb2`, stop band
/// from `freq_sb2`.
#[allow(clippy::too_many_arguments)]
pub fn band_pass(
    gain: f64,
    fs: f64,
    freq_sb1: f64,
    freq_pb1: f64,
    freq_pb2: f64,
    freq_sb2: f64,
    passband_ripple_db: f64,
    stopband_atten_db: f64,
    nextra_taps: Option<usize>,
) -> Result<FirpmSpec, Error> {
    let passband_dev = passband_ripple_to_dev(passband_ripple_db);
    let stopband_dev = stopband_atten_to_dev(stopband_atten_db);
    let spec = firpmord(
        &[freq_sb1, freq_pb1, freq_pb2, freq_sb2],
        &[0.0, gain, 0.0],
        &[stopband_dev, passband_dev, stopband_dev],
        fs,
    )?;
    add_taps(spec, nextra_taps, false)
}

/// Band reject filter.
///
/// Pass band up to `freq_pb1`, stop band from `freq_sb1` to `freq_sb2`, pass band
/// from `freq_pb2`. The resulting order is even.
#[allow(clippy::too_many_arguments)]
pub fn band_reject(
    gain: f64,
    fs: f64,
    freq_pb1: f64,
    freq_sb1: f64,
    freq_sb2: f64,
    freq_pb2: f64,
    passband_ripple_db: f64,
    stopband_atten_db: f64,
    nextra_taps: Option<usize>,
) -> Result<FirpmSpec, Error> {
    let passband_dev = passband_ripple_to_dev(passband_ripple_db);
    let stopband_dev = stopband_atten_to_dev(stopband_atten_db);
    let spec = firpmord(
        &[freq_pb1, freq_sb1, freq_sb2, freq_pb2],
        &[gain, 0.0, gain],
        &[passband_dev, stopband_dev, passband_dev],
        fs,
    )?;
    add_taps(spec, nextra_taps, true)
}
