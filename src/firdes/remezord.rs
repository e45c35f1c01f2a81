// Order estimation for optimal (equiripple) FIR filters.
//
// From Herrmann et al (1973), Practical design rules for optimum finite impulse
// response filters. Bell System Technical J., 52, 769-99

use crate::config;
use crate::Error;

/// Order, band edges, magnitudes and weights for an equiripple FIR design.
///
/// `band_edges` holds `0`, every cutoff, and `fsamp / 2`, so it has two entries per
/// band. `magnitudes` and `weights` have one entry per band. Consumers pair
/// `magnitudes[i]` with the edge pair `band_edges[2 * i]`, `band_edges[2 * i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FirpmSpec {
    /// Filter order (number of taps minus one)
    pub order: usize,
    /// Band edges in the units of the sample rate, from `0` to `fsamp / 2`
    pub band_edges: Vec<f64>,
    /// Desired magnitude per band
    pub magnitudes: Vec<f64>,
    /// Relative weight per band, `max(devs) / devs[i]`
    pub weights: Vec<f64>,
}

// D_inf(d1, d2) = [1, d1, d1^2] * A * [1, d2, d2^2]^T, third column of A is zero
const AA: [[f64; 2]; 3] = [
    [-4.278e-01, -4.761e-01],
    [-5.941e-01, 7.114e-02],
    [-2.660e-03, 5.309e-03],
];
const BB: [f64; 2] = [11.01217, 0.51244];

/// FIR lowpass filter length estimator.
///
/// `freq1` and `freq2` are the edges of the transition band, normalized to the sample
/// rate. `delta1` and `delta2` are the deviations (ripples) of the bands on either side.
/// Returns the estimated filter length, not rounded.
///
/// Works for highpass filters too (`freq1 > freq2`), but the model is inaccurate for
/// transitions close to `0` or `1/2`. The result is infinite for a zero-width
/// transition.
///
/// Example usage:
/// ```
/// use firord::firdes;
///
/// let len = firdes::remlpord(0.18, 0.22, 0.01, 0.001);
/// assert!(len > 50.0 && len < 70.0);
/// ```
pub fn remlpord(freq1: f64, freq2: f64, delta1: f64, delta2: f64) -> f64 {
    let d1 = delta1.log10();
    let d2 = delta2.log10();

    let row = [1.0, d1, d1 * d1];
    let dinf: f64 = (0..2)
        .map(|j| (0..3).map(|i| row[i] * AA[i][j]).sum::<f64>() * d2.powi(j as i32))
        .sum();
    let fk = BB[0] + BB[1] * (d1 - d2);
    let df = (freq2 - freq1).abs();

    dinf / df - fk * df + 1.0
}

/// FIR order estimator (lowpass, highpass, bandpass, multiband).
///
/// `fcuts` are the edges of the `nbands - 1` transition regions, in the units of
/// `fsamp` and within `[0, fsamp / 2]`. `mags` is the desired magnitude and `devs` the
/// allowed deviation of each band, so `fcuts.len() == 2 * (mags.len() - 1)`.
/// Bands are expected in ascending frequency order with alternating magnitudes; the
/// estimate is undefined for other layouts.
///
/// Deviations of passbands are made relative to the band's magnitude. With two bands
/// the single transition decides the order; with more bands every interior band is
/// checked against both of its neighbors and the worst case wins. The order is made
/// even if the last band is not a stopband. An estimate that is not finite or does not
/// fit a `usize` is reported as [`Error::OrderOverflow`].
///
/// Example usage:
/// ```
/// use firord::firdes;
///
/// let spec = firdes::firpmord(&[1500.0, 2000.0], &[1.0, 0.0], &[0.01, 0.1], 8000.0)?;
/// assert_eq!(spec.band_edges, vec![0.0, 1500.0, 2000.0, 4000.0]);
/// # Ok::<(), firord::Error>(())
/// ```
pub fn firpmord(
    fcuts: &[f64],
    mags: &[f64],
    devs: &[f64],
    fsamp: f64,
) -> Result<FirpmSpec, Error> {
    if !(fsamp.is_finite() && fsamp > 0.0) {
        return Err(Error::InvalidSampleRate(fsamp));
    }

    let fcuts: Vec<f64> = fcuts.iter().map(|&f| f / fsamp).collect();
    // NaN is reported as too high
    if let Some(&f) = fcuts.iter().find(|&&f| f.is_nan() || f > 0.5) {
        return Err(Error::FrequencyTooHigh {
            freq: f * fsamp,
            fsamp,
        });
    }
    if let Some(&f) = fcuts.iter().find(|&&f| f < 0.0) {
        return Err(Error::NegativeFrequency { freq: f * fsamp });
    }

    let nbands = mags.len();
    if nbands != devs.len() {
        return Err(Error::Mismatch {
            mags: nbands,
            devs: devs.len(),
        });
    }
    let expected = 2 * nbands.saturating_sub(1);
    if fcuts.len() != expected {
        return Err(Error::Length {
            expected,
            found: fcuts.len(),
        });
    }
    if nbands < 2 {
        return Err(Error::TooFewBands(nbands));
    }
    if let Some((index, &dev)) = devs
        .iter()
        .enumerate()
        .find(|(_, d)| !(d.is_finite() && **d > 0.0))
    {
        return Err(Error::InvalidDeviation { index, dev });
    }
    if let Some((index, &mag)) = mags
        .iter()
        .enumerate()
        .find(|(_, m)| !(m.is_finite() && **m >= 0.0))
    {
        return Err(Error::InvalidMagnitude { index, mag });
    }

    // separate the lower and upper transition edges
    let f1: Vec<f64> = fcuts.iter().step_by(2).copied().collect();
    let f2: Vec<f64> = fcuts.iter().skip(1).step_by(2).copied().collect();
    if let Some(index) = f1.iter().zip(&f2).position(|(a, b)| a == b) {
        return Err(Error::ZeroWidthTransition { index });
    }

    debug!(
        "firpmord: {} bands, fcuts {:?}, mags {:?}, devs {:?}, fsamp {}",
        nbands, fcuts, mags, devs, fsamp
    );

    // passbands get a deviation relative to their magnitude
    let devs: Vec<f64> = devs
        .iter()
        .zip(mags)
        .map(|(&d, &m)| if m == 0.0 { d } else { d / m })
        .collect();

    let l = if nbands == 2 {
        // lowpass or highpass, the single transition region decides
        remlpord(f1[0], f2[0], devs[0], devs[1])
    } else {
        // try the lowpasses through every interior band and take the worst one
        let mut l: f64 = 0.0;
        for i in 1..(nbands - 1) {
            let l1 = remlpord(f1[i - 1], f2[i - 1], devs[i], devs[i - 1]);
            let l2 = remlpord(f1[i], f2[i], devs[i], devs[i + 1]);
            trace!("firpmord: band {i}, estimates {l1} {l2}");
            l = l.max(l1.max(l2));
        }
        l
    };

    // order, not length
    let raw = l.ceil() - 1.0;
    if !(raw.is_finite() && raw < usize::MAX as f64) {
        return Err(Error::OrderOverflow(l));
    }
    let mut order = if raw > 0.0 { raw as usize } else { 0 };
    if mags[nbands - 1] != 0.0 && order % 2 != 0 {
        order = order.checked_add(1).ok_or(Error::OrderOverflow(l))?;
    }
    debug!("firpmord: estimated length {l}, order {order}");

    let mut band_edges = Vec::with_capacity(fcuts.len() + 2);
    band_edges.push(0.0);
    band_edges.extend(fcuts.iter().map(|f| 2.0 * f));
    band_edges.push(1.0);
    band_edges.iter_mut().for_each(|f| *f *= fsamp / 2.0);

    let max_dev = devs.iter().copied().fold(f64::MIN, f64::max);
    let weights = devs.iter().map(|d| max_dev / d).collect();

    Ok(FirpmSpec {
        order,
        band_edges,
        magnitudes: mags.to_vec(),
        weights,
    })
}

/// [`firpmord`] with an optional sample rate.
///
/// Without a sample rate, [`Config::default_fsamp`](crate::config::Config::default_fsamp)
/// is used, `2.0` unless configured otherwise, which puts the Nyquist frequency at `1`.
pub fn remezord(
    fcuts: &[f64],
    mags: &[f64],
    devs: &[f64],
    fsamp: Option<f64>,
) -> Result<FirpmSpec, Error> {
    let fsamp = fsamp.unwrap_or_else(|| config::config().default_fsamp);
    firpmord(fcuts, mags, devs, fsamp)
}
