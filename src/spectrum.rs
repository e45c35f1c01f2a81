//! Sampling the discrete-time Fourier transform.
use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

/// Samples the DTFT of a finite sequence on a uniform grid using a zero-padded FFT.
///
/// `x` is assumed to start at `n = 0`. The number of samples `N` is the smallest power
/// of two not below `max(m, x.len())`. Returns the spectrum and the matching angular
/// frequencies, centered so that the frequencies ascend from `-π` towards `π`
/// (zero frequency sits at index `N / 2`).
///
/// # Panics
/// If `x` is empty and `m == 0`.
///
/// Example usage:
/// ```
/// use firord::num_complex::Complex64;
/// use firord::spectrum;
///
/// let x = vec![Complex64::new(1.0, 0.0); 4];
/// let (spec, w) = spectrum::dtft(&x, 100);
/// assert_eq!(spec.len(), 128);
/// assert_eq!(w[64], 0.0);
/// assert!((spec[64].re - 4.0).abs() < 1e-12);
/// ```
pub fn dtft(x: &[Complex64], m: usize) -> (Vec<Complex64>, Vec<f64>) {
    assert!(
        m > 0 || !x.is_empty(),
        "dtft needs at least one output point"
    );
    let n = m.max(x.len()).next_power_of_two();

    let mut spec = vec![Complex64::new(0.0, 0.0); n];
    spec[..x.len()].copy_from_slice(x);
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(n).process(&mut spec);

    let mut w: Vec<f64> = (0..n)
        .map(|k| {
            let w = 2.0 * PI * k as f64 / n as f64;
            if w >= PI { w - 2.0 * PI } else { w }
        })
        .collect();

    // fftshift
    spec.rotate_right(n / 2);
    w.rotate_right(n / 2);

    (spec, w)
}

/// [`dtft`] of a real-valued sequence.
///
/// Example usage:
/// ```
/// use firord::{spectrum, windows};
///
/// let (spec, w) = spectrum::dtft_real(&windows::hamming(31), 512);
/// assert_eq!(spec.len(), w.len());
/// ```
pub fn dtft_real(x: &[f64], m: usize) -> (Vec<Complex64>, Vec<f64>) {
    let x: Vec<Complex64> = x.iter().map(|&re| Complex64::new(re, 0.0)).collect();
    dtft(&x, m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_power_of_two() {
        for (len, m, expected) in [(3, 5, 8), (10, 4, 16), (16, 16, 16), (17, 1, 32), (0, 1, 1)] {
            let x = vec![1.0; len];
            let (spec, w) = dtft_real(&x, m);
            assert_eq!(spec.len(), expected, "len={len} m={m}");
            assert_eq!(w.len(), expected, "len={len} m={m}");
        }
    }

    #[test]
    fn grid_is_centered_and_ascending() {
        let (_, w) = dtft_real(&[1.0, 2.0, 3.0], 64);
        assert_eq!(w[0], -PI);
        assert_eq!(w[32], 0.0);
        assert!(w.windows(2).all(|p| p[0] < p[1]));
        assert!(w.iter().all(|&f| (-PI..PI).contains(&f)));
    }

    #[test]
    fn impulse_has_flat_spectrum() {
        let (spec, _) = dtft_real(&[1.0], 16);
        for s in spec {
            assert!((s.re - 1.0).abs() < 1e-12 && s.im.abs() < 1e-12);
        }
    }

    #[test]
    fn delayed_impulse_is_linear_phase() {
        let (spec, w) = dtft_real(&[0.0, 1.0], 8);
        for (s, w) in spec.iter().zip(w) {
            let expected = Complex64::from_polar(1.0, -w);
            assert!((s - expected).norm() < 1e-12, "{s} != {expected} at w={w}");
        }
    }

    #[test]
    fn constant_signal_concentrates_at_dc() {
        let (spec, w) = dtft_real(&[1.0; 8], 8);
        for (s, w) in spec.iter().zip(w) {
            if w == 0.0 {
                assert!((s.re - 8.0).abs() < 1e-12);
            } else {
                assert!(s.norm() < 1e-12);
            }
        }
    }

    #[test]
    #[should_panic]
    fn empty_request_panics() {
        dtft(&[], 0);
    }
}
