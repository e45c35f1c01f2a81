//! A collection of window functions.
//!
//! All windows are symmetric (`w[n] == w[len - 1 - n]`), which is the form used for
//! filter design. The formulas divide by `len - 1`, so a window of length one is
//! degenerate: its single coefficient is NaN (except for [`rect`]).
use crate::math::special_funs;
use std::f64::consts::PI;

/// Window function selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Window {
    /// See [`rect`]
    Rectangular,
    /// See [`hanning`]
    Hanning,
    /// See [`hamming`]
    Hamming,
    /// See [`blackman`]
    Blackman,
    /// See [`kaiser`], with shape parameter `beta`
    Kaiser(f64),
}

impl Window {
    /// Generate the window coefficients for the given length.
    ///
    /// ```
    /// use firord::windows::{self, Window};
    ///
    /// assert_eq!(Window::Hamming.generate(16), windows::hamming(16));
    /// ```
    pub fn generate(&self, len: usize) -> Vec<f64> {
        match *self {
            Window::Rectangular => rect(len),
            Window::Hanning => hanning(len),
            Window::Hamming => hamming(len),
            Window::Blackman => blackman(len),
            Window::Kaiser(beta) => kaiser(len, beta),
        }
    }
}

/// A rectangular window of a given length.
///
/// Example usage:
/// ```
/// use firord::windows;
///
/// let taps = windows::rect(64);
/// ```
pub fn rect(len: usize) -> Vec<f64> {
    vec![1.0; len]
}

fn check_len(len: usize) {
    if len == 1 {
        warn!("window of length 1 is undefined (division by len - 1), result is NaN");
    }
}

/// A symmetric generalized cosine window of a given length with coefficients `coeffs`:
///```text
/// w[n] = sum_k (-1)^k * coeffs[k] * cos(2*π*k*n/(N-1)),     0 ≤ n < N.
///```
///
/// Example usage:
/// ```
/// use firord::windows;
///
/// let taps = windows::gen_cos(38, &[0.5, 0.5]);
/// assert_eq!(taps, windows::hanning(38));
/// ```
pub fn gen_cos(len: usize, coeffs: &[f64]) -> Vec<f64> {
    check_len(len);
    let span = len.saturating_sub(1) as f64;
    (0..len)
        .map(|n| {
            coeffs
                .iter()
                .enumerate()
                .map(|(k, c)| {
                    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                    sign * c * (2.0 * PI * (k * n) as f64 / span).cos()
                })
                .sum()
        })
        .collect()
}

/// A Hanning window (also known as Hann window) of a given length.
///
/// `w[n] = 0.5 - 0.5 cos(2πn/(N-1))`
///
/// Example usage:
/// ```
/// use firord::windows;
///
/// let taps = windows::hanning(38);
/// assert_eq!(taps[0], 0.0);
/// ```
pub fn hanning(len: usize) -> Vec<f64> {
    gen_cos(len, &[0.5, 0.5])
}

/// Alias for [`hanning`].
pub fn hann(len: usize) -> Vec<f64> {
    hanning(len)
}

/// A Hamming window of a given length.
///
/// `w[n] = 0.54 - 0.46 cos(2πn/(N-1))`
pub fn hamming(len: usize) -> Vec<f64> {
    gen_cos(len, &[0.54, 0.46])
}

/// A Blackman window of a given length.
///
/// `w[n] = 0.42 - 0.5 cos(2πn/(N-1)) + 0.08 cos(4πn/(N-1))`
pub fn blackman(len: usize) -> Vec<f64> {
    gen_cos(len, &[0.42, 0.5, 0.08])
}

/// A Kaiser window of a given length and shape parameter `beta`.
///
/// Larger `beta` trades a wider main lobe for lower sidelobes. `beta = 0` gives the
/// rectangular window.
///
/// Example usage:
/// ```
/// use firord::windows;
///
/// let taps = windows::kaiser(38, 5.653);
/// ```
pub fn kaiser(len: usize, beta: f64) -> Vec<f64> {
    check_len(len);
    let alpha = len.saturating_sub(1) as f64 / 2.0;
    let norm = special_funs::besseli0(beta);
    (0..len)
        .map(|n| {
            let r = (n as f64 - alpha) / alpha;
            special_funs::besseli0(beta * (1.0 - r * r).sqrt()) / norm
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;

    const N_TAPS: usize = 38;

    // `half` holds the first N_TAPS / 2 taps, the rest follow by symmetry
    fn assert_window(window: &[f64], half: &[f64]) {
        assert_eq!(window.len(), N_TAPS);
        let tol = 1e-5;
        for (i, tap) in half.iter().enumerate() {
            for idx in [i, N_TAPS - 1 - i] {
                assert!(
                    (window[idx] - tap).abs() < tol,
                    "abs({} - {}) < {} (tap {})",
                    window[idx],
                    tap,
                    tol,
                    idx
                );
            }
        }
    }

    #[test]
    fn hanning_accuracy() {
        // MATLAB hann(38)
        let half = [
            0.000000000000000,
            0.007192044826146,
            0.028561277269458,
            0.063492943419406,
            0.110982122840780,
            0.169662638304959,
            0.237846358221384,
            0.313571761109846,
            0.394660365002137,
            0.478779398401926,
            0.563508909873439,
            0.646411385638275,
            0.725101872408837,
            0.797316588152143,
            0.860978046977262,
            0.914254824621921,
            0.955614245194068,
            0.983866473466749,
            0.998198744271263,
        ];
        assert_window(&hanning(N_TAPS), &half);
    }

    #[test]
    fn hamming_accuracy() {
        // MATLAB hamming(38)
        let half = [
            0.080000000000000,
            0.086616681240054,
            0.106276375087901,
            0.138413507945853,
            0.182103553013518,
            0.236089627240563,
            0.298818649563673,
            0.368486020221058,
            0.443087535801966,
            0.520477046529772,
            0.598428197083564,
            0.674698474787213,
            0.747093722616130,
            0.813531261099972,
            0.872099803219081,
            0.921114438652167,
            0.959165105578543,
            0.985157155589410,
            0.998342844729562,
        ];
        assert_window(&hamming(N_TAPS), &half);
    }

    #[test]
    fn blackman_accuracy() {
        // MATLAB blackman(38)
        let half = [
            0.000000000000000,
            0.002622240463032,
            0.010804137614933,
            0.025437526103984,
            0.047836464440438,
            0.079501212725209,
            0.121830058635970,
            0.175815273593484,
            0.241762085771086,
            0.319067599318524,
            0.406090274118759,
            0.500130613698768,
            0.597531218304494,
            0.693890766450019,
            0.784373343232954,
            0.864083342844346,
            0.928468223065274,
            0.973707602519644,
            0.997048017099080,
        ];
        assert_window(&blackman(N_TAPS), &half);
    }

    #[test]
    fn kaiser_accuracy() {
        // MATLAB kaiser(38, 5.653)
        let half = [
            0.020392806629217,
            0.041484435695145,
            0.070067692203354,
            0.106749242190360,
            0.151823492501156,
            0.205218380642171,
            0.266458522450125,
            0.334649288647039,
            0.408484172820245,
            0.486276388059038,
            0.566014081873242,
            0.645436995269608,
            0.722130922112194,
            0.793635055125124,
            0.857556328958361,
            0.911684263160396,
            0.954099618076827,
            0.983270424870408,
            0.998129626296050,
        ];
        assert_window(&kaiser(N_TAPS, 5.653), &half);
    }

    #[test]
    fn kaiser_zero_beta_is_rect() {
        for len in [2, 7, 64] {
            assert_eq!(kaiser(len, 0.0), rect(len));
        }
    }

    #[test]
    fn edges() {
        for len in [2, 3, 16, 101] {
            assert!(hanning(len)[0].abs() < 1e-15);
            assert!(blackman(len)[0].abs() < 1e-15);
            assert!((hamming(len)[0] - 0.08).abs() < 1e-15);
        }
    }

    #[test]
    fn degenerate_lengths() {
        assert!(hanning(0).is_empty());
        assert!(kaiser(0, 3.0).is_empty());
        assert!(hanning(1)[0].is_nan());
        assert!(hamming(1)[0].is_nan());
        assert!(blackman(1)[0].is_nan());
        assert!(kaiser(1, 3.0)[0].is_nan());
        assert_eq!(rect(1), vec![1.0]);
    }

    #[test]
    fn runtime_selection() {
        assert_eq!(Window::Rectangular.generate(5), rect(5));
        assert_eq!(Window::Hanning.generate(9), hann(9));
        assert_eq!(Window::Blackman.generate(9), blackman(9));
        assert_eq!(Window::Kaiser(8.0).generate(33), kaiser(33, 8.0));
    }
}
