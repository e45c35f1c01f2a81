use thiserror::Error;

/// Errors raised while validating a filter specification.
///
/// Input checks run before any estimation takes place. Only [`Error::OrderOverflow`]
/// is raised after the estimate, when it does not give a usable order.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Band edge lies above the Nyquist frequency `fsamp / 2` or is NaN.
    #[error("frequency {freq} exceeds half the sample rate ({fsamp} / 2)")]
    FrequencyTooHigh {
        /// Offending band edge, in the caller's units
        freq: f64,
        /// Sample rate the edge was normalized by
        fsamp: f64,
    },
    /// Band edge is negative.
    #[error("frequency {freq} must be positive")]
    NegativeFrequency {
        /// Offending band edge, in the caller's units
        freq: f64,
    },
    /// `mags` and `devs` differ in length.
    #[error("mismatched vector length: {mags} magnitudes, {devs} deviations")]
    Mismatch {
        /// Number of magnitudes
        mags: usize,
        /// Number of deviations
        devs: usize,
    },
    /// Number of band edges does not match the number of bands.
    #[error("invalid length: expected {expected} band edges, found {found}")]
    Length {
        /// `2 * (nbands - 1)`
        expected: usize,
        /// Number of band edges given
        found: usize,
    },
    /// At least two bands are needed to have a transition region. Counts as a length
    /// error, see [`Error::is_length`].
    #[error("at least two bands are required, found {0}")]
    TooFewBands(usize),
    /// Sample rate is zero, negative or not finite.
    #[error("invalid sample rate {0}")]
    InvalidSampleRate(f64),
    /// Deviation is zero, negative or not finite.
    #[error("deviation {dev} of band {index} must be positive")]
    InvalidDeviation {
        /// Band index
        index: usize,
        /// Offending deviation
        dev: f64,
    },
    /// Magnitude is negative or not finite.
    #[error("magnitude {mag} of band {index} must be finite and non-negative")]
    InvalidMagnitude {
        /// Band index
        index: usize,
        /// Offending magnitude
        mag: f64,
    },
    /// Estimated length does not give a representable filter order.
    #[error("estimated filter length {0} is out of range")]
    OrderOverflow(f64),
    /// Transition region without width.
    #[error("transition region {index} has zero width")]
    ZeroWidthTransition {
        /// Index of the transition region
        index: usize,
    },
}

impl Error {
    /// Whether the error reports a band edge outside `[0, fsamp / 2]`.
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Error::FrequencyTooHigh { .. } | Error::NegativeFrequency { .. }
        )
    }

    /// Whether the number of band edges does not fit the number of bands.
    pub fn is_length(&self) -> bool {
        matches!(self, Error::Length { .. } | Error::TooFewBands(_))
    }
}
