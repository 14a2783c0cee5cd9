use crate::{ConvType, get_full_conv};
use rtc_core::{Plf, PlfError, plf_list_min_max};
use tracing::{Level, event};

/// Errors that can occur when composing real-time calculus curves
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RtcError {
    /// Error when an input curve has no breakpoints
    #[error("input curve is empty")]
    Empty,
    /// Error when an input curve does not start at x=0
    #[error("input curve starts at x={0} instead of x=0")]
    NotAtOrigin(f64),
    /// Error when the input curves end at different x
    #[error("input curves end at x={expected} and x={found}")]
    DomainMismatch {
        /// The end of the first curve
        expected: f64,
        /// The end of the offending curve
        found: f64,
    },
    /// Error when building an intermediate curve
    #[error(transparent)]
    Plf(#[from] PlfError),
}

// Every curve must be defined on [0, L] for one common L, which is returned.
fn horizon(curves: &[&Plf]) -> Result<f64, RtcError> {
    let mut length = None;
    for curve in curves {
        if curve.is_empty() {
            event!(Level::WARN, "rejecting empty input curve");
            return Err(RtcError::Empty);
        }
        if curve.x_start() != 0.0 {
            event!(
                Level::WARN,
                x_start = curve.x_start(),
                "rejecting input curve not starting at 0"
            );
            return Err(RtcError::NotAtOrigin(curve.x_start()));
        }
        match length {
            None => length = Some(curve.x_end()),
            Some(expected) if expected != curve.x_end() => {
                event!(
                    Level::WARN,
                    expected,
                    found = curve.x_end(),
                    "rejecting input curves of different length"
                );
                return Err(RtcError::DomainMismatch {
                    expected,
                    found: curve.x_end(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(length.unwrap_or(0.0))
}

fn zero(length: f64) -> Result<Plf, RtcError> {
    Ok(Plf::new([(0.0, 0.0), (length, 0.0)])?)
}

// A convolution restricted to the horizon [0, L]
fn windowed(a: &Plf, b: &Plf, conv_type: ConvType, length: f64) -> Plf {
    get_full_conv(a, b, conv_type, Some(0.0), Some(length))
}

/// The upper service curve remaining after serving a stream,
/// the max-plus deconvolution of `βu - αl` with zero, bounded below by zero.
pub fn upper_service_out(upper_service_in: &Plf, lower_events_in: &Plf) -> Result<Plf, RtcError> {
    let length = horizon(&[upper_service_in, lower_events_in])?;
    let zero = zero(length)?;
    let result = windowed(
        &(upper_service_in - lower_events_in),
        &zero,
        ConvType::MaxPlusDeconv,
        length,
    );
    Ok(plf_list_min_max(&[result, zero], false))
}

/// The lower service curve remaining after serving a stream,
/// the max-plus convolution of `βl - αu` with zero, bounded below by zero.
pub fn lower_service_out(lower_service_in: &Plf, upper_events_in: &Plf) -> Result<Plf, RtcError> {
    let length = horizon(&[lower_service_in, upper_events_in])?;
    let zero = zero(length)?;
    let result = windowed(
        &(lower_service_in - upper_events_in),
        &zero,
        ConvType::MaxPlusConv,
        length,
    );
    Ok(plf_list_min_max(&[result, zero], false))
}

/// The upper arrival curve of the processed stream,
/// `ceil(min((αu ⊗ βu) ⊘ βl, βu))` in min-plus notation.
pub fn upper_events_out(
    upper_events_in: &Plf,
    upper_service_in: &Plf,
    lower_service_in: &Plf,
) -> Result<Plf, RtcError> {
    let length = horizon(&[upper_events_in, upper_service_in, lower_service_in])?;
    let conv = windowed(
        upper_events_in,
        upper_service_in,
        ConvType::MinPlusConv,
        length,
    );
    let deconv = windowed(&conv, lower_service_in, ConvType::MinPlusDeconv, length);
    let bounded = plf_list_min_max(&[deconv, upper_service_in.clone()], true);
    Ok(bounded.ceiled())
}

/// The lower arrival curve of the processed stream,
/// `floor(min((αl ⊘ βu) ⊗ βl, βl))` in min-plus notation.
pub fn lower_events_out(
    lower_events_in: &Plf,
    upper_service_in: &Plf,
    lower_service_in: &Plf,
) -> Result<Plf, RtcError> {
    let length = horizon(&[lower_events_in, upper_service_in, lower_service_in])?;
    let deconv = windowed(
        lower_events_in,
        upper_service_in,
        ConvType::MinPlusDeconv,
        length,
    );
    let conv = windowed(&deconv, lower_service_in, ConvType::MinPlusConv, length);
    let bounded = plf_list_min_max(&[conv, lower_service_in.clone()], true);
    Ok(bounded.floored())
}
