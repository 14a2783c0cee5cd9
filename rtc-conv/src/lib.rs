#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/**
 * The four min-plus / max-plus operators.
 */
mod conv_type;
pub use conv_type::ConvType;

/**
 * Convolution at a single offset, and as a full function of the offset.
 */
mod conv;
pub use conv::{ConvResult, conv_at_x, get_critical_points, get_full_conv};

/**
 * Output curves of a greedy processing component, composed from the
 * convolution operators.
 */
mod rtc;
pub use rtc::{RtcError, lower_events_out, lower_service_out, upper_events_out, upper_service_out};

// Re-exported so that callers only need this crate
pub use rtc_core::{Plf, Point};
