//! Output sinks.
//!
//! Sinks consume a finished [`crate::Animation`] frame by frame, in phase order.

/// Looping GIF output through the `image` crate.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
