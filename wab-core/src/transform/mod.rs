//! Convert grid references to geographic coordinates.
//!
//! The overlay never does projection maths itself. Each grid system is served
//! by one [`GridTransform`] implementation, installed into a
//! [`TransformRegistry`] whenever it becomes available. Systems without an
//! installed provider are reported as unavailable and simply draw nothing.

mod error;
mod provider;
mod registry;

pub use error::TransformError;
pub use provider::GridTransform;
pub use registry::{Readiness, TransformRegistry};
