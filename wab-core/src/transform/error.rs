//! Errors raised while resolving grid references to coordinates.

use thiserror::Error;

use crate::grid::{GridSystem, SquareId};
use crate::reference::GridReferenceError;

/// Errors from [`crate::transform::GridTransform::resolve`] and
/// [`crate::transform::TransformRegistry`] lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// No provider has been installed for the system yet.
    ///
    /// Providers may load lazily; callers should render again once
    /// [`crate::transform::Readiness`] reports the system.
    #[error("no transform provider is ready for the {0} grid")]
    ProviderUnavailable(GridSystem),
    /// A reference for one system was passed to another system's provider.
    #[error("{found} reference passed to the {expected} transform")]
    SystemMismatch {
        /// System served by the provider.
        expected: GridSystem,
        /// System of the rejected reference.
        found: GridSystem,
    },
    /// The provider cannot place the square on its grid.
    #[error("square {0} is outside the provider's grid")]
    UnknownSquare(SquareId),
    /// The reference text could not be parsed.
    #[error(transparent)]
    Reference(#[from] GridReferenceError),
    /// An iterative projection step failed to converge.
    #[error("projection did not converge for {0}")]
    NonConvergent(String),
}
