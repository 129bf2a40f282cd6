//! Readiness-tracked slots holding one provider per grid system.

use std::fmt;

use geo::Coord;

use crate::grid::GridSystem;
use crate::reference::GridReference;

use super::error::TransformError;
use super::provider::GridTransform;

/// Change in provider availability reported by [`TransformRegistry::install`].
///
/// Hosts re-render on either variant; nothing inside the overlay polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The system had no provider and now has one.
    BecameReady(GridSystem),
    /// An existing provider was swapped for a new one.
    Replaced(GridSystem),
}

impl Readiness {
    /// System whose availability changed.
    #[must_use]
    pub const fn system(self) -> GridSystem {
        match self {
            Self::BecameReady(system) | Self::Replaced(system) => system,
        }
    }
}

/// Holds the transform provider for each grid system, if loaded.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wab_core::{
///     GridReference, GridSystem, GridTransform, Readiness, TransformError, TransformRegistry,
/// };
///
/// struct Origin;
///
/// impl GridTransform for Origin {
///     fn system(&self) -> GridSystem {
///         GridSystem::Gb
///     }
///
///     fn resolve(&self, _reference: &GridReference) -> Result<Coord<f64>, TransformError> {
///         Ok(Coord { x: 0.0, y: 0.0 })
///     }
/// }
///
/// let mut registry = TransformRegistry::new();
/// assert!(!registry.is_ready(GridSystem::Gb));
/// let change = registry.install(Origin);
/// assert_eq!(change, Readiness::BecameReady(GridSystem::Gb));
/// assert!(registry.is_ready(GridSystem::Gb));
/// assert!(!registry.all_ready());
/// ```
#[derive(Default)]
pub struct TransformRegistry {
    slots: [Option<Box<dyn GridTransform>>; 3],
}

impl TransformRegistry {
    /// Create a registry with no providers installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `provider` into the slot for its system.
    pub fn install<T>(&mut self, provider: T) -> Readiness
    where
        T: GridTransform + 'static,
    {
        self.install_boxed(Box::new(provider))
    }

    /// Install an already boxed provider.
    pub fn install_boxed(&mut self, provider: Box<dyn GridTransform>) -> Readiness {
        let system = provider.system();
        let previous = self
            .slot_mut(system)
            .and_then(|slot| slot.replace(provider));
        log::debug!("transform provider for the {system} grid installed");
        if previous.is_some() {
            Readiness::Replaced(system)
        } else {
            Readiness::BecameReady(system)
        }
    }

    /// Remove the provider for `system`, returning whether one was present.
    pub fn uninstall(&mut self, system: GridSystem) -> bool {
        self.slot_mut(system).and_then(Option::take).is_some()
    }

    /// Whether a provider is installed for `system`.
    #[must_use]
    pub fn is_ready(&self, system: GridSystem) -> bool {
        self.provider(system).is_some()
    }

    /// Whether every grid system has a provider.
    #[must_use]
    pub fn all_ready(&self) -> bool {
        GridSystem::ALL.iter().all(|system| self.is_ready(*system))
    }

    /// Systems with a provider, in rendering order.
    #[must_use]
    pub fn ready_systems(&self) -> Vec<GridSystem> {
        GridSystem::ALL
            .into_iter()
            .filter(|system| self.is_ready(*system))
            .collect()
    }

    /// The provider for `system`, if installed.
    #[must_use]
    pub fn provider(&self, system: GridSystem) -> Option<&dyn GridTransform> {
        self.slots
            .get(system.index())
            .and_then(Option::as_deref)
    }

    /// Resolve `reference` with the provider for `system`.
    pub fn resolve(
        &self,
        system: GridSystem,
        reference: &GridReference,
    ) -> Result<Coord<f64>, TransformError> {
        let provider = self
            .provider(system)
            .ok_or(TransformError::ProviderUnavailable(system))?;
        provider.resolve(reference)
    }

    /// Parse `reference` as text and resolve it with the provider for `system`.
    ///
    /// # Examples
    /// ```
    /// use wab_core::{GridSystem, TransformError, TransformRegistry};
    ///
    /// let registry = TransformRegistry::new();
    /// let err = registry.resolve_str(GridSystem::Ci, "WV 50000 50000").unwrap_err();
    /// assert_eq!(err, TransformError::ProviderUnavailable(GridSystem::Ci));
    /// ```
    pub fn resolve_str(
        &self,
        system: GridSystem,
        reference: &str,
    ) -> Result<Coord<f64>, TransformError> {
        if !self.is_ready(system) {
            return Err(TransformError::ProviderUnavailable(system));
        }
        let parsed = GridReference::parse(system, reference)?;
        self.resolve(system, &parsed)
    }

    fn slot_mut(&mut self, system: GridSystem) -> Option<&mut Option<Box<dyn GridTransform>>> {
        self.slots.get_mut(system.index())
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("ready", &self.ready_systems())
            .finish()
    }
}
