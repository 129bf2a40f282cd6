//! Overlay configuration.
//!
//! Field names follow the option keys hosts already use (`color`,
//! `gbSquares`, `niSquares`, `ciSquares`); any key left out falls back to the
//! standard WAB square lists.

use thiserror::Error;

use crate::grid::{GridSystem, SquareId, SquareIdError};

/// Default stroke, fill and label colour.
pub const DEFAULT_COLOR: &str = "rgba(80, 80, 80, 1)";

/// Standard GB WAB squares in drawing order.
pub const DEFAULT_GB_SQUARES: [&str; 56] = [
    "HP", "HT", "HU", "HW", "HX", "HY", "HZ", "NA", "NB", "NC", "ND", "NF", "NG", "NH", "NJ",
    "NK", "NL", "NM", "NN", "NO", "NR", "NS", "NT", "NU", "NW", "NX", "NY", "NZ", "OV", "SC",
    "SD", "SE", "SH", "SJ", "SK", "SM", "SN", "SO", "SP", "SR", "SS", "ST", "SU", "SV", "SW",
    "SX", "SY", "SZ", "TA", "TF", "TG", "TL", "TM", "TR", "TQ", "TV",
];

/// Standard Irish Grid WAB squares.
pub const DEFAULT_NI_SQUARES: [&str; 5] = ["C", "D", "G", "H", "J"];

/// Standard Channel Islands WAB squares.
pub const DEFAULT_CI_SQUARES: [&str; 2] = ["WA", "WV"];

/// Problems found while resolving configured square lists.
///
/// None of these stop rendering; the affected entry or system simply
/// contributes no geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    /// A configured identifier is not a square of its system.
    #[error("ignoring {system} square '{raw}': {source}")]
    InvalidSquare {
        /// System whose list held the entry.
        system: GridSystem,
        /// Entry as configured.
        raw: String,
        /// Validation failure.
        #[source]
        source: SquareIdError,
    },
    /// A system's list is empty.
    #[error("no {0} squares configured")]
    EmptyList(GridSystem),
}

/// Squares resolved from [`OverlayOptions`], in rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguredSquares {
    /// GB squares, then IE squares, then CI squares.
    pub squares: Vec<SquareId>,
    /// Entries or lists that were dropped.
    pub issues: Vec<ConfigIssue>,
}

/// User-facing overlay options.
///
/// # Examples
/// ```
/// use wab_core::OverlayOptions;
///
/// let options = OverlayOptions::default();
/// assert_eq!(options.color, "rgba(80, 80, 80, 1)");
/// assert_eq!(options.ni_squares, ["C", "D", "G", "H", "J"]);
///
/// let resolved = options.configured_squares();
/// assert_eq!(resolved.squares.len(), 63);
/// assert!(resolved.issues.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct OverlayOptions {
    /// Line and label colour as a CSS colour string.
    pub color: String,
    /// GB squares to draw.
    pub gb_squares: Vec<String>,
    /// Irish Grid squares to draw.
    pub ni_squares: Vec<String>,
    /// Channel Islands squares to draw.
    pub ci_squares: Vec<String>,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            gb_squares: to_owned_list(&DEFAULT_GB_SQUARES),
            ni_squares: to_owned_list(&DEFAULT_NI_SQUARES),
            ci_squares: to_owned_list(&DEFAULT_CI_SQUARES),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

impl OverlayOptions {
    /// Configured identifiers for `system`.
    #[must_use]
    pub fn squares_for(&self, system: GridSystem) -> &[String] {
        match system {
            GridSystem::Gb => &self.gb_squares,
            GridSystem::Ie => &self.ni_squares,
            GridSystem::Ci => &self.ci_squares,
        }
    }

    /// Validate the three lists into GB, IE, CI rendering order.
    ///
    /// Invalid entries are dropped with a warning; empty lists are noted at
    /// debug level. Both are reported in [`ConfiguredSquares::issues`].
    #[must_use]
    pub fn configured_squares(&self) -> ConfiguredSquares {
        let mut resolved = ConfiguredSquares::default();
        for system in GridSystem::ALL {
            let raw_list = self.squares_for(system);
            if raw_list.is_empty() {
                log::debug!("no {system} squares configured");
                resolved.issues.push(ConfigIssue::EmptyList(system));
                continue;
            }
            for raw in raw_list {
                match SquareId::parse(system, raw) {
                    Ok(square) => resolved.squares.push(square),
                    Err(source) => {
                        let issue = ConfigIssue::InvalidSquare {
                            system,
                            raw: raw.clone(),
                            source,
                        };
                        log::warn!("{issue}");
                        resolved.issues.push(issue);
                    }
                }
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_resolve_in_system_order() {
        let resolved = OverlayOptions::default().configured_squares();
        let first_ie = resolved
            .squares
            .iter()
            .position(|s| s.system() == GridSystem::Ie)
            .expect("IE squares present");
        assert_eq!(first_ie, DEFAULT_GB_SQUARES.len());
        assert_eq!(resolved.squares.first().map(SquareId::as_str), Some("HP"));
        assert_eq!(resolved.squares.last().map(SquareId::as_str), Some("WV"));
    }

    #[rstest]
    fn invalid_entries_are_dropped_and_reported() {
        let options = OverlayOptions {
            gb_squares: vec!["HP".into(), "QQ".into(), "TV".into()],
            ..OverlayOptions::default()
        };
        let resolved = options.configured_squares();
        let gb: Vec<&str> = resolved
            .squares
            .iter()
            .filter(|s| s.system() == GridSystem::Gb)
            .map(SquareId::as_str)
            .collect();
        assert_eq!(gb, ["HP", "TV"]);
        assert!(matches!(
            resolved.issues.as_slice(),
            [ConfigIssue::InvalidSquare { system: GridSystem::Gb, raw, .. }] if raw == "QQ"
        ));
    }

    #[rstest]
    fn empty_lists_contribute_nothing() {
        let options = OverlayOptions {
            ci_squares: Vec::new(),
            ..OverlayOptions::default()
        };
        let resolved = options.configured_squares();
        assert!(resolved.squares.iter().all(|s| s.system() != GridSystem::Ci));
        assert_eq!(resolved.issues, vec![ConfigIssue::EmptyList(GridSystem::Ci)]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_camel_case_keys_with_defaults() {
        let json = r#"{ "color": "red", "niSquares": ["D"] }"#;
        let options: OverlayOptions = serde_json::from_str(json).expect("valid options");
        assert_eq!(options.color, "red");
        assert_eq!(options.ni_squares, ["D"]);
        assert_eq!(options.gb_squares.len(), DEFAULT_GB_SQUARES.len());
        assert_eq!(options.ci_squares, ["WA", "WV"]);
    }
}
