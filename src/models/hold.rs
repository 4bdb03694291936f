//! Holds and their functional roles on a route.

use serde::{Deserialize, Serialize};

/// Functional role of a hold within a route.
///
/// The export uses a fixed closed set of role tags. Anything else
/// deserializes to [`HoldRole::Unknown`] and is dropped from rendering
/// rather than treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldRole {
    /// Starting hold(s) of the route
    Start,
    /// Intermediate hand hold
    Hand,
    /// Finishing hold(s)
    Finish,
    /// Foot-only hold
    Foot,
    /// Any role tag outside the known set
    #[serde(other)]
    Unknown,
}

impl HoldRole {
    /// The four known roles, in legend order.
    pub const KNOWN: [Self; 4] = [Self::Start, Self::Hand, Self::Finish, Self::Foot];

    /// Whether this role is part of the known set.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Capitalized label for legends.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Hand => "Hand",
            Self::Finish => "Finish",
            Self::Foot => "Foot",
            Self::Unknown => "Unknown",
        }
    }
}

/// A single hold of a route, in board-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hold {
    /// X position on the board
    pub x: f64,
    /// Y position on the board
    pub y: f64,
    /// Functional role tag
    pub role: HoldRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_deserialize() {
        for (raw, expected) in [
            ("\"start\"", HoldRole::Start),
            ("\"hand\"", HoldRole::Hand),
            ("\"finish\"", HoldRole::Finish),
            ("\"foot\"", HoldRole::Foot),
        ] {
            let role: HoldRole = serde_json::from_str(raw).unwrap();
            assert_eq!(role, expected);
            assert!(role.is_known());
        }
    }

    #[test]
    fn test_unknown_role_is_not_an_error() {
        let role: HoldRole = serde_json::from_str("\"matching\"").unwrap();
        assert_eq!(role, HoldRole::Unknown);
        assert!(!role.is_known());
    }

    #[test]
    fn test_hold_deserialize() {
        let hold: Hold = serde_json::from_str(r#"{"x": 4.0, "y": 12.5, "role": "hand"}"#).unwrap();
        assert_eq!(hold.role, HoldRole::Hand);
        assert_eq!(hold.y, 12.5);
    }

    #[test]
    fn test_legend_order() {
        let labels: Vec<&str> = HoldRole::KNOWN.iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["Start", "Hand", "Finish", "Foot"]);
    }
}
