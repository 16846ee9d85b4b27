//! JSON contract with the devotion planner backend.
//!
//! Every response mirrors what the backend routes under `/main/` return.
//! Star identifiers coming back from the backend are normalized with
//! [`normalize_star_id`] before being matched against the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend placeholder used when a constellation grants no affinity bonus
pub const NO_AFFINITY_BONUS: &str = "no affinity bonus";

/// The five in-game affinities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affinity {
    Ascendant,
    Chaos,
    Eldritch,
    Order,
    Primordial,
}

impl Affinity {
    pub const ALL: [Affinity; 5] = [
        Affinity::Ascendant,
        Affinity::Chaos,
        Affinity::Eldritch,
        Affinity::Order,
        Affinity::Primordial,
    ];

    /// Parse a backend affinity name such as `Points_of_Primordial`
    pub fn from_backend_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|affinity| name.contains(affinity.display_name()))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Affinity::Ascendant => "Ascendant",
            Affinity::Chaos => "Chaos",
            Affinity::Eldritch => "Eldritch",
            Affinity::Order => "Order",
            Affinity::Primordial => "Primordial",
        }
    }

    /// Short label for the counter bar
    pub fn short_name(&self) -> &'static str {
        match self {
            Affinity::Ascendant => "Asc",
            Affinity::Chaos => "Chs",
            Affinity::Eldritch => "Eld",
            Affinity::Order => "Ord",
            Affinity::Primordial => "Prim",
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Affinity counters and remaining devotion points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Counters {
    #[serde(rename = "asc")]
    pub ascendant: i32,
    #[serde(rename = "chs")]
    pub chaos: i32,
    #[serde(rename = "eld")]
    pub eldritch: i32,
    #[serde(rename = "ord")]
    pub order: i32,
    #[serde(rename = "prim")]
    pub primordial: i32,
    pub devpoints: i32,
}

impl Counters {
    pub fn affinity(&self, affinity: Affinity) -> i32 {
        match affinity {
            Affinity::Ascendant => self.ascendant,
            Affinity::Chaos => self.chaos,
            Affinity::Eldritch => self.eldritch,
            Affinity::Order => self.order,
            Affinity::Primordial => self.primordial,
        }
    }
}

/// Response of the standard unlock and lock routes
///
/// `result` tells whether the clicked star is unlocked after the request.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardResponse {
    pub result: bool,
    #[serde(flatten)]
    pub counters: Counters,
    #[serde(default)]
    pub to_glow: Vec<String>,
}

/// Response of the blink route: every unlocked star after the request
#[derive(Debug, Clone, Deserialize)]
pub struct BlinkResponse {
    pub result: Vec<String>,
    #[serde(flatten)]
    pub counters: Counters,
    #[serde(default)]
    pub to_glow: Vec<String>,
}

/// Response of the reset route: unlocked stars (empty on success)
#[derive(Debug, Clone, Deserialize)]
pub struct ResetResponse {
    pub result: Vec<String>,
    #[serde(flatten)]
    pub counters: Counters,
}

/// Response of the results route: one line per gained bonus
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsResponse {
    pub result: Vec<String>,
}

/// Response of the attributes route
#[derive(Debug, Clone, Deserialize)]
pub struct AttributesResponse {
    /// Attribute lines; the last entry is the star display name
    pub result: Vec<String>,
    pub first_affinity: Option<String>,
    pub first_affinity_value: Option<i32>,
    pub second_affinity: Option<String>,
    pub second_affinity_value: Option<i32>,
    pub third_affinity: Option<String>,
    pub third_affinity_value: Option<i32>,
    pub first_bonus: Option<String>,
    pub first_bonus_value: Option<i32>,
    pub second_bonus: Option<String>,
    pub second_bonus_value: Option<i32>,
}

impl AttributesResponse {
    /// Affinity points required to start the constellation
    pub fn requirements(&self) -> Vec<(Affinity, i32)> {
        [
            (&self.first_affinity, self.first_affinity_value),
            (&self.second_affinity, self.second_affinity_value),
            (&self.third_affinity, self.third_affinity_value),
        ]
        .into_iter()
        .filter_map(|(name, value)| pair(name.as_deref(), value))
        .collect()
    }

    /// Affinity points granted once the constellation is complete
    pub fn bonuses(&self) -> Vec<(Affinity, i32)> {
        if self.first_bonus.as_deref() == Some(NO_AFFINITY_BONUS) {
            return Vec::new();
        }
        [
            (&self.first_bonus, self.first_bonus_value),
            (&self.second_bonus, self.second_bonus_value),
        ]
        .into_iter()
        .filter_map(|(name, value)| pair(name.as_deref(), value))
        .collect()
    }
}

fn pair(name: Option<&str>, value: Option<i32>) -> Option<(Affinity, i32)> {
    let affinity = Affinity::from_backend_name(name?)?;
    Some((affinity, value.unwrap_or(0)))
}

/// Normalize a backend star id for catalog matching
///
/// Strips whitespace and the `skill` marker, which some routes keep and
/// others remove (`Tsunami skill` / `Tsunamiskill` / `Tsunami` all match).
pub fn normalize_star_id(id: &str) -> String {
    let compact: String = id.chars().filter(|c| !c.is_whitespace()).collect();
    compact.replace("skill", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_response() {
        let json = r#"{"result": true, "asc": 0, "chs": 1, "eld": 0, "ord": 2,
            "prim": 3, "devpoints": 50, "to_glow": ["FirstTortoiseStar", "FirstBullStar"]}"#;
        let resp: StandardResponse = serde_json::from_str(json).unwrap();
        assert!(resp.result);
        assert_eq!(resp.counters.primordial, 3);
        assert_eq!(resp.counters.devpoints, 50);
        assert_eq!(resp.counters.affinity(Affinity::Order), 2);
        assert_eq!(resp.to_glow.len(), 2);
    }

    #[test]
    fn test_reset_response() {
        let json = r#"{"result": [], "devpoints": 55, "asc": 0, "chs": 0, "eld": 0, "ord": 0, "prim": 0}"#;
        let resp: ResetResponse = serde_json::from_str(json).unwrap();
        assert!(resp.result.is_empty());
        assert_eq!(resp.counters.devpoints, 55);
    }

    #[test]
    fn test_attributes_requirements_and_bonuses() {
        let json = serde_json::json!({
            "result": ["25 Health", "12 Defensive Ability", "First Tortoise Star"],
            "first_affinity": "Points_of_Order",
            "first_affinity_value": 1,
            "second_affinity": null,
            "second_affinity_value": null,
            "third_affinity": null,
            "third_affinity_value": null,
            "first_bonus": "Points_of_Primordial",
            "first_bonus_value": 3,
            "second_bonus": "Points_of_Order",
            "second_bonus_value": 2
        });
        let resp: AttributesResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.requirements(), vec![(Affinity::Order, 1)]);
        assert_eq!(
            resp.bonuses(),
            vec![(Affinity::Primordial, 3), (Affinity::Order, 2)]
        );
    }

    #[test]
    fn test_attributes_without_bonus() {
        let json = serde_json::json!({
            "result": ["Crossroads Of Chaos"],
            "first_affinity": "Points_of_Chaos",
            "first_affinity_value": 0,
            "second_affinity": null,
            "second_affinity_value": null,
            "third_affinity": null,
            "third_affinity_value": null,
            "first_bonus": "no affinity bonus",
            "first_bonus_value": 0,
            "second_bonus": null,
            "second_bonus_value": null
        });
        let resp: AttributesResponse = serde_json::from_value(json).unwrap();
        assert!(resp.bonuses().is_empty());
        assert_eq!(resp.requirements(), vec![(Affinity::Chaos, 0)]);
    }

    #[test]
    fn test_affinity_from_backend_name() {
        assert_eq!(
            Affinity::from_backend_name("Points_of_Eldritch"),
            Some(Affinity::Eldritch)
        );
        assert_eq!(Affinity::from_backend_name("Points_of_Nothing"), None);
    }

    #[test]
    fn test_normalize_star_id() {
        assert_eq!(normalize_star_id(" Second Tortoise Star "), "SecondTortoiseStar");
        assert_eq!(normalize_star_id("Tsunamiskill"), "Tsunami");
        assert_eq!(normalize_star_id("Tsunami"), "Tsunami");
        assert_eq!(normalize_star_id("TurtleShell"), "TurtleShell");
    }
}
