//! Design request parameters and generated design options

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Lowest cost ceiling selectable in the form (IDR)
pub const MIN_MAX_COST: u64 = 100_000;
/// Highest cost ceiling selectable in the form (IDR)
pub const MAX_MAX_COST: u64 = 20_000_000;
/// Cost slider step (IDR)
pub const MAX_COST_STEP: u64 = 100_000;

/// Desired structural strength of the generated designs.
///
/// Serialized with the Indonesian labels the generation prompt is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strength {
    #[serde(rename = "Rendah")]
    Low,
    #[default]
    #[serde(rename = "Sedang")]
    Medium,
    #[serde(rename = "Tinggi")]
    High,
    #[serde(rename = "Sangat Tinggi")]
    VeryHigh,
}

impl Strength {
    pub const ALL: [Strength; 4] = [
        Strength::Low,
        Strength::Medium,
        Strength::High,
        Strength::VeryHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Strength::Low => "Rendah",
            Strength::Medium => "Sedang",
            Strength::High => "Tinggi",
            Strength::VeryHigh => "Sangat Tinggi",
        }
    }

    /// Next option in selector order (wraps)
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous option in selector order (wraps)
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strength {
    type Err = String;

    /// Accepts the Indonesian label or the English variant name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let strength = match normalized.as_str() {
            "rendah" | "low" => Strength::Low,
            "sedang" | "medium" => Strength::Medium,
            "tinggi" | "high" => Strength::High,
            "sangat tinggi" | "very high" | "veryhigh" | "very-high" => Strength::VeryHigh,
            _ => return Err(format!("unknown strength: {s}")),
        };
        Ok(strength)
    }
}

/// User-supplied constraints for one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignParameters {
    pub material: String,
    /// Cost ceiling in rupiah
    pub max_cost: u64,
    pub strength: Strength,
    pub prompt: String,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self {
            material: "Baja".to_string(),
            max_cost: 5_000_000,
            strength: Strength::Medium,
            prompt: "sebuah rangka drone yang ringan namun kuat".to_string(),
        }
    }
}

/// One candidate design returned by the generation service.
///
/// Every field is required. `estimated_cost` is not checked against the
/// request's `max_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignOption {
    pub design_name: String,
    pub material_used: String,
    pub estimated_cost: f64,
    pub strength_level: String,
    #[serde(deserialize_with = "deserialize_efficiency_score")]
    pub material_efficiency_score: u8,
    pub description: String,
}

impl DesignOption {
    /// Efficiency score as a fraction of the full bar (0.0..=1.0)
    pub fn efficiency_ratio(&self) -> f64 {
        f64::from(self.material_efficiency_score.min(100)) / 100.0
    }
}

/// The schema declares the score as a NUMBER, so `87` and `87.0` are both
/// accepted. Fractions are rounded; anything outside 1..=100 is rejected.
fn deserialize_efficiency_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    let rounded = raw.round();
    if !(1.0..=100.0).contains(&rounded) {
        return Err(serde::de::Error::custom(format!(
            "materialEfficiencyScore {raw} is outside 1..=100"
        )));
    }
    Ok(rounded as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option_json(score: &str) -> String {
        format!(
            r#"{{
                "designName": "Rangka Heksagonal",
                "materialUsed": "Serat Karbon",
                "estimatedCost": 4250000,
                "strengthLevel": "Tinggi",
                "materialEfficiencyScore": {score},
                "description": "Rangka ringan."
            }}"#
        )
    }

    #[test]
    fn test_default_parameters_match_form_defaults() {
        let params = DesignParameters::default();
        assert_eq!(params.material, "Baja");
        assert_eq!(params.max_cost, 5_000_000);
        assert_eq!(params.strength, Strength::Medium);
        assert!(!params.prompt.is_empty());
    }

    #[test]
    fn test_strength_serializes_to_indonesian_label() {
        let json = serde_json::to_string(&Strength::VeryHigh).unwrap();
        assert_eq!(json, "\"Sangat Tinggi\"");
        let parsed: Strength = serde_json::from_str("\"Sedang\"").unwrap();
        assert_eq!(parsed, Strength::Medium);
    }

    #[test]
    fn test_strength_from_str_accepts_both_languages() {
        assert_eq!("Sedang".parse::<Strength>().unwrap(), Strength::Medium);
        assert_eq!("high".parse::<Strength>().unwrap(), Strength::High);
        assert_eq!(
            "sangat tinggi".parse::<Strength>().unwrap(),
            Strength::VeryHigh
        );
        assert!("extreme".parse::<Strength>().is_err());
    }

    #[test]
    fn test_strength_cycles_wrap() {
        assert_eq!(Strength::VeryHigh.next(), Strength::Low);
        assert_eq!(Strength::Low.prev(), Strength::VeryHigh);
        assert_eq!(Strength::Medium.next(), Strength::High);
    }

    #[test]
    fn test_parameters_use_camel_case() {
        let json = serde_json::to_value(DesignParameters::default()).unwrap();
        assert_eq!(json["maxCost"], 5_000_000);
        assert_eq!(json["strength"], "Sedang");
    }

    #[test]
    fn test_design_option_parses_integer_score() {
        let option: DesignOption = serde_json::from_str(&option_json("87")).unwrap();
        assert_eq!(option.design_name, "Rangka Heksagonal");
        assert_eq!(option.estimated_cost, 4_250_000.0);
        assert_eq!(option.material_efficiency_score, 87);
    }

    #[test]
    fn test_design_option_rounds_fractional_score() {
        let option: DesignOption = serde_json::from_str(&option_json("91.6")).unwrap();
        assert_eq!(option.material_efficiency_score, 92);
    }

    #[test]
    fn test_design_option_rejects_out_of_range_score() {
        assert!(serde_json::from_str::<DesignOption>(&option_json("0")).is_err());
        assert!(serde_json::from_str::<DesignOption>(&option_json("101")).is_err());
    }

    #[test]
    fn test_design_option_rejects_string_score() {
        assert!(serde_json::from_str::<DesignOption>(&option_json("\"87\"")).is_err());
    }

    #[test]
    fn test_efficiency_ratio() {
        let option: DesignOption = serde_json::from_str(&option_json("25")).unwrap();
        assert!((option.efficiency_ratio() - 0.25).abs() < f64::EPSILON);
    }
}
