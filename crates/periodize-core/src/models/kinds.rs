//! Enumerations describing strategies, phase types, focus profiles and load
//! levels.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a plan's phases are laid out over its duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PeriodizationStrategy {
    /// Accumulation, intensification, transformation, repeated
    #[default]
    Linear,

    /// Blocks alternating between the primary and secondary focus
    Block,

    /// Alternating accumulation and intensification phases
    Undulating,
}

impl FromStr for PeriodizationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(PeriodizationStrategy::Linear),
            "block" => Ok(PeriodizationStrategy::Block),
            "undulating" | "dup" => Ok(PeriodizationStrategy::Undulating),
            _ => Err(format!("Invalid periodization strategy: {s}")),
        }
    }
}

impl PeriodizationStrategy {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodizationStrategy::Linear => "linear",
            PeriodizationStrategy::Block => "block",
            PeriodizationStrategy::Undulating => "undulating",
        }
    }
}

/// The training goal of a phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PhaseType {
    /// Volume-oriented work capacity block
    Accumulation,

    /// Heavier, lower-volume block
    Intensification,

    /// Peaking block converting work into performance
    Transformation,

    /// Recovery block
    Deload,
}

impl FromStr for PhaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accumulation" => Ok(PhaseType::Accumulation),
            "intensification" => Ok(PhaseType::Intensification),
            "transformation" => Ok(PhaseType::Transformation),
            "deload" => Ok(PhaseType::Deload),
            _ => Err(format!("Invalid phase type: {s}")),
        }
    }
}

impl PhaseType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseType::Accumulation => "accumulation",
            PhaseType::Intensification => "intensification",
            PhaseType::Transformation => "transformation",
            PhaseType::Deload => "deload",
        }
    }

    /// Human-readable label used in phase names.
    pub fn label(&self) -> &'static str {
        match self {
            PhaseType::Accumulation => "Accumulation",
            PhaseType::Intensification => "Intensification",
            PhaseType::Transformation => "Transformation",
            PhaseType::Deload => "Deload",
        }
    }

    /// Estimated relative 1RM gain after completing a phase of this type.
    ///
    /// These are coaching heuristics, not measured data.
    pub fn estimated_strength_gain(&self) -> f64 {
        match self {
            PhaseType::Accumulation => 0.02,
            PhaseType::Intensification => 0.05,
            PhaseType::Transformation => 0.03,
            PhaseType::Deload => 0.0,
        }
    }

    /// Weekly additive load increment applied to non-deload weeks.
    pub fn weekly_progression(&self) -> f64 {
        match self {
            PhaseType::Accumulation => 0.025,
            PhaseType::Intensification => 0.02,
            PhaseType::Transformation => 0.015,
            PhaseType::Deload => 0.0,
        }
    }

    /// Multipliers `(intensity, volume)` biasing a week's base factors.
    pub fn factor_bias(&self) -> (f64, f64) {
        match self {
            PhaseType::Accumulation => (0.95, 1.1),
            PhaseType::Intensification => (1.05, 0.9),
            PhaseType::Transformation => (1.0, 1.0),
            PhaseType::Deload => (0.8, 0.7),
        }
    }
}

/// Dominant strength quality trained by a plan or phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum FocusProfile {
    Hypertrophy,
    #[default]
    Strength,
    Power,
    Endurance,
    General,
}

impl FromStr for FocusProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hypertrophy" => Ok(FocusProfile::Hypertrophy),
            "strength" => Ok(FocusProfile::Strength),
            "power" => Ok(FocusProfile::Power),
            "endurance" => Ok(FocusProfile::Endurance),
            "general" => Ok(FocusProfile::General),
            _ => Err(format!("Invalid focus profile: {s}")),
        }
    }
}

impl FocusProfile {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusProfile::Hypertrophy => "hypertrophy",
            FocusProfile::Strength => "strength",
            FocusProfile::Power => "power",
            FocusProfile::Endurance => "endurance",
            FocusProfile::General => "general",
        }
    }

    /// Whether blocks with this focus are built as accumulation phases.
    pub fn is_hypertrophy_oriented(&self) -> bool {
        matches!(self, FocusProfile::Hypertrophy)
    }
}

/// Qualitative weekly demand tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum LoadLevel {
    High,
    Medium,
    Low,
}

impl FromStr for LoadLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(LoadLevel::High),
            "medium" => Ok(LoadLevel::Medium),
            "low" => Ok(LoadLevel::Low),
            _ => Err(format!("Invalid load level: {s}")),
        }
    }
}

impl LoadLevel {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadLevel::High => "high",
            LoadLevel::Medium => "medium",
            LoadLevel::Low => "low",
        }
    }

    /// Unbiased `(intensity, volume)` factors for this tier.
    pub fn base_factors(&self) -> (f64, f64) {
        match self {
            LoadLevel::High => (1.0, 1.0),
            LoadLevel::Medium => (0.9, 0.9),
            LoadLevel::Low => (0.6, 0.6),
        }
    }

    /// Get level with a compact marker for tables.
    pub fn with_icon(&self) -> &'static str {
        match self {
            LoadLevel::High => "▲ High",
            LoadLevel::Medium => "■ Medium",
            LoadLevel::Low => "▼ Low",
        }
    }
}
