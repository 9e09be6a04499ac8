// WHY: Risk labels are range-checked once at construction so no caller ever sees 4 or -1

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Sentence-level nocebo risk, always in 0..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RiskLabel(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("risk label {0} is outside 0..=3")]
pub struct RiskLabelError(pub i64);

impl RiskLabel {
    pub const MAX: u8 = 3;

    pub const NEUTRAL: RiskLabel = RiskLabel(0);
    pub const MILD: RiskLabel = RiskLabel(1);
    pub const MODERATE: RiskLabel = RiskLabel(2);
    pub const HIGH: RiskLabel = RiskLabel(3);

    /// All labels in ascending order
    pub const ALL: [RiskLabel; 4] = [Self::NEUTRAL, Self::MILD, Self::MODERATE, Self::HIGH];

    pub fn new(value: u8) -> Result<Self, RiskLabelError> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(RiskLabelError(value as i64))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn band(&self) -> RiskBand {
        match self.0 {
            0 => RiskBand::Neutral,
            1 => RiskBand::Mild,
            2 => RiskBand::Moderate,
            _ => RiskBand::High,
        }
    }
}

impl TryFrom<u8> for RiskLabel {
    type Error = RiskLabelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for RiskLabel {
    type Error = RiskLabelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| RiskLabelError(value))
            .and_then(Self::new)
    }
}

impl From<RiskLabel> for u8 {
    fn from(label: RiskLabel) -> Self {
        label.0
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative band shown next to the numeric label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    Neutral,
    Mild,
    Moderate,
    High,
}

impl RiskBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Neutral => "Neutral",
            RiskBand::Mild => "Mild",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
