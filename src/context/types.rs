//! Soil and climate context types
//!
//! The small typed fact set extracted from a farmer's free-text description.
//! Every field is independently optional (or false by default), so any
//! combination of detected facts is a valid context.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse soil particle-size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilTexture {
    Sandy,
    Clay,
    Loam,
    Silt,
}

impl SoilTexture {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilTexture::Sandy => "sandy",
            SoilTexture::Clay => "clay",
            SoilTexture::Loam => "loam",
            SoilTexture::Silt => "silt",
        }
    }
}

/// Coarse precipitation band inferred from descriptive words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RainfallBand {
    Low,
    Moderate,
    High,
}

impl RainfallBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RainfallBand::Low => "low",
            RainfallBand::Moderate => "moderate",
            RainfallBand::High => "high",
        }
    }
}

/// Coarse regional climate zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateZone {
    Arid,
    Tropical,
    Temperate,
}

impl ClimateZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateZone::Arid => "arid",
            ClimateZone::Tropical => "tropical",
            ClimateZone::Temperate => "temperate",
        }
    }
}

impl fmt::Display for SoilTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RainfallBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facts detected in one user message.
///
/// Transient per-request value. It can also be built directly (e.g. from a
/// form) and handed to the engine without going through text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SoilClimateContext {
    pub texture: Option<SoilTexture>,
    pub rainfall: Option<RainfallBand>,

    /// Soil pH as written by the user (finite, otherwise not range-checked)
    #[serde(rename = "pH")]
    pub ph: Option<f64>,

    pub climate: Option<ClimateZone>,

    #[serde(default)]
    pub saline: bool,

    #[serde(default)]
    pub waterlogged: bool,
}

impl SoilClimateContext {
    /// Restatement of the detected texture, rainfall and pH
    /// (e.g. "sandy soil, low rainfall, pH 6.5"). Absent fields are omitted;
    /// returns None when none of the three were detected.
    pub fn detected_summary(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if let Some(texture) = self.texture {
            parts.push(format!("{} soil", texture));
        }
        if let Some(rainfall) = self.rainfall {
            parts.push(format!("{} rainfall", rainfall));
        }
        if let Some(ph) = self.ph {
            parts.push(format!("pH {}", ph));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Canonical memoisation key. pH is keyed by its bit pattern so that
    /// equal contexts always map to the same key.
    pub fn cache_key(&self) -> String {
        format!(
            "ctx:{}|{}|{}|{}|{}|{}",
            self.texture.map(|t| t.as_str()).unwrap_or("-"),
            self.rainfall.map(|r| r.as_str()).unwrap_or("-"),
            self.ph.map(|p| format!("{:016x}", p.to_bits())).unwrap_or_else(|| "-".to_string()),
            self.climate.map(|c| c.as_str()).unwrap_or("-"),
            self.saline as u8,
            self.waterlogged as u8,
        )
    }
}
