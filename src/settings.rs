//! Presentation settings
//!
//! Nothing here changes gameplay; the render frame reads these to decide
//! what and how much to draw.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Maximum particles drawn per frame for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Draw particle bursts
    pub particles: bool,
    /// Animate enemy shrink instead of snapping
    pub eased_shrink: bool,
    /// Opacity of the black overlay drawn each frame (lower = longer trails)
    pub trail_alpha: f32,

    // === Accessibility ===
    /// Reduced motion (no trails, no shrink animation)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            eased_shrink: true,
            trail_alpha: 0.15,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
        if preset == QualityPreset::Low {
            self.eased_shrink = false;
        }
    }

    /// Effective shrink animation (respects reduced_motion)
    pub fn effective_eased_shrink(&self) -> bool {
        self.eased_shrink && !self.reduced_motion
    }

    /// Overlay alpha actually used; reduced motion clears the canvas fully
    pub fn effective_trail_alpha(&self) -> f32 {
        if self.reduced_motion {
            1.0
        } else {
            self.trail_alpha.clamp(0.0, 1.0)
        }
    }

    /// Effective particle draw cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_feeds_the_frame() {
        // Each serialized preference is one the render frame reads
        let json = Settings::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["eased_shrink", "particles", "quality", "reduced_motion", "trail_alpha"]
        );
    }

    #[test]
    fn test_legacy_fields_are_ignored() {
        let settings = Settings::from_json(r#"{ "show_fps": true, "quality": "Low" }"#).unwrap();
        assert_eq!(settings.quality, QualityPreset::Low);
    }

    #[test]
    fn test_low_preset_snaps_shrink() {
        let settings = Settings::from_preset(QualityPreset::Low);
        assert!(!settings.effective_eased_shrink());
        assert_eq!(settings.max_particles(), 100);
    }

    #[test]
    fn test_reduced_motion() {
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert!(!settings.effective_eased_shrink());
        assert_eq!(settings.effective_trail_alpha(), 1.0);
    }

    #[test]
    fn test_particles_off_caps_to_zero() {
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        assert_eq!(settings.max_particles(), 0);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(r#"{ "quality": "High" }"#).unwrap();
        assert_eq!(settings.quality, QualityPreset::High);
        assert!(settings.eased_shrink);
        assert_eq!(settings.trail_alpha, 0.15);
    }
}
