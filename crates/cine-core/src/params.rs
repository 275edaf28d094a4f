use serde::{Deserialize, Serialize};

/// Immutable-per-frame snapshot of every filter knob.
///
/// The rendering path never mutates this; the hosting application builds
/// a fresh snapshot whenever the user moves a control and swaps it in
/// wholesale between frames. `Copy` keeps the swap trivially atomic.
///
/// Radii are pixel neighborhood half-widths; intensities and amounts are
/// non-negative floats. Values are not clamped here — a stage is enabled
/// only by a strict `intensity > 0.0` gate, so negative values simply
/// disable it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    pub contrast: f32,
    pub teal_amount: f32,
    pub orange_amount: f32,

    pub bloom_intensity: f32,
    pub bloom_threshold: f32,
    pub bloom_radius: i32,

    pub halation_intensity: f32,
    pub halation_threshold: f32,
    pub halation_radius: i32,

    pub secondary_glow_intensity: f32,
    pub secondary_glow_threshold: f32,
    pub secondary_glow_radius: i32,

    pub grain_intensity: f32,

    pub shake_intensity: f32,
    pub shake_speed: f32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            contrast: 1.2,
            teal_amount: 0.2,
            orange_amount: 0.15,
            bloom_intensity: 0.5,
            bloom_threshold: 0.8,
            bloom_radius: 2,
            halation_intensity: 0.4,
            halation_threshold: 0.95,
            halation_radius: 4,
            secondary_glow_intensity: 0.3,
            secondary_glow_threshold: 0.75,
            secondary_glow_radius: 3,
            grain_intensity: 0.04,
            shake_intensity: 0.002,
            shake_speed: 5.0,
        }
    }
}

impl FilterParams {
    /// A snapshot with every stage disabled and a unity contrast curve.
    /// Rendering with these values reproduces the input exactly.
    pub fn passthrough() -> Self {
        Self {
            contrast: 1.0,
            teal_amount: 0.0,
            orange_amount: 0.0,
            bloom_intensity: 0.0,
            bloom_threshold: 0.8,
            bloom_radius: 2,
            halation_intensity: 0.0,
            halation_threshold: 0.95,
            halation_radius: 4,
            secondary_glow_intensity: 0.0,
            secondary_glow_threshold: 0.75,
            secondary_glow_radius: 3,
            grain_intensity: 0.0,
            shake_intensity: 0.0,
            shake_speed: 5.0,
        }
    }

    /// Update a single field by its settings key. Integer radii are
    /// truncated toward zero. Returns false for an unknown key so the
    /// caller can log the stale setting.
    pub fn set(&mut self, id: &str, value: f64) -> bool {
        let v = value as f32;
        match id {
            "contrast" => self.contrast = v,
            "teal_amount" => self.teal_amount = v,
            "orange_amount" => self.orange_amount = v,
            "bloom_intensity" => self.bloom_intensity = v,
            "bloom_threshold" => self.bloom_threshold = v,
            "bloom_radius" => self.bloom_radius = value as i32,
            "halation_intensity" => self.halation_intensity = v,
            "halation_threshold" => self.halation_threshold = v,
            "halation_radius" => self.halation_radius = value as i32,
            "secondary_glow_intensity" => self.secondary_glow_intensity = v,
            "secondary_glow_threshold" => self.secondary_glow_threshold = v,
            "secondary_glow_radius" => self.secondary_glow_radius = value as i32,
            "grain_intensity" => self.grain_intensity = v,
            "shake_intensity" => self.shake_intensity = v,
            "shake_speed" => self.shake_speed = v,
            _ => return false,
        }
        true
    }

    /// Read a field back by its settings key.
    pub fn get(&self, id: &str) -> Option<f64> {
        let v = match id {
            "contrast" => self.contrast as f64,
            "teal_amount" => self.teal_amount as f64,
            "orange_amount" => self.orange_amount as f64,
            "bloom_intensity" => self.bloom_intensity as f64,
            "bloom_threshold" => self.bloom_threshold as f64,
            "bloom_radius" => self.bloom_radius as f64,
            "halation_intensity" => self.halation_intensity as f64,
            "halation_threshold" => self.halation_threshold as f64,
            "halation_radius" => self.halation_radius as f64,
            "secondary_glow_intensity" => self.secondary_glow_intensity as f64,
            "secondary_glow_threshold" => self.secondary_glow_threshold as f64,
            "secondary_glow_radius" => self.secondary_glow_radius as f64,
            "grain_intensity" => self.grain_intensity as f64,
            "shake_intensity" => self.shake_intensity as f64,
            "shake_speed" => self.shake_speed as f64,
            _ => return None,
        };
        Some(v)
    }
}

/// A single filter knob descriptor with range and step for the hosting
/// application's property panel.
///
/// The renderer itself only reads `FilterParams`; descriptors exist so a
/// settings/UI layer can enumerate, display, and validate controls
/// without hard-coding ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterParameter {
    pub id: String,
    pub name: String,
    pub description: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub default_value: f64,
    pub step: f64,
}

impl FilterParameter {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        id: impl Into<String>,
        value: f64,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            value,
            min,
            max,
            default_value: value,
            step,
        }
    }

    /// Get the normalized value in [0, 1].
    pub fn normalized_value(&self) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Set value from a normalized [0, 1] input, snapping to `step`.
    pub fn set_from_normalized(&mut self, normalized: f64) {
        let clamped = normalized.clamp(0.0, 1.0);
        let raw = self.min + clamped * (self.max - self.min);
        self.value = if self.step > 0.0 {
            self.min + ((raw - self.min) / self.step).round() * self.step
        } else {
            raw
        };
    }

    pub fn reset_to_default(&mut self) {
        self.value = self.default_value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let p = FilterParams::default();
        assert!((p.contrast - 1.2).abs() < 1e-6);
        assert_eq!(p.bloom_radius, 2);
        assert_eq!(p.halation_radius, 4);
        assert_eq!(p.secondary_glow_radius, 3);
        assert!((p.shake_speed - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_passthrough_disables_everything() {
        let p = FilterParams::passthrough();
        assert_eq!(p.contrast, 1.0);
        assert_eq!(p.teal_amount, 0.0);
        assert_eq!(p.orange_amount, 0.0);
        assert_eq!(p.bloom_intensity, 0.0);
        assert_eq!(p.halation_intensity, 0.0);
        assert_eq!(p.secondary_glow_intensity, 0.0);
        assert_eq!(p.grain_intensity, 0.0);
        assert_eq!(p.shake_intensity, 0.0);
    }

    #[test]
    fn test_set_known_and_unknown_keys() {
        let mut p = FilterParams::default();
        assert!(p.set("bloom_radius", 5.0));
        assert_eq!(p.bloom_radius, 5);
        assert!(p.set("contrast", 2.0));
        assert!((p.contrast - 2.0).abs() < 1e-6);
        assert!(!p.set("vignette", 1.0));
    }

    #[test]
    fn test_get_round_trips_set() {
        let mut p = FilterParams::default();
        p.set("grain_intensity", 0.1);
        assert!((p.get("grain_intensity").unwrap() - 0.1).abs() < 1e-6);
        assert!(p.get("vignette").is_none());
    }

    #[test]
    fn test_parameter_normalize() {
        let p = FilterParameter::new("Contrast", "Gamma exponent.", "contrast", 1.5, 0.5, 2.5, 0.05);
        assert!((p.normalized_value() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_parameter_set_from_normalized_snaps() {
        let mut p = FilterParameter::new("Contrast", "Gamma exponent.", "contrast", 1.2, 0.5, 2.5, 0.05);
        p.set_from_normalized(0.333);
        let steps = (p.value - p.min) / p.step;
        assert!((steps - steps.round()).abs() < 1e-9, "value not on step grid: {}", p.value);
        p.reset_to_default();
        assert!((p.value - 1.2).abs() < 1e-9);
    }
}
