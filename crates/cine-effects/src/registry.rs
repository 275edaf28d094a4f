use cine_core::{FilterParameter, FilterParams};

/// Build the full set of filter knob descriptors, in property-panel
/// order.
///
/// The hosting application uses these to construct its control panel and
/// to validate persisted settings; the renderer itself never reads them.
/// Defaults here must agree with `FilterParams::default()` (covered by a
/// test below).
pub fn build_registry() -> Vec<FilterParameter> {
    vec![
        FilterParameter::new(
            "Contrast",
            "Gamma-style contrast exponent applied to each channel.",
            "contrast",
            1.2, 0.5, 2.5, 0.05,
        ),
        FilterParameter::new(
            "Teal Amount",
            "Highlight tint strength toward teal.",
            "teal_amount",
            0.2, 0.0, 1.0, 0.01,
        ),
        FilterParameter::new(
            "Orange Amount",
            "Shadow tint strength toward orange.",
            "orange_amount",
            0.15, 0.0, 1.0, 0.01,
        ),
        FilterParameter::new(
            "Bloom Intensity",
            "Strength of the white glow layer.",
            "bloom_intensity",
            0.5, 0.0, 4.0, 0.05,
        ),
        FilterParameter::new(
            "Bloom Threshold",
            "Luma level where bloom starts to pick up.",
            "bloom_threshold",
            0.8, 0.3, 1.0, 0.01,
        ),
        FilterParameter::new(
            "Bloom Radius",
            "Bloom neighborhood half-width in pixels.",
            "bloom_radius",
            2.0, 1.0, 5.0, 1.0,
        ),
        FilterParameter::new(
            "Halation Intensity",
            "Strength of the red-orange film halation glow.",
            "halation_intensity",
            0.4, 0.0, 4.0, 0.05,
        ),
        FilterParameter::new(
            "Halation Threshold",
            "Luma level where halation starts to pick up.",
            "halation_threshold",
            0.95, 0.5, 1.0, 0.01,
        ),
        FilterParameter::new(
            "Halation Radius",
            "Halation neighborhood half-width in pixels.",
            "halation_radius",
            4.0, 2.0, 8.0, 1.0,
        ),
        FilterParameter::new(
            "Secondary Glow Intensity",
            "Strength of the cool-tinted secondary glow.",
            "secondary_glow_intensity",
            0.3, 0.0, 3.0, 0.05,
        ),
        FilterParameter::new(
            "Secondary Glow Threshold",
            "Luma level where the secondary glow starts to pick up.",
            "secondary_glow_threshold",
            0.75, 0.3, 1.0, 0.01,
        ),
        FilterParameter::new(
            "Secondary Glow Radius",
            "Secondary glow neighborhood half-width in pixels.",
            "secondary_glow_radius",
            3.0, 1.0, 7.0, 1.0,
        ),
        FilterParameter::new(
            "Grain Intensity",
            "Amplitude of the per-frame monochromatic grain.",
            "grain_intensity",
            0.04, 0.0, 0.2, 0.005,
        ),
        FilterParameter::new(
            "Shake Intensity",
            "Camera shake displacement amplitude in UV units.",
            "shake_intensity",
            0.002, 0.0, 0.02, 0.0005,
        ),
        FilterParameter::new(
            "Shake Speed",
            "Camera shake oscillation speed.",
            "shake_speed",
            5.0, 0.0, 20.0, 0.5,
        ),
    ]
}

/// Look up a knob descriptor by its settings key.
pub fn find_parameter(id: &str) -> Option<&'static FilterParameter> {
    // Built once, lives for the program duration.
    static REGISTRY: std::sync::OnceLock<Vec<FilterParameter>> = std::sync::OnceLock::new();
    let entries = REGISTRY.get_or_init(build_registry);
    entries.iter().find(|p| p.id == id)
}

/// Fold a descriptor list (e.g. one restored by the host's settings
/// layer) into a parameter snapshot. Unknown ids are skipped.
pub fn snapshot_from(descriptors: &[FilterParameter]) -> FilterParams {
    let mut params = FilterParams::default();
    for d in descriptors {
        params.set(&d.id, d.value);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_15_knobs() {
        assert_eq!(build_registry().len(), 15);
    }

    #[test]
    fn test_registry_ids_are_unique() {
        let registry = build_registry();
        let mut ids: Vec<&str> = registry.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 15, "duplicate knob IDs found");
    }

    #[test]
    fn test_registry_defaults_match_snapshot_defaults() {
        let defaults = FilterParams::default();
        for p in build_registry() {
            let field = defaults
                .get(&p.id)
                .unwrap_or_else(|| panic!("registry id '{}' has no snapshot field", p.id));
            assert!(
                (field - p.default_value).abs() < 1e-6,
                "default mismatch for '{}': snapshot {}, registry {}",
                p.id, field, p.default_value
            );
        }
    }

    #[test]
    fn test_registry_ranges_are_valid() {
        for p in build_registry() {
            assert!(p.min < p.max, "knob '{}': min >= max", p.id);
            assert!(
                p.min <= p.default_value && p.default_value <= p.max,
                "knob '{}': default {} outside [{}, {}]",
                p.id, p.default_value, p.min, p.max
            );
            assert!(p.step > 0.0, "knob '{}': non-positive step", p.id);
            assert!(!p.name.is_empty() && !p.description.is_empty());
        }
    }

    #[test]
    fn test_find_parameter() {
        assert!(find_parameter("halation_radius").is_some());
        assert!(find_parameter("vignette").is_none());
    }

    #[test]
    fn test_snapshot_from_defaults_is_default() {
        assert_eq!(snapshot_from(&build_registry()), FilterParams::default());
    }

    #[test]
    fn test_snapshot_from_applies_edits() {
        let mut registry = build_registry();
        for p in registry.iter_mut() {
            if p.id == "bloom_radius" {
                p.value = 5.0;
            }
        }
        let params = snapshot_from(&registry);
        assert_eq!(params.bloom_radius, 5);
    }
}
