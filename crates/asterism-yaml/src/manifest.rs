//! Rating manifest: the declarative form of a [`Rating`].

use asterism_core::{Color, GlyphRef, Point};
use asterism_widgets::{PathGlyph, Rating, StarGlyph, TextGlyph};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ConfigError;

/// Rating configuration loaded from `rating.yaml` (or JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatingManifest {
    /// Current rating
    pub value: f64,
    /// Number of slots (values <= 0 give an empty row)
    #[serde(default = "default_count")]
    pub count: i64,
    /// Filled tint, hex
    #[serde(default = "default_color")]
    pub color: String,
    /// Empty tint, hex
    #[serde(default = "default_empty_color")]
    pub empty_color: String,
    /// Slot side length
    #[serde(default = "default_size")]
    pub size: f32,
    /// Gap between slots
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    /// Disable interaction
    #[serde(default)]
    pub read_only: bool,
    /// Filled glyph
    #[serde(default)]
    pub icon: GlyphSpec,
    /// Empty glyph (defaults to `icon`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_icon: Option<GlyphSpec>,
    /// Accessible name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Test ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

/// Largest slot count a manifest may request.
pub const MAX_SLOT_COUNT: i64 = 1_000;

const fn default_count() -> i64 {
    5
}

fn default_color() -> String {
    "#FFC107".to_string()
}

fn default_empty_color() -> String {
    "#E0E0E0".to_string()
}

const fn default_size() -> f32 {
    24.0
}

const fn default_spacing() -> f32 {
    4.0
}

/// Glyph reference in a manifest.
///
/// ```yaml
/// icon: star
/// icon: { text: "🔥" }
/// icon: { path: [[0.5, 0.0], [1.0, 1.0], [0.0, 1.0]] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GlyphSpec {
    /// Built-in glyph by name
    Named(String),
    /// Text symbol
    Text {
        /// Symbol to draw
        text: String,
    },
    /// Polygon in unit coordinates
    Path {
        /// `[x, y]` points in `[0, 1]`
        path: Vec<[f32; 2]>,
    },
}

impl Default for GlyphSpec {
    fn default() -> Self {
        Self::Named("star".to_string())
    }
}

impl GlyphSpec {
    /// Resolve to a glyph. `field` names the manifest field for errors.
    pub fn to_glyph(&self, field: &str) -> Result<GlyphRef, ConfigError> {
        match self {
            Self::Named(name) if name.eq_ignore_ascii_case("star") => Ok(Arc::new(StarGlyph)),
            Self::Named(name) => Err(ConfigError::invalid(
                field,
                format!("unknown glyph '{name}'"),
            )),
            Self::Text { text } if text.is_empty() => {
                Err(ConfigError::invalid(field, "text glyph is empty"))
            }
            Self::Text { text } => Ok(Arc::new(TextGlyph::new(text.as_str()))),
            Self::Path { path } => {
                if path.len() < 3 {
                    return Err(ConfigError::invalid(
                        field,
                        "path glyph needs at least 3 points",
                    ));
                }
                let in_unit = |c: f32| (0.0..=1.0).contains(&c);
                if let Some([x, y]) = path.iter().find(|[x, y]| !in_unit(*x) || !in_unit(*y)) {
                    return Err(ConfigError::invalid(
                        field,
                        format!("point [{x}, {y}] is outside the unit square"),
                    ));
                }
                let points = path.iter().map(|[x, y]| Point::new(*x, *y)).collect();
                Ok(Arc::new(PathGlyph::new(points)))
            }
        }
    }
}

impl RatingManifest {
    /// Manifest for `value` with every other field at its default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            count: default_count(),
            color: default_color(),
            empty_color: default_empty_color(),
            size: default_size(),
            spacing: default_spacing(),
            read_only: false,
            icon: GlyphSpec::default(),
            empty_icon: None,
            label: None,
            test_id: None,
        }
    }

    /// Parse a manifest from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or doesn't match the schema.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a manifest from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize manifest to YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Slot count as the widget sees it.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        usize::try_from(self.count).unwrap_or(0)
    }

    /// Check every field without building.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build().map(drop)
    }

    /// Build the widget described by this manifest.
    ///
    /// The value itself is passed through unclamped; only values the widget
    /// cannot draw at all (NaN, infinities, negative lengths) are rejected,
    /// along with counts above [`MAX_SLOT_COUNT`].
    pub fn build(&self) -> Result<Rating, ConfigError> {
        if !self.value.is_finite() {
            return Err(ConfigError::invalid("value", "must be a finite number"));
        }
        if self.count > MAX_SLOT_COUNT {
            return Err(ConfigError::invalid(
                "count",
                format!("must not exceed {MAX_SLOT_COUNT}"),
            ));
        }
        let size = Self::length("size", self.size)?;
        let spacing = Self::length("spacing", self.spacing)?;
        let color = Self::color("color", &self.color)?;
        let empty_color = Self::color("empty_color", &self.empty_color)?;

        let mut rating = Rating::new(self.value)
            .count(self.slot_count())
            .size(size)
            .spacing(spacing)
            .color(color)
            .empty_color(empty_color)
            .icon(self.icon.to_glyph("icon")?)
            .read_only(self.read_only);
        if let Some(empty) = &self.empty_icon {
            rating = rating.empty_icon(empty.to_glyph("empty_icon")?);
        }
        if let Some(label) = &self.label {
            rating = rating.with_accessible_name(label.as_str());
        }
        if let Some(id) = &self.test_id {
            rating = rating.with_test_id(id.as_str());
        }
        Ok(rating)
    }

    fn length(field: &str, value: f32) -> Result<f32, ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::invalid(field, "must be a finite number"));
        }
        if value < 0.0 {
            return Err(ConfigError::invalid(field, "must not be negative"));
        }
        Ok(value)
    }

    fn color(field: &str, hex: &str) -> Result<Color, ConfigError> {
        Color::from_hex(hex).map_err(|source| ConfigError::InvalidColor {
            field: field.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asterism_core::Widget;
    use proptest::prelude::*;

    const EXAMPLE_YAML: &str = r##"
value: 3.4
count: 5
color: "#FFC107"
empty_color: "#E0E0E0"
size: 32
spacing: 6
read_only: false
icon: { text: "♥" }
empty_icon: { text: "♡" }
label: "Product rating"
test_id: "product-stars"
"##;

    // =========================================================================
    // Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_example_yaml() {
        let manifest = RatingManifest::from_yaml(EXAMPLE_YAML).expect("Failed to parse");
        assert_eq!(manifest.value, 3.4);
        assert_eq!(manifest.size, 32.0);
        assert_eq!(manifest.spacing, 6.0);
        assert_eq!(
            manifest.icon,
            GlyphSpec::Text {
                text: "♥".to_string()
            }
        );
        assert_eq!(manifest.label.as_deref(), Some("Product rating"));
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let manifest = RatingManifest::from_yaml("value: 2").expect("Failed to parse");
        assert_eq!(manifest, RatingManifest::new(2.0));
        assert_eq!(manifest.icon, GlyphSpec::Named("star".to_string()));
    }

    #[test]
    fn test_missing_value_is_yaml_error() {
        let err = RatingManifest::from_yaml("count: 5").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(RatingManifest::from_yaml("value: 1\nstars: 5").is_err());
    }

    #[test]
    fn test_parse_json() {
        let manifest = RatingManifest::from_json(
            r#"{"value": 4.5, "count": 10, "icon": {"path": [[0.5, 0], [1, 1], [0, 1]]}}"#,
        )
        .expect("Failed to parse");
        assert_eq!(manifest.slot_count(), 10);
        assert_eq!(
            manifest.icon,
            GlyphSpec::Path {
                path: vec![[0.5, 0.0], [1.0, 1.0], [0.0, 1.0]]
            }
        );
    }

    #[test]
    fn test_yaml_output_reparses() {
        let manifest = RatingManifest::from_yaml(EXAMPLE_YAML).expect("Failed to parse");
        let yaml = manifest.to_yaml().expect("Failed to serialize");
        assert!(!yaml.contains("empty_icon: null"));
        assert_eq!(RatingManifest::from_yaml(&yaml).expect("reparse"), manifest);
    }

    // =========================================================================
    // Build Tests
    // =========================================================================

    #[test]
    fn test_build_example() {
        let rating = RatingManifest::from_yaml(EXAMPLE_YAML)
            .and_then(|m| m.build())
            .expect("Failed to build");
        assert_eq!(rating.get_value(), 3.4);
        assert_eq!(rating.get_count(), 5);
        assert_eq!(rating.renderer().get_size(), 32.0);
        assert_eq!(rating.get_spacing(), 6.0);
        assert_eq!(rating.renderer().get_color(), Color::AMBER);
        assert_eq!(rating.renderer().get_empty_color(), Color::LIGHT_GRAY);
        assert_eq!(rating.renderer().empty_glyph().name(), "text");
        assert_eq!(rating.accessible_name(), Some("Product rating"));
        assert_eq!(rating.test_id(), Some("product-stars"));
    }

    #[test]
    fn test_non_positive_count_builds_empty_row() {
        let mut manifest = RatingManifest::new(3.0);
        manifest.count = -2;
        let rating = manifest.build().expect("Failed to build");
        assert_eq!(rating.get_count(), 0);
        assert!(rating.fill_fractions().is_empty());
    }

    #[test]
    fn test_count_above_limit_is_rejected() {
        let mut manifest = RatingManifest::new(3.0);
        manifest.count = 10_000_000_000;
        match manifest.validate() {
            Err(ConfigError::InvalidValue { field, message }) => {
                assert_eq!(field, "count");
                assert_eq!(message, "must not exceed 1000");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }

        manifest.count = MAX_SLOT_COUNT;
        let rating = manifest.build().expect("Failed to build");
        assert_eq!(rating.get_count(), 1_000);
    }

    #[test]
    fn test_out_of_range_value_is_kept() {
        let rating = RatingManifest::new(9.0).build().expect("Failed to build");
        assert_eq!(rating.get_value(), 9.0);
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[test]
    fn test_invalid_color() {
        let mut manifest = RatingManifest::new(1.0);
        manifest.empty_color = "#GGG".to_string();
        match manifest.validate() {
            Err(ConfigError::InvalidColor { field, .. }) => assert_eq!(field, "empty_color"),
            other => panic!("Expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_lengths_and_value() {
        let mut manifest = RatingManifest::new(1.0);
        manifest.size = -1.0;
        assert!(matches!(
            manifest.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "size"
        ));

        let mut manifest = RatingManifest::new(1.0);
        manifest.spacing = f32::INFINITY;
        assert!(manifest.validate().is_err());

        assert!(RatingManifest::new(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_invalid_glyphs() {
        let mut manifest = RatingManifest::new(1.0);
        manifest.icon = GlyphSpec::Named("moon".to_string());
        let err = manifest.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for 'icon': unknown glyph 'moon'");

        manifest.icon = GlyphSpec::Path {
            path: vec![[0.0, 0.0], [1.0, 1.0]],
        };
        assert!(manifest.validate().is_err());

        manifest.icon = GlyphSpec::Path {
            path: vec![[0.0, 0.0], [1.5, 1.0], [0.0, 1.0]],
        };
        assert!(manifest.validate().is_err());

        manifest.icon = GlyphSpec::default();
        manifest.empty_icon = Some(GlyphSpec::Text {
            text: String::new(),
        });
        match manifest.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "empty_icon"),
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_named_glyph_case_insensitive() {
        assert!(GlyphSpec::Named("Star".to_string()).to_glyph("icon").is_ok());
    }

    proptest! {
        #[test]
        fn prop_build_count_matches_slots(value in -10.0f64..20.0, count in -5i64..16) {
            let mut manifest = RatingManifest::new(value);
            manifest.count = count;
            let rating = manifest.build().expect("Failed to build");
            prop_assert_eq!(rating.fill_fractions().len(), count.max(0) as usize);
        }
    }
}
