use crate::foundation::core::Rgb8;
use serde::{Deserialize, Serialize};

/// A catalog color: display name plus RGB value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColor {
    /// Name used in prompts and metadata.
    pub name: String,
    /// Fill value.
    pub rgb: Rgb8,
}

impl NamedColor {
    /// Build a named color.
    pub fn new(name: impl Into<String>, rgb: Rgb8) -> Self {
        Self {
            name: name.into(),
            rgb,
        }
    }
}

/// A catalog scale factor: display name plus multiplier of the base shape size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedScale {
    /// Name used in prompts and metadata.
    pub name: String,
    /// Multiplier applied to the configured shape size.
    pub factor: f64,
}

impl NamedScale {
    /// Build a named scale.
    pub fn new(name: impl Into<String>, factor: f64) -> Self {
        Self {
            name: name.into(),
            factor,
        }
    }
}

/// Default palette. RGB values are pairwise distinct so every ordered pair is a real change.
pub fn default_colors() -> Vec<NamedColor> {
    [
        ("blue", Rgb8::new(70, 130, 180)),
        ("red", Rgb8::new(220, 20, 60)),
        ("green", Rgb8::new(34, 139, 34)),
        ("orange", Rgb8::new(255, 140, 0)),
        ("purple", Rgb8::new(147, 112, 219)),
        ("teal", Rgb8::new(0, 128, 128)),
        ("pink", Rgb8::new(255, 20, 147)),
        ("brown", Rgb8::new(165, 42, 42)),
        ("indigo", Rgb8::new(75, 0, 130)),
        ("lime", Rgb8::new(50, 205, 50)),
        ("navy", Rgb8::new(0, 0, 128)),
        ("olive", Rgb8::new(128, 128, 0)),
        ("maroon", Rgb8::new(128, 0, 0)),
    ]
    .into_iter()
    .map(|(name, rgb)| NamedColor::new(name, rgb))
    .collect()
}

/// Default scale ladder.
pub fn default_scales() -> Vec<NamedScale> {
    [
        ("tiny", 0.6),
        ("small", 0.8),
        ("medium", 1.0),
        ("large", 1.3),
        ("extra_large", 1.6),
        ("huge", 1.9),
    ]
    .into_iter()
    .map(|(name, factor)| NamedScale::new(name, factor))
    .collect()
}
