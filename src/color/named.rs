//! Fixed palette of named colors for garment classification
//!
//! Maps an arbitrary RGB triple to the nearest entry of an immutable,
//! ordered palette by Euclidean distance in RGB space.

use crate::color::ColorConverter;

/// A named reference color with its RGB anchor on the [0, 255] scale
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColorEntry {
    pub name: String,
    pub rgb: [f32; 3],
}

impl NamedColorEntry {
    pub fn new(name: impl Into<String>, rgb: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            rgb,
        }
    }
}

/// Reference anchors of the standard garment palette, in declaration order.
/// Declaration order breaks classification ties.
const STANDARD_ENTRIES: [(&str, [f32; 3]); 30] = [
    ("black", [0.0, 0.0, 0.0]),
    ("white", [255.0, 255.0, 255.0]),
    ("red", [255.0, 0.0, 0.0]),
    ("green", [0.0, 128.0, 0.0]),
    ("blue", [0.0, 0.0, 255.0]),
    ("yellow", [255.0, 255.0, 0.0]),
    ("cyan", [0.0, 255.0, 255.0]),
    ("magenta", [255.0, 0.0, 255.0]),
    ("gray", [128.0, 128.0, 128.0]),
    ("pink", [255.0, 192.0, 203.0]),
    ("purple", [128.0, 0.0, 128.0]),
    ("brown", [139.0, 69.0, 19.0]),
    ("orange", [255.0, 165.0, 0.0]),
    ("navy", [0.0, 0.0, 128.0]),
    ("beige", [245.0, 245.0, 220.0]),
    ("maroon", [128.0, 0.0, 0.0]),
    ("olive", [128.0, 128.0, 0.0]),
    ("teal", [0.0, 128.0, 128.0]),
    ("lime", [0.0, 255.0, 0.0]),
    ("indigo", [75.0, 0.0, 130.0]),
    ("gold", [255.0, 215.0, 0.0]),
    ("silver", [192.0, 192.0, 192.0]),
    ("coral", [255.0, 127.0, 80.0]),
    ("salmon", [250.0, 128.0, 114.0]),
    ("lavender", [230.0, 230.0, 250.0]),
    ("turquoise", [64.0, 224.0, 208.0]),
    ("peach", [255.0, 218.0, 185.0]),
    ("violet", [238.0, 130.0, 238.0]),
    ("chocolate", [210.0, 105.0, 30.0]),
    ("mint", [189.0, 252.0, 201.0]),
];

/// An immutable, ordered palette of named colors
///
/// Constructed once and passed into the components that need it; carries no
/// hidden process-wide state, so tests can run independent palettes side by
/// side. Guaranteed non-empty by construction.
#[derive(Debug, Clone)]
pub struct NamedPalette {
    entries: Vec<NamedColorEntry>,
    converter: ColorConverter,
}

impl NamedPalette {
    /// The standard 30-entry garment palette
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES
                .iter()
                .map(|&(name, rgb)| NamedColorEntry::new(name, rgb))
                .collect(),
            converter: ColorConverter::new(),
        }
    }

    /// Build a palette from custom entries
    ///
    /// Returns `None` for an empty entry list; classification requires at
    /// least one reference color.
    pub fn with_entries(entries: Vec<NamedColorEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            entries,
            converter: ColorConverter::new(),
        })
    }

    /// Palette entries in declaration order
    pub fn entries(&self) -> &[NamedColorEntry] {
        &self.entries
    }

    /// Classify an RGB triple as the nearest named color
    ///
    /// Pure and total: any finite input maps to exactly one label, and
    /// repeated calls return the same label. Out-of-range components are
    /// accepted as-is rather than clamped or rejected; distance to the
    /// anchors still orders them. Ties go to the earlier palette entry.
    ///
    /// # Arguments
    ///
    /// * `rgb` - RGB triple on the [0, 255] scale
    ///
    /// # Returns
    ///
    /// The label of the minimum-distance palette entry
    pub fn classify(&self, rgb: [f32; 3]) -> &str {
        let mut best = &self.entries[0];
        let mut best_distance = self.converter.rgb_distance(rgb, best.rgb);

        for entry in &self.entries[1..] {
            let distance = self.converter.rgb_distance(rgb, entry.rgb);
            if distance < best_distance {
                best_distance = distance;
                best = entry;
            }
        }

        &best.name
    }
}
