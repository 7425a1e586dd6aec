use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open string-keyed style bag, CSS-ish property names to free-form values.
///
/// Values are stored exactly as the user typed them; parsing into colors
/// and lengths happens at render time only. Writes merge key-wise, a style
/// update never discards unrelated keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Merge another style map into this one, key-wise. Keys present in
    /// `other` win; keys absent from `other` are left untouched.
    pub fn merge(&mut self, other: &StyleMap) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Parsed color for `key`, if present and well-formed
    pub fn color(&self, key: &str) -> Option<Color32> {
        self.get(key).and_then(parse_color)
    }

    /// Parsed pixel length for `key`, if present and well-formed
    pub fn length(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(parse_px)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parse `#rgb` or `#rrggbb` hex notation into a color
pub fn parse_color(value: &str) -> Option<Color32> {
    let hex = value.trim().strip_prefix('#')?;
    match hex.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let nibble = c.to_digit(16)? as u8;
                channels[i] = nibble << 4 | nibble;
            }
            Some(Color32::from_rgb(channels[0], channels[1], channels[2]))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        _ => None,
    }
}

/// Parse a pixel length like `"16px"` (a bare number is accepted too)
pub fn parse_px(value: &str) -> Option<f32> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number.parse::<f32>().ok().filter(|n| n.is_finite())
}
