//! Display settings and preferences
//!
//! Only affects how a frame looks, never what the simulation does.

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
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Segments for filled circles (coins, eye)
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 10,
            QualityPreset::Medium => 16,
            QualityPreset::High => 28,
        }
    }

    /// Segments for the threat pulse rings
    pub fn ring_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 24,
            QualityPreset::Medium => 48,
            QualityPreset::High => 96,
        }
    }

    /// Segments per rounded crate corner
    pub fn corner_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 1,
            QualityPreset::Medium => 3,
            QualityPreset::High => 6,
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Geometry detail
    pub quality: QualityPreset,
    /// Camera shake while panicked
    pub screen_shake: bool,
    /// Darkened edges while panicked
    pub vignette: bool,
    /// Reduced motion (no shake, steady rings)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            screen_shake: true,
            vignette: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Read overrides from a `key=value&...` string (URL query or CLI args)
    ///
    /// Keys: `quality` (low/medium/high), `shake`, `vignette`,
    /// `reduced_motion` (on/off, 1/0, true/false). Unknown keys and bad values
    /// are logged and skipped.
    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(&str, &str)> = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .collect();

        let quality = pairs
            .iter()
            .find(|(key, _)| *key == "quality")
            .and_then(|(_, value)| QualityPreset::parse(value))
            .unwrap_or_default();
        let mut settings = Self::from_preset(quality);

        for (key, value) in pairs {
            let flag = match key {
                "shake" => &mut settings.screen_shake,
                "vignette" => &mut settings.vignette,
                "reduced_motion" => &mut settings.reduced_motion,
                "quality" => continue,
                _ => {
                    log::warn!("Unknown setting: {}", key);
                    continue;
                }
            };
            match parse_flag(value) {
                Some(on) => *flag = on,
                None => log::warn!("Bad value for {}: {}", key, value),
            }
        }
        settings
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Some(true),
        "0" | "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_disables_shake() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_screen_shake());
        assert!(Settings::default().effective_screen_shake());
    }

    #[test]
    fn test_preset_parse_roundtrip() {
        for preset in [QualityPreset::Low, QualityPreset::Medium, QualityPreset::High] {
            assert_eq!(QualityPreset::parse(preset.as_str()), Some(preset));
        }
        assert_eq!(QualityPreset::parse("ultra"), None);
    }

    #[test]
    fn test_from_query_overrides() {
        let settings = Settings::from_query("?quality=High&shake=off&reduced_motion=1");
        assert_eq!(settings.quality, QualityPreset::High);
        assert!(!settings.screen_shake);
        assert!(settings.reduced_motion);
        assert!(settings.vignette);
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_from_query_ignores_junk() {
        let settings = Settings::from_query("quality=ultra&vignette=maybe&foo=1&bare");
        assert_eq!(settings.quality, QualityPreset::Medium);
        assert!(settings.vignette);
        assert!(Settings::from_query("").effective_screen_shake());
    }

    #[test]
    fn test_higher_quality_more_segments() {
        assert!(QualityPreset::High.circle_segments() > QualityPreset::Low.circle_segments());
        assert_eq!(Settings::from_preset(QualityPreset::High).quality, QualityPreset::High);
    }
}
