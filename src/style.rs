//! Lighting styles and the wall-clock rule that picks one on page load.

use std::fmt;

/// One of the three time-of-day renderings of the yard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Style {
    Daytime,
    Evening,
    Night,
}

impl Style {
    /// Fixed cycling order used by the option list and the header toggle.
    pub const ALL: [Style; 3] = [Style::Daytime, Style::Evening, Style::Night];

    pub fn name(self) -> &'static str {
        match self {
            Style::Daytime => "daytime",
            Style::Evening => "evening",
            Style::Night => "night",
        }
    }

    pub fn from_name(name: &str) -> Option<Style> {
        Style::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Identifier of the radio input bound to this style.
    pub fn option_id(self) -> String {
        format!("time-{}", self.name())
    }

    /// Single-letter hotkeys: 'd', 'e', 'n'.
    pub fn from_hotkey(key: &str) -> Option<Style> {
        match key {
            "d" => Some(Style::Daytime),
            "e" => Some(Style::Evening),
            "n" => Some(Style::Night),
            _ => None,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Local standard-time hour for a UTC hour and a fixed offset (mod 24).
pub fn local_hour(utc_hour: u32, offset_hours: u32) -> u32 {
    (utc_hour + offset_hours) % 24
}

/// Style shown on load for a local hour.
///
/// Daytime is the open interval (9, 18); evening is [18, 24); every other hour,
/// 9 included, is night.
pub fn style_for_hour(hour: u32) -> Style {
    if hour > 9 && hour < 18 {
        Style::Daytime
    } else if (18..24).contains(&hour) {
        Style::Evening
    } else {
        Style::Night
    }
}
