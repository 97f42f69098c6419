#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Center,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Center => "center",
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Position::Center => "Center",
            Position::TopLeft => "Top Left",
            Position::TopRight => "Top Right",
            Position::BottomLeft => "Bottom Left",
            Position::BottomRight => "Bottom Right",
        }
    }
}

impl std::str::FromStr for Position {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or(())
    }
}

pub const OPACITY_RANGE: (f64, f64, f64) = (0.1, 1.0, 0.1);
pub const ROTATION_RANGE: (u32, u32, u32) = (0, 360, 15);
pub const FONT_SIZE_RANGE: (u32, u32, u32) = (12, 120, 6);

/// The knobs of the watermark tool, sent along the files as form fields
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WatermarkSettings {
    pub text: String,
    pub position: Position,
    pub opacity: f64,
    pub rotation: u32,
    pub font_size: u32,
    pub color: String,
}

impl Default for WatermarkSettings {
    fn default() -> Self {
        Self {
            text: String::from("CONFIDENTIAL"),
            position: Position::Center,
            opacity: 0.3,
            rotation: 45,
            font_size: 48,
            color: String::from("#808080"),
        }
    }
}

/// One edited control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Text,
    Position,
    Opacity,
    Rotation,
    FontSize,
    Color,
}

impl WatermarkSettings {
    /// Applies a raw input value, unparsable values leave the setting untouched
    pub fn update(&mut self, setting: Setting, raw: &str) -> bool {
        match setting {
            Setting::Text => {
                self.text = raw.to_string();
            }
            Setting::Position => {
                let Ok(position) = raw.parse() else {
                    return false;
                };
                self.position = position;
            }
            Setting::Opacity => {
                let Ok(opacity) = raw.trim().parse::<f64>() else {
                    return false;
                };
                if !opacity.is_finite() {
                    return false;
                }
                self.opacity = opacity.clamp(OPACITY_RANGE.0, OPACITY_RANGE.1);
            }
            Setting::Rotation => {
                let Some(rotation) = parse_int(raw) else {
                    return false;
                };
                self.rotation = rotation.clamp(ROTATION_RANGE.0 as i64, ROTATION_RANGE.1 as i64) as u32;
            }
            Setting::FontSize => {
                let Some(font_size) = parse_int(raw) else {
                    return false;
                };
                self.font_size =
                    font_size.clamp(FONT_SIZE_RANGE.0 as i64, FONT_SIZE_RANGE.1 as i64) as u32;
            }
            Setting::Color => {
                if !is_hex_color(raw) {
                    return false;
                }
                self.color = raw.to_lowercase();
            }
        }
        true
    }

    pub fn opacity_percent(&self) -> u32 {
        (self.opacity * 100.).round() as u32
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("watermark_text", self.text.clone()),
            ("opacity", self.opacity.to_string()),
            ("position", self.position.as_str().to_string()),
            ("rotation", self.rotation.to_string()),
            ("color", self.color.clone()),
            ("font_size", self.font_size.to_string()),
        ]
    }
}

// Like parseInt, "45.7" gives 45
pub(crate) fn parse_int(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let end = raw
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(raw.len());

    raw[..end].parse().ok()
}

pub(crate) fn is_hex_color(raw: &str) -> bool {
    raw.len() == 7
        && raw.starts_with('#')
        && raw[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use {
        super::{Position, Setting, WatermarkSettings},
        pretty_assertions::assert_eq,
    };

    #[test]
    fn numeric_inputs_are_parsed_and_clamped() {
        let mut settings = WatermarkSettings::default();

        assert!(settings.update(Setting::Rotation, "90"));
        assert_eq!(settings.rotation, 90);
        assert!(settings.update(Setting::Rotation, "45.9"));
        assert_eq!(settings.rotation, 45);
        assert!(settings.update(Setting::Rotation, "720"));
        assert_eq!(settings.rotation, 360);

        assert!(settings.update(Setting::FontSize, "4"));
        assert_eq!(settings.font_size, 12);

        assert!(settings.update(Setting::Opacity, "0.7"));
        assert_eq!(settings.opacity_percent(), 70);
        assert!(settings.update(Setting::Opacity, "3"));
        assert_eq!(settings.opacity, 1.0);
    }

    #[test]
    fn garbage_is_ignored() {
        let mut settings = WatermarkSettings::default();
        let before = settings.clone();

        assert!(!settings.update(Setting::Rotation, "abc"));
        assert!(!settings.update(Setting::Opacity, "NaN"));
        assert!(!settings.update(Setting::Position, "middle"));
        assert!(!settings.update(Setting::Color, "red"));

        assert_eq!(settings, before);
    }

    #[test]
    fn text_position_and_color() {
        let mut settings = WatermarkSettings::default();

        settings.update(Setting::Text, "DRAFT");
        settings.update(Setting::Position, "bottom-right");
        settings.update(Setting::Color, "#FF0000");

        assert_eq!(settings.text, "DRAFT");
        assert_eq!(settings.position, Position::BottomRight);
        assert_eq!(settings.color, "#ff0000");
    }

    #[test]
    fn form_fields_use_backend_names() {
        let fields = WatermarkSettings::default().form_fields();
        let keys = fields.iter().map(|(key, _)| *key).collect::<Vec<_>>();

        assert_eq!(
            keys,
            vec!["watermark_text", "opacity", "position", "rotation", "color", "font_size"]
        );
        assert_eq!(fields[2].1, "center");
    }
}
