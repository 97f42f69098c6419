//! Options of the page level tools: rotate, remove pages, number pages, repair

pub const PAGE_RANGES_HINT: &str = "Invalid page range format. Use format like: 1,3,5-7,10";

/// "1,3,5-7,10", whitespace ignored, a trailing comma tolerated
pub fn is_page_ranges(raw: &str) -> bool {
    let compact = raw.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    let compact = compact.strip_suffix(',').unwrap_or(&compact);

    if compact.is_empty() {
        return false;
    }

    let is_number = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());

    compact.split(',').all(|range| match range.split_once('-') {
        Some((start, end)) => is_number(start) && is_number(end),
        None => is_number(range),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationAngle {
    #[default]
    Quarter,
    Half,
    ThreeQuarters,
}

impl RotationAngle {
    pub const ALL: [RotationAngle; 3] = [
        RotationAngle::Quarter,
        RotationAngle::Half,
        RotationAngle::ThreeQuarters,
    ];

    pub fn degrees(&self) -> u16 {
        match self {
            RotationAngle::Quarter => 90,
            RotationAngle::Half => 180,
            RotationAngle::ThreeQuarters => 270,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RotationAngle::Quarter => "90° clockwise",
            RotationAngle::Half => "180° (upside down)",
            RotationAngle::ThreeQuarters => "270° (90° counter-clockwise)",
        }
    }
}

impl std::str::FromStr for RotationAngle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotationAngle::ALL
            .into_iter()
            .find(|angle| angle.degrees().to_string() == s.trim())
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RotateOptions {
    pub angle: RotationAngle,
    pub all_pages: bool,
    pub pages: String,
}

impl RotateOptions {
    pub fn problem(&self) -> Option<&'static str> {
        if self.all_pages {
            return None;
        }
        if self.pages.trim().is_empty() {
            return Some("Please specify pages to rotate");
        }
        if !is_page_ranges(&self.pages) {
            return Some(PAGE_RANGES_HINT);
        }
        None
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let (pages, kind) = if self.all_pages {
            (String::from("all"), "all")
        } else {
            (self.pages.clone(), "specific")
        };

        vec![
            ("pages_to_rotate", pages),
            ("rotation_angle", self.angle.degrees().to_string()),
            ("rotation_type", kind.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemovePagesOptions {
    pub pages: String,
}

impl RemovePagesOptions {
    pub fn problem(&self) -> Option<&'static str> {
        if self.pages.trim().is_empty() {
            return Some("Please specify pages to remove");
        }
        if !is_page_ranges(&self.pages) {
            return Some(PAGE_RANGES_HINT);
        }
        None
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pages_to_remove", self.pages.clone()),
            ("removal_type", String::from("specific")),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberPosition {
    #[default]
    BottomCenter,
    BottomLeft,
    BottomRight,
    TopCenter,
    TopLeft,
    TopRight,
}

impl NumberPosition {
    pub const ALL: [NumberPosition; 6] = [
        NumberPosition::BottomCenter,
        NumberPosition::BottomLeft,
        NumberPosition::BottomRight,
        NumberPosition::TopCenter,
        NumberPosition::TopLeft,
        NumberPosition::TopRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NumberPosition::BottomCenter => "bottom-center",
            NumberPosition::BottomLeft => "bottom-left",
            NumberPosition::BottomRight => "bottom-right",
            NumberPosition::TopCenter => "top-center",
            NumberPosition::TopLeft => "top-left",
            NumberPosition::TopRight => "top-right",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NumberPosition::BottomCenter => "Bottom Center",
            NumberPosition::BottomLeft => "Bottom Left",
            NumberPosition::BottomRight => "Bottom Right",
            NumberPosition::TopCenter => "Top Center",
            NumberPosition::TopLeft => "Top Left",
            NumberPosition::TopRight => "Top Right",
        }
    }
}

impl std::str::FromStr for NumberPosition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumberPosition::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or(())
    }
}

pub const NUMBER_FONT_SIZE_RANGE: (u32, u32) = (8, 24);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNumberOptions {
    pub position: NumberPosition,
    pub start_number: u32,
    pub font_size: u32,
    pub color: String,
}

impl Default for PageNumberOptions {
    fn default() -> Self {
        Self {
            position: NumberPosition::BottomCenter,
            start_number: 1,
            font_size: 12,
            color: String::from("#000000"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSetting {
    Position,
    StartNumber,
    FontSize,
    Color,
}

impl PageNumberOptions {
    /// Applies a raw input value, unparsable values leave the option untouched
    pub fn update(&mut self, setting: NumberSetting, raw: &str) -> bool {
        match setting {
            NumberSetting::Position => {
                let Ok(position) = raw.parse() else {
                    return false;
                };
                self.position = position;
            }
            // An unreadable start goes back to the first page
            NumberSetting::StartNumber => {
                self.start_number = crate::watermark::parse_int(raw)
                    .filter(|start| *start >= 1)
                    .and_then(|start| u32::try_from(start).ok())
                    .unwrap_or(1);
            }
            NumberSetting::FontSize => {
                let Some(font_size) = crate::watermark::parse_int(raw) else {
                    return false;
                };
                self.font_size = font_size.clamp(
                    NUMBER_FONT_SIZE_RANGE.0 as i64,
                    NUMBER_FONT_SIZE_RANGE.1 as i64,
                ) as u32;
            }
            NumberSetting::Color => {
                if !crate::watermark::is_hex_color(raw) {
                    return false;
                }
                self.color = raw.to_lowercase();
            }
        }
        true
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("position", self.position.as_str().to_string()),
            ("start_number", self.start_number.to_string()),
            ("font_size", self.font_size.to_string()),
            ("color", self.color.clone()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepairMode {
    #[default]
    Auto,
    Rebuild,
    Minimal,
    Deep,
}

impl RepairMode {
    pub const ALL: [RepairMode; 4] = [
        RepairMode::Auto,
        RepairMode::Rebuild,
        RepairMode::Minimal,
        RepairMode::Deep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RepairMode::Auto => "auto",
            RepairMode::Rebuild => "rebuild",
            RepairMode::Minimal => "minimal",
            RepairMode::Deep => "deep",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RepairMode::Auto => "Auto-detect and fix issues",
            RepairMode::Rebuild => "Force rebuild PDF structure",
            RepairMode::Minimal => "Minimal repair (fastest)",
            RepairMode::Deep => "Deep scan and repair (thorough)",
        }
    }
}

impl std::str::FromStr for RepairMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RepairMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOptions {
    pub mode: RepairMode,
    pub preserve_bookmarks: bool,
    pub preserve_metadata: bool,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            mode: RepairMode::Auto,
            preserve_bookmarks: true,
            preserve_metadata: true,
        }
    }
}

impl RepairOptions {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("repair_mode", self.mode.as_str().to_string()),
            ("preserve_bookmarks", self.preserve_bookmarks.to_string()),
            ("preserve_metadata", self.preserve_metadata.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{
            is_page_ranges, NumberPosition, NumberSetting, PageNumberOptions, RemovePagesOptions,
            RepairOptions, RotateOptions, RotationAngle, PAGE_RANGES_HINT,
        },
        pretty_assertions::assert_eq,
        rstest::rstest,
    };

    #[rstest]
    #[case("1", true)]
    #[case("1,3,5-7,10", true)]
    #[case(" 1, 3 ,5 - 7 ", true)]
    #[case("2,", true)]
    #[case("", false)]
    #[case(",1", false)]
    #[case("1,,3", false)]
    #[case("1-", false)]
    #[case("1-2-3", false)]
    #[case("a", false)]
    fn page_ranges(#[case] raw: &str, #[case] valid: bool) {
        assert_eq!(is_page_ranges(raw), valid, "{raw:?}");
    }

    #[test]
    fn rotate_all_needs_no_pages() {
        let options = RotateOptions {
            angle: RotationAngle::Half,
            all_pages: true,
            pages: String::new(),
        };

        assert_eq!(options.problem(), None);
        assert_eq!(
            options.form_fields(),
            vec![
                ("pages_to_rotate", String::from("all")),
                ("rotation_angle", String::from("180")),
                ("rotation_type", String::from("all")),
            ]
        );
    }

    #[test]
    fn rotate_specific_pages_are_checked() {
        let mut options = RotateOptions::default();
        assert_eq!(options.problem(), Some("Please specify pages to rotate"));

        options.pages = String::from("1-x");
        assert_eq!(options.problem(), Some(PAGE_RANGES_HINT));

        options.pages = String::from("1,4-6");
        assert_eq!(options.problem(), None);
        assert_eq!(options.form_fields()[0], ("pages_to_rotate", String::from("1,4-6")));
        assert_eq!(options.form_fields()[1], ("rotation_angle", String::from("90")));
        assert_eq!("270".parse::<RotationAngle>(), Ok(RotationAngle::ThreeQuarters));
        assert_eq!("45".parse::<RotationAngle>(), Err(()));
    }

    #[test]
    fn remove_pages_requires_ranges() {
        assert_eq!(
            RemovePagesOptions::default().problem(),
            Some("Please specify pages to remove")
        );

        let options = RemovePagesOptions {
            pages: String::from("2,5-7"),
        };
        assert_eq!(options.problem(), None);
        assert_eq!(
            options.form_fields(),
            vec![
                ("pages_to_remove", String::from("2,5-7")),
                ("removal_type", String::from("specific")),
            ]
        );
    }

    #[test]
    fn page_number_inputs_are_parsed_and_clamped() {
        let mut options = PageNumberOptions::default();

        assert!(options.update(NumberSetting::FontSize, "40"));
        assert_eq!(options.font_size, 24);
        assert!(!options.update(NumberSetting::FontSize, "big"));
        assert_eq!(options.font_size, 24);

        assert!(options.update(NumberSetting::StartNumber, "5"));
        assert_eq!(options.start_number, 5);
        assert!(options.update(NumberSetting::StartNumber, ""));
        assert_eq!(options.start_number, 1);

        assert!(options.update(NumberSetting::Position, "top-right"));
        assert_eq!(options.position, NumberPosition::TopRight);
        assert!(!options.update(NumberSetting::Color, "red"));
        assert!(options.update(NumberSetting::Color, "#FF0000"));

        assert_eq!(
            options.form_fields(),
            vec![
                ("position", String::from("top-right")),
                ("start_number", String::from("1")),
                ("font_size", String::from("24")),
                ("color", String::from("#ff0000")),
            ]
        );
    }

    #[test]
    fn repair_defaults_preserve_everything() {
        assert_eq!(
            RepairOptions::default().form_fields(),
            vec![
                ("repair_mode", String::from("auto")),
                ("preserve_bookmarks", String::from("true")),
                ("preserve_metadata", String::from("true")),
            ]
        );
    }
}
