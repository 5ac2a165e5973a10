use crate::photostat_core::error::{PhotostatError, Result};

/// Fixed mapping from a small EXIF code to a human-readable label.
#[derive(Debug)]
pub struct EnumTable {
    field: &'static str,
    first_code: u32,
    labels: &'static [&'static str],
}

impl EnumTable {
    const fn new(field: &'static str, first_code: u32, labels: &'static [&'static str]) -> Self {
        Self {
            field,
            first_code,
            labels,
        }
    }

    #[cfg(test)]
    pub(crate) fn field(&self) -> &'static str {
        self.field
    }

    /// Look up the label for a raw code. Codes outside the table are an error.
    pub fn label(&self, code: u32) -> Result<&'static str> {
        code.checked_sub(self.first_code)
            .and_then(|index| self.labels.get(index as usize))
            .copied()
            .ok_or(PhotostatError::UnknownCode {
                field: self.field,
                code,
            })
    }

    /// Every valid raw code paired with its label.
    #[cfg(test)]
    pub(crate) fn entries(&self) -> impl Iterator<Item = (u32, &'static str)> + '_ {
        (self.first_code..).zip(self.labels.iter().copied())
    }
}

pub static METERING_MODES: EnumTable = EnumTable::new(
    "metering_mode",
    0,
    &["unknown", "Average", "CenterWeightedAverage", "Spot", "Multispot", "Pattern", "Partial"],
);

pub static EXPOSURE_PROGRAMS: EnumTable = EnumTable::new(
    "exposure_program",
    0,
    &[
        "unknown",
        "M",
        "P",
        "A",
        "S",
        "CreativeProgram",
        "ActionProgram",
        "PortraitMode",
        "LandscapeMode",
    ],
);

pub static WHITE_BALANCES: EnumTable = EnumTable::new("white_balance", 0, &["AutoWB", "ManualWB"]);

pub static LIGHT_SOURCES: EnumTable = EnumTable::new(
    "light_source",
    0,
    &[
        "unknown",
        "Daylight",
        "Fluorescent",
        "Tungsten",
        "Flash",
        "SunnyWeather",
        "CloudyWeather",
        "Shade",
        "DaylightFluorescent",
        "DaywhiteFluorescent",
        "CoolwhiteFluorescent",
        "WhiteFluorescent",
        "StandardLightA",
        "StandardLightB",
        "StandardLightC",
        "D55",
        "D65",
        "D75",
        "D50",
        "ISOstudioTungsten",
    ],
);

/// Orientation codes start at 1 in EXIF.
pub static ORIENTATIONS: EnumTable = EnumTable::new(
    "orientation",
    1,
    &[
        "TopLeft",
        "TopRight",
        "BottomRight",
        "BottomLeft",
        "LeftTop",
        "RightTop",
        "RightBottom",
        "LeftBottom",
    ],
);

pub static COLOR_SPACES: EnumTable =
    EnumTable::new("color_space", 0, &["AdobeRGB", "sRGB", "RAW"]);

pub static AUTOFOCUS_MODES: EnumTable =
    EnumTable::new("autofocus_mode", 0, &["AF-A", "AF-S", "AF-C"]);
