/// Column names in output order.
pub const FIELD_NAMES: [&str; 20] = [
    "file",
    "date",
    "time",
    "pixel_x_dimension",
    "pixel_y_dimension",
    "manufacturer",
    "model",
    "exposure_program",
    "f_number",
    "exposure_time",
    "exposure_bias",
    "iso",
    "focal_length_35mm_equivalent",
    "metering_mode",
    "autofocus_mode",
    "white_balance",
    "light_source",
    "orientation",
    "color_space",
    "user_comment",
];

/// Camera settings of one photo, one row of the catalog.
///
/// Every field except `file` is optional; a missing tag leaves an empty cell
/// so that all rows line up with [`FIELD_NAMES`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoRecord {
    pub file: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub pixel_x_dimension: Option<u32>,
    pub pixel_y_dimension: Option<u32>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub exposure_program: Option<&'static str>,
    pub f_number: Option<f64>,
    pub exposure_time: Option<String>,
    pub exposure_bias: Option<String>,
    pub iso: Option<u32>,
    pub focal_length_35mm_equivalent: Option<u32>,
    pub metering_mode: Option<&'static str>,
    pub autofocus_mode: Option<&'static str>,
    pub white_balance: Option<&'static str>,
    pub light_source: Option<&'static str>,
    pub orientation: Option<&'static str>,
    pub color_space: Option<&'static str>,
    pub user_comment: Option<String>,
}

impl PhotoRecord {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    /// Field values in [`FIELD_NAMES`] order, `None` for absent tags.
    pub fn values(&self) -> [Option<String>; 20] {
        fn text<T: ToString>(value: &Option<T>) -> Option<String> {
            value.as_ref().map(ToString::to_string)
        }

        [
            Some(self.file.clone()),
            self.date.clone(),
            self.time.clone(),
            text(&self.pixel_x_dimension),
            text(&self.pixel_y_dimension),
            self.manufacturer.clone(),
            self.model.clone(),
            text(&self.exposure_program),
            text(&self.f_number),
            self.exposure_time.clone(),
            self.exposure_bias.clone(),
            text(&self.iso),
            text(&self.focal_length_35mm_equivalent),
            text(&self.metering_mode),
            text(&self.autofocus_mode),
            text(&self.white_balance),
            text(&self.light_source),
            text(&self.orientation),
            text(&self.color_space),
            self.user_comment.clone(),
        ]
    }

    /// Cells of the output row, absent fields as empty strings.
    pub fn row(&self) -> Vec<String> {
        self.values()
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect()
    }

    /// Names and values of the fields that are present.
    #[cfg(test)]
    pub(crate) fn present_fields(&self) -> Vec<(&'static str, String)> {
        FIELD_NAMES
            .into_iter()
            .zip(self.values())
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect()
    }
}
