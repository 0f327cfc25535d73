/// Page element ids and clock settings the yard is wired against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YardConfig {
    /// Container receiving the generated radio inputs.
    pub select_id: &'static str,
    /// Clicking this element cycles through the styles.
    pub toggle_id: &'static str,
    pub header_canvas_id: &'static str,
    pub ground_canvas_id: &'static str,
    /// `name` attribute shared by the radio inputs.
    pub option_group: &'static str,
    /// Added to the UTC hour (mod 24) to get local standard time.
    pub utc_offset_hours: u32,
}

impl Default for YardConfig {
    fn default() -> Self {
        Self {
            select_id: "time-select",
            toggle_id: "header",
            header_canvas_id: "header-canvas",
            ground_canvas_id: "ground-canvas",
            option_group: "times",
            utc_offset_hours: 18, // Central Standard Time
        }
    }
}
