/// Every user-facing string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub upload_heading: &'static str,
    pub choose_file_button: &'static str,
    pub upload_button: &'static str,
    pub no_file_chosen: &'static str,
    pub loading_file: &'static str,
    pub color_by_label: &'static str,
    pub export_svg_button: &'static str,
    pub chart_empty: &'static str,
    pub tweets_plotted_label: &'static str,
    pub tweets_skipped_label: &'static str,
    pub selection_heading: &'static str,
    pub selection_empty: &'static str,
    pub deselect_hover: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Tweet Swarm",
    upload_heading: "Upload a JSON File",
    choose_file_button: "Choose file…",
    upload_button: "Upload",
    no_file_chosen: "No file chosen",
    loading_file: "Reading file…",
    color_by_label: "Color By:",
    export_svg_button: "Export SVG…",
    chart_empty: "Upload a file of tweets to see them here.",
    tweets_plotted_label: "Plotted",
    tweets_skipped_label: "No month band",
    selection_heading: "Selected tweets",
    selection_empty: "Click a circle to show its tweet here.",
    deselect_hover: "Deselect",
};
