/// Every user-facing string in one place.
pub struct UiText {
    pub button_show_moving_average: &'static str,
    pub button_hide_moving_average: &'static str,
    pub window_size_heading: &'static str,
    pub window_size_helper_prefix: &'static str,
    pub window_size_helper_suffix: &'static str,
    pub display_heading: &'static str,
    pub heading_price: &'static str,
    pub heading_moving_average: &'static str,
    pub loading_heading: &'static str,
    pub loading_submessage: &'static str,
    pub error_heading: &'static str,
    pub error_submessage: &'static str,
    pub button_retry: &'static str,
    pub toast_title: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub status_view_label: &'static str,
    pub status_mode_raw: &'static str,
    pub shortcut_hint: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    button_show_moving_average: "Show Moving Average",
    button_hide_moving_average: "Hide Moving Average",
    window_size_heading: "Window Size for Moving Average",
    window_size_helper_prefix: "Average each point over the last ",
    window_size_helper_suffix: " days",
    display_heading: "Display",
    heading_price: "Price",
    heading_moving_average: "Moving Average",
    loading_heading: "Loading data...",
    loading_submessage: "Fetching the instrument document",
    error_heading: "⚠ Unable to Load Data",
    error_submessage: "Check the data file and try again.",
    button_retry: "Retry",
    toast_title: "Error",
    plot_x_axis: "Date",
    plot_y_axis: "Price",
    status_view_label: "📈 View",
    status_mode_raw: "Raw prices",
    shortcut_hint: "M toggles the moving average",
};
