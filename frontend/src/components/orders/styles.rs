//! Inline styles for the order form.

pub const ROOT: &str = "padding: 20px; font-family: Arial, sans-serif;";
pub const FIELD: &str = "margin-bottom: 20px;";
pub const LABEL: &str = "font-weight: bold; margin-right: 10px;";
pub const TABLE: &str = "width: 100%; border-collapse: collapse;";
pub const HEADER_LEFT: &str = "border-bottom: 1px solid #ddd; padding: 8px; text-align: left;";
pub const HEADER_RIGHT: &str = "border-bottom: 1px solid #ddd; padding: 8px; text-align: right;";
pub const HEADER_CENTER: &str = "border-bottom: 1px solid #ddd; padding: 8px; text-align: center;";
pub const CELL: &str = "padding: 8px;";
pub const CELL_RIGHT: &str = "padding: 8px; text-align: right;";
pub const CELL_CENTER: &str = "padding: 8px; text-align: center;";
pub const SUBMIT_BUTTON: &str = "margin-top: 20px; padding: 10px 20px; background-color: #007BFF; \
     color: #fff; border: none; border-radius: 4px; cursor: pointer;";
pub const SUBMIT_BUTTON_BUSY: &str = "margin-top: 20px; padding: 10px 20px; background-color: #6c757d; \
     color: #fff; border: none; border-radius: 4px; cursor: wait;";
