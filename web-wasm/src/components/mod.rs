pub mod header;
pub mod upload_area;
pub mod loading_spinner;
pub mod result_panel;
pub mod radar_chart;
