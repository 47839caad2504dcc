pub mod action_buttons;
pub mod header;
pub mod loading_spinner;
pub mod particles;
pub mod result_list;
pub mod upload_area;
pub mod zoom_overlay;
