pub mod contact_list;
pub mod create_dialog;
pub mod detail_dialog;
pub mod main_window;
