pub mod admin_panel;
pub mod navbar;
pub mod parameter_cards;
pub mod samples_table;
pub mod submit_form;
