pub mod access_denied;
pub mod alert;
pub mod form_group;
pub mod loading;
pub mod select_input;
pub mod text_input;
