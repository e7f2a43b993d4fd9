pub mod layout;
pub mod text_layout;
