pub mod composite;
pub mod drag;
pub mod editor;
pub mod layout;
pub mod session;
