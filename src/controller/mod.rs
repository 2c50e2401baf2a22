//! Headless interaction state of the menu screen.

mod form;
mod view_controller;

pub use form::MenuForm;
pub use view_controller::ViewController;
