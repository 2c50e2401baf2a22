pub mod menu_item;
pub mod view;

pub use menu_item::*;
pub use view::*;
