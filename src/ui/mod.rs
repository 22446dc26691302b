pub mod controls;
pub mod layout;
pub mod menu;
