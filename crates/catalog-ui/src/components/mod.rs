pub mod bar;
pub mod header;
pub mod sidebar;
