pub mod banner;
pub mod details;
pub mod tabs;
pub mod tree;
