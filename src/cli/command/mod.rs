pub mod icon;
pub mod rewrite;
