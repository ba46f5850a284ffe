pub mod err;
pub mod icon;
pub mod rewrite;
pub mod run;
#[cfg(feature = "cli")]
mod cli;
