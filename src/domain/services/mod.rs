pub mod actions;
mod interview;

pub use interview::*;
