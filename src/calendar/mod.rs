mod event;
mod grid_service;
mod map;

pub mod loader;

pub use event::*;
pub use grid_service::*;
pub use map::*;
