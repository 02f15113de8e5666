pub mod export;
mod shape;
mod year;

pub use export::Canvas;
pub use shape::*;
pub use year::*;
