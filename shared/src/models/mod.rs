//! Domain models for the brew planner

mod brew;
mod dose;
mod recipe;
mod taste;

pub use brew::*;
pub use dose::*;
pub use recipe::*;
pub use taste::*;
