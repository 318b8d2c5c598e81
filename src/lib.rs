pub use utils::Pos;
mod utils;

pub use error::{Error, Result};
mod error;

pub use world::{Cell, CellId, Grid};
pub mod world;

pub use sim::Game;
mod sim;

pub use view::{Canvas, Capture, Mode, Output, Terminal, PACE_INTERVAL};
pub mod view;
