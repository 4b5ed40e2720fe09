pub mod constants;
pub mod color;
pub mod square;
pub mod square_list;
pub mod camera;

pub use constants::*;
pub use color::{Palette, Rgba, PALETTE};
pub use square::{snap_to_grid, world_to_cell_coords, Square};
pub use square_list::{OverflowPolicy, PaintOutcome, SquareList};
