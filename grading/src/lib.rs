pub mod sudokuwiki;
pub mod util;

pub use sudokuwiki::{Grade, SudokuwikiGrader};
