pub mod archive;
pub mod difficulty;
pub mod error;
pub mod grid;
pub mod puzzle;
pub mod stream;

pub use archive::{decode, load_file, ArchiveHeader};
pub use difficulty::Difficulty;
pub use error::DecodeError;
pub use grid::{Cell, Grid};
pub use puzzle::Puzzle;
pub use stream::{BitFlagReader, NibbleReader};
