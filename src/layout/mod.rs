/// Panel and arrow positions.
pub mod board;
