pub use dir::{Axis, Dir};
pub use pos::{Dim, Pos};

mod dir;
mod pos;
