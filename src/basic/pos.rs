use std::fmt::{Debug, Error, Formatter};

use crate::basic::Dir;

/// A cell coordinate on the board, origin top-left, y growing downwards.
///
/// Coordinates are signed so that heads projected past the top or left
/// edge stay representable; bounds are enforced at tick time, not here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Add, AddAssign, Sub, SubAssign)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

/// Board dimensions, `x = width`, `y = height`
pub type Dim = Pos;

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dir: Dir, dist: i32) -> Self {
        let Pos { x: dx, y: dy } = dir.offset();
        Self {
            x: self.x + dx * dist,
            y: self.y + dy * dist,
        }
    }

    pub fn is_in(self, dim: Dim) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < dim.x && self.y < dim.y
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

#[test]
fn test_translate() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.translate(Dir::Up, 1), Pos::new(3, 3));
    assert_eq!(pos.translate(Dir::Down, 2), Pos::new(3, 6));
    assert_eq!(pos.translate(Dir::Left, 3), Pos::new(0, 4));
    assert_eq!(pos.translate(Dir::Right, 1), Pos::new(4, 4));
}

#[test]
fn test_is_in() {
    let dim = Dim::new(10, 8);
    assert!(Pos::new(0, 0).is_in(dim));
    assert!(Pos::new(9, 7).is_in(dim));
    assert!(!Pos::new(10, 7).is_in(dim));
    assert!(!Pos::new(9, 8).is_in(dim));
    assert!(!Pos::new(-1, 0).is_in(dim));
    assert!(!Pos::new(0, -1).is_in(dim));
}
