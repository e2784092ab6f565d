use std::ops::Neg;

use static_assertions::const_assert_eq;

use crate::basic::Pos;
use Dir::*;

/// One of the four movement headings on the grid.
///
/// The discriminants form a 2-bit code: bit 0 selects the axis
/// (0 vertical, 1 horizontal), bit 1 selects the sign along it
/// (0 negative, 1 positive). The same code identifies directions
/// in raw external events, see `RawEvent`.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Up = 0b00,
    Down = 0b10,
    Left = 0b01,
    Right = 0b11,
}

// both directions of an axis must share the axis bit
const_assert_eq!(Dir::Up as u8 & 0b01, Dir::Down as u8 & 0b01);
const_assert_eq!(Dir::Left as u8 & 0b01, Dir::Right as u8 & 0b01);
const_assert_eq!(Dir::Up as u8 & 0b10, 0);
const_assert_eq!(Dir::Down as u8 & 0b10, 0b10);

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

impl Dir {
    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        [Up, Down, Left, Right].iter().copied()
    }

    pub fn axis(self) -> Axis {
        if self as u8 & 0b01 == 0 {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    /// Unit step along this direction, y growing downwards
    pub fn offset(self) -> Pos {
        let sign = if self as u8 & 0b10 != 0 { 1 } else { -1 };
        match self.axis() {
            Axis::Vertical => Pos { x: 0, y: sign },
            Axis::Horizontal => Pos { x: sign, y: 0 },
        }
    }

    /// The `U`/`D`/`L`/`R` letters used in configuration text
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Up),
            'D' => Some(Down),
            'L' => Some(Left),
            'R' => Some(Right),
            _ => None,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0b00 => Some(Up),
            0b10 => Some(Down),
            0b01 => Some(Left),
            0b11 => Some(Right),
            _ => None,
        }
    }
}

#[test]
fn test_offsets() {
    let expected = [
        (Up, Pos { x: 0, y: -1 }),
        (Down, Pos { x: 0, y: 1 }),
        (Left, Pos { x: -1, y: 0 }),
        (Right, Pos { x: 1, y: 0 }),
    ];

    for &(dir, offset) in &expected {
        assert_eq!(dir.offset(), offset);
    }
}

#[test]
fn test_axis_pairing() {
    use itertools::Itertools;

    // axes agree exactly for a direction, its reverse, and itself
    for (a, b) in Dir::iter().cartesian_product(Dir::iter()) {
        let same_axis = a == b || a == -b;
        assert_eq!(a.axis() == b.axis(), same_axis, "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_char_roundtrip() {
    for (c, dir) in [('U', Up), ('D', Down), ('L', Left), ('R', Right)] {
        assert_eq!(Dir::from_char(c), Some(dir));
    }
    assert_eq!(Dir::from_char('X'), None);

    for dir in Dir::iter() {
        assert_eq!(Dir::from_code(dir as u8), Some(dir));
    }
    assert_eq!(Dir::from_code(0b100), None);
}
