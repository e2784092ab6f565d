use std::collections::VecDeque;
use std::str::FromStr;

use itertools::Itertools;

use crate::basic::{Dim, Dir, Pos};
use crate::controller::Segment;
use crate::error::{Error, Result};

/// Parsed form of the configuration text:
/// `W <width> <height> F <foodX> <foodY> S <dir> <len> (<x> <y>){len}`
///
/// Coordinates are taken verbatim, without checking them against the
/// board dimensions; an off-board head shows up as a loss on the first
/// tick instead.
#[derive(Debug)]
pub struct Config {
    pub dim: Dim,
    pub food: Pos,
    pub dir: Dir,
    pub segments: VecDeque<Segment>,
}

fn token<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<&'a str> {
    tokens
        .next()
        .ok_or(Error::Config("configuration text ends early"))
}

fn expect_tag<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &str,
    msg: &'static str,
) -> Result {
    if token(tokens)? == expected {
        Ok(())
    } else {
        Err(Error::Config(msg))
    }
}

fn number<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<i32> {
    token(tokens)?
        .parse()
        .map_err(|_| Error::Config("expected a number"))
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();

        expect_tag(&mut tokens, "W", "expected `W` map section")?;
        let width = number(&mut tokens)?;
        let height = number(&mut tokens)?;

        expect_tag(&mut tokens, "F", "expected `F` food section")?;
        let food_x = number(&mut tokens)?;
        let food_y = number(&mut tokens)?;

        expect_tag(&mut tokens, "S", "expected `S` snake section")?;
        let dir_char = token(&mut tokens)?;
        let dir = dir_char
            .chars()
            .exactly_one()
            .ok()
            .and_then(Dir::from_char)
            .ok_or(Error::Config("unrecognized direction character"))?;

        let len = usize::try_from(number(&mut tokens)?)
            .map_err(|_| Error::Config("negative segment count"))?;
        // the tick handler relies on a non-empty body
        if len == 0 {
            return Err(Error::Config("empty snake body"));
        }

        let coords: Vec<i32> = tokens.map(|t| {
            t.parse()
                .map_err(|_| Error::Config("expected a segment coordinate"))
        })
        .collect::<Result<_>>()?;
        if coords.len() != 2 * len {
            return Err(Error::Config("wrong number of segment coordinates"));
        }

        // the first segment parsed is the head and outlives the rest,
        // the last one expires after a single tick
        let segments = coords
            .into_iter()
            .tuples()
            .enumerate()
            .map(|(i, (x, y))| Segment {
                pos: Pos::new(x, y),
                ttl: (len - i) as u32,
            })
            .collect();

        Ok(Config {
            dim: Dim::new(width, height),
            food: Pos::new(food_x, food_y),
            dir,
            segments,
        })
    }
}
