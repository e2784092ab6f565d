//! Movement/collision controller for a grid-based snake simulation.

#[macro_use]
extern crate derive_more;

pub use controller::{Controller, Segment};
pub use error::{Error, Result};
pub use event::{Event, RawEvent};

pub mod basic;
pub mod controller;
mod error;
pub mod event;
pub mod port;
