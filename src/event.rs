use crate::basic::{Dir, Pos};
use crate::error::{Error, Result};

/// An inbound event, one delivered per `Controller::handle` call.
///
/// The set is closed: dispatch matches exhaustively and cannot reach an
/// "unknown event" state. Sources that receive type-tagged events from
/// outside the process decode them through `RawEvent` first, which is
/// where an unknown tag surfaces as an error.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Event {
    /// One simulation step from the external timer
    Tick,
    /// The player asked to turn
    DirectionChange(Dir),
    /// The food generator proposes a relocation on its own initiative
    UnsolicitedFood(Pos),
    /// The food generator answers a request the controller issued
    RequestedFood(Pos),
}

pub const TAG_TICK: u8 = 0;
pub const TAG_DIRECTION: u8 = 1;
pub const TAG_FOOD: u8 = 2;
pub const TAG_FOOD_RESPONSE: u8 = 3;

/// A type-tagged event as delivered by an external source: a kind tag
/// plus up to two payload words (direction code, or x and y).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RawEvent {
    pub tag: u8,
    pub payload: [i32; 2],
}

impl TryFrom<RawEvent> for Event {
    type Error = Error;

    fn try_from(raw: RawEvent) -> Result<Self> {
        match raw.tag {
            TAG_TICK => Ok(Event::Tick),
            TAG_DIRECTION => {
                let code = u8::try_from(raw.payload[0]).ok();
                let dir = code.and_then(Dir::from_code).ok_or(Error::UnexpectedPayload {
                    tag: raw.tag,
                    payload: raw.payload[0],
                })?;
                Ok(Event::DirectionChange(dir))
            }
            TAG_FOOD => Ok(Event::UnsolicitedFood(Pos::new(raw.payload[0], raw.payload[1]))),
            TAG_FOOD_RESPONSE => Ok(Event::RequestedFood(Pos::new(raw.payload[0], raw.payload[1]))),
            tag => Err(Error::UnexpectedEvent(tag)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(tag: u8, a: i32, b: i32) -> RawEvent {
        RawEvent { tag, payload: [a, b] }
    }

    #[test]
    fn decodes_known_tags() {
        assert_eq!(Event::try_from(raw(TAG_TICK, 0, 0)).unwrap(), Event::Tick);
        assert_eq!(
            Event::try_from(raw(TAG_DIRECTION, Dir::Left as i32, 0)).unwrap(),
            Event::DirectionChange(Dir::Left)
        );
        assert_eq!(
            Event::try_from(raw(TAG_FOOD, 4, 7)).unwrap(),
            Event::UnsolicitedFood(Pos::new(4, 7))
        );
        assert_eq!(
            Event::try_from(raw(TAG_FOOD_RESPONSE, 2, 3)).unwrap(),
            Event::RequestedFood(Pos::new(2, 3))
        );
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert!(matches!(
            Event::try_from(raw(9, 0, 0)),
            Err(Error::UnexpectedEvent(9))
        ));
    }

    #[test]
    fn bad_direction_code_is_a_payload_error() {
        // distinguishable from an unknown tag when diagnosing the source
        assert!(matches!(
            Event::try_from(raw(TAG_DIRECTION, 0b111, 0)),
            Err(Error::UnexpectedPayload { tag: TAG_DIRECTION, payload: 0b111 })
        ));
        assert!(matches!(
            Event::try_from(raw(TAG_DIRECTION, -1, 0)),
            Err(Error::UnexpectedPayload { tag: TAG_DIRECTION, payload: -1 })
        ));
    }
}
