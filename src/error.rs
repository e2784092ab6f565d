use std::result;

use thiserror::Error;

#[derive(Debug, Error)]
#[must_use]
pub enum Error {
    /// Malformed configuration text; construction aborts entirely
    #[error("bad controller configuration: {0}")]
    Config(&'static str),

    /// An external event with an unrecognized type tag, an integration
    /// fault between the controller and its event source
    #[error("unexpected event tag {0}")]
    UnexpectedEvent(u8),

    /// A recognized event tag whose payload does not decode, the same
    /// class of integration fault but pointing at the payload encoding
    #[error("event tag {tag} carries undecodable payload {payload}")]
    UnexpectedPayload { tag: u8, payload: i32 },
}

pub type Result<T = ()> = result::Result<T, Error>;
