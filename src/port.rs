use crate::basic::Pos;

/// What a display cell holds after an update
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Free,
    Snake,
    Food,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DisplayUpdate {
    pub pos: Pos,
    pub cell: Cell,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ScoreUpdate {
    Score,
    Loss,
}

/// Consumer of cell draw/clear notifications
pub trait DisplayPort {
    fn send(&mut self, update: DisplayUpdate);
}

/// Producer of food coordinates; `request` asks it for a new proposal,
/// which comes back later as a `RequestedFood` event
pub trait FoodPort {
    fn request(&mut self);
}

/// Consumer of score and loss notifications. Loss is advisory: the
/// controller keeps processing ticks, stopping the timer is this
/// consumer's call.
pub trait ScorePort {
    fn send(&mut self, update: ScoreUpdate);
}
