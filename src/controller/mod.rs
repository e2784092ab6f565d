use std::collections::VecDeque;

use log::{debug, warn};

use crate::basic::{Dim, Dir, Pos};
use crate::error::Result;
use crate::event::Event;
use crate::port::{Cell, DisplayPort, DisplayUpdate, FoodPort, ScorePort, ScoreUpdate};

pub use config::Config;

mod config;

/// One cell of the snake's body.
///
/// `ttl` counts down once per ordinary movement tick; the segment is
/// dropped from the body the tick it reaches zero. A freshly pushed
/// head inherits the previous head's ttl unchanged, so skipping the
/// countdown for one tick (the eating branch) is what makes the body
/// longer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Segment {
    pub pos: Pos,
    pub ttl: u32,
}

/// The movement/collision controller. Owns the body, the current
/// heading and the food position; everything else talks to it through
/// events in and port notifications out.
pub struct Controller {
    display: Box<dyn DisplayPort + Send>,
    food_port: Box<dyn FoodPort + Send>,
    score: Box<dyn ScorePort + Send>,

    dim: Dim,
    food: Pos,
    dir: Dir,
    // front = head
    body: VecDeque<Segment>,
}

impl Controller {
    pub fn new(
        display: Box<dyn DisplayPort + Send>,
        food_port: Box<dyn FoodPort + Send>,
        score: Box<dyn ScorePort + Send>,
        config: &str,
    ) -> Result<Self> {
        let Config { dim, food, dir, segments } = config.parse()?;

        Ok(Self {
            display,
            food_port,
            score,
            dim,
            food,
            dir,
            body: segments,
        })
    }

    /// Process one inbound event to completion.
    ///
    /// A loss notification does not latch: the controller keeps
    /// handling ticks afterwards and will keep re-reporting the
    /// collision until the score consumer stops the timer.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Tick => self.on_tick(),
            Event::DirectionChange(dir) => self.on_direction_change(dir),
            Event::UnsolicitedFood(pos) => self.on_unsolicited_food(pos),
            Event::RequestedFood(pos) => self.on_requested_food(pos),
        }
    }

    pub fn dim(&self) -> Dim {
        self.dim
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn food_position(&self) -> Pos {
        self.food
    }

    pub fn head_pos(&self) -> Pos {
        self.head().pos
    }

    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    fn head(&self) -> Segment {
        self.body[0]
    }

    /// Pure projection of the next head, one cell along the current
    /// heading, ttl carried over from the current head
    fn make_head(&self) -> Segment {
        let head = self.head();
        Segment {
            pos: head.pos.translate(self.dir, 1),
            ttl: head.ttl,
        }
    }

    fn hits_body(&self, pos: Pos) -> bool {
        self.body.iter().any(|segment| segment.pos == pos)
    }

    fn on_tick(&mut self) {
        let new_head = self.make_head();

        let mut blocked = self.head_collides_with_body(new_head);
        if !blocked {
            blocked = self.snake_blocked(new_head);
        }
        if !blocked {
            self.move_snake(new_head);
        }
    }

    /// Body-wide scan, head included; runs before anything is committed
    fn head_collides_with_body(&mut self, candidate: Segment) -> bool {
        if self.hits_body(candidate.pos) {
            debug!("head {:?} collides with the body", candidate.pos);
            self.score.send(ScoreUpdate::Loss);
            true
        } else {
            false
        }
    }

    /// Decides the tick's outcome and applies its side effects, but
    /// does not touch the body layout; that is `move_snake`'s job.
    /// Returns true only when the move must not be committed.
    fn snake_blocked(&mut self, candidate: Segment) -> bool {
        if candidate.pos == self.food {
            self.score.send(ScoreUpdate::Score);
            self.food_port.request();
            // no ttl countdown this tick: pushing the head without
            // expiring anything is the growth mechanism
        } else if !candidate.pos.is_in(self.dim) {
            debug!("head {:?} leaves the {:?} board", candidate.pos, self.dim);
            self.score.send(ScoreUpdate::Loss);
            return true;
        } else {
            for segment in &mut self.body {
                segment.ttl -= 1;
                if segment.ttl == 0 {
                    self.display.send(DisplayUpdate {
                        pos: segment.pos,
                        cell: Cell::Free,
                    });
                }
            }
        }
        false
    }

    fn move_snake(&mut self, head: Segment) {
        self.body.push_front(head);
        self.display.send(DisplayUpdate {
            pos: head.pos,
            cell: Cell::Snake,
        });
        self.body.retain(|segment| segment.ttl > 0);
    }

    /// Only perpendicular turns are applied; a same-axis request is
    /// either a 180° turn or a no-op and both are dropped
    fn on_direction_change(&mut self, requested: Dir) {
        if requested.axis() == self.dir.axis() {
            warn!(
                "rejected same-axis turn {:?} -> {:?}",
                self.dir, requested
            );
        } else {
            self.dir = requested;
        }
    }

    /// The food generator relocated the food on its own: clear the old
    /// cell, draw the new one. A proposal under the snake is bounced
    /// back as a fresh request and changes nothing.
    fn on_unsolicited_food(&mut self, pos: Pos) {
        if self.hits_body(pos) {
            debug!("proposed food {:?} lands on the snake, re-requesting", pos);
            self.food_port.request();
        } else {
            self.display.send(DisplayUpdate {
                pos: self.food,
                cell: Cell::Free,
            });
            self.display.send(DisplayUpdate { pos, cell: Cell::Food });
            self.food = pos;
        }
    }

    /// Answer to a request this controller issued; the old food cell
    /// was already eaten over, so there is nothing to clear
    fn on_requested_food(&mut self, pos: Pos) {
        if self.hits_body(pos) {
            debug!("requested food {:?} lands on the snake, re-requesting", pos);
            self.food_port.request();
        } else {
            self.display.send(DisplayUpdate { pos, cell: Cell::Food });
            self.food = pos;
        }
    }
}
