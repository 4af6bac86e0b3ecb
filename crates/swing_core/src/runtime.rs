use bevy::prelude::*;

use crate::bindings::{BodyId, SwingBodies, SwingIo};
use crate::controller::SwingController;
use crate::queue::TaskQueue;
use crate::state::{SwingEvent, SwingState, SwingTask};
use crate::tuning::SwingTuning;

/// Controller plus the task queue it schedules on. Every mutation goes
/// through here, from one update loop.
#[derive(Resource, Debug)]
pub struct SwingRuntime {
    controller: SwingController,
    queue: TaskQueue<SwingTask>,
}

impl SwingRuntime {
    pub fn new(tuning: SwingTuning, bodies: SwingBodies) -> Self {
        Self {
            controller: SwingController::new(tuning, bodies),
            queue: TaskQueue::default(),
        }
    }

    pub fn controller(&self) -> &SwingController {
        &self.controller
    }

    pub fn queue(&self) -> &TaskQueue<SwingTask> {
        &self.queue
    }

    pub fn state(&self) -> SwingState {
        self.controller.state()
    }

    pub fn toggle(&mut self, active: bool, io: &mut SwingIo<'_>) {
        self.controller.on_toggle(active, &mut self.queue, io);
    }

    pub fn contact(&mut self, other: BodyId) {
        self.controller.on_contact(other, &mut self.queue);
    }

    /// Advance time by `dt`, dispatch everything that came due and return the
    /// number of tasks run.
    pub fn advance(&mut self, dt: f32, io: &mut SwingIo<'_>) -> usize {
        let fired = self.queue.advance(dt);
        for f in &fired {
            self.controller.run_task(f, &mut self.queue, io);
        }
        fired.len()
    }

    pub fn drain_events(&mut self) -> Vec<SwingEvent> {
        self.controller.drain_events()
    }
}
