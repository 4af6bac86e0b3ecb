use bevy::prelude::*;
use std::collections::VecDeque;

/// Slack applied when comparing due times against the clock so that
/// accumulated `dt` steps land on the same tick as a matching interval.
const TIME_EPSILON: f64 = 1e-6;
/// Lower bound for repeating intervals; a zero interval would never drain.
const MIN_INTERVAL: f64 = 1e-3;

/// Opaque id of a scheduled task. Ids are never reused within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cadence {
    Once,
    Every(f64),
    EachFrame,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    handle: TimerHandle,
    cadence: Cadence,
    due: f64,
    armed_frame: u64,
    spent: bool,
    task: T,
}

/// A task that came due during [`TaskQueue::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    pub task: T,
    pub due: f64,
}

#[derive(Debug, Clone)]
pub struct JournalEntry<T> {
    pub handle: TimerHandle,
    pub task: T,
    pub fired_at: f64,
    pub frame: u64,
}

/// Single-threaded scheduler. Nothing runs on its own: the owner calls
/// [`advance`](Self::advance) once per update and dispatches what it returns.
#[derive(Debug)]
pub struct TaskQueue<T> {
    now: f64,
    frame: u64,
    next_id: u64,
    entries: Vec<Entry<T>>,
    journal: VecDeque<JournalEntry<T>>,
    journal_capacity: usize,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::with_capacity(256)
    }
}

impl<T> TaskQueue<T> {
    pub fn with_capacity(journal_capacity: usize) -> Self {
        Self {
            now: 0.0,
            frame: 0,
            next_id: 0,
            entries: Vec::new(),
            journal: VecDeque::new(),
            journal_capacity,
        }
    }

    pub fn set_journal_capacity(&mut self, cap: usize) {
        self.journal_capacity = cap;
        while self.journal.len() > cap {
            self.journal.pop_front();
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn journal(&self) -> impl DoubleEndedIterator<Item = &JournalEntry<T>> {
        self.journal.iter()
    }

    /// Run `task` once, `delay` time units from now.
    pub fn after(&mut self, delay: f32, task: T) -> TimerHandle {
        let due = self.now + f64::from(delay.max(0.0));
        self.push(Cadence::Once, due, task)
    }

    /// Run `task` every `interval` time units, first time one interval from now.
    pub fn every(&mut self, interval: f32, task: T) -> TimerHandle {
        let interval = f64::from(interval).max(MIN_INTERVAL);
        let due = self.now + interval;
        self.push(Cadence::Every(interval), due, task)
    }

    /// Run `task` on every subsequent call to `advance`.
    pub fn on_each_frame(&mut self, task: T) -> TimerHandle {
        let now = self.now;
        self.push(Cadence::EachFrame, now, task)
    }

    /// Deregister `handle`. Unknown or already-fired handles are a no-op and return `false`.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Cancel the handle stored in `slot` (if any) and clear it.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerHandle>) -> bool {
        slot.take().map(|h| self.cancel(h)).unwrap_or(false)
    }

    fn push(&mut self, cadence: Cadence, due: f64, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            cadence,
            due,
            armed_frame: self.frame,
            spent: false,
            task,
        });
        handle
    }
}

impl<T: Clone> TaskQueue<T> {
    /// Advance the clock by `dt` and return everything that came due, ordered by
    /// due time and then registration order. Repeating timers fire once per elapsed
    /// interval; frame tasks fire once per call. Registrations made while the caller
    /// dispatches the returned batch are only considered on the next call.
    pub fn advance(&mut self, dt: f32) -> Vec<Fired<T>> {
        self.now += f64::from(dt.max(0.0));
        self.frame += 1;
        let horizon = self.now + TIME_EPSILON;
        let now = self.now;
        let frame = self.frame;

        let mut fired = Vec::new();
        for entry in self.entries.iter_mut() {
            match entry.cadence {
                Cadence::Once => {
                    if entry.due <= horizon {
                        fired.push(Fired { handle: entry.handle, task: entry.task.clone(), due: entry.due });
                        entry.spent = true;
                    }
                }
                Cadence::Every(interval) => {
                    while entry.due <= horizon {
                        fired.push(Fired { handle: entry.handle, task: entry.task.clone(), due: entry.due });
                        entry.due += interval;
                    }
                }
                Cadence::EachFrame => {
                    if entry.armed_frame < frame {
                        fired.push(Fired { handle: entry.handle, task: entry.task.clone(), due: now });
                    }
                }
            }
        }
        self.entries.retain(|e| !e.spent);

        fired.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.handle.cmp(&b.handle)));

        for f in &fired {
            if self.journal_capacity == 0 {
                break;
            }
            if self.journal.len() == self.journal_capacity {
                self.journal.pop_front();
            }
            self.journal.push_back(JournalEntry {
                handle: f.handle,
                task: f.task.clone(),
                fired_at: f.due,
                frame,
            });
        }
        if !fired.is_empty() {
            trace!(target: "swing::queue", frame, now, count = fired.len(), "tasks due");
        }
        fired
    }
}
