//! Tick-driven scheduler

use crate::routine::{Routine, Step};

/// Resumes per task per tick before the task is forced to yield
const MAX_RESUMES_PER_TICK: u32 = 64;

/// Task identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

struct Task<O> {
    id: TaskId,
    routine: Box<dyn Routine<O>>,
    /// Seconds until the next resume; the resumption point
    wait: f32,
}

/// Owns routines and resumes them as time passes
pub struct Scheduler<O> {
    tasks: Vec<Task<O>>,
    next_id: u64,
}

impl<O> Scheduler<O> {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a routine; it is first resumed on the next tick
    pub fn spawn<R>(&mut self, routine: R) -> TaskId
    where
        R: Routine<O> + 'static,
    {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            routine: Box::new(routine),
            wait: 0.0,
        });
        log::debug!("Spawned task {:?}", id);
        id
    }

    /// Remove a task immediately; returns whether it was running
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            log::debug!("Cancelled task {:?}", id);
        }
        removed
    }

    /// Remove every task
    pub fn cancel_all(&mut self) {
        if !self.tasks.is_empty() {
            log::debug!("Cancelled {} task(s)", self.tasks.len());
        }
        self.tasks.clear();
    }

    /// Whether a task is still scheduled
    pub fn is_running(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Seconds until a task next resumes
    pub fn remaining_wait(&self, id: TaskId) -> Option<f32> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.wait.max(0.0))
    }

    /// Number of scheduled tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether nothing is scheduled
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Advance time by `dt`, resuming every task whose wait has elapsed.
    ///
    /// Time left over after a wait elapses counts toward the next wait, so a
    /// task can resume several times within one long tick.
    pub fn tick(&mut self, dt: f32, out: &mut Vec<O>) {
        let mut finished = Vec::new();

        for task in &mut self.tasks {
            task.wait -= dt;
            let mut resumes = 0;
            while task.wait <= 0.0 {
                if resumes == MAX_RESUMES_PER_TICK {
                    log::warn!("Task {:?} did not yield any time; deferring to next tick", task.id);
                    task.wait = 0.0;
                    break;
                }
                resumes += 1;
                match task.routine.resume(out) {
                    Step::Wait(seconds) => task.wait += seconds.max(0.0),
                    Step::Done => {
                        finished.push(task.id);
                        break;
                    }
                }
            }
        }

        if !finished.is_empty() {
            self.tasks.retain(|task| !finished.contains(&task.id));
        }
    }
}

impl<O> Default for Scheduler<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> std::fmt::Debug for Scheduler<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("tasks", &self.tasks.iter().map(|task| task.id).collect::<Vec<_>>())
            .finish()
    }
}
