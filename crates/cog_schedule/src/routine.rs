//! Routine trait

/// What a routine wants after being resumed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Suspend for this many seconds
    Wait(f32),
    /// Finished; the scheduler drops it
    Done,
}

/// A resumable sequence of steps producing outputs of type `O`
pub trait Routine<O>: Send {
    /// Run until the next suspension point, pushing any outputs
    fn resume(&mut self, out: &mut Vec<O>) -> Step;
}
