//! Cog Schedule - Cooperative Routines
//!
//! Resumable "wait, then act" sequences driven by the frame update. Nothing
//! here spawns a thread: a routine only runs inside [`Scheduler::tick`], and
//! cancelling it removes it before the call returns.
//!
//! # Example
//!
//! ```ignore
//! use cog_schedule::prelude::*;
//!
//! let mut scheduler = Scheduler::new();
//! let task = scheduler.spawn(SparkleRoutine::seeded(SparkleConfig::default(), 7));
//!
//! let mut sparkles = Vec::new();
//! scheduler.tick(1.0 / 60.0, &mut sparkles);
//!
//! scheduler.cancel(task);
//! ```

pub mod routine;
pub mod scheduler;
pub mod sparkle;

pub mod prelude {
    pub use crate::routine::{Routine, Step};
    pub use crate::scheduler::{Scheduler, TaskId};
    pub use crate::sparkle::{Sparkle, SparkleConfig, SparkleRoutine};
}

pub use prelude::*;
