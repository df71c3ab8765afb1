pub mod scheduler;

pub use scheduler::{BrowserScheduler, Scheduler, TaskHandle, TaskStatus, VirtualScheduler};
