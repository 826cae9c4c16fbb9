pub mod command;
pub mod config;
pub mod counts;
pub mod store;
pub mod task;

pub use command::StoreCommand;
pub use config::PageConfig;
pub use counts::TaskCounts;
pub use store::{
  Composer,
  PendingEdit,
  TaskListStore
};
pub use task::{
  Task,
  TaskId
};
