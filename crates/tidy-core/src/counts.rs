use crate::task::Task;

/// Completion tally over the current task
/// list. Recomputed on every read.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskCounts {
  pub completed: usize,
  pub total:     usize
}

impl TaskCounts {
  pub fn from_tasks(
    tasks: &[Task]
  ) -> Self {
    Self {
      completed: tasks
        .iter()
        .filter(|task| task.completed)
        .count(),
      total:     tasks.len()
    }
  }

  pub fn as_pair(self) -> (usize, usize) {
    (self.completed, self.total)
  }

  /// Share of completed tasks in
  /// `0.0..=100.0`, or `None` when there
  /// is nothing to measure.
  pub fn progress_percent(
    self
  ) -> Option<f64> {
    if self.total == 0 {
      return None;
    }
    Some(
      self.completed as f64
        / self.total as f64
        * 100.0
    )
  }

  pub fn summary_label(
    self
  ) -> Option<String> {
    if self.total == 0 {
      return None;
    }
    Some(format!(
      "{} of {} completed",
      self.completed, self.total
    ))
  }
}
