//! In-memory task list plus the two
//! pending interactions the page can have
//! open: one task edit and the add-task
//! composer.
//!
//! Every operation is total. Unknown ids
//! are ignored and blank text is dropped
//! silently; nothing here returns an error.

use chrono::{
  DateTime,
  Utc
};
use tracing::{
  debug,
  trace
};

use crate::counts::TaskCounts;
use crate::task::{
  Task,
  TaskId,
  normalize_text
};

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct PendingEdit {
  pub task_id: TaskId,
  pub draft:   String
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct Composer {
  pub open:  bool,
  pub draft: String
}

#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct TaskListStore {
  tasks:        Vec<Task>,
  pending_edit: Option<PendingEdit>,
  composer:     Composer
}

impl TaskListStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Newest first.
  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn task(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn pending_edit(
    &self
  ) -> Option<&PendingEdit> {
    self.pending_edit.as_ref()
  }

  pub fn is_editing(
    &self,
    id: TaskId
  ) -> bool {
    self
      .pending_edit
      .as_ref()
      .is_some_and(|edit| {
        edit.task_id == id
      })
  }

  pub fn composer(&self) -> &Composer {
    &self.composer
  }

  pub fn derived_counts(
    &self
  ) -> TaskCounts {
    TaskCounts::from_tasks(&self.tasks)
  }

  pub fn add_task(
    &mut self,
    raw_text: &str
  ) -> Option<TaskId> {
    self.add_task_at(raw_text, Utc::now())
  }

  /// Prepends a new task and resets the
  /// composer. Blank input leaves the
  /// store untouched, composer included.
  pub fn add_task_at(
    &mut self,
    raw_text: &str,
    now: DateTime<Utc>
  ) -> Option<TaskId> {
    let Some(text) =
      normalize_text(raw_text)
    else {
      trace!("ignoring blank task text");
      return None;
    };

    let task = Task::new_pending(text, now);
    let id = task.id;
    self.tasks.insert(0, task);
    self.composer = Composer::default();

    debug!(
      task_id = %id,
      total = self.tasks.len(),
      "added task"
    );
    Some(id)
  }

  pub fn toggle_task(
    &mut self,
    id: TaskId
  ) {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    else {
      trace!(task_id = %id, "toggle on unknown task");
      return;
    };

    task.completed = !task.completed;
    debug!(
      task_id = %id,
      completed = task.completed,
      "toggled task"
    );
  }

  pub fn delete_task(
    &mut self,
    id: TaskId
  ) {
    let before = self.tasks.len();
    self.tasks.retain(|task| task.id != id);
    if self.tasks.len() == before {
      trace!(task_id = %id, "delete on unknown task");
      return;
    }

    if self.is_editing(id) {
      debug!(task_id = %id, "deleted task under edit; cancelling edit");
      self.pending_edit = None;
    }

    debug!(
      task_id = %id,
      total = self.tasks.len(),
      "deleted task"
    );
  }

  /// Opens an edit on `id`, replacing any
  /// edit already in progress.
  pub fn start_edit(
    &mut self,
    id: TaskId
  ) {
    let Some(draft) = self
      .task(id)
      .map(|task| task.text.clone())
    else {
      trace!(task_id = %id, "edit on unknown task");
      return;
    };

    if let Some(previous) =
      &self.pending_edit
      && previous.task_id != id
    {
      debug!(
        previous = %previous.task_id,
        task_id = %id,
        "replacing active edit"
      );
    }

    self.pending_edit =
      Some(PendingEdit { task_id: id, draft });
  }

  pub fn update_edit_draft(
    &mut self,
    text: &str
  ) {
    if let Some(edit) =
      self.pending_edit.as_mut()
    {
      edit.draft = text.to_string();
    }
  }

  /// Commits the draft when it is not
  /// blank. The edit session ends either
  /// way.
  pub fn save_edit(&mut self) {
    let Some(edit) =
      self.pending_edit.take()
    else {
      return;
    };

    let Some(text) =
      normalize_text(&edit.draft)
    else {
      debug!(task_id = %edit.task_id, "discarding blank edit");
      return;
    };

    match self
      .tasks
      .iter_mut()
      .find(|task| task.id == edit.task_id)
    {
      | Some(task) => {
        task.text = text;
        debug!(task_id = %edit.task_id, "saved edit");
      }
      | None => {
        trace!(task_id = %edit.task_id, "edited task no longer exists");
      }
    }
  }

  pub fn cancel_edit(&mut self) {
    if let Some(edit) =
      self.pending_edit.take()
    {
      debug!(task_id = %edit.task_id, "cancelled edit");
    }
  }

  pub fn open_composer(&mut self) {
    self.composer.open = true;
  }

  pub fn update_add_draft(
    &mut self,
    text: &str
  ) {
    self.composer.draft = text.to_string();
  }

  pub fn submit_composer(
    &mut self
  ) -> Option<TaskId> {
    let draft = self.composer.draft.clone();
    self.add_task(&draft)
  }

  /// Closes the composer and throws the
  /// draft away.
  pub fn close_composer(&mut self) {
    self.composer = Composer::default();
  }
}
