use std::fmt;

use chrono::{
  DateTime,
  Utc
};
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for TaskId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for TaskId {
  fn from(uuid: Uuid) -> Self {
    Self(uuid)
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct Task {
  pub id:         TaskId,
  pub text:       String,
  #[serde(default)]
  pub completed:  bool,
  pub created_at: DateTime<Utc>
}

impl Task {
  /// Builds a fresh, not yet completed
  /// task. Callers are expected to pass
  /// already-trimmed, non-empty text.
  pub fn new_pending(
    text: String,
    now: DateTime<Utc>
  ) -> Self {
    Self {
      id: TaskId::new(),
      text,
      completed: false,
      created_at: now
    }
  }
}

/// Trims user input and rejects blank
/// strings.
pub fn normalize_text(
  raw: &str
) -> Option<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_text_trims_and_rejects_blank(
  ) {
    assert_eq!(
      normalize_text("  Buy milk \n"),
      Some("Buy milk".to_string())
    );
    assert_eq!(normalize_text(""), None);
    assert_eq!(
      normalize_text(" \t\n "),
      None
    );
  }

  #[test]
  fn new_pending_starts_incomplete_with_fresh_id(
  ) {
    let now = Utc::now();
    let a = Task::new_pending(
      "a".to_string(),
      now
    );
    let b = Task::new_pending(
      "b".to_string(),
      now
    );
    assert!(!a.completed);
    assert_eq!(a.created_at, now);
    assert_ne!(a.id, b.id);
  }

  #[test]
  fn task_id_serializes_as_bare_uuid() {
    let uuid = Uuid::from_u128(7);
    let id = TaskId::from(uuid);
    let json = serde_json::to_string(&id)
      .expect("serialize id");
    assert_eq!(
      json,
      format!("\"{uuid}\"")
    );
    assert_eq!(id.to_string(), uuid.to_string());
    assert_eq!(id.as_uuid(), uuid);
  }
}
