use std::rc::Rc;

use tidy_core::{
  StoreCommand,
  TaskListStore
};
use yew::Reducible;

/// Owns the page's one task store. Each
/// dispatched command is applied to the
/// latest state, so several events fired
/// before a re-render cannot overwrite each
/// other.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct StoreState {
  pub store: TaskListStore
}

impl Reducible for StoreState {
  type Action = StoreCommand;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    next.store.apply(action);
    Rc::new(next)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reduce_applies_commands_in_order() {
    let state = Rc::new(
      StoreState::default()
    );
    let state = state.reduce(
      StoreCommand::Add("one".to_string())
    );
    let state = state.reduce(
      StoreCommand::Add("two".to_string())
    );
    let first = state.store.tasks()[1].id;
    let state =
      state.reduce(StoreCommand::Toggle(first));

    assert_eq!(
      state.store.derived_counts().as_pair(),
      (1, 2)
    );
    assert_eq!(state.store.tasks()[0].text, "two");
  }

  #[test]
  fn reduce_leaves_previous_state_intact() {
    let before = Rc::new(
      StoreState::default()
    );
    let after = Rc::clone(&before).reduce(
      StoreCommand::Add("x".to_string())
    );

    assert!(before.store.is_empty());
    assert_eq!(after.store.tasks().len(), 1);
  }
}
