use tidy_core::{
  StoreCommand,
  Task
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskEditField;

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:       Task,
  /// Present only while this row is the
  /// one being edited.
  pub draft:      Option<String>,
  pub on_command: Callback<StoreCommand>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.task.id;
  let completed = props.task.completed;
  let on_toggle = {
    let on_command =
      props.on_command.clone();
    move |_: yew::MouseEvent| {
      on_command
        .emit(StoreCommand::Toggle(id))
    }
  };
  let on_edit = {
    let on_command =
      props.on_command.clone();
    move |_: yew::MouseEvent| {
      on_command
        .emit(StoreCommand::StartEdit(id))
    }
  };
  let on_delete = {
    let on_command =
      props.on_command.clone();
    move |_: yew::MouseEvent| {
      on_command
        .emit(StoreCommand::Delete(id))
    }
  };

  html! {
      <div class={row_class(completed)}>
          <button
              class={toggle_class(completed)}
              title={if completed { "Mark as not done" } else { "Mark as done" }}
              onclick={on_toggle}
          >
              { if completed { "✓" } else { "" } }
          </button>
          {
              match &props.draft {
                  | Some(draft) => html! {
                      <TaskEditField
                          draft={draft.clone()}
                          on_command={props.on_command.clone()}
                      />
                  },
                  | None => html! {
                      <>
                          <span class="text">{ &props.task.text }</span>
                          <div class="actions">
                              <button class="btn ghost" title="Edit" onclick={on_edit}>{ "✎" }</button>
                              <button class="btn ghost" title="Delete" onclick={on_delete}>{ "🗑" }</button>
                          </div>
                      </>
                  }
              }
          }
      </div>
  }
}

fn row_class(
  completed: bool
) -> &'static str {
  if completed {
    "row done"
  } else {
    "row"
  }
}

fn toggle_class(
  completed: bool
) -> &'static str {
  if completed {
    "toggle on"
  } else {
    "toggle"
  }
}
