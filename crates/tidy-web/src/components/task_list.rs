use tidy_core::{
  PendingEdit,
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

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:      Vec<Task>,
  pub editing:    Option<PendingEdit>,
  pub on_command: Callback<StoreCommand>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="rows">
          {
              for props.tasks.iter().cloned().map(|task| {
                  let draft = props
                      .editing
                      .as_ref()
                      .filter(|edit| edit.task_id == task.id)
                      .map(|edit| edit.draft.clone());
                  let key = task.id.to_string();
                  html! {
                      <TaskListRow
                          key={key}
                          task={task}
                          draft={draft}
                          on_command={props.on_command.clone()}
                      />
                  }
              })
          }
      </div>
  }
}
