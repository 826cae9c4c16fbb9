use tidy_core::StoreCommand;
use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

use crate::app::{
  KeyAction,
  key_action
};

#[derive(Properties, PartialEq)]
pub struct TaskEditFieldProps {
  pub draft:      String,
  pub on_command: Callback<StoreCommand>
}

/// Inline editor for the row under edit.
/// Enter saves, Escape cancels.
#[function_component(TaskEditField)]
pub fn task_edit_field(
  props: &TaskEditFieldProps
) -> Html {
  let input_ref = use_node_ref();

  {
    let input_ref = input_ref.clone();
    use_effect_with((), move |_| {
      if let Some(input) =
        input_ref.cast::<HtmlInputElement>()
      {
        let _ = input.focus();
      }
      || ()
    });
  }

  let on_input = {
    let on_command =
      props.on_command.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_command.emit(
          StoreCommand::UpdateEditDraft(
            input.value()
          )
        );
      }
    )
  };

  let on_keydown = {
    let on_command =
      props.on_command.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        let command =
          match key_action(&e.key()) {
            | Some(KeyAction::Submit) => {
              StoreCommand::SaveEdit
            }
            | Some(KeyAction::Cancel) => {
              StoreCommand::CancelEdit
            }
            | None => return
          };
        e.prevent_default();
        on_command.emit(command);
      }
    )
  };

  let on_save = {
    let on_command =
      props.on_command.clone();
    move |_: MouseEvent| {
      on_command.emit(StoreCommand::SaveEdit)
    }
  };

  let on_cancel = {
    let on_command =
      props.on_command.clone();
    move |_: MouseEvent| {
      on_command.emit(StoreCommand::CancelEdit)
    }
  };

  html! {
      <div class="edit">
          <input
              ref={input_ref}
              type="text"
              value={props.draft.clone()}
              oninput={on_input}
              onkeydown={on_keydown}
          />
          <button class="btn primary" title="Save" onclick={on_save}>{ "Save" }</button>
          <button class="btn ghost" title="Cancel" onclick={on_cancel}>{ "✕" }</button>
      </div>
  }
}
