use tidy_core::config::ListCopy;
use tidy_core::{
  Composer,
  StoreCommand
};
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
pub struct TaskComposerProps {
  pub copy:       ListCopy,
  pub composer:   Composer,
  pub on_command: Callback<StoreCommand>
}

#[function_component(TaskComposer)]
pub fn task_composer(
  props: &TaskComposerProps
) -> Html {
  if !props.composer.open {
    let on_command =
      props.on_command.clone();
    return html! {
        <button
            class="btn primary wide"
            onclick={move |_| on_command.emit(StoreCommand::OpenComposer)}
        >
            { format!("+ {}", props.copy.new_task_label) }
        </button>
    };
  }

  html! {
      <ComposerForm
          placeholder={props.copy.placeholder.clone()}
          add_label={props.copy.add_button_label.clone()}
          draft={props.composer.draft.clone()}
          on_command={props.on_command.clone()}
      />
  }
}

#[derive(Properties, PartialEq)]
struct ComposerFormProps {
  placeholder: String,
  add_label:   String,
  draft:       String,
  on_command:  Callback<StoreCommand>
}

#[function_component(ComposerForm)]
fn composer_form(
  props: &ComposerFormProps
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
          StoreCommand::UpdateAddDraft(
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
        match key_action(&e.key()) {
          | Some(KeyAction::Submit) => {
            e.prevent_default();
            on_command.emit(
              StoreCommand::SubmitComposer
            );
          }
          | Some(KeyAction::Cancel) => {
            on_command.emit(
              StoreCommand::CloseComposer
            );
          }
          | None => {}
        }
      }
    )
  };

  let on_submit = {
    let on_command =
      props.on_command.clone();
    move |_: MouseEvent| {
      on_command.emit(
        StoreCommand::SubmitComposer
      )
    }
  };

  let on_close = {
    let on_command =
      props.on_command.clone();
    move |_: MouseEvent| {
      on_command
        .emit(StoreCommand::CloseComposer)
    }
  };

  html! {
      <div class="composer">
          <input
              ref={input_ref}
              type="text"
              value={props.draft.clone()}
              placeholder={props.placeholder.clone()}
              oninput={on_input}
              onkeydown={on_keydown}
          />
          <button class="btn primary" onclick={on_submit}>{ &props.add_label }</button>
          <button class="btn ghost" title="Close" onclick={on_close}>{ "✕" }</button>
      </div>
  }
}
