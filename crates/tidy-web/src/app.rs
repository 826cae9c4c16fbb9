mod keys;
mod state;

use gloo::console::log;
use tidy_core::{
  PageConfig,
  StoreCommand
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_reducer
};

pub use keys::{
  KeyAction,
  key_action
};
use state::StoreState;

use crate::components::{
  BenefitsSection,
  EmptyState,
  HeroSection,
  ProgressSummary,
  TaskComposer,
  TaskList
};

const PAGE_CONFIG_TOML: &str =
  include_str!("../assets/page.toml");

#[function_component(App)]
pub fn app() -> Html {
  let page = use_memo(
    (),
    |_| load_page_config()
  );
  let store =
    use_reducer(StoreState::default);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted with an \
         empty task list"
      );
      || ()
    });
  }

  let on_command = {
    let store = store.clone();
    Callback::from(
      move |command: StoreCommand| {
        ui_debug(
          "store.command",
          command.name()
        );
        store.dispatch(command);
      }
    )
  };

  let store = &store.store;
  let counts = store.derived_counts();
  let composer = store.composer().clone();
  let editing = store.pending_edit().cloned();

  html! {
      <>
          <HeroSection
              copy={page.hero.clone()}
              on_command={on_command.clone()}
          />
          <BenefitsSection copy={page.benefits.clone()} />
          <div class="widget">
              <div class="panel">
                  <ProgressSummary
                      heading={page.list.heading.clone()}
                      counts={counts}
                  />
                  <TaskComposer
                      copy={page.list.clone()}
                      composer={composer}
                      on_command={on_command.clone()}
                  />
                  {
                      if store.is_empty() {
                          html! {
                              <EmptyState
                                  title={page.list.empty_title.clone()}
                                  hint={page.list.empty_hint.clone()}
                              />
                          }
                      } else {
                          html! {
                              <TaskList
                                  tasks={store.tasks().to_vec()}
                                  editing={editing}
                                  on_command={on_command}
                              />
                          }
                      }
                  }
              </div>
          </div>
      </>
  }
}

fn load_page_config() -> PageConfig {
  match PageConfig::from_toml_str(
    PAGE_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        benefits =
          config.benefits.items.len(),
        "loaded page config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(error = %format!("{error:#}"), "failed to load page config; using built-in copy");
      PageConfig::default()
    }
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
