use tidy_core::StoreCommand;
use tidy_core::config::HeroCopy;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
  pub copy:       HeroCopy,
  pub on_command: Callback<StoreCommand>
}

#[function_component(HeroSection)]
pub fn hero_section(
  props: &HeroSectionProps
) -> Html {
  let on_command =
    props.on_command.clone();
  let has_highlight =
    !props.copy.highlight.trim().is_empty();

  html! {
      <section class="hero">
          <h1>
              { &props.copy.headline }
              {
                  if has_highlight {
                      html! { <span class="highlight">{ &props.copy.highlight }</span> }
                  } else {
                      html! {}
                  }
              }
          </h1>
          <p>{ &props.copy.tagline }</p>
          <button
              class="btn cta"
              onclick={move |_| on_command.emit(StoreCommand::OpenComposer)}
          >
              { format!("+ {}", props.copy.cta_label) }
          </button>
      </section>
  }
}
