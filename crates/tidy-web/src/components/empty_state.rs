use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
  pub title: String,
  pub hint:  String
}

#[function_component(EmptyState)]
pub fn empty_state(
  props: &EmptyStateProps
) -> Html {
  html! {
      <div class="empty">
          <div class="glyph">{ "✓" }</div>
          <h3>{ &props.title }</h3>
          <p>{ &props.hint }</p>
      </div>
  }
}
