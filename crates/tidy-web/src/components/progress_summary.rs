use tidy_core::TaskCounts;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ProgressSummaryProps {
  pub heading: String,
  pub counts:  TaskCounts
}

#[function_component(ProgressSummary)]
pub fn progress_summary(
  props: &ProgressSummaryProps
) -> Html {
  let label = props.counts.summary_label();
  let fill_style =
    progress_fill_style(props.counts);

  html! {
      <>
          <div class="header">
              <h2>{ &props.heading }</h2>
              {
                  match label {
                      | Some(label) => html! { <div class="summary">{ label }</div> },
                      | None => html! {}
                  }
              }
          </div>
          {
              match fill_style {
                  | Some(style) => html! {
                      <div class="progress">
                          <div class="fill" style={style}></div>
                      </div>
                  },
                  | None => html! {}
              }
          }
      </>
  }
}

/// Inline width for the bar fill; `None`
/// hides the bar on an empty list.
fn progress_fill_style(
  counts: TaskCounts
) -> Option<String> {
  counts.progress_percent().map(
    |percent| {
      format!("width:{percent:.1}%;")
    }
  )
}
