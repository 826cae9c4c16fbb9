use tidy_core::config::Benefit;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct BenefitCardProps {
  pub benefit: Benefit
}

#[function_component(BenefitCard)]
pub fn benefit_card(
  props: &BenefitCardProps
) -> Html {
  html! {
      <div class="benefit-card">
          <div class="benefit-icon">{ icon_glyph(&props.benefit.icon) }</div>
          <h3>{ &props.benefit.title }</h3>
          <p>{ &props.benefit.description }</p>
      </div>
  }
}

fn icon_glyph(name: &str) -> &'static str {
  match name.trim() {
    | "target" => "🎯",
    | "zap" => "⚡",
    | "star" => "★",
    | "calendar" => "📅",
    | _ => "•"
  }
}
