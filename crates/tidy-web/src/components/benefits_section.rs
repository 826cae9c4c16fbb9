use tidy_core::config::BenefitsCopy;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::BenefitCard;

#[derive(Properties, PartialEq)]
pub struct BenefitsSectionProps {
  pub copy: BenefitsCopy
}

#[function_component(BenefitsSection)]
pub fn benefits_section(
  props: &BenefitsSectionProps
) -> Html {
  if props.copy.items.is_empty() {
    return html! {};
  }

  html! {
      <section class="benefits">
          <h2>{ &props.copy.heading }</h2>
          <p>{ &props.copy.subheading }</p>
          <div class="benefit-grid">
              {
                  for props.copy.items.iter().cloned().map(|benefit| html! {
                      <BenefitCard benefit={benefit} />
                  })
              }
          </div>
      </section>
  }
}
