//! Page copy for the hero banner, the
//! benefits grid and the task widget.
//!
//! The frontend ships a TOML file with this
//! shape; any section left out falls back
//! to the built-in copy.

use anyhow::{
  Context,
  anyhow
};
use serde::Deserialize;
use tracing::{
  debug,
  warn
};

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
  Default,
)]
#[serde(default)]
pub struct PageConfig {
  pub hero:     HeroCopy,
  pub benefits: BenefitsCopy,
  pub list:     ListCopy
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct HeroCopy {
  pub headline:  String,
  pub highlight: String,
  pub tagline:   String,
  pub cta_label: String
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct BenefitsCopy {
  pub heading:    String,
  pub subheading: String,
  pub items:      Vec<Benefit>
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct Benefit {
  #[serde(default)]
  pub icon:        String,
  pub title:       String,
  #[serde(default)]
  pub description: String
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct ListCopy {
  pub heading:          String,
  pub placeholder:      String,
  pub add_button_label: String,
  pub new_task_label:   String,
  pub empty_title:      String,
  pub empty_hint:       String
}

impl PageConfig {
  #[tracing::instrument(skip_all)]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let config: PageConfig =
      toml::from_str(text).context(
        "failed to parse page config"
      )?;
    config.validate()?;

    if config.benefits.items.is_empty() {
      warn!(
        "page config has no benefits; \
         the grid will be hidden"
      );
    }
    debug!(
      benefits = config.benefits.items.len(),
      "loaded page config"
    );
    Ok(config)
  }

  pub fn validate(
    &self
  ) -> anyhow::Result<()> {
    if self.hero.headline.trim().is_empty()
    {
      return Err(anyhow!(
        "hero.headline cannot be empty"
      ));
    }

    for (index, item) in
      self.benefits.items.iter().enumerate()
    {
      if item.title.trim().is_empty() {
        return Err(anyhow!(
          "benefits.items[{index}] has an \
           empty title"
        ));
      }
    }

    Ok(())
  }
}

impl Default for HeroCopy {
  fn default() -> Self {
    Self {
      headline:  "Organize Your".to_string(),
      highlight: "Life Today".to_string(),
      tagline:   "Transform chaos into \
                  clarity with a simple, \
                  intuitive task list. No \
                  signup required, just \
                  pure productivity."
        .to_string(),
      cta_label: "Start Organizing Now"
        .to_string()
    }
  }
}

impl Default for BenefitsCopy {
  fn default() -> Self {
    Self {
      heading:    "Why Lists Change \
                   Everything"
        .to_string(),
      subheading: "Benefits that \
                   successful people have \
                   known for centuries"
        .to_string(),
      items:      vec![
        Benefit::new(
          "target",
          "Crystal Clear Focus",
          "Turn overwhelming thoughts \
           into actionable tasks and see \
           what needs your attention \
           right now."
        ),
        Benefit::new(
          "zap",
          "Boost Productivity",
          "Writing tasks down makes them \
           easier to finish. Enjoy \
           checking things off."
        ),
        Benefit::new(
          "star",
          "Reduce Mental Load",
          "Stop trying to remember \
           everything and let your mind \
           focus on doing."
        ),
        Benefit::new(
          "calendar",
          "Better Time Management",
          "See your workload at a glance \
           and decide how to spend your \
           time."
        ),
      ]
    }
  }
}

impl Default for ListCopy {
  fn default() -> Self {
    Self {
      heading:          "Your Tasks"
        .to_string(),
      placeholder:      "What needs to be \
                         done?"
        .to_string(),
      add_button_label: "Add".to_string(),
      new_task_label:   "Add New Task"
        .to_string(),
      empty_title:      "No tasks yet"
        .to_string(),
      empty_hint:       "Add your first \
                         task to get \
                         started!"
        .to_string()
    }
  }
}

impl Benefit {
  pub fn new(
    icon: &str,
    title: &str,
    description: &str
  ) -> Self {
    Self {
      icon:        icon.to_string(),
      title:       title.to_string(),
      description: description.to_string()
    }
  }
}
