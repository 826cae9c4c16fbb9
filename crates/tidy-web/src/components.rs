mod benefit_card;
mod benefits_section;
mod empty_state;
mod hero_section;
mod progress_summary;
mod task_composer;
mod task_edit_field;
mod task_list;
mod task_list_row;

pub use benefit_card::BenefitCard;
pub use benefits_section::BenefitsSection;
pub use empty_state::EmptyState;
pub use hero_section::HeroSection;
pub use progress_summary::ProgressSummary;
pub use task_composer::TaskComposer;
pub use task_edit_field::TaskEditField;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
