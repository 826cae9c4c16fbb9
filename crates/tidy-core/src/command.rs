use crate::store::TaskListStore;
use crate::task::TaskId;

/// One user intent against the store. The
/// frontend turns every input event into
/// one of these instead of touching the
/// store directly.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum StoreCommand {
  Add(String),
  SubmitComposer,
  OpenComposer,
  CloseComposer,
  UpdateAddDraft(String),
  Toggle(TaskId),
  Delete(TaskId),
  StartEdit(TaskId),
  UpdateEditDraft(String),
  SaveEdit,
  CancelEdit
}

impl StoreCommand {
  pub fn name(&self) -> &'static str {
    match self {
      | StoreCommand::Add(_) => "add",
      | StoreCommand::SubmitComposer => {
        "submit_composer"
      }
      | StoreCommand::OpenComposer => {
        "open_composer"
      }
      | StoreCommand::CloseComposer => {
        "close_composer"
      }
      | StoreCommand::UpdateAddDraft(_) => {
        "update_add_draft"
      }
      | StoreCommand::Toggle(_) => "toggle",
      | StoreCommand::Delete(_) => "delete",
      | StoreCommand::StartEdit(_) => {
        "start_edit"
      }
      | StoreCommand::UpdateEditDraft(_) => {
        "update_edit_draft"
      }
      | StoreCommand::SaveEdit => {
        "save_edit"
      }
      | StoreCommand::CancelEdit => {
        "cancel_edit"
      }
    }
  }
}

impl TaskListStore {
  #[tracing::instrument(
    skip_all,
    fields(command = command.name())
  )]
  pub fn apply(
    &mut self,
    command: StoreCommand
  ) {
    match command {
      | StoreCommand::Add(text) => {
        self.add_task(&text);
      }
      | StoreCommand::SubmitComposer => {
        self.submit_composer();
      }
      | StoreCommand::OpenComposer => {
        self.open_composer()
      }
      | StoreCommand::CloseComposer => {
        self.close_composer()
      }
      | StoreCommand::UpdateAddDraft(
        text
      ) => self.update_add_draft(&text),
      | StoreCommand::Toggle(id) => {
        self.toggle_task(id)
      }
      | StoreCommand::Delete(id) => {
        self.delete_task(id)
      }
      | StoreCommand::StartEdit(id) => {
        self.start_edit(id)
      }
      | StoreCommand::UpdateEditDraft(
        text
      ) => self.update_edit_draft(&text),
      | StoreCommand::SaveEdit => {
        self.save_edit()
      }
      | StoreCommand::CancelEdit => {
        self.cancel_edit()
      }
    }
  }
}
