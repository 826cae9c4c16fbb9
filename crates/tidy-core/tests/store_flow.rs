use tidy_core::{
  StoreCommand,
  TaskListStore
};

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env()
    )
    .with_test_writer()
    .try_init();
}

fn find_id(
  store: &TaskListStore,
  text: &str
) -> tidy_core::TaskId {
  store
    .tasks()
    .iter()
    .find(|task| task.text == text)
    .map(|task| task.id)
    .expect("task present")
}

#[test]
fn add_toggle_delete_walkthrough() {
  init_tracing();
  let mut store = TaskListStore::new();
  assert_eq!(
    store.derived_counts().as_pair(),
    (0, 0)
  );

  store.apply(StoreCommand::Add(
    "Buy milk".to_string()
  ));
  assert_eq!(store.tasks().len(), 1);
  assert_eq!(store.tasks()[0].text, "Buy milk");
  assert!(!store.tasks()[0].completed);

  store.apply(StoreCommand::Add(
    "Walk dog".to_string()
  ));
  let order: Vec<&str> = store
    .tasks()
    .iter()
    .map(|task| task.text.as_str())
    .collect();
  assert_eq!(order, vec!["Walk dog", "Buy milk"]);

  let milk = find_id(&store, "Buy milk");
  store.apply(StoreCommand::Toggle(milk));
  assert!(
    store
      .task(milk)
      .expect("milk present")
      .completed
  );
  assert_eq!(
    store.derived_counts().as_pair(),
    (1, 2)
  );

  let dog = find_id(&store, "Walk dog");
  store.apply(StoreCommand::Delete(dog));
  assert_eq!(store.tasks().len(), 1);
  assert_eq!(store.tasks()[0].text, "Buy milk");
  assert!(store.tasks()[0].completed);
  assert_eq!(
    store.derived_counts().as_pair(),
    (1, 1)
  );
  assert_eq!(
    store
      .derived_counts()
      .summary_label()
      .as_deref(),
    Some("1 of 1 completed")
  );
}

#[test]
fn edit_survives_adversarial_ordering() {
  init_tracing();
  let mut store = TaskListStore::new();
  store.apply(StoreCommand::Add(
    "target".to_string()
  ));
  store.apply(StoreCommand::Add(
    "bystander".to_string()
  ));
  let target = find_id(&store, "target");
  let before = store.tasks().to_vec();

  store.apply(StoreCommand::StartEdit(target));
  store.apply(StoreCommand::UpdateEditDraft(
    "rewritten".to_string()
  ));
  store.apply(StoreCommand::Delete(target));
  store.apply(StoreCommand::SaveEdit);

  assert_eq!(store.pending_edit(), None);
  assert_eq!(store.tasks(), &before[..1]);
  assert!(store.task(target).is_none());
}

#[test]
fn composer_flow_from_hero_button() {
  init_tracing();
  let mut store = TaskListStore::new();
  store.apply(StoreCommand::OpenComposer);
  store.apply(StoreCommand::SubmitComposer);
  assert!(store.is_empty());
  assert!(store.composer().open);

  store.apply(StoreCommand::UpdateAddDraft(
    "  Call mom  ".to_string()
  ));
  store.apply(StoreCommand::SubmitComposer);
  assert_eq!(store.tasks()[0].text, "Call mom");
  assert!(!store.composer().open);
}
