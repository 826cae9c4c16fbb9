/// What a keystroke inside one of the
/// inline inputs means.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum KeyAction {
  Submit,
  Cancel
}

pub fn key_action(
  key: &str
) -> Option<KeyAction> {
  match key {
    | "Enter" => Some(KeyAction::Submit),
    | "Escape" | "Esc" => {
      Some(KeyAction::Cancel)
    }
    | _ => None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn maps_enter_and_escape() {
    assert_eq!(
      key_action("Enter"),
      Some(KeyAction::Submit)
    );
    assert_eq!(
      key_action("Escape"),
      Some(KeyAction::Cancel)
    );
    assert_eq!(
      key_action("Esc"),
      Some(KeyAction::Cancel)
    );
    assert_eq!(key_action("a"), None);
    assert_eq!(key_action("Tab"), None);
  }
}
