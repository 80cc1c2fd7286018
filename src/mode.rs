use super::*;

pub(crate) enum Mode {
  Browse,
  Detail(DetailView),
}

impl Mode {
  pub(crate) fn handle_key(&self, key: KeyEvent) -> Command {
    match self {
      Mode::Browse => match key.code {
        KeyCode::Char(_)
          if key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::ALT)
            || key.modifiers.contains(KeyModifiers::SUPER) =>
        {
          Command::None
        }
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Left | KeyCode::Char('h') => Command::Retreat,
        KeyCode::Right | KeyCode::Char('l') => Command::Advance,
        KeyCode::Tab | KeyCode::Char(']') => Command::SwitchDeckRight,
        KeyCode::BackTab | KeyCode::Char('[') => Command::SwitchDeckLeft,
        KeyCode::Char('c') => Command::CycleCategory,
        KeyCode::Char('C') => Command::CycleCategoryBack,
        KeyCode::Char('a' | 'A') => Command::ToggleAutoplay,
        KeyCode::Char('o' | 'O') => Command::OpenCurrentInBrowser,
        KeyCode::Home => Command::JumpToStart,
        KeyCode::End => Command::JumpToEnd,
        KeyCode::Enter => Command::OpenDetail,
        KeyCode::Char(digit @ '1'..='9') => {
          let window = digit as usize - '1' as usize;

          Command::GoToWindow(window)
        }
        _ => Command::None,
      },
      Mode::Detail(_) => match key.code {
        KeyCode::Char('q' | 'Q') => Command::Quit,
        KeyCode::Esc | KeyCode::Enter => Command::CloseDetail,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('o' | 'O') => Command::OpenCurrentInBrowser,
        _ => Command::None,
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn browse_maps_arrows_to_navigation() {
    let mode = Mode::Browse;

    assert_eq!(mode.handle_key(press(KeyCode::Right)), Command::Advance);
    assert_eq!(mode.handle_key(press(KeyCode::Left)), Command::Retreat);
    assert_eq!(mode.handle_key(press(KeyCode::Char('l'))), Command::Advance);
    assert_eq!(mode.handle_key(press(KeyCode::Char('h'))), Command::Retreat);
  }

  #[test]
  fn browse_maps_digits_to_zero_based_windows() {
    let mode = Mode::Browse;

    assert_eq!(
      mode.handle_key(press(KeyCode::Char('1'))),
      Command::GoToWindow(0)
    );
    assert_eq!(
      mode.handle_key(press(KeyCode::Char('9'))),
      Command::GoToWindow(8)
    );
  }

  #[test]
  fn detail_closes_on_escape_and_enter() {
    let card = Card {
      blurb: "Blurb".to_string(),
      category: None,
      id: "p1".to_string(),
      price: None,
      title: "Title".to_string(),
      url: None,
    };

    let mode = Mode::Detail(DetailView::new(card));

    assert_eq!(mode.handle_key(press(KeyCode::Esc)), Command::CloseDetail);
    assert_eq!(mode.handle_key(press(KeyCode::Enter)), Command::CloseDetail);
    assert_eq!(mode.handle_key(press(KeyCode::Char('x'))), Command::None);
  }
}
