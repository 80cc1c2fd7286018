use super::*;

pub(crate) struct State {
  active_deck: usize,
  breakpoints: Breakpoints,
  decks: Vec<Deck>,
  help: HelpView,
  message: String,
  mode: Mode,
  pending_effects: Vec<Effect>,
  pending_resize: Option<ResizeDebounce>,
  transient_message: Option<TransientMessage>,
}

impl State {
  fn activate_deck(&mut self) {
    let resumed = self
      .decks
      .get_mut(self.active_deck)
      .is_some_and(|deck| deck.autoplay.resume());

    if resumed {
      self.schedule_tick();
    }

    if let Some(deck) = self.decks.get(self.active_deck) {
      debug!(deck = deck.label.as_str(), "deck activated");
    }
  }

  pub(crate) fn active_deck(&self) -> Option<&Deck> {
    self.decks.get(self.active_deck)
  }

  pub(crate) fn active_deck_index(&self) -> usize {
    self.active_deck
  }

  fn advance_slide(&mut self) {
    let Some(deck) = self.decks.get_mut(self.active_deck) else {
      return;
    };

    if deck.showcase.advance() {
      debug!(
        deck = deck.label.as_str(),
        index = deck.showcase.window_index(),
        "window advanced"
      );
    }
  }

  fn apply_pending_resize(&mut self) {
    if let Some(pending) = self.pending_resize
      && pending.is_settled()
    {
      self.pending_resize = None;
      self.apply_viewport_width(pending.width());
    }
  }

  /// Recomputes the card count for every deck. A shrunken range clamps
  /// each deck's window index; it never resets it.
  pub(crate) fn apply_viewport_width(&mut self, width: u16) {
    let count = self.breakpoints.visible_count(width);

    for deck in &mut self.decks {
      deck.showcase.set_visible_count(count);
    }

    debug!(width, count, "viewport width applied");
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn close_detail(&mut self) {
    self.mode = Mode::Browse;

    if !self.help.is_visible() {
      self.message = BROWSE_STATUS.into();
    }
  }

  fn cycle_category(&mut self, backward: bool) {
    let Some(deck) = self.decks.get_mut(self.active_deck) else {
      return;
    };

    if deck.showcase.categories().is_empty() {
      if !self.help.is_visible() {
        self.set_transient_message("No filters for this deck".to_string());
      }

      return;
    }

    deck.showcase.cycle_category(backward);

    let selected = deck.showcase.category().unwrap_or("all").to_string();
    let count = deck.showcase.filtered_len();

    debug!(
      deck = deck.label.as_str(),
      filter = selected.as_str(),
      count,
      "filter changed"
    );

    if !self.help.is_visible() {
      let noun = if count == 1 { "card" } else { "cards" };

      self
        .set_transient_message(format!("Filter: {selected} ({count} {noun})"));
    }
  }

  fn deactivate_deck(&mut self) {
    if let Some(deck) = self.decks.get_mut(self.active_deck) {
      deck.autoplay.suspend();
    }

    self.pending_effects.push(Effect::CancelTick);
  }

  pub(crate) fn decks(&self) -> &[Deck] {
    &self.decks
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::Advance => self.advance_slide(),
      Command::CloseDetail => self.close_detail(),
      Command::CycleCategory => self.cycle_category(false),
      Command::CycleCategoryBack => self.cycle_category(true),
      Command::GoToWindow(index) => self.go_to_window(index),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::JumpToEnd => self.jump_to_end(),
      Command::JumpToStart => self.go_to_window(0),
      Command::None => {}
      Command::OpenCurrentInBrowser => self.open_current_in_browser(),
      Command::OpenDetail => self.open_detail(),
      Command::ResumeAutoplay => self.resume_autoplay(),
      Command::Retreat => self.retreat_slide(),
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::SuspendAutoplay => self.suspend_autoplay(),
      Command::SwitchDeckLeft => self.switch_deck_left(),
      Command::SwitchDeckRight => self.switch_deck_right(),
      Command::ToggleAutoplay => self.toggle_autoplay(),
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  fn go_to_window(&mut self, index: usize) {
    let Some(deck) = self.decks.get_mut(self.active_deck) else {
      return;
    };

    match deck.showcase.go_to(index) {
      Ok(()) => {
        debug!(deck = deck.label.as_str(), index, "window selected");
      }
      Err(error) => {
        debug!(deck = deck.label.as_str(), %error, "jump rejected");
      }
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::AutoplayTick {
        deck_index,
        generation,
      } => {
        if deck_index != self.active_deck {
          debug!(deck_index, "tick for inactive deck ignored");
          return;
        }

        let matches = self
          .decks
          .get(deck_index)
          .is_some_and(|deck| deck.autoplay.matches(generation));

        if !matches {
          debug!(deck_index, generation, "stale autoplay tick ignored");
          return;
        }

        self.advance_slide();
        self.schedule_tick();
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn jump_to_end(&mut self) {
    let target = self
      .decks
      .get(self.active_deck)
      .map_or(0, |deck| deck.showcase.window_count().saturating_sub(1));

    self.go_to_window(target);
  }

  fn leading_card(&self) -> Option<&Card> {
    self
      .decks
      .get(self.active_deck)
      .and_then(|deck| deck.showcase.visible_cards().into_iter().next())
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn new(decks: Vec<Deck>, breakpoints: Breakpoints) -> Self {
    Self {
      active_deck: 0,
      breakpoints,
      decks,
      help: HelpView::new(),
      message: BROWSE_STATUS.into(),
      mode: Mode::Browse,
      pending_effects: Vec::new(),
      pending_resize: None,
      transient_message: None,
    }
  }

  pub(crate) fn note_resize(&mut self, width: u16) {
    self.pending_resize = Some(ResizeDebounce::new(width));
  }

  fn open_current_in_browser(&mut self) {
    let url = match &self.mode {
      Mode::Browse => self.leading_card().and_then(|card| card.url.clone()),
      Mode::Detail(view) => view.card().url.clone(),
    };

    if let Some(url) = url {
      self.pending_effects.push(Effect::OpenUrl { url });
    } else if !self.help.is_visible() {
      self.set_transient_message("No link for this card".to_string());
    }
  }

  fn open_detail(&mut self) {
    let Some(card) = self.leading_card().cloned() else {
      return;
    };

    self.mode = Mode::Detail(DetailView::new(card));

    if !self.help.is_visible() {
      self.message = DETAIL_STATUS.into();
    }
  }

  fn resume_autoplay(&mut self) {
    let resumed = self
      .decks
      .get_mut(self.active_deck)
      .is_some_and(|deck| deck.autoplay.resume());

    if resumed {
      debug!("autoplay resumed");
      self.schedule_tick();
    }
  }

  fn retreat_slide(&mut self) {
    let Some(deck) = self.decks.get_mut(self.active_deck) else {
      return;
    };

    if deck.showcase.retreat() {
      debug!(
        deck = deck.label.as_str(),
        index = deck.showcase.window_index(),
        "window retreated"
      );
    }
  }

  fn schedule_tick(&mut self) {
    let Some(deck) = self.decks.get(self.active_deck) else {
      return;
    };

    if !deck.autoplay.is_running() {
      return;
    }

    let (generation, interval) =
      (deck.autoplay.generation(), deck.autoplay.interval());

    self.pending_effects.push(Effect::ScheduleTick {
      deck_index: self.active_deck,
      generation,
      interval,
    });
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  pub(crate) fn startup_effects(&mut self) -> Vec<Effect> {
    self.schedule_tick();

    std::mem::take(&mut self.pending_effects)
  }

  fn suspend_autoplay(&mut self) {
    if let Some(deck) = self.decks.get_mut(self.active_deck) {
      deck.autoplay.suspend();
    }

    debug!("autoplay suspended");

    self.pending_effects.push(Effect::CancelTick);
  }

  fn switch_deck_left(&mut self) {
    let deck_count = self.decks.len();

    if deck_count != 0 {
      self.deactivate_deck();
      self.active_deck = (self.active_deck + deck_count - 1) % deck_count;
      self.activate_deck();
    }
  }

  fn switch_deck_right(&mut self) {
    let deck_count = self.decks.len();

    if deck_count != 0 {
      self.deactivate_deck();
      self.active_deck = (self.active_deck + 1) % deck_count;
      self.activate_deck();
    }
  }

  pub(crate) fn take_pending_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  fn toggle_autoplay(&mut self) {
    let Some(deck) = self.decks.get_mut(self.active_deck) else {
      return;
    };

    if deck.autoplay.toggle() {
      self.schedule_tick();

      if !self.help.is_visible() {
        self.set_transient_message("Autoplay on".to_string());
      }
    } else {
      self.pending_effects.push(Effect::CancelTick);

      if !self.help.is_visible() {
        self.set_transient_message("Autoplay off".to_string());
      }
    }
  }

  pub(crate) fn update_timers(&mut self) {
    self.apply_pending_resize();
    self.update_transient_message();
  }

  fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}
