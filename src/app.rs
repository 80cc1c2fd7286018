use super::*;

pub(crate) struct App {
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
  tick_task: Option<JoinHandle<()>>,
}

impl App {
  fn cancel_tick_task(&mut self) {
    if let Some(task) = self.tick_task.take() {
      task.abort();
    }
  }

  fn card_widget(card: &Card, available_width: u16) -> Paragraph {
    let inner_width = usize::from(available_width.saturating_sub(2)).max(1);

    let mut lines = Vec::new();

    if let Some(category) = &card.category {
      lines.push(Line::from(Span::styled(
        category.clone(),
        Style::default().fg(Color::DarkGray),
      )));

      lines.push(Line::from(Span::raw("")));
    }

    for row in wrap_text(&card.blurb, inner_width) {
      lines.push(Line::from(Span::styled(
        row,
        Style::default().fg(Color::Gray),
      )));
    }

    if let Some(price) = card.price_label() {
      lines.push(Line::from(Span::raw("")));

      lines.push(Line::from(Span::styled(
        price,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      )));
    }

    Paragraph::new(lines)
      .block(
        Block::default()
          .title(Span::styled(
            truncate(&card.title, inner_width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
          ))
          .borders(Borders::ALL)
          .border_style(Style::default().fg(Color::DarkGray)),
      )
      .wrap(Wrap { trim: true })
  }

  fn dots_line(deck: &Deck) -> Line<'static> {
    fn arrow(symbol: &'static str, active: bool) -> Span<'static> {
      let color = if active { Color::White } else { Color::DarkGray };

      Span::styled(symbol, Style::default().fg(color))
    }

    let window_index = deck.showcase.window_index();

    let mut spans = vec![arrow("‹ ", deck.showcase.can_retreat())];

    for index in 0..deck.showcase.window_count() {
      if index > 0 {
        spans.push(Span::raw(" "));
      }

      if index == window_index {
        spans.push(Span::styled(
          "●",
          Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
      } else {
        spans.push(Span::styled("○", Style::default().fg(Color::DarkGray)));
      }
    }

    spans.push(arrow(" ›", deck.showcase.can_advance()));

    if deck.autoplay.is_running() {
      spans.push(Span::styled("  ▸", Style::default().fg(Color::Cyan)));
    } else if deck.autoplay.is_enabled() {
      spans.push(Span::styled("  ⏸", Style::default().fg(Color::DarkGray)));
    }

    Line::from(spans)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let Some(deck) = self.state.active_deck() else {
      return;
    };

    let categories = deck.showcase.categories();
    let chips_height = if categories.is_empty() { 0 } else { 2 };

    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Length(chips_height),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let deck_titles: Vec<Line> = self
      .state
      .decks()
      .iter()
      .map(|deck| Line::from(deck.label.to_uppercase()))
      .collect();

    let deck_tabs = Tabs::new(deck_titles)
      .select(self.state.active_deck_index())
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(deck_tabs, layout[0]);

    if !categories.is_empty() {
      let selected = match deck.showcase.category() {
        None => 0,
        Some(current) => {
          categories
            .iter()
            .position(|category| category == current)
            .map_or(0, |position| position + 1)
        }
      };

      let mut chip_titles = vec![Line::from("all")];

      chip_titles
        .extend(categories.iter().map(|category| Line::from(category.clone())));

      let chips = Tabs::new(chip_titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
          Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw(" "));

      frame.render_widget(chips, layout[1]);
    }

    let cards = deck.showcase.visible_cards();

    if deck.showcase.is_empty() {
      let empty = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::raw("Nothing in this category."),
      ]))
      .style(Style::default().fg(Color::DarkGray));

      frame.render_widget(empty, layout[2]);
    } else {
      let count = u32::try_from(cards.len()).unwrap_or(1).max(1);

      let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); cards.len()])
        .split(layout[2]);

      for (card, column) in cards.iter().zip(columns.iter()) {
        frame.render_widget(Self::card_widget(card, column.width), *column);
      }

      let dots = Paragraph::new(Self::dots_line(deck))
        .alignment(Alignment::Center);

      frame.render_widget(dots, layout[3]);
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[4]);

    if let Mode::Detail(view) = self.state.mode() {
      view.draw(frame);
    }

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::CancelTick => self.cancel_tick_task(),
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          info!(url = url.as_str(), "opened in browser");

          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
      Effect::ScheduleTick {
        deck_index,
        generation,
        interval,
      } => {
        self.cancel_tick_task();

        let sender = self.event_tx.clone();

        self.tick_task = Some(self.handle.spawn(async move {
          sleep(interval).await;

          let _ = sender.send(Event::AutoplayTick {
            deck_index,
            generation,
          });
        }));
      }
    }
  }

  pub(crate) fn new(state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
      tick_task: None,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_timers();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }

    for effect in self.state.take_pending_effects() {
      self.execute_effect(effect);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    let size = terminal.size()?;

    self.state.apply_viewport_width(size.width);

    for effect in self.state.startup_effects() {
      self.execute_effect(effect);
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let command = match crossterm_event::read()? {
        CrosstermEvent::FocusGained => Command::ResumeAutoplay,
        CrosstermEvent::FocusLost => Command::SuspendAutoplay,
        CrosstermEvent::Resize(width, _) => {
          self.state.note_resize(width);
          self.process_pending_events();
          continue;
        }
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
          if self.state.help_is_visible() {
            HelpView::handle_key(key)
          } else {
            self.state.mode().handle_key(key)
          }
        }
        _ => {
          self.process_pending_events();
          continue;
        }
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }

          self.process_pending_events();
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
          self.process_pending_events();
        }
      }
    }

    self.cancel_tick_task();

    Ok(())
  }
}
