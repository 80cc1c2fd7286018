use super::*;

/// Full-card popup, the keyboard stand-in for the gallery lightbox.
pub(crate) struct DetailView {
  card: Card,
}

impl DetailView {
  pub(crate) fn card(&self) -> &Card {
    &self.card
  }

  fn detail_area(area: Rect) -> Rect {
    let width = (u32::from(area.width) * 7 / 10).clamp(20, 70);
    let height = (u32::from(area.height) * 6 / 10).max(7);

    let width = u16::try_from(width).unwrap_or(u16::MAX).min(area.width);
    let height = u16::try_from(height).unwrap_or(u16::MAX).min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let area = Self::detail_area(frame.area());

    frame.render_widget(Clear, area);

    let inner_width = usize::from(area.width.saturating_sub(4)).max(1);

    let mut lines = Vec::new();

    if let Some(category) = &self.card.category {
      lines.push(Line::from(Span::styled(
        category.clone(),
        Style::default().fg(Color::DarkGray),
      )));

      lines.push(Line::from(Span::raw("")));
    }

    for row in wrap_text(&self.card.blurb, inner_width) {
      lines.push(Line::from(Span::styled(
        row,
        Style::default().fg(Color::White),
      )));
    }

    if let Some(price) = self.card.price_label() {
      lines.push(Line::from(Span::raw("")));

      lines.push(Line::from(Span::styled(
        price,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      )));
    }

    if let Some(url) = &self.card.url {
      lines.push(Line::from(Span::raw("")));

      lines.push(Line::from(Span::styled(
        url.clone(),
        Style::default().fg(Color::DarkGray),
      )));
    }

    let detail = Paragraph::new(lines)
      .block(
        Block::default()
          .title(self.card.title.clone())
          .borders(Borders::ALL),
      )
      .wrap(Wrap { trim: true });

    frame.render_widget(detail, area);
  }

  pub(crate) fn new(card: Card) -> Self {
    Self { card }
  }
}
