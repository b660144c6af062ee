//! Settings view: plant list on the left, field editor on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::settings::{EditField, SettingsState};
use super::theme::Theme;

/// Settings form rendering the edit state
pub struct SettingsForm<'a> {
    state: &'a SettingsState,
    theme: &'a Theme,
}

impl<'a> SettingsForm<'a> {
    pub fn new(state: &'a SettingsState, theme: &'a Theme) -> Self {
        SettingsForm { state, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28), // Plant list
                Constraint::Min(40),    // Editor
            ])
            .split(area);

        self.render_plant_list(frame, chunks[0]);
        self.render_editor(frame, chunks[1]);
    }

    fn render_plant_list(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .state
            .plants()
            .iter()
            .map(|p| ListItem::new(format!("{} ({}-{}%)", p.display_name(), p.min, p.max)))
            .collect();

        let block = Block::default()
            .title(" Edit Plant Settings ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style());

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.highlight_style())
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.state.selected()));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(plant) = self.state.plants().get(self.state.selected()) else {
            let message = Paragraph::new("No plants to edit")
                .style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(message, inner);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Name
                Constraint::Length(2), // Image
                Constraint::Length(1), // Min label
                Constraint::Length(3), // Min gauge
                Constraint::Length(1), // Max label
                Constraint::Length(3), // Max gauge
                Constraint::Min(1),    // Save hint
            ])
            .split(inner);

        let focused = self.state.field();

        let name = Line::from(vec![
            self.field_label("Plant Name: ", focused == EditField::Name),
            Span::raw(plant.name.clone()),
            cursor_span(focused == EditField::Name),
        ]);
        frame.render_widget(Paragraph::new(name), chunks[0]);

        let image = Line::from(vec![
            self.field_label("Image URI: ", focused == EditField::Image),
            Span::raw(plant.image_uri.clone().unwrap_or_default()),
            cursor_span(focused == EditField::Image),
        ]);
        frame.render_widget(Paragraph::new(image), chunks[1]);

        let min_label = Line::from(self.field_label(
            &format!("Min Moisture: {}%", plant.min),
            focused == EditField::Min,
        ));
        frame.render_widget(Paragraph::new(min_label), chunks[2]);
        self.render_slider(frame, chunks[3], plant.min, focused == EditField::Min);

        let max_label = Line::from(self.field_label(
            &format!("Max Moisture: {}%", plant.max),
            focused == EditField::Max,
        ));
        frame.render_widget(Paragraph::new(max_label), chunks[4]);
        self.render_slider(frame, chunks[5], plant.max, focused == EditField::Max);

        let hint = Paragraph::new("Tab: next field  \u{2190}/\u{2192}: adjust  Ctrl+S: save all  Esc: back")
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(hint, chunks[6]);
    }

    fn field_label(&self, text: &str, focused: bool) -> Span<'static> {
        let style = if focused {
            self.theme.focused_border_style()
        } else {
            self.theme.normal_style()
        };
        Span::styled(text.to_string(), style)
    }

    /// Render a threshold value as a 0-100 slider bar
    fn render_slider(&self, frame: &mut Frame, area: Rect, value: u8, focused: bool) {
        let border = if focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .gauge_style(self.theme.normal_style())
            .percent(u16::from(value.min(100)))
            .label(format!("{value}%"));
        frame.render_widget(gauge, area);
    }
}

fn cursor_span(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK))
    } else {
        Span::raw("")
    }
}
