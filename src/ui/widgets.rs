//! UI widgets for the plant listing and the shared status bar.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::data::Plant;
use super::theme::Theme;

/// Plant listing widget, colored by health status
pub struct PlantList<'a> {
    plants: &'a [Plant],
    selected: usize,
    theme: &'a Theme,
}

impl<'a> PlantList<'a> {
    pub fn new(plants: &'a [Plant], selected: usize, theme: &'a Theme) -> Self {
        PlantList {
            plants,
            selected,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" My Plants ")
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style());

        if self.plants.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let message = Paragraph::new("No plant data")
                .style(self.theme.normal_style())
                .alignment(Alignment::Center);
            frame.render_widget(message, inner);
            return;
        }

        let items: Vec<ListItem> = self
            .plants
            .iter()
            .map(|p| {
                let style = self.theme.health_style(p.is_healthy());
                ListItem::new(Line::from(vec![
                    Span::styled(p.name.clone(), style),
                    Span::raw(format!("  Moisture: {:.0}%", p.moisture)),
                    Span::styled(
                        format!("  (range {}-{}%)", p.min, p.max),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.highlight_style())
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Loading placeholder shown while the initial fetch is in flight
pub struct LoadingView<'a> {
    theme: &'a Theme,
}

impl<'a> LoadingView<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        LoadingView { theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new("Loading plant data...")
            .style(self.theme.normal_style())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" My Plants ")
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style())
                    .title_style(self.theme.title_style()),
            );
        frame.render_widget(paragraph, area);
    }
}

/// Status bar widget
pub struct StatusBar<'a> {
    hint: &'a str,
    fetched_at: Option<DateTime<Utc>>,
    message: Option<&'a str>,
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        hint: &'a str,
        fetched_at: Option<DateTime<Utc>>,
        message: Option<&'a str>,
        error: Option<&'a str>,
        theme: &'a Theme,
    ) -> Self {
        StatusBar {
            hint,
            fetched_at,
            message,
            error,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(e) = self.error {
            Line::from(Span::styled(
                format!("Error: {e}"),
                self.theme.health_style(false),
            ))
        } else if let Some(m) = self.message {
            Line::from(Span::styled(
                m.to_string(),
                self.theme.health_style(true),
            ))
        } else {
            let mut text = format!("plantwatch | {}", self.hint);
            if let Some(at) = self.fetched_at {
                text.push_str(&format!(" | updated {}", at.format("%H:%M:%S")));
            }
            Line::from(text)
        };

        let paragraph = Paragraph::new(line)
            .style(self.theme.normal_style())
            .block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
