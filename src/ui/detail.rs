//! Detail view: one plant's reading visualized against its acceptable range.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::data::PlantDetail;
use super::theme::Theme;

/// Detail panel for a single plant, or a not-found state
pub struct DetailView<'a> {
    plant: Option<&'a PlantDetail>,
    theme: &'a Theme,
}

impl<'a> DetailView<'a> {
    pub fn new(plant: Option<&'a PlantDetail>, theme: &'a Theme) -> Self {
        DetailView { plant, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Plant Details ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(plant) = self.plant else {
            let message = Paragraph::new("Plant not found")
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            frame.render_widget(message, inner);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Name
                Constraint::Length(1), // Photo URL
                Constraint::Length(2), // Moisture level
                Constraint::Length(3), // Range bar
                Constraint::Length(1), // Range labels
                Constraint::Length(2), // Status
                Constraint::Min(1),    // Summary
            ])
            .split(inner);

        let name = Paragraph::new(Span::styled(
            plant.name,
            self.theme.title_style(),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(name, chunks[0]);

        let photo = Paragraph::new(Span::styled(
            plant.image,
            Style::default().add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(photo, chunks[1]);

        let level = Paragraph::new(format!("Moisture Level: {:.0}%", plant.moisture))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(level, chunks[2]);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(self.theme.health_style(plant.in_range()))
            .ratio(plant.fill_ratio())
            .label(format!("{:.0}%", plant.moisture));
        frame.render_widget(gauge, chunks[3]);

        let labels = Line::from(vec![
            Span::raw(format!("Min: {}%", plant.min)),
            Span::raw("   "),
            Span::raw(format!("Max: {}%", plant.max)),
        ]);
        let labels = Paragraph::new(labels).alignment(Alignment::Center);
        frame.render_widget(labels, chunks[4]);

        let status = Paragraph::new(Span::styled(
            plant.status_message(),
            self.theme.health_style(plant.in_range()),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(status, chunks[5]);

        let summary = Paragraph::new(format!(
            "Current: {:.0}%   Ideal Range: {}-{}%",
            plant.moisture, plant.min, plant.max
        ))
        .alignment(Alignment::Center);
        frame.render_widget(summary, chunks[6]);
    }
}
