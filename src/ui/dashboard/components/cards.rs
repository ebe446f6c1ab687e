//! Dashboard cards component
//!
//! Renders the three metric cards

use super::super::state::{DashboardState, LoadingState};
use crate::slots::{SlotId, SlotValue};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn card_color(slot: SlotId) -> Color {
    match slot {
        SlotId::Techniques => Color::Rgb(230, 126, 34),
        SlotId::States => Color::Rgb(231, 76, 60),
        SlotId::Municipalities => Color::Rgb(52, 152, 219),
    }
}

fn card_title(slot: SlotId) -> &'static str {
    match slot {
        SlotId::Techniques => "Técnicas",
        SlotId::States => "Estados",
        SlotId::Municipalities => "Municipios",
    }
}

/// Render the technique, state and municipality cards side by side.
pub fn render_cards(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let spinner = match state.loading_state() {
        LoadingState::Active { .. } => Some(SPINNER[state.tick % SPINNER.len()]),
        LoadingState::Idle => None,
    };

    for (slot, chunk) in SlotId::ALL.into_iter().zip(card_chunks.iter()) {
        let color = card_color(slot);
        let value_style = match state.slots.get(slot) {
            SlotValue::Metric(_) => Style::default().fg(color).add_modifier(Modifier::BOLD),
            SlotValue::Loading => Style::default().fg(Color::Gray),
            SlotValue::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        let title = match spinner {
            Some(frame) => format!("{} {}", card_title(slot), frame),
            None => card_title(slot).to_string(),
        };

        let card = Paragraph::new(state.slots.text(slot))
            .alignment(Alignment::Center)
            .style(value_style)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(card, *chunk);
    }
}
