//! Section body component
//!
//! Renders the body of whichever section is active

use super::super::state::DashboardState;
use super::{cards, charts};
use crate::navigation::Section;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    match state.active_section {
        Section::Graphic => render_analytics(f, area, state),
        other => render_static_section(f, area, other),
    }
}

fn render_analytics(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

    let heading = Paragraph::new("Dashboard general").style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(heading, chunks[0]);
    cards::render_cards(f, chunks[1], state);
    charts::render_chart_grid(f, chunks[2]);
}

fn static_text(section: Section) -> &'static str {
    match section {
        Section::Maps => "Mapa de las técnicas registradas por estado y municipio.",
        Section::Info => "Información sobre el Atlas Nacional de Técnicas y su metodología.",
        Section::Submit => "Envío de nuevas técnicas para su registro en el Atlas.",
        Section::Graphic => "",
    }
}

fn render_static_section(f: &mut Frame, area: ratatui::layout::Rect, section: Section) {
    let lines = vec![
        Line::from(Span::styled(
            static_text(section),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [2] to open the dashboard.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(section.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::uniform(1)),
        );
    f.render_widget(panel, area);
}
