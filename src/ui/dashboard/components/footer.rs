//! Dashboard footer component
//!
//! Renders key bindings and load status

use super::super::state::{DashboardState, LoadingState};
use super::super::utils::{format_compact_timestamp, format_elapsed};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let keys = Line::from(Span::styled(
        "[1-4] Section | [←/→] Switch | [R] Reload | [Q] Quit",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    let last_update = match state.last_update_timestamp() {
        Some(timestamp) => format_compact_timestamp(timestamp),
        None => "Never".to_string(),
    };
    let mut spans = vec![
        Span::styled("Source: ", Style::default().fg(Color::Gray)),
        Span::styled(state.source.clone(), Style::default().fg(Color::LightBlue)),
        Span::styled("  Updated: ", Style::default().fg(Color::Gray)),
        Span::styled(last_update, Style::default().fg(Color::Yellow)),
    ];
    if let LoadingState::Active { started_at } = state.loading_state() {
        spans.push(Span::styled("  Loading: ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format_elapsed(started_at.elapsed().as_secs()),
            Style::default().fg(Color::Magenta),
        ));
    }
    spans.extend([
        Span::styled("  Uptime: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_elapsed(state.start_time.elapsed().as_secs()),
            Style::default().fg(Color::LightGreen),
        ),
    ]);
    let status = Line::from(spans);

    let footer = Paragraph::new(vec![keys, status])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
