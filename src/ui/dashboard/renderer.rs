//! Dashboard main renderer

use super::components::{footer, header, logs, sections};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(3),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    sections::render_section(f, main_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::AggregateMetrics;
    use crate::navigation::Section;
    use crate::slots::DisplaySlots;
    use crate::ui::UIConfig;
    use crate::ui::dashboard::state::LoadingState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn rendered_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn analytics_section_shows_the_cards() {
        let mut state = DashboardState::new(
            Instant::now(),
            Section::Graphic,
            UIConfig::new(true, "data.xlsx".to_string()),
        );
        state.update(
            DisplaySlots::from_metrics(&AggregateMetrics {
                techniques: 2,
                states: 1,
                municipalities: 2,
            }),
            Section::Graphic,
        );

        let text = rendered_text(&state);
        assert!(text.contains("2 técnicas"));
        assert!(text.contains("1 estados"));
        assert!(text.contains("2 municipios"));
        assert!(text.contains("Mapa coroplético"));
    }

    #[test]
    fn other_sections_hide_the_cards() {
        let mut state = DashboardState::new(
            Instant::now(),
            Section::Maps,
            UIConfig::new(false, "data.xlsx".to_string()),
        );
        state.update(DisplaySlots::failed(), Section::Info);

        let text = rendered_text(&state);
        assert!(!text.contains("Error"));
        assert!(text.contains("Press [2] to open the dashboard."));
    }

    #[test]
    fn footer_shows_how_long_the_load_has_been_running() {
        let mut state = DashboardState::new(
            Instant::now(),
            Section::Graphic,
            UIConfig::new(false, "data.xlsx".to_string()),
        );
        assert!(!rendered_text(&state).contains("Loading:"));

        let started_at = Instant::now()
            .checked_sub(std::time::Duration::from_secs(65))
            .unwrap();
        state.set_loading_state(LoadingState::Active { started_at });
        assert!(rendered_text(&state).contains("Loading: 1m 5s"));
    }
}
