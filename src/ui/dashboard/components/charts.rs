//! Dashboard chart grid component
//!
//! Renders the chart blocks below the cards. Charts are not drawn yet; each
//! block shows what it is reserved for.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

const CHART_BLOCKS: [(&str, &str); 9] = [
    ("Técnicas por estado", "Espacio para gráfica"),
    ("Mapa coroplético", "Espacio para mapa"),
    ("Técnicas por municipio", "Espacio para gráfica"),
    ("Manufactura", "Gráfica de pie"),
    ("Conocimientos", "Gráfica de términos comunes"),
    ("Materiales comunes", "Gráfica de términos comunes"),
    ("Aprendizaje", "Gráfica de barras"),
    ("Enseñanza", "Gráfica de barras"),
    ("Tipo de teñido", "Gráfica de pie"),
];

/// Render the 3x3 grid of chart placeholders.
pub fn render_chart_grid(f: &mut Frame, area: ratatui::layout::Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row_area);

        for (col_idx, cell) in cells.iter().enumerate() {
            let (title, placeholder) = CHART_BLOCKS[row_idx * 3 + col_idx];
            let block = Paragraph::new(placeholder)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Gray)),
                );
            f.render_widget(block, *cell);
        }
    }
}
