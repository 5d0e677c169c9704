//! Materials checklist
//!
//! A fixed three-column grid, identical on every step.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::models::MATERIALS;

const COLUMNS: usize = 3;

/// Number of grid rows needed for the checklist
pub fn row_count() -> u16 {
    MATERIALS.len().div_ceil(COLUMNS) as u16
}

/// Render the checklist
pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Materials Needed: ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let rows: Vec<Row> = MATERIALS
        .chunks(COLUMNS)
        .map(|chunk| Row::new(chunk.iter().map(|m| Cell::from(m.to_string()))))
        .collect();

    let table = Table::new(rows, [Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::App;
    use crate::tui::views::test_support::{render_to_buffer, rows};

    fn materials_rows(app: &mut App) -> Vec<String> {
        let all = rows(&render_to_buffer(app, 100, 40));
        let start = all
            .iter()
            .position(|r| r.contains("Materials Needed"))
            .unwrap();
        all[start..start + row_count() as usize + 2].to_vec()
    }

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(), 3);
    }

    #[test]
    fn test_materials_unaffected_by_step() {
        let mut app = App::default();
        let first = materials_rows(&mut app);
        assert!(first.iter().any(|r| r.contains("Calculator")));
        assert!(first.iter().any(|r| r.contains("AP Exam Formula Sheet")));

        for i in 1..5 {
            app.select_step(i);
            assert_eq!(materials_rows(&mut app), first);
        }
    }
}
