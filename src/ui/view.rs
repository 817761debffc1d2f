//! Rendering of the interactive form.

use crate::core::length::format_length;
use crate::db::RecordStore;
use crate::ui::form::{FormApp, Mode};
use crate::ui::messages::Level;
use crate::utils::time::display_local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};

const TITLE: &str = "1. NSH Izgara Kesim Kayitlari";
const BLINK_BG: Color = Color::Rgb(0xff, 0xf5, 0x9d);

pub fn draw<S: RecordStore>(f: &mut Frame, app: &FormApp<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    draw_inputs(f, app, chunks[1]);
    draw_table(f, app, chunks[2]);
    draw_status(f, app, chunks[3]);

    let help = Paragraph::new(
        "0-9 . , type  Enter add/update  Tab tampon  ←/→ group  ↑/↓ select  e edit  Esc cancel  d delete  x xlsx  p pdf  r refresh  q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);

    match &app.mode {
        Mode::Normal => {}
        Mode::ConfirmDelete(id) => popup(
            f,
            "Confirm delete",
            &format!("Delete record {}? [y/N]", app.describe(*id)),
        ),
        Mode::ExportPath { format, path } => popup(
            f,
            &format!("Save {} as (Enter save, Esc cancel)", format.label()),
            &format!("{path}_"),
        ),
        Mode::ConfirmOverwrite { path, .. } => popup(
            f,
            "File exists",
            &format!("Overwrite {}? [y/N]", path.display()),
        ),
    }
}

fn draw_inputs<S: RecordStore>(f: &mut Frame, app: &FormApp<S>, area: Rect) {
    let edit = app.session.edit_state();
    let block_title = match edit.target() {
        Some(id) => format!("Editing #{id}"),
        None => "New record".to_string(),
    };

    let label = Style::default().add_modifier(Modifier::BOLD);
    let button = if edit.is_editing() {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Black).bg(Color::Green)
    };

    let line = Line::from(vec![
        Span::styled("Boy (m): ", label),
        Span::raw(format!("{:<12}", format!("{}_", app.session.fields.length))),
        Span::styled("Tampon: ", label),
        Span::raw(format!("<{}>  ", app.session.fields.buffer_type)),
        Span::styled("Grup: ", label),
        Span::raw(format!("<{}>  ", app.session.filter())),
        Span::styled(format!("[{}]", edit.submit_label()), button),
        Span::raw(if edit.is_editing() { "  [Esc: cancel]" } else { "" }),
    ]);

    let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(block_title));
    f.render_widget(p, area);
}

fn draw_table<S: RecordStore>(f: &mut Frame, app: &FormApp<S>, area: Rect) {
    let header = Row::new(vec!["ID", "Boy (m)", "Tampon", "Tarih/Saat"])
        .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan));

    let highlighter = app.session.highlighter();
    let rows: Vec<Row> = app
        .session
        .visible()
        .iter()
        .map(|r| {
            let style = if highlighter.is_lit(r.id) {
                Style::default().fg(Color::Black).bg(BLINK_BG)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(r.id.to_string()),
                Cell::from(format_length(r.length)),
                Cell::from(r.buffer_type.clone()),
                Cell::from(display_local(r.created_at)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Records ({})", app.session.visible().len())),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default().with_selected(app.selected);
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_status<S: RecordStore>(f: &mut Frame, app: &FormApp<S>, area: Rect) {
    let Some((level, msg)) = &app.status else {
        return;
    };
    let color = match level {
        Level::Info => Color::Blue,
        Level::Success => Color::Green,
        Level::Warning => Color::Yellow,
        Level::Error => Color::Red,
    };
    let p = Paragraph::new(Span::styled(msg.as_str(), Style::default().fg(color)));
    f.render_widget(p, area);
}

fn popup(f: &mut Frame, title: &str, body: &str) {
    let area = centered(f.area(), 70, 5);
    f.render_widget(Clear, area);
    let p = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(p, area);
}

/// Rectangle of `percent_x` width and fixed `height`, centred in `r`.
fn centered(r: Rect, percent_x: u16, height: u16) -> Rect {
    let w = (u32::from(r.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let h = height.min(r.height);
    Rect::new(
        r.x + (r.width - w) / 2,
        r.y + (r.height - h) / 2,
        w,
        h,
    )
}
