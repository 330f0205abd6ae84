use crate::state::AppState;
use crate::view_model::{document_tabs, PanelViewModel};
use domain_event_display::Font;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FOOTER_HINTS: &str =
    " 1-3 activate · 0 none · e edit · E edit all · v show/hide · c clear · +/- font · j/k scroll · q quit ";

/// Split the screen into tabs, panel and footer
fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Number of panel rows available for log lines
pub fn panel_height(area: Rect) -> usize {
    let [_, panel, _] = layout(area);
    panel.height.saturating_sub(2) as usize // -2 for borders
}

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [tabs_area, panel_area, footer_area] = layout(area);

    render_tabs(state, tabs_area, f);
    render_panel(state, panel_area, f);

    let view_model = PanelViewModel::new(&state.panel);
    let footer = Line::from(vec![
        Span::styled(FOOTER_HINTS, Style::default().fg(Color::DarkGray)),
        Span::raw(view_model.usage()),
    ]);
    f.render_widget(Paragraph::new(footer), footer_area);
}

fn render_tabs(state: &AppState, area: Rect, f: &mut Frame) {
    let spans: Vec<Span> = document_tabs(state)
        .into_iter()
        .map(|(label, active)| {
            if active {
                Span::styled(format!(" {} ", label), Style::default().black().on_cyan())
            } else {
                Span::raw(format!(" {} ", label))
            }
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_panel(state: &AppState, area: Rect, f: &mut Frame) {
    let view_model = PanelViewModel::new(&state.panel);

    let block = Block::default()
        .title(view_model.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if !state.panel.visible {
        let hidden = Paragraph::new(Line::from(
            " Panel hidden: change events are not recorded (v to show) ".dark_gray(),
        ))
        .block(block);
        f.render_widget(hidden, area);
        return;
    }

    let available_height = area.height.saturating_sub(2) as usize;
    let text_style = font_style(&state.panel.font);
    let lines: Vec<Line> = view_model
        .visible_lines(available_height)
        .iter()
        .map(|line| Line::from(Span::styled(line.as_str(), text_style)))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Terminal approximation of the panel font: only the style carries over
fn font_style(font: &Font) -> Style {
    let mut style = Style::default();
    if font.style.is_bold() {
        style = style.add_modifier(Modifier::BOLD);
    }
    if font.style.is_italic() {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}
