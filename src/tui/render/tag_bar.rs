use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::gallery::TagFilter;
use crate::tui::app::App;
use crate::util::unicode::display_width;

const LABEL: &str = " Filter ";
/// Blank cells between chips
const GAP: usize = 1;

/// Width of one chip: the tag padded by a space on each side
fn chip_width(tag: &str) -> usize {
    display_width(tag) + 2
}

/// Lay chips out left to right, wrapping onto new rows. Returns the chip
/// indices on each row. The first row starts after the label.
pub fn layout_chips(filters: &[TagFilter], width: usize) -> Vec<Vec<usize>> {
    let label_width = display_width(LABEL);
    let mut rows: Vec<Vec<usize>> = vec![Vec::new()];
    let mut used = label_width;
    for (i, filter) in filters.iter().enumerate() {
        let w = chip_width(&filter.tag);
        let row_empty = rows.last().is_none_or(|r| r.is_empty());
        let needed = if row_empty { used + w } else { used + GAP + w };
        if needed > width && !row_empty {
            rows.push(Vec::new());
            used = label_width + w;
        } else {
            used = needed;
        }
        if let Some(row) = rows.last_mut() {
            row.push(i);
        }
    }
    rows
}

/// Rows needed for the tag bar at the given terminal width
pub fn tag_bar_height(app: &App, width: u16) -> u16 {
    let filters = app.gallery.tag_filters();
    if filters.is_empty() {
        return 1;
    }
    layout_chips(&filters, width as usize).len() as u16
}

/// Render the tag filter chips, marking pressed tags and the cursor
pub fn render_tag_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let filters = app.gallery.tag_filters();
    let bg_style = Style::default().bg(bg);
    let label_style = Style::default().fg(app.theme.dim).bg(bg);

    if filters.is_empty() {
        let line = Line::from(vec![
            Span::styled(LABEL, label_style),
            Span::styled("no tags", label_style),
        ]);
        frame.render_widget(Paragraph::new(line).style(bg_style), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (row_idx, row) in layout_chips(&filters, area.width as usize).iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let lead = if row_idx == 0 {
            LABEL.to_string()
        } else {
            " ".repeat(display_width(LABEL))
        };
        spans.push(Span::styled(lead, label_style));
        for (n, &i) in row.iter().enumerate() {
            if n > 0 {
                spans.push(Span::styled(" ".repeat(GAP), bg_style));
            }
            let filter = &filters[i];
            let mut style = if filter.pressed {
                Style::default()
                    .fg(app.theme.chip_pressed_fg)
                    .bg(app.theme.chip_pressed_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(app.theme.tag_color(&filter.tag))
                    .bg(app.theme.chip_bg)
            };
            if i == app.tag_cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {} ", filter.tag), style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(bg_style), area);
}
