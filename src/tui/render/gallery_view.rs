use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::ops::gallery::{EMPTY_STATE_MESSAGE, ProjectCard};
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width, wrap_to_width};

use super::push_highlighted_spans;

/// Cells taken by the card's left margin and accent bar
const INDENT: usize = 3;

/// Render the visible cards starting at `app.scroll`, or the empty-state
/// placeholder when nothing passes the filters.
pub fn render_gallery_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let view = app.gallery.view();

    if view.show_empty_state {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_STATE_MESSAGE,
                Style::default().fg(app.theme.dim).bg(bg),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    let width = area.width as usize;
    let height = area.height as usize;
    let search_re = app.active_search_re();

    let mut lines: Vec<Line> = Vec::new();
    let mut shown = 0;
    for card in view.cards.iter().skip(app.scroll) {
        if lines.len() >= height {
            break;
        }
        lines.extend(card_lines(app, card, width, search_re.as_ref()));
        shown += 1;
    }

    lines.truncate(height);
    let remaining = view.cards.len().saturating_sub(app.scroll + shown);
    if remaining > 0 && height > 0 {
        // The indicator takes the last row
        lines.truncate(height - 1);
        lines.push(Line::from(Span::styled(
            format!("   \u{2193} {} more", remaining),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// Lines for one card: title and year, wrapped description, tag chips,
/// link, then a blank separator.
fn card_lines(
    app: &App,
    card: &ProjectCard,
    width: usize,
    search_re: Option<&Regex>,
) -> Vec<Line<'static>> {
    let bg = app.theme.background;
    let bar = || Span::styled(" \u{258C} ", Style::default().fg(app.theme.accent).bg(bg));
    let highlight = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);
    let body_width = width.saturating_sub(INDENT);
    let mut lines = Vec::new();

    // Title, year right-aligned
    let year = card.year.to_string();
    let title = truncate_to_width(
        &card.title,
        body_width.saturating_sub(display_width(&year) + 1),
    );
    let mut spans = vec![bar()];
    push_highlighted_spans(
        &mut spans,
        &title,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
        highlight,
        search_re,
    );
    let used = INDENT + display_width(&title);
    let pad = width.saturating_sub(used + display_width(&year) + 1);
    spans.push(Span::styled(" ".repeat(pad), Style::default().bg(bg)));
    spans.push(Span::styled(year, Style::default().fg(app.theme.accent).bg(bg)));
    lines.push(Line::from(spans));

    // Description
    for text in wrap_to_width(&card.description, body_width.saturating_sub(1)) {
        let mut spans = vec![bar()];
        push_highlighted_spans(
            &mut spans,
            &text,
            Style::default().fg(app.theme.text).bg(bg),
            highlight,
            search_re,
        );
        lines.push(Line::from(spans));
    }

    // Tags
    if !card.tags.is_empty() {
        let mut spans = vec![bar()];
        for (i, tag) in card.tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", Style::default().bg(bg)));
            }
            let pressed = app.gallery.filter_state().active_tags.contains(tag);
            let style = if pressed {
                Style::default()
                    .fg(app.theme.chip_pressed_fg)
                    .bg(app.theme.chip_pressed_bg)
            } else {
                Style::default()
                    .fg(app.theme.tag_color(tag))
                    .bg(app.theme.chip_bg)
            };
            spans.push(Span::styled(format!(" {} ", tag), style));
        }
        lines.push(Line::from(spans));
    }

    // Link
    let link = card.link.trim();
    let link_span = if link.is_empty() || link == "#" {
        Span::styled(
            "no link yet",
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(
            format!("\u{2197} {}", truncate_to_width(link, body_width.saturating_sub(2))),
            Style::default()
                .fg(app.theme.link)
                .bg(bg)
                .add_modifier(Modifier::UNDERLINED),
        )
    };
    lines.push(Line::from(vec![bar(), link_span]));

    lines.push(Line::from(""));
    lines
}
