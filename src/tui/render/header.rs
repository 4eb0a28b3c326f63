use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Render the site name, tagline, theme indicator and the stat counters
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let info = &app.site.config.site;

    // Row 1: name + tagline, theme on the right
    let mut title_spans = vec![
        Span::styled(" \u{25C6} ", Style::default().fg(app.theme.accent).bg(bg)),
        Span::styled(
            info.name.clone(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !info.tagline.is_empty() {
        title_spans.push(Span::styled(
            format!("  {}", info.tagline),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    let theme_label = format!("\u{25D0} {} ", app.theme_preference);
    let used: usize = title_spans.iter().map(|s| display_width(&s.content)).sum();
    let theme_width = display_width(&theme_label);
    if used + theme_width < width {
        title_spans.push(Span::styled(
            " ".repeat(width - used - theme_width),
            Style::default().bg(bg),
        ));
        title_spans.push(Span::styled(
            theme_label,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    // Row 2: counters
    let mut stat_spans = vec![Span::styled("   ", Style::default().bg(bg))];
    for (i, stat) in app.stats.iter().enumerate() {
        if i > 0 {
            stat_spans.push(Span::styled("   ", Style::default().bg(bg)));
        }
        stat_spans.push(Span::styled(
            stat.counter.value().to_string(),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        stat_spans.push(Span::styled(
            format!(" {}", stat.label),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(vec![Line::from(title_spans), Line::from(stat_spans)])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_before_and_after_count_up() {
        let mut app = builtin_app();
        let before = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(before.contains("0 Projects"));
        assert!(before.contains("0 Tags"));

        app.finish_counters();
        let after = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(after.contains("4 Projects"));
        assert!(after.contains("11 Tags"));
        assert!(after.lines().next().unwrap().ends_with("\u{25D0} dark"));
    }

    #[test]
    fn tagline_shown_when_set() {
        let mut app = builtin_app();
        app.site.config.site.tagline = "Games and tools".into();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.starts_with(" \u{25C6} Portfolio  Games and tools"));
    }
}
