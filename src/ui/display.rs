//! Display panel: pending operation above the main output.

use super::ThemeColors;
use crate::calc::DisplayText;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Draw the display panel.
pub fn draw_display(f: &mut Frame<'_>, area: Rect, text: &DisplayText, colors: &ThemeColors) {
    let block = Block::default()
        .title(" abaco ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let width = usize::from(block.inner(area).width);

    let output_style = if text.is_error {
        Style::default().fg(colors.error).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.display).add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            fit_to_width(&text.history, width),
            Style::default().fg(colors.history),
        )),
        Line::from(Span::styled(fit_to_width(&text.output, width), output_style)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(block);

    f.render_widget(paragraph, area);
}

/// Keep the rightmost characters of `text` that fit in `width` columns,
/// marking the cut with a leading `…`.
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut kept = Vec::new();
    let mut used = 1; // room for the ellipsis
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }
    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}
