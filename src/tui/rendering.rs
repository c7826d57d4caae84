use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::{Category, PromptRecord, PromptStats, PromptType};
use crate::utils::{sanitize_for_terminal, single_line};

/// Collapsed previews show at most this many characters of the prompt body
pub const PREVIEW_CHAR_LIMIT: usize = 150;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const BAR_BG: Color = Color::Rgb(24, 24, 27);
const ERROR: Color = Color::Rgb(239, 68, 68);

/// Everything the renderer needs besides the matched records
pub struct RenderState<'a> {
    pub input: &'a str,
    /// Filter expression last applied with Enter
    pub active_filter: Option<&'a str>,
    pub category: Category,
    pub total_count: usize,
    pub stats: &'a PromptStats,
    pub expanded: bool,
    pub filter_error: Option<&'a str>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(
    frame: &mut Frame,
    records: &[&PromptRecord],
    selected_idx: usize,
    state: &RenderState,
) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header_area, state.category, state.input);
    render_results_list(frame, layout.results_area, records, selected_idx);
    let selected = records.get(selected_idx).copied();
    render_preview(frame, layout.preview_area, selected, state.expanded);
    render_status_bar(frame, layout.status_area, records.len(), selected_idx, state);
}

fn type_color(prompt_type: &PromptType) -> Color {
    match prompt_type {
        PromptType::Text => Color::Rgb(59, 130, 246),
        PromptType::Image => Color::Rgb(168, 85, 247),
        PromptType::Structured => Color::Rgb(249, 115, 22),
        PromptType::Other(_) => MUTED,
    }
}

/// Prompt body for the preview pane and whether it was cut short
pub fn collapse_prompt(prompt: &str, expanded: bool) -> (String, bool) {
    if expanded || prompt.chars().count() <= PREVIEW_CHAR_LIMIT {
        return (prompt.to_string(), false);
    }
    let mut collapsed: String = prompt.chars().take(PREVIEW_CHAR_LIMIT).collect();
    collapsed.push_str("...");
    (collapsed, true)
}

fn badges(record: &PromptRecord) -> Vec<Span<'static>> {
    let tag = single_line(record.prompt_type.as_str());
    let mut spans = vec![Span::styled(
        format!("[{}]", tag),
        Style::default().fg(type_color(&record.prompt_type)).add_modifier(Modifier::BOLD),
    )];
    if record.for_devs {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("[DEV]", Style::default().fg(ACCENT)));
    }
    spans
}

fn render_header(frame: &mut Frame, area: Rect, active: Category, input: &str) {
    let mut spans = Vec::new();
    for category in Category::ALL {
        let style = if category == active {
            Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(format!(" {} ", category.label()), style));
    }
    spans.push(Span::styled(" | Search: ", Style::default().fg(MUTED)));
    spans.push(Span::styled(single_line(input), Style::default().fg(BRIGHT)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(BAR_BG));
    frame.render_widget(paragraph, area);
}

fn render_results_list(
    frame: &mut Frame,
    area: Rect,
    records: &[&PromptRecord],
    selected_idx: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(" Prompts ");

    if records.is_empty() {
        let paragraph = Paragraph::new(Text::from(vec![
            Line::from(Span::styled("No prompts found", Style::default().fg(BRIGHT))),
            Line::from(Span::styled(
                "Try adjusting your search or filters",
                Style::default().fg(MUTED),
            )),
        ]))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let act = single_line(&record.act);
            let contributor = format!("@{}", single_line(&record.contributor));

            if idx == selected_idx {
                let dev = if record.for_devs { " [DEV]" } else { "" };
                let tag = single_line(record.prompt_type.as_str());
                let content = format!("[{}]{} {} {}", tag, dev, act, contributor);
                return ListItem::new(content).style(
                    Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD),
                );
            }

            let mut spans = badges(record);
            spans.push(Span::styled(format!(" {} ", act), Style::default().fg(BRIGHT)));
            spans.push(Span::styled(contributor, Style::default().fg(MUTED)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    // Stateful rendering keeps the selected card scrolled into view
    let mut list_state = ListState::default().with_selected(Some(selected_idx));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
}

fn render_preview(frame: &mut Frame, area: Rect, record: Option<&PromptRecord>, expanded: bool) {
    let content = if let Some(record) = record {
        let mut lines = vec![
            Line::from(badges(record)),
            Line::from(Span::styled(
                single_line(&record.act),
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("By: ", Style::default().fg(MUTED)),
                Span::raw(format!("@{}", single_line(&record.contributor))),
            ]),
            Line::from(vec![
                Span::styled("Id: ", Style::default().fg(MUTED)),
                Span::raw(record.id.to_string()),
            ]),
            Line::from(""),
        ];

        let (body, truncated) = collapse_prompt(&record.prompt, expanded);
        for line in sanitize_for_terminal(&body).lines() {
            lines.push(Line::from(line.to_string()));
        }

        let long = record.prompt.chars().count() > PREVIEW_CHAR_LIMIT;
        if truncated {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Show more (Ctrl+E)",
                Style::default().fg(ACCENT),
            )));
        } else if long {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Show less (Ctrl+E)",
                Style::default().fg(ACCENT),
            )));
        }

        Text::from(lines)
    } else {
        Text::from("No prompt selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Preview "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    matched_count: usize,
    selected_idx: usize,
    state: &RenderState,
) {
    let (status_text, style) = if let Some(error) = state.filter_error {
        (format!(" [ERROR] {} ", single_line(error)), Style::default().fg(ERROR).bg(BAR_BG))
    } else if let Some(message) = state.status_message {
        let color = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", single_line(&message.text)), Style::default().fg(color).bg(BAR_BG))
    } else if matched_count == 0 {
        (
            " No prompts found | Esc: clear | Tab: category | Ctrl+C: quit ".to_string(),
            Style::default().fg(BRIGHT).bg(BAR_BG),
        )
    } else {
        let mut parts = vec![format!("[{}]", state.category)];

        if matched_count < state.total_count {
            parts.push(format!("{}/{} prompts", matched_count, state.total_count));
        } else {
            parts.push(format!("{} prompts", state.total_count));
        }
        parts.push(format!("{} for devs", state.stats.dev_focused));
        parts.push(format!("{} contributors", state.stats.contributors));

        if let Some(filter) = state.active_filter {
            parts.push(format!("filter: {}", single_line(filter)));
        }

        parts.push(format!("prompt {}/{}", selected_idx + 1, matched_count));
        parts.push("Ctrl+Y: copy".to_string());
        parts.push("Ctrl+E: expand".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
