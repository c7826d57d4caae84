//! TUI application state and event handling.
//!
//! The `App` owns the catalog records and everything derived from the user's input:
//!
//! - **Search**: case-insensitive substring over title and prompt, updated on every keystroke
//! - **Category**: Tab cycles `All -> Text -> Image -> Structured`
//! - **Filters**: `field:value` expression left of `|`, applied when Enter is pressed
//! - **Status messages**: transient feedback for clipboard operations
//!
//! Input syntax: `filter_expr | search`. Text without a `|` is pure search.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_prompt;
use crate::filters::{FilterExpr, PromptQuery, evaluate_filter, parse_filter};
use crate::models::{Category, PromptRecord, PromptStats};
use crate::utils::single_line;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Repeated Enter presses inside this window are ignored
const ENTER_DEBOUNCE_MS: u64 = 150;
const MAX_INPUT_LEN: usize = 256;
const PAGE_SIZE: isize = 10;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    records: Vec<PromptRecord>,
    stats: PromptStats,
    /// Indices into `records` matching the current view, in catalog order
    visible: Vec<usize>,
    selected_idx: usize,
    input: String,
    category: Category,
    current_filter: Option<FilterExpr>,
    /// Source text of `current_filter`, shown in the status bar
    current_filter_text: Option<String>,
    filter_error: Option<String>,
    last_enter_time: Option<Instant>,
    expanded: bool,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(records: Vec<PromptRecord>) -> Self {
        let stats = PromptStats::from_records(&records);
        let visible = (0..records.len()).collect();

        Self {
            records,
            stats,
            visible,
            selected_idx: 0,
            input: String::new(),
            category: Category::All,
            current_filter: None,
            current_filter_text: None,
            filter_error: None,
            last_enter_time: None,
            expanded: false,
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let matched = self.visible_records();
                terminal.draw(|f| {
                    let state = RenderState {
                        input: &self.input,
                        active_filter: self.current_filter_text.as_deref(),
                        category: self.category,
                        total_count: self.records.len(),
                        stats: &self.stats,
                        expanded: self.expanded,
                        filter_error: self.filter_error.as_deref(),
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &matched, self.selected_idx, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn visible_records(&self) -> Vec<&PromptRecord> {
        self.visible.iter().filter_map(|&idx| self.records.get(idx)).collect()
    }

    fn selected_record(&self) -> Option<&PromptRecord> {
        self.visible.get(self.selected_idx).and_then(|&idx| self.records.get(idx))
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.input.is_empty() && self.current_filter.is_none() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.current_filter = None;
                    self.current_filter_text = None;
                    self.filter_error = None;
                    self.refresh_matches();
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::ApplyFilter => {
                let should_apply = self.last_enter_time.is_none_or(|last_time| {
                    last_time.elapsed() >= Duration::from_millis(ENTER_DEBOUNCE_MS)
                });

                if should_apply {
                    self.apply_filter();
                    self.last_enter_time = Some(Instant::now());
                }
            }
            Action::CycleCategory => {
                self.category = self.category.next();
                self.refresh_matches();
            }
            Action::ToggleExpand => {
                if self.selected_record().is_some() {
                    self.expanded = !self.expanded;
                    self.needs_redraw = true;
                }
            }
            Action::CopyToClipboard => self.copy_selected(),
            Action::None => {}
        }
    }

    fn copy_selected(&mut self) {
        let outcome = match self.selected_record() {
            None if self.visible.is_empty() => Err("✗ No prompts to copy".to_string()),
            None => Err("✗ Invalid selection".to_string()),
            Some(record) => match copy_prompt(record) {
                Ok(()) => Ok(format!("✓ Copied {} to clipboard", single_line(&record.act))),
                Err(e) => Err(format!("✗ Clipboard error: {:#}", e)),
            },
        };

        match outcome {
            Ok(text) => self.set_status(text, MessageType::Success, STATUS_SUCCESS_DURATION_MS),
            Err(text) => self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.visible.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            // Expansion applies to one card at a time
            self.expanded = false;
            self.needs_redraw = true;
        }
    }

    fn update_search(&mut self, c: char) {
        if self.input.chars().count() < MAX_INPUT_LEN {
            self.input.push(c);
            // A stale parse error would hide the edit in progress
            self.filter_error = None;
            self.refresh_matches();
        }
    }

    fn delete_char(&mut self) {
        if self.input.pop().is_some() {
            self.filter_error = None;
            self.refresh_matches();
        }
    }

    /// Split the input into (filter, search). Without `|` everything is search.
    /// The search part is trimmed either way.
    fn parse_input(&self) -> (Option<&str>, &str) {
        match self.input.split_once('|') {
            Some((filter, search)) => {
                let filter = filter.trim();
                (if filter.is_empty() { None } else { Some(filter) }, search.trim())
            }
            None => (None, self.input.trim()),
        }
    }

    fn apply_filter(&mut self) {
        let Some(filter_str) = self.parse_input().0.map(str::to_string) else {
            self.current_filter = None;
            self.current_filter_text = None;
            self.filter_error = None;
            self.refresh_matches();
            return;
        };

        match parse_filter(&filter_str) {
            Ok(filter_expr) => {
                self.current_filter = Some(filter_expr);
                self.current_filter_text = Some(filter_str);
                self.filter_error = None;
            }
            Err(e) => {
                self.filter_error =
                    Some(format!("Parse error: {:#} | Try: type:image dev:true | search", e));
            }
        }
        self.refresh_matches();
    }

    /// Recompute the visible set from filter, search and category; resets the selection
    fn refresh_matches(&mut self) {
        let query = PromptQuery::new(self.parse_input().1, self.category);
        let filter = self.current_filter.as_ref();

        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| filter.is_none_or(|expr| evaluate_filter(record, expr)))
            .filter(|(_, record)| query.matches(record))
            .map(|(idx, _)| idx)
            .collect();

        self.selected_idx = 0;
        self.expanded = false;
        self.needs_redraw = true;
    }
}
