//! View rendering for the catalog browser.
//!
//! The view is built from the browser's latest [`ViewState`] in sections:
//! header (title, search line, category pills), then either the loading
//! message, the error banner, the empty state or the cards, followed by the
//! results count, the pagination bar and the help line.

use super::keys::SearchKeys;
use super::style::DIVIDER;
use super::{Browser, Mode, Status};
use crate::item::Item;
use crate::key;
use crate::paginator::{PageControl, Type};
use crate::view::results_label;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Message shown when the catalog document could not be loaded.
pub const LOAD_FAILED: &str = "Failed to load services. Please refresh the page.";

/// Heading of the empty state.
pub const NO_RESULTS: &str = "No services found";

/// Cuts `text` to `limit` characters, appending `...` when anything was cut.
pub fn excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Formats a price with thousands separators, dropping a zero fraction.
///
/// ```
/// use catalog_pager::browser::rendering::format_price;
///
/// assert_eq!(format_price(12500.0, "₹"), "₹12,500");
/// assert_eq!(format_price(999.5, "₹"), "₹999.50");
/// ```
pub fn format_price(price: f64, symbol: &str) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{symbol}{grouped}")
    } else {
        format!("{sign}{symbol}{grouped}.{fraction:02}")
    }
}

/// Truncates plain text to a display width, ending with `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Splits plain text into lines no wider than `width`.
///
/// Breaks at the last space that fits, or mid-word when a single word is
/// wider than the line. A character wider than the line gets a line of its
/// own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && !line.is_empty() {
            if ch == ' ' {
                lines.push(std::mem::take(&mut line));
                used = 0;
                continue;
            }
            match line.rfind(' ') {
                Some(space) if space > 0 => {
                    let rest = line.split_off(space + 1);
                    lines.push(line.trim_end().to_string());
                    line = rest;
                }
                _ => lines.push(std::mem::take(&mut line)),
            }
            used = line.width();
        }
        line.push(ch);
        used += w;
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Display width of a string that may contain ANSI styling.
pub fn visible_width(styled: &str) -> usize {
    strip_ansi_escapes::strip_str(styled).width()
}

impl<I: Item + Send + Sync + 'static> Browser<I> {
    pub(super) fn view_header(&self) -> String {
        let mut lines = vec![self.styles.title.clone().render(&self.title)];
        lines.push(self.view_search());
        let pills = self.view_categories();
        if !pills.is_empty() {
            lines.push(pills);
        }
        lines.join("\n")
    }

    fn view_search(&self) -> String {
        let prompt = self.styles.search_prompt.clone().render("Search:");
        match self.mode {
            Mode::Searching => format!(
                "{prompt} {}",
                self.styles.search_text.clone().render(&format!("{}_", self.query))
            ),
            Mode::Browsing if self.query.is_empty() => format!(
                "{prompt} {}",
                self.styles.search_hint.clone().render("press / to search")
            ),
            Mode::Browsing => format!(
                "{prompt} {}",
                self.styles.search_text.clone().render(&self.query)
            ),
        }
    }

    /// Category pills, wrapped onto more lines when they overflow the width.
    fn view_categories(&self) -> String {
        if self.categories.len() <= 1 {
            return String::new();
        }
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for (index, label) in self.categories.iter().enumerate() {
            let pill = if index == self.selected_category {
                self.styles.active_pill.clone().render(&format!("[{label}]"))
            } else {
                self.styles.pill.clone().render(label)
            };
            if current.is_empty() {
                current = pill;
            } else if visible_width(&current) + DIVIDER.width() + visible_width(&pill)
                > self.width
            {
                lines.push(std::mem::take(&mut current));
                current = pill;
            } else {
                current.push_str(DIVIDER);
                current.push_str(&pill);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines.join("\n")
    }

    pub(super) fn view_body(&self) -> String {
        match &self.status {
            Status::Loading => self.styles.loading.clone().render("Loading services..."),
            Status::Failed(_) => self.styles.error.clone().render(LOAD_FAILED),
            Status::Ready if self.view.is_empty() => self.view_empty(),
            Status::Ready => self
                .view
                .items
                .iter()
                .map(|item| self.view_card(item))
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }

    fn view_empty(&self) -> String {
        let hint = format!(
            "Try a different search or category. Press {} to show all.",
            self.keymap.show_all.help().key
        );
        format!(
            "{}\n{}",
            self.styles.empty.clone().render(NO_RESULTS),
            self.styles.search_hint.clone().render(&hint)
        )
    }

    fn view_card(&self, item: &I) -> String {
        let badge = format!("[{}]", item.category());
        let title_width = self.width.saturating_sub(badge.width() + 1);
        let title = format!(
            "{} {}",
            self.styles
                .card_title
                .clone()
                .render(&truncate(item.title(), title_width)),
            self.styles.badge.clone().render(&badge)
        );

        let description = excerpt(item.description(), self.config.description_limit);
        let description = wrap(&description, self.width)
            .iter()
            .map(|line| self.styles.description.clone().render(line))
            .collect::<Vec<_>>()
            .join("\n");

        let price = match item.price() {
            Some(price) if price > 0.0 => format!(
                "{} {}",
                self.styles.price_label.clone().render("Starting from"),
                self.styles
                    .price
                    .clone()
                    .render(&format_price(price, &self.config.currency_symbol))
            ),
            _ => self.styles.contact.clone().render("Contact for Price"),
        };

        [title, description, price].join("\n")
    }

    pub(super) fn view_footer(&self) -> String {
        let mut sections = Vec::new();
        if self.status == Status::Ready {
            sections.push(
                self.styles
                    .results
                    .clone()
                    .render(&results_label(self.view.filtered_count, &self.item_noun)),
            );
            if self.view.has_pagination() {
                sections.push(self.view_pagination());
            }
        }

        let help = match self.mode {
            Mode::Searching => key::help_line(&SearchKeys(&self.keymap), DIVIDER),
            Mode::Browsing => key::help_line(&self.keymap, DIVIDER),
        };
        sections.push(self.styles.help.clone().render(&truncate(&help, self.width)));
        sections.join("\n")
    }

    fn view_pagination(&self) -> String {
        if self.pagination != Type::Numbered {
            return self
                .styles
                .page
                .clone()
                .render(&self.catalog.paginator().view(self.pagination));
        }
        self.view
            .controls
            .iter()
            .map(|control| {
                let style = match *control {
                    PageControl::Previous { enabled: false }
                    | PageControl::Next { enabled: false } => &self.styles.disabled_page,
                    PageControl::Page { active: true, .. } => &self.styles.active_page,
                    _ => &self.styles.page,
                };
                style.clone().render(&control.label())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
