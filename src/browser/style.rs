//! Styles for the catalog browser.
//!
//! All colors are adaptive so the browser reads well on light and dark
//! terminals. Replace individual fields to restyle:
//!
//! ```rust
//! use catalog_pager::browser::style::BrowserStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = BrowserStyles::default();
//! styles.title = Style::new().bold(true).foreground(Color::from("#FFFFFF"));
//! ```

use lipgloss_extras::prelude::*;

/// Separator placed between help entries and category pills.
pub const DIVIDER: &str = " • ";

/// Styling for every element the browser draws.
#[derive(Debug, Clone)]
pub struct BrowserStyles {
    /// Page title.
    pub title: Style,
    /// The "Search:" prompt.
    pub search_prompt: Style,
    /// Query text while it is being edited.
    pub search_text: Style,
    /// Hint shown when no query is set.
    pub search_hint: Style,
    /// Unselected category pill.
    pub pill: Style,
    /// Selected category pill.
    pub active_pill: Style,
    /// Card title.
    pub card_title: Style,
    /// Category badge next to the card title.
    pub badge: Style,
    /// Card description.
    pub description: Style,
    /// "Starting from" label.
    pub price_label: Style,
    /// Price amount.
    pub price: Style,
    /// "Contact for Price" text.
    pub contact: Style,
    /// Results count line.
    pub results: Style,
    /// Page number link.
    pub page: Style,
    /// Current page number.
    pub active_page: Style,
    /// Previous/next control on the first/last page.
    pub disabled_page: Style,
    /// Empty state heading.
    pub empty: Style,
    /// Load failure banner.
    pub error: Style,
    /// Loading message.
    pub loading: Style,
    /// Help line.
    pub help: Style,
}

impl Default for BrowserStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let accent = AdaptiveColor {
            Light: "#7C3AED",
            Dark: "#A78BFA",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true)
                .padding(0, 1, 0, 1),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            search_text: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            search_hint: Style::new().foreground(subdued.clone()),
            pill: Style::new().foreground(subdued.clone()),
            active_pill: Style::new().foreground(accent.clone()).bold(true),
            card_title: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1A1A1A",
                    Dark: "#EEEEEE",
                })
                .bold(true),
            badge: Style::new().foreground(accent.clone()),
            description: Style::new().foreground(AdaptiveColor {
                Light: "#555555",
                Dark: "#A0A0A0",
            }),
            price_label: Style::new().foreground(subdued.clone()),
            price: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#047857",
                    Dark: "#34D399",
                })
                .bold(true),
            contact: Style::new().foreground(subdued.clone()).italic(true),
            results: Style::new().foreground(subdued.clone()),
            page: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            active_page: Style::new().foreground(accent).bold(true).underline(true),
            disabled_page: Style::new().foreground(subdued.clone()).faint(true),
            empty: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            error: Style::new()
                .foreground(Color::from("#EF4444"))
                .bold(true),
            loading: Style::new().foreground(subdued.clone()),
            help: Style::new().foreground(subdued),
        }
    }
}
