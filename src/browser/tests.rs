//! Tests for the catalog browser.

use super::*;
use crate::error::Error;
use crate::item::Service;
use crate::source::JsonText;
use pretty_assertions::assert_eq;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn ctrl(c: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    }) as Msg
}

fn plain(s: &str) -> String {
    strip_ansi_escapes::strip_str(s)
}

fn services() -> Vec<Service> {
    vec![
        Service::new(1, "Logo Design", "Memorable marks", "Design").with_price(2500.0),
        Service::new(2, "Copywriting", "Words that sell", "Writing"),
        Service::new(3, "Brand Design", "Full identity systems", "Design").with_price(12000.0),
    ]
}

fn many(count: u64) -> Vec<Service> {
    (1..=count)
        .map(|i| Service::new(i, &format!("Service {i}"), "", "General"))
        .collect()
}

fn loaded(items: Vec<Service>) -> Browser<Service> {
    let mut browser = Browser::new();
    browser.update(Box::new(LoadedMsg::new(Ok(Loaded {
        items,
        categories: Vec::new(),
    }))) as Msg);
    browser
}

fn type_text(browser: &mut Browser<Service>, text: &str) {
    for c in text.chars() {
        browser.update(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_initial_state_is_loading() {
    let (browser, cmd) = <Browser<Service> as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert_eq!(browser.status(), &Status::Loading);
    assert_eq!(browser.view_state().total_pages, 1);
    assert!(plain(&browser.view()).contains("Loading services..."));
}

#[test]
fn test_loaded_msg_populates_catalog() {
    let browser = loaded(services());
    assert_eq!(browser.status(), &Status::Ready);
    assert_eq!(browser.categories(), &["all", "Design", "Writing"]);

    let view = plain(&browser.view());
    assert!(view.contains("Logo Design [Design]"));
    assert!(view.contains("Starting from ₹2,500"));
    assert!(view.contains("Contact for Price"));
    assert!(view.contains("3 services available"));
}

#[test]
fn test_failed_load_shows_banner_and_stays_empty() {
    let mut browser: Browser<Service> = Browser::new();
    let err = JsonText::new("not json").fetch().unwrap_err();
    browser.update(Box::new(LoadedMsg::<Service>::new(Err(err))) as Msg);

    assert!(matches!(browser.status(), Status::Failed(_)));
    assert!(!browser.catalog().is_loaded());
    assert_eq!(browser.view_state().filtered_count, 0);
    assert!(plain(&browser.view()).contains(rendering::LOAD_FAILED));
}

#[test]
fn test_failed_load_error_message_kept() {
    let mut browser: Browser<Service> = Browser::new();
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    browser.update(Box::new(LoadedMsg::<Service>::new(Err(Error::from(io)))) as Msg);
    assert_eq!(
        browser.status(),
        &Status::Failed(
            "catalog data unavailable: catalog document could not be read".to_string()
        )
    );
}

#[test]
fn test_search_filters_on_each_keystroke() {
    let mut browser = loaded(services());
    browser.update(key(KeyCode::Char('/')));
    assert_eq!(browser.mode(), Mode::Searching);

    type_text(&mut browser, "des");
    assert_eq!(browser.view_state().filtered_count, 2);

    type_text(&mut browser, "ign l");
    assert_eq!(browser.query(), "design l");
    assert_eq!(browser.view_state().filtered_count, 0);

    browser.update(key(KeyCode::Backspace));
    browser.update(key(KeyCode::Backspace));
    assert_eq!(browser.query(), "design");
    assert_eq!(browser.view_state().filtered_count, 2);

    browser.update(key(KeyCode::Enter));
    assert_eq!(browser.mode(), Mode::Browsing);
    assert_eq!(browser.catalog().filter_state().query(), "design");
}

#[test]
fn test_search_keys_do_not_trigger_bindings() {
    let mut browser = loaded(many(14));
    browser.update(key(KeyCode::Char('/')));
    let cmd = browser.update(key(KeyCode::Char('q')));
    assert!(cmd.is_none());
    browser.update(key(KeyCode::Char('l')));
    assert_eq!(browser.query(), "ql");
    assert_eq!(browser.view_state().current_page, 1);
}

#[test]
fn test_cancel_search_clears_query() {
    let mut browser = loaded(services());
    browser.update(key(KeyCode::Char('/')));
    type_text(&mut browser, "copy");
    assert_eq!(browser.view_state().filtered_count, 1);

    browser.update(key(KeyCode::Esc));
    assert_eq!(browser.mode(), Mode::Browsing);
    assert_eq!(browser.query(), "");
    assert_eq!(browser.view_state().filtered_count, 3);
}

#[test]
fn test_tab_cycles_categories() {
    let mut browser = loaded(services());
    browser.update(key(KeyCode::Tab));
    assert_eq!(browser.selected_category(), "Design");
    assert_eq!(browser.view_state().filtered_count, 2);

    browser.update(key(KeyCode::Tab));
    assert_eq!(browser.selected_category(), "Writing");
    assert_eq!(browser.view_state().filtered_count, 1);

    browser.update(key(KeyCode::Tab));
    assert_eq!(browser.selected_category(), "all");
    assert_eq!(browser.view_state().filtered_count, 3);

    browser.update(key(KeyCode::BackTab));
    assert_eq!(browser.selected_category(), "Writing");
}

#[test]
fn test_page_keys() {
    let mut browser = loaded(many(14));
    assert!(plain(&browser.view()).contains("‹ [1] 2 3 ›"));

    browser.update(key(KeyCode::Right));
    assert_eq!(browser.view_state().current_page, 2);

    browser.update(key(KeyCode::Char('3')));
    assert_eq!(browser.view_state().current_page, 3);
    assert_eq!(browser.view_state().items.len(), 2);

    browser.update(key(KeyCode::Char('9')));
    assert_eq!(browser.view_state().current_page, 3);

    browser.update(key(KeyCode::Char('g')));
    assert_eq!(browser.view_state().current_page, 1);

    browser.update(key(KeyCode::End));
    assert_eq!(browser.view_state().current_page, 3);

    browser.update(key(KeyCode::PageUp));
    assert_eq!(browser.view_state().current_page, 2);
}

#[test]
fn test_category_change_resets_page() {
    let mut items = many(14);
    items[0].category = "Special".to_string();
    let mut browser = loaded(items);
    browser.update(key(KeyCode::Char('3')));
    browser.update(key(KeyCode::Tab));
    assert_eq!(browser.view_state().current_page, 1);
}

#[test]
fn test_empty_state_and_show_all() {
    let mut browser = loaded(services());
    browser.update(key(KeyCode::Char('/')));
    type_text(&mut browser, "zzz");
    browser.update(key(KeyCode::Enter));

    let view = plain(&browser.view());
    assert!(view.contains(rendering::NO_RESULTS));
    assert!(view.contains("0 services available"));

    browser.update(key(KeyCode::Esc));
    assert_eq!(browser.query(), "");
    assert_eq!(browser.selected_category(), "all");
    assert_eq!(browser.view_state().filtered_count, 3);
}

#[test]
fn test_select_category_by_label() {
    let mut browser = loaded(services());
    browser.select_category("writing");
    assert_eq!(browser.selected_category(), "Writing");
    assert_eq!(browser.view_state().filtered_count, 1);

    browser.show_all();
    assert_eq!(browser.view_state().filtered_count, 3);
}

#[test]
fn test_select_unknown_category_shows_all() {
    let mut browser = loaded(services());
    browser.select_category("writing");
    browser.select_category("video");

    assert_eq!(browser.selected_category(), "all");
    assert!(browser.catalog().filter_state().category().is_all());
    assert_eq!(browser.view_state().filtered_count, 3);
    assert!(plain(&browser.view()).contains("[all]"));
}

#[test]
fn test_zero_price_is_contact_for_price() {
    let browser = loaded(vec![Service::new(1, "Free Consult", "", "General").with_price(0.0)]);
    let view = plain(&browser.view());
    assert!(view.contains("Contact for Price"));
    assert!(!view.contains("Starting from"));
}

#[test]
fn test_compact_pagination_styles() {
    let mut browser = loaded(many(14)).with_pagination(Type::Arabic);
    browser.update(key(KeyCode::Right));
    assert!(plain(&browser.view()).contains("2/3"));

    browser.pagination = Type::Dots;
    assert!(plain(&browser.view()).contains("○ • ○"));
}

#[test]
fn test_payload_categories_preferred() {
    let mut browser: Browser<Service> = Browser::new();
    browser.load(Loaded {
        items: services(),
        categories: vec!["Design".into(), "Writing".into(), "Video".into()],
    });
    assert_eq!(browser.categories().len(), 4);
}

#[test]
fn test_quit_keys() {
    let mut browser = loaded(services());
    assert!(browser.update(key(KeyCode::Char('q'))).is_some());
    assert!(browser.update(ctrl('c')).is_some());

    browser.update(key(KeyCode::Char('/')));
    assert!(browser.update(ctrl('c')).is_some());
}

#[test]
fn test_window_width_truncates_help() {
    let mut browser = loaded(services());
    browser.update(Box::new(WindowSizeMsg {
        width: 20,
        height: 10,
    }) as Msg);
    let view = plain(&browser.view());
    let help = view.lines().last().unwrap_or_default();
    assert!(unicode_width::UnicodeWidthStr::width(help) <= 20);
}

#[test]
fn test_long_description_is_cut() {
    let long = "x".repeat(200);
    let browser = loaded(vec![Service::new(1, "Long", &long, "General")]);
    let view = plain(&browser.view());
    assert!(!view.contains(&long));
    assert!(view.contains("..."));
}

#[tokio::test]
async fn test_load_cmd_delivers_message() {
    let cmd = load_cmd(JsonText::new(
        r#"{ "services": [ { "id": 1, "title": "Logo", "description": "", "category": "Design" } ],
             "categories": [ { "id": 1, "name": "Design" } ] }"#,
    ));
    let msg = cmd.await.expect("load command produces a message");

    let mut browser: Browser<Service> = Browser::new();
    browser.update(msg);
    assert_eq!(browser.status(), &Status::Ready);
    assert_eq!(browser.categories(), &["all", "Design"]);
    assert_eq!(browser.view_state().filtered_count, 1);
}

#[derive(Debug, Clone, PartialEq)]
struct Listing {
    id: u64,
    name: String,
    channel: String,
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Item for Listing {
    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        ""
    }

    fn category(&self) -> &str {
        &self.channel
    }
}

#[tokio::test]
async fn test_load_cmd_with_custom_item_type() {
    let cmd = load_cmd_with(
        JsonText::new(
            r#"{ "services": [
                   { "id": 1, "title": "Logo", "description": "", "category": "Design" },
                   { "id": 2, "title": "Copy", "description": "", "category": "Writing" } ] }"#,
        ),
        |payload| {
            payload
                .services
                .into_iter()
                .map(|s| Listing {
                    id: s.id,
                    name: s.title,
                    channel: s.category,
                })
                .collect::<Vec<Listing>>()
        },
    );
    let msg = cmd.await.expect("load command produces a message");

    let mut browser: Browser<Listing> = Browser::new();
    browser.update(msg);
    assert_eq!(browser.status(), &Status::Ready);
    assert_eq!(browser.view_state().filtered_count, 2);
    assert_eq!(browser.categories(), &["all", "Design", "Writing"]);
}
