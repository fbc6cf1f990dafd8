//! Site chrome: navigation menu toggle and scroll-dependent header style.
//!
//! Works on the static page markup, not on product data. Elements are
//! looked up again on every event; a missing element disables only the
//! behavior that needs it.

use crate::shared::config::SiteConfig;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, EventTarget, Node};

/// Where a click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Toggle,
    Menu,
    Outside,
}

/// Menu open state after a click.
pub fn menu_after_click(open: bool, target: ClickTarget) -> bool {
    match target {
        ClickTarget::Toggle => !open,
        ClickTarget::Menu => open,
        ClickTarget::Outside => false,
    }
}

pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn init(config: &SiteConfig) {
    init_menu(
        config.menu_toggle_selector.clone(),
        config.menu_selector.clone(),
    );
    init_header(config.header_selector.clone(), config.scroll_threshold);
}

fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

fn init_menu(toggle_selector: String, menu_selector: String) {
    if query(&toggle_selector).is_none() || query(&menu_selector).is_none() {
        return;
    }

    let _ = window_event_listener(ev::click, move |ev| {
        let (Some(toggle), Some(menu)) = (query(&toggle_selector), query(&menu_selector)) else {
            return;
        };
        let open = menu.class_list().contains("open");
        let next = menu_after_click(open, classify_click(&toggle, &menu, ev.target()));
        if next != open {
            set_menu_open(&toggle, &menu, next);
        }
    });
}

fn classify_click(toggle: &Element, menu: &Element, target: Option<EventTarget>) -> ClickTarget {
    let Some(node) = target.and_then(|t| t.dyn_into::<Node>().ok()) else {
        return ClickTarget::Outside;
    };
    if toggle.contains(Some(&node)) {
        ClickTarget::Toggle
    } else if menu.contains(Some(&node)) {
        ClickTarget::Menu
    } else {
        ClickTarget::Outside
    }
}

fn set_menu_open(toggle: &Element, menu: &Element, open: bool) {
    let (add, remove) = if open { ("open", "closed") } else { ("closed", "open") };
    let classes = menu.class_list();
    warn_on_err(classes.add_1(add), "add menu class");
    warn_on_err(classes.remove_1(remove), "remove menu class");
    warn_on_err(
        toggle.set_attribute("aria-expanded", if open { "true" } else { "false" }),
        "set aria-expanded",
    );
}

fn warn_on_err<T>(result: Result<T, JsValue>, action: &str) {
    if let Err(e) = result {
        log::warn!("Failed to {}: {:?}", action, e);
    }
}

fn init_header(header_selector: String, threshold: f64) {
    if query(&header_selector).is_none() {
        return;
    }

    let apply = move || {
        let Some(header) = query(&header_selector) else {
            return;
        };
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        warn_on_err(
            header
                .class_list()
                .toggle_with_force("scrolled", header_scrolled(scroll_y, threshold)),
            "toggle header class",
        );
    };

    // Страница может открыться уже прокрученной
    apply();
    let _ = window_event_listener(ev::scroll, move |_| apply());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_after_click() {
        assert!(menu_after_click(false, ClickTarget::Toggle));
        assert!(!menu_after_click(true, ClickTarget::Toggle));
        assert!(menu_after_click(true, ClickTarget::Menu));
        assert!(!menu_after_click(false, ClickTarget::Menu));
        assert!(!menu_after_click(true, ClickTarget::Outside));
        assert!(!menu_after_click(false, ClickTarget::Outside));
    }

    #[test]
    fn test_warn_on_err_accepts_both_outcomes() {
        warn_on_err(Ok::<bool, JsValue>(true), "toggle header class");
        warn_on_err(Ok::<(), JsValue>(()), "set aria-expanded");
    }

    #[test]
    fn test_header_scrolled() {
        assert!(!header_scrolled(0.0, 50.0));
        assert!(!header_scrolled(50.0, 50.0));
        assert!(header_scrolled(50.5, 50.0));
        assert!(header_scrolled(1200.0, 50.0));
    }
}
