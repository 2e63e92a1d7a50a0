//! ナビゲーション
//!
//! ヘッダー断片の読み込み後に配線する（それまでナビの要素は存在しない）。

use std::cell::RefCell;
use std::rc::Rc;

use codeaayu_common::navigation::{
    closes_menu_on_link_click, current_section, href_targets_section, is_active_page, is_mobile, is_scrolled,
};
use codeaayu_common::{DropdownState, MenuState, SectionBounds, SiteConfig};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

use crate::dom;

#[derive(Default)]
struct NavState {
    menu: MenuState,
    dropdowns: DropdownState,
}

/// 配線に使う要素
struct NavElements {
    navbar: Option<Element>,
    toggle: Option<Element>,
    menu: Option<Element>,
    dropdown_items: Vec<Element>,
}

impl NavElements {
    fn capture() -> Self {
        Self {
            navbar: dom::query(".navbar"),
            toggle: dom::query(".nav-toggle"),
            menu: dom::query(".nav-menu"),
            dropdown_items: dom::query_all(".nav-item.has-dropdown"),
        }
    }

    fn render_menu(&self, menu: MenuState) {
        for element in [&self.toggle, &self.menu].into_iter().flatten() {
            dom::set_class(element, "active", menu.is_open());
        }
    }

    fn render_dropdowns(&self, dropdowns: DropdownState) {
        for (index, item) in self.dropdown_items.iter().enumerate() {
            dom::set_class(item, "dropdown-active", dropdowns.is_open(index));
        }
    }
}

fn contains_target(element: &Element, event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Node>().ok())
        .map(|node| element.contains(Some(&node)))
        .unwrap_or(false)
}

/// `<body data-page>` と一致する `.nav-link[data-page]` だけを active にする
///
/// bodyに `data-page` が無ければリンクには触らない。
pub fn mark_active_page() {
    let Some(current) = dom::document()
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute("data-page"))
    else {
        return;
    };
    for link in dom::query_all(".nav-link[data-page]") {
        let active = is_active_page(link.get_attribute("data-page").as_deref(), Some(current.as_str()));
        dom::set_class(&link, "active", active);
    }
}

/// 現在のセクションに対応する `.dropdown-link` だけ active にする
pub fn update_section_links(sections: &[SectionBounds], links: &[Element], scroll_y: f64, offset: f64) {
    let current = current_section(sections, scroll_y, offset);
    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        let active = current.map(|id| href_targets_section(&href, id)).unwrap_or(false);
        dom::set_class(link, "active", active);
    }
}

fn capture_sections() -> Vec<SectionBounds> {
    dom::query_all("section[id]")
        .iter()
        .filter_map(|section| Some(SectionBounds::new(section.id(), dom::offset_top(section)?)))
        .collect()
}

/// ナビゲーション一式を配線する
pub fn attach(config: &SiteConfig) {
    let elements = Rc::new(NavElements::capture());
    let state = Rc::new(RefCell::new(NavState::default()));
    let breakpoint = config.mobile_breakpoint;

    if let Some(toggle) = &elements.toggle {
        let elements = Rc::clone(&elements);
        let state = Rc::clone(&state);
        EventListener::new(toggle, "click", move |_| {
            let mut state = state.borrow_mut();
            state.menu.toggle();
            elements.render_menu(state.menu);
        })
        .forget();
    }

    for link in dom::query_all(".nav-link") {
        let elements = Rc::clone(&elements);
        let state = Rc::clone(&state);
        let is_dropdown_toggle = link
            .parent_element()
            .map(|parent| parent.class_list().contains("has-dropdown"))
            .unwrap_or(false);
        EventListener::new(&link, "click", move |_| {
            let mobile = is_mobile(dom::viewport_width(), breakpoint);
            if closes_menu_on_link_click(mobile, is_dropdown_toggle) {
                let mut state = state.borrow_mut();
                state.menu.close();
                elements.render_menu(state.menu);
            }
        })
        .forget();
    }

    // モバイルではドロップダウン親リンクで遷移せず開閉する
    for (index, item) in elements.dropdown_items.iter().enumerate() {
        let Some(link) = dom::query_within(item, ".nav-link") else {
            continue;
        };
        let elements = Rc::clone(&elements);
        let state = Rc::clone(&state);
        EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if !is_mobile(dom::viewport_width(), breakpoint) {
                    return;
                }
                event.prevent_default();
                let mut state = state.borrow_mut();
                state.dropdowns.toggle(index);
                elements.render_dropdowns(state.dropdowns);
            },
        )
        .forget();
    }

    if let Some(document) = dom::document() {
        let elements = Rc::clone(&elements);
        let state = Rc::clone(&state);
        EventListener::new(&document, "click", move |event| {
            let mut state = state.borrow_mut();
            let inside_dropdown = elements.dropdown_items.iter().any(|item| contains_target(item, event));
            if !inside_dropdown && state.dropdowns.open_index().is_some() {
                state.dropdowns.close_all();
                elements.render_dropdowns(state.dropdowns);
            }

            let inside_nav = [&elements.toggle, &elements.menu]
                .into_iter()
                .flatten()
                .any(|element| contains_target(element, event));
            if !inside_nav && state.menu.is_open() {
                state.menu.close();
                elements.render_menu(state.menu);
            }
        })
        .forget();
    }

    let sections = capture_sections();
    let section_links = dom::query_all(".dropdown-link");
    let scroll_threshold = config.nav_scroll_threshold;
    let section_offset = config.section_offset;

    let on_scroll = move || {
        let scroll_y = dom::scroll_y();
        if let Some(navbar) = &elements.navbar {
            dom::set_class(navbar, "scrolled", is_scrolled(scroll_y, scroll_threshold));
        }
        if !sections.is_empty() {
            update_section_links(&sections, &section_links, scroll_y, section_offset);
        }
    };
    on_scroll();

    if let Some(window) = dom::window() {
        EventListener::new(&window, "scroll", move |_| on_scroll()).forget();
    }

    mark_active_page();
}
