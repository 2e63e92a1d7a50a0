//! カテゴリフィルタのDOM反映

use std::cell::RefCell;
use std::rc::Rc;

use codeaayu_common::FilterController;
use gloo::events::EventListener;
use web_sys::Element;

use crate::dom;

pub const SELECTOR_SELECTOR: &str = ".filter-btn[data-filter]";
pub const ITEM_SELECTOR: &str = ".work-item, .gallery-item, .article-card, .video-card";

/// ボタンと項目の表示を状態に合わせる
pub fn render(controller: &FilterController, selectors: &[Element], items: &[Element]) {
    // 全て外してから1つだけ付ける
    for selector in selectors {
        dom::set_class(selector, "active", false);
    }
    if let Some(active) = controller.active_selector().and_then(|i| selectors.get(i)) {
        dom::set_class(active, "active", true);
    }

    for (item, visible) in items.iter().zip(controller.visibility()) {
        dom::set_style(item, "display", if visible { "block" } else { "none" });
        dom::set_class(item, "fade-in", visible);
    }
}

/// フィルタボタンを配線する。ボタンか項目が無ければ何もしない
pub fn attach() -> Option<Rc<RefCell<FilterController>>> {
    let selectors = dom::query_all(SELECTOR_SELECTOR);
    let items = dom::query_all(ITEM_SELECTOR);

    let tags: Vec<String> = selectors
        .iter()
        .map(|s| s.get_attribute("data-filter").unwrap_or_default())
        .collect();
    let categories = items.iter().map(|item| item.get_attribute("data-category")).collect();

    let controller = FilterController::new(&tags, categories);
    if controller.is_inert() {
        return None;
    }

    let controller = Rc::new(RefCell::new(controller));
    let selectors = Rc::new(selectors);
    let items = Rc::new(items);

    for (index, selector) in selectors.iter().enumerate() {
        let controller = Rc::clone(&controller);
        let selectors = Rc::clone(&selectors);
        let items = Rc::clone(&items);
        EventListener::new(selector, "click", move |_| {
            let mut controller = controller.borrow_mut();
            if controller.activate(index) {
                render(&controller, &selectors, &items);
            }
        })
        .forget();
    }

    Some(controller)
}
