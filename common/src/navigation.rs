//! ナビゲーション
//!
//! モバイルメニュー・ドロップダウンの開閉と、スクロール位置からの判定。

/// モバイルメニューの開閉
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// ドロップダウン。開くのは同時に1つまで
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownState {
    open: Option<usize>,
}

impl DropdownState {
    /// 指定のドロップダウンを開閉し、他は閉じる
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

/// `section[id]` の位置
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn is_mobile(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

/// 現在のセクション
///
/// `top - offset <= scroll_y` を満たす最後のセクション（文書順）。
/// どれも満たさなければNone。
pub fn current_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rfind(|section| scroll_y >= section.top - offset)
        .map(|section| section.id.as_str())
}

/// リンクのhrefがセクションを指しているか（`#id` を含む）
pub fn href_targets_section(href: &str, section_id: &str) -> bool {
    !section_id.is_empty() && href.contains(&format!("#{}", section_id))
}

/// メニュー内リンクのクリックでメニューを閉じるか
///
/// モバイルのドロップダウン親リンクはドロップダウン側が処理するので閉じない。
pub fn closes_menu_on_link_click(is_mobile: bool, is_dropdown_toggle: bool) -> bool {
    !(is_mobile && is_dropdown_toggle)
}

/// `<body data-page>` とリンクの `data-page` が一致するか
pub fn is_active_page(link_page: Option<&str>, current_page: Option<&str>) -> bool {
    match (link_page, current_page) {
        (Some(link), Some(current)) => !current.is_empty() && link == current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_dropdown_exclusive() {
        let mut dropdowns = DropdownState::default();
        dropdowns.toggle(0);
        assert!(dropdowns.is_open(0));
        dropdowns.toggle(2);
        assert!(!dropdowns.is_open(0));
        assert!(dropdowns.is_open(2));
        dropdowns.toggle(2);
        assert_eq!(dropdowns.open_index(), None);
        dropdowns.toggle(1);
        dropdowns.close_all();
        assert_eq!(dropdowns.open_index(), None);
    }

    #[test]
    fn test_scroll_thresholds() {
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(51.0, 50.0));
        assert!(is_mobile(768.0, 768.0));
        assert!(!is_mobile(769.0, 768.0));
    }

    #[test]
    fn test_current_section() {
        let sections = vec![
            SectionBounds::new("home", 0.0),
            SectionBounds::new("services", 800.0),
            SectionBounds::new("contact", 1600.0),
        ];
        assert_eq!(current_section(&sections, 0.0, 200.0), Some("home"));
        assert_eq!(current_section(&sections, 599.0, 200.0), Some("home"));
        assert_eq!(current_section(&sections, 600.0, 200.0), Some("services"));
        assert_eq!(current_section(&sections, 5000.0, 200.0), Some("contact"));
    }

    #[test]
    fn test_current_section_none() {
        let sections = vec![SectionBounds::new("about", 1000.0)];
        assert_eq!(current_section(&sections, 0.0, 200.0), None);
        assert_eq!(current_section(&[], 100.0, 200.0), None);
    }

    #[test]
    fn test_href_targets_section() {
        assert!(href_targets_section("index.html#services", "services"));
        assert!(href_targets_section("#services", "services"));
        assert!(!href_targets_section("#contact", "services"));
        assert!(!href_targets_section("#contact", ""));
    }

    #[test]
    fn test_link_click_closes_menu() {
        assert!(closes_menu_on_link_click(false, true));
        assert!(closes_menu_on_link_click(true, false));
        assert!(!closes_menu_on_link_click(true, true));
    }

    #[test]
    fn test_active_page() {
        assert!(is_active_page(Some("gallery"), Some("gallery")));
        assert!(!is_active_page(Some("home"), Some("gallery")));
        assert!(!is_active_page(Some(""), Some("")));
        assert!(!is_active_page(None, Some("gallery")));
        assert!(!is_active_page(Some("gallery"), None));
    }
}
