//! カテゴリフィルタ
//!
//! 状態は「全て」か、カテゴリタグ1つ。ボタンのactive表示は常にちょうど1つ。

/// ワイルドカードのタグ
pub const ALL_TAG: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// `data-filter` の値から変換。空や "all" は全て
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag == ALL_TAG {
            Filter::All
        } else {
            Filter::Category(tag.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL_TAG,
            Filter::Category(tag) => tag,
        }
    }

    /// `data-category` が無い項目は「全て」のときだけ表示する
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(tag) => category.map(str::trim) == Some(tag.as_str()),
        }
    }
}

/// フィルタボタン群と対象項目の状態
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    selectors: Vec<Filter>,
    item_categories: Vec<Option<String>>,
    active: Filter,
    active_selector: Option<usize>,
}

impl FilterController {
    /// # Arguments
    /// * `selector_tags` - ボタンの `data-filter`（文書順）
    /// * `item_categories` - 項目の `data-category`（文書順）
    pub fn new(selector_tags: &[String], item_categories: Vec<Option<String>>) -> Self {
        Self {
            selectors: selector_tags.iter().map(|tag| Filter::parse(tag)).collect(),
            item_categories,
            active: Filter::All,
            active_selector: None,
        }
    }

    /// ボタンも項目も無ければ何もしない
    pub fn is_inert(&self) -> bool {
        self.selectors.is_empty() || self.item_categories.is_empty()
    }

    pub fn active(&self) -> &Filter {
        &self.active
    }

    pub fn active_selector(&self) -> Option<usize> {
        self.active_selector
    }

    /// ボタンを押した
    ///
    /// 範囲外なら何もせずfalse。
    pub fn activate(&mut self, selector_index: usize) -> bool {
        let Some(filter) = self.selectors.get(selector_index) else {
            return false;
        };
        self.active = filter.clone();
        self.active_selector = Some(selector_index);
        true
    }

    pub fn is_selector_active(&self, selector_index: usize) -> bool {
        self.active_selector == Some(selector_index)
    }

    pub fn is_visible(&self, item_index: usize) -> bool {
        self.item_categories
            .get(item_index)
            .map(|category| self.active.matches(category.as_deref()))
            .unwrap_or(false)
    }

    /// 項目ごとの表示可否（文書順）
    pub fn visibility(&self) -> Vec<bool> {
        self.item_categories
            .iter()
            .map(|category| self.active.matches(category.as_deref()))
            .collect()
    }

    pub fn selector_count(&self) -> usize {
        self.selectors.len()
    }

    pub fn item_count(&self) -> usize {
        self.item_categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn categories(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|s| Some(s.to_string())).collect()
    }

    #[test]
    fn test_parse() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse(""), Filter::All);
        assert_eq!(Filter::parse(" video "), Filter::Category("video".into()));
        assert_eq!(Filter::parse("video").as_str(), "video");
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let controller = FilterController::new(&tags(&["all", "video"]), categories(&["video", "design"]));
        assert_eq!(controller.active(), &Filter::All);
        assert_eq!(controller.visibility(), vec![true, true]);
        assert_eq!(controller.active_selector(), None);
    }

    #[test]
    fn test_activate_category() {
        let mut controller = FilterController::new(
            &tags(&["all", "design", "video"]),
            categories(&["video", "design", "video", "photo"]),
        );
        assert!(controller.activate(2));
        assert_eq!(controller.visibility(), vec![true, false, true, false]);

        let active: Vec<usize> = (0..controller.selector_count())
            .filter(|&i| controller.is_selector_active(i))
            .collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn test_all_after_category() {
        let mut controller = FilterController::new(&tags(&["all", "video"]), categories(&["video", "design"]));
        controller.activate(1);
        controller.activate(0);
        assert_eq!(controller.visibility(), vec![true, true]);
        assert!(controller.is_selector_active(0));
        assert!(!controller.is_selector_active(1));
    }

    #[test]
    fn test_uncategorized_item() {
        let mut controller = FilterController::new(&tags(&["all", "video"]), vec![None, Some("video".into())]);
        assert!(controller.is_visible(0));
        controller.activate(1);
        assert!(!controller.is_visible(0));
        assert!(controller.is_visible(1));
        assert!(!controller.is_visible(5));
    }

    #[test]
    fn test_out_of_range_selector() {
        let mut controller = FilterController::new(&tags(&["all"]), categories(&["video"]));
        assert!(!controller.activate(3));
        assert_eq!(controller.active_selector(), None);
    }

    #[test]
    fn test_inert() {
        assert!(FilterController::new(&[], categories(&["video"])).is_inert());
        assert!(FilterController::new(&tags(&["all"]), vec![]).is_inert());
        assert!(!FilterController::new(&tags(&["all"]), categories(&["video"])).is_inert());
    }
}
