//! 単独画像モーダル
//!
//! `.clickable-image` 用。ライトボックスと同じ開閉契約で、インデックスを持たない。
//! 画像の読み込みは Loading → Loaded / Failed の3状態で扱い、
//! 壊れた画像でも「読み込み中」のまま残らないようにする。

use crate::gallery::KeyAction;

pub const LOADING_TEXT: &str = "Loading...";
pub const FAILED_TEXT: &str = "Failed to load image";

/// 画像要素の読み込み状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl ImageLoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImageLoadState::Loading)
    }

    /// インジケータに出す文字列。読み込み完了後は出さない
    pub fn indicator_text(&self) -> Option<&'static str> {
        match self {
            ImageLoadState::Loading => Some(LOADING_TEXT),
            ImageLoadState::Loaded => None,
            ImageLoadState::Failed => Some(FAILED_TEXT),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageLoadState::Loading => "loading",
            ImageLoadState::Loaded => "loaded",
            ImageLoadState::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageModal {
    #[default]
    Closed,
    Open {
        src: String,
        alt: String,
        load: ImageLoadState,
    },
}

impl ImageModal {
    pub fn open(&mut self, src: impl Into<String>, alt: impl Into<String>) {
        *self = ImageModal::Open {
            src: src.into(),
            alt: alt.into(),
            load: ImageLoadState::Loading,
        };
    }

    /// 閉じる。既に閉じていれば何もしない。状態が変わったらtrue
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = ImageModal::Closed;
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ImageModal::Open { .. })
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            ImageModal::Open { src, .. } => Some(src),
            ImageModal::Closed => None,
        }
    }

    pub fn alt(&self) -> Option<&str> {
        match self {
            ImageModal::Open { alt, .. } => Some(alt),
            ImageModal::Closed => None,
        }
    }

    pub fn load_state(&self) -> Option<ImageLoadState> {
        match self {
            ImageModal::Open { load, .. } => Some(*load),
            ImageModal::Closed => None,
        }
    }

    pub fn mark_loaded(&mut self, loaded_src: &str) -> bool {
        self.settle(loaded_src, ImageLoadState::Loaded)
    }

    pub fn mark_failed(&mut self, failed_src: &str) -> bool {
        self.settle(failed_src, ImageLoadState::Failed)
    }

    /// 表示中のsrcと一致し、まだLoadingのときだけ遷移する。
    /// 前回開いた画像のload/errorが遅れて届いても無視される。
    fn settle(&mut self, event_src: &str, outcome: ImageLoadState) -> bool {
        match self {
            ImageModal::Open { src, load, .. } if src.as_str() == event_src && !load.is_terminal() => {
                *load = outcome;
                true
            }
            _ => false,
        }
    }

    /// Escapeのみ反応する
    pub fn handle_key(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Close => self.close(),
            KeyAction::Previous | KeyAction::Next => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_starts_loading() {
        let mut modal = ImageModal::default();
        modal.open("full/cover.jpg", "Cover");
        assert!(modal.is_open());
        assert_eq!(modal.src(), Some("full/cover.jpg"));
        assert_eq!(modal.alt(), Some("Cover"));
        assert_eq!(modal.load_state(), Some(ImageLoadState::Loading));
        assert_eq!(modal.load_state().unwrap().indicator_text(), Some(LOADING_TEXT));
    }

    #[test]
    fn test_loaded() {
        let mut modal = ImageModal::default();
        modal.open("a.jpg", "");
        assert!(modal.mark_loaded("a.jpg"));
        assert_eq!(modal.load_state(), Some(ImageLoadState::Loaded));
        assert_eq!(ImageLoadState::Loaded.indicator_text(), None);
    }

    #[test]
    fn test_failed_replaces_indicator() {
        let mut modal = ImageModal::default();
        modal.open("missing.jpg", "");
        assert!(modal.mark_failed("missing.jpg"));
        assert_eq!(modal.load_state(), Some(ImageLoadState::Failed));
        assert_eq!(ImageLoadState::Failed.indicator_text(), Some(FAILED_TEXT));
    }

    #[test]
    fn test_terminal_states_do_not_change() {
        let mut modal = ImageModal::default();
        modal.open("a.jpg", "");
        modal.mark_failed("a.jpg");
        assert!(!modal.mark_loaded("a.jpg"));
        assert_eq!(modal.load_state(), Some(ImageLoadState::Failed));
    }

    #[test]
    fn test_stale_events_ignored() {
        let mut modal = ImageModal::default();
        modal.open("first.jpg", "");
        modal.open("second.jpg", "");
        assert!(!modal.mark_failed("first.jpg"));
        assert_eq!(modal.load_state(), Some(ImageLoadState::Loading));

        modal.close();
        assert!(!modal.mark_loaded("second.jpg"));
        assert_eq!(modal.load_state(), None);
    }

    #[test]
    fn test_close_idempotent() {
        let mut modal = ImageModal::default();
        assert!(!modal.close());
        modal.open("a.jpg", "");
        assert!(modal.close());
        assert!(!modal.close());
        assert!(!modal.is_open());
    }

    #[test]
    fn test_only_escape_closes() {
        let mut modal = ImageModal::default();
        modal.open("a.jpg", "");
        assert!(!modal.handle_key(KeyAction::Next));
        assert!(modal.is_open());
        assert!(modal.handle_key(KeyAction::Close));
        assert!(!modal.is_open());
    }
}
