//! ギャラリー/ライトボックス
//!
//! - ImageDescriptor: サムネイル1枚分の情報（ページのマークアップから取得）
//! - ImageSet: 文書順に並んだ画像列。取得後は不変
//! - LightboxViewer: 表示中インデックスと開閉状態
//!
//! インデックスは常に `0 <= current_index < len`（len > 0 のとき）を保つ。

/// 画像1枚分の情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// サムネイルの現在のsrc
    pub thumbnail_src: String,
    /// `data-full` のフル解像度画像
    pub full_src: Option<String>,
    pub alt: String,
    /// `.gallery-overlay h3`
    pub caption_title: Option<String>,
    /// `.gallery-overlay p`
    pub caption_subtitle: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl ImageDescriptor {
    pub fn new(thumbnail_src: impl Into<String>) -> Self {
        Self {
            thumbnail_src: thumbnail_src.into(),
            ..Default::default()
        }
    }

    pub fn with_full(mut self, full_src: impl Into<String>) -> Self {
        self.full_src = Some(full_src.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn with_caption(mut self, title: Option<&str>, subtitle: Option<&str>) -> Self {
        self.caption_title = title.map(str::to_string);
        self.caption_subtitle = subtitle.map(str::to_string);
        self
    }

    /// ライトボックスに表示するsrc
    ///
    /// フル解像度が指定されていればそれを、無ければサムネイルを使う。
    pub fn display_src(&self) -> &str {
        match self.full_src.as_deref() {
            Some(full) if !full.trim().is_empty() => full,
            _ => &self.thumbnail_src,
        }
    }

    /// キャプション文字列
    ///
    /// | title | subtitle | 結果 |
    /// |---|---|---|
    /// | あり | あり（異なる） | `"title - subtitle"` |
    /// | あり | なし/同じ | `"title"` |
    /// | なし | あり | `"subtitle"` |
    /// | なし | なし | alt（空なら空文字） |
    ///
    /// 比較は前後の空白を除いて行う。
    pub fn caption(&self) -> String {
        let title = non_blank(self.caption_title.as_deref());
        let subtitle = non_blank(self.caption_subtitle.as_deref());

        match (title, subtitle) {
            (Some(title), Some(subtitle)) if title != subtitle => format!("{} - {}", title, subtitle),
            (Some(title), _) => title.to_string(),
            (None, Some(subtitle)) => subtitle.to_string(),
            (None, None) => self.alt.trim().to_string(),
        }
    }
}

/// 文書順の画像列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet {
    images: Vec<ImageDescriptor>,
}

impl ImageSet {
    pub fn new(images: Vec<ImageDescriptor>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.images.iter()
    }
}

impl FromIterator<ImageDescriptor> for ImageSet {
    fn from_iter<I: IntoIterator<Item = ImageDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// オーバーレイ表示中のキー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Previous,
    Next,
}

impl KeyAction {
    /// `KeyboardEvent.key` から変換
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(KeyAction::Close),
            "ArrowLeft" | "Left" => Some(KeyAction::Previous),
            "ArrowRight" | "Right" => Some(KeyAction::Next),
            _ => None,
        }
    }
}

/// ライトボックスの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxViewer {
    images: ImageSet,
    current_index: usize,
    is_open: bool,
}

impl LightboxViewer {
    pub fn new(images: ImageSet) -> Self {
        Self {
            images,
            current_index: 0,
            is_open: false,
        }
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// 表示中の画像。閉じているときはNone
    pub fn current(&self) -> Option<&ImageDescriptor> {
        if self.is_open {
            self.images.get(self.current_index)
        } else {
            None
        }
    }

    /// 指定インデックスで開く
    ///
    /// 範囲外は何もせずfalseを返す（呼び出し元はサムネイルのクリックのみ）。
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current_index = index;
        self.is_open = true;
        true
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let len = self.images.len();
        if !self.is_open || len == 0 {
            return;
        }
        let len = len as isize;
        self.current_index = ((self.current_index as isize + delta + len) % len) as usize;
    }

    /// 閉じる。既に閉じていれば何もしない。状態が変わったらtrue
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open;
        self.is_open = false;
        was_open
    }

    /// キー操作。閉じているときは無視してfalse
    pub fn handle_key(&mut self, action: KeyAction) -> bool {
        if !self.is_open {
            return false;
        }
        match action {
            KeyAction::Close => {
                self.close();
            }
            KeyAction::Previous => self.previous(),
            KeyAction::Next => self.next(),
        }
        true
    }
}
