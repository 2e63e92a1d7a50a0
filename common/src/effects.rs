//! スクロール・ポインタ連動の見た目の計算
//!
//! DOMには触らず、付けるべきスタイル値だけを返す。

/// ヒーローのパララックス係数
pub const PARALLAX_RATE: f64 = 0.5;
/// この距離スクロールすると不透明度が0になる(px)
pub const PARALLAX_FADE_DISTANCE: f64 = 700.0;
/// マグネットボタンの追従率
pub const MAGNETIC_STRENGTH: f64 = 0.1;

/// ヒーローに設定するスタイル
#[derive(Debug, Clone, PartialEq)]
pub struct HeroStyle {
    pub transform: String,
    pub opacity: f64,
}

impl HeroStyle {
    /// モバイル用（効果なし）
    pub fn reset() -> Self {
        Self {
            transform: "none".into(),
            opacity: 1.0,
        }
    }
}

/// パララックス
///
/// ヒーローが画面外（scroll_y >= viewport_height）ならNoneで、スタイルは変えない。
pub fn hero_parallax(scroll_y: f64, viewport_width: f64, viewport_height: f64, breakpoint: f64) -> Option<HeroStyle> {
    if scroll_y >= viewport_height {
        return None;
    }
    if viewport_width <= breakpoint {
        return Some(HeroStyle::reset());
    }
    Some(HeroStyle {
        transform: format!("translateY({}px)", scroll_y * PARALLAX_RATE),
        opacity: (1.0 - scroll_y / PARALLAX_FADE_DISTANCE).clamp(0.0, 1.0),
    })
}

/// マグネットボタンの移動量
///
/// ポインタ位置とボタン中心の差の10%。`rect` は (left, top, width, height)。
pub fn magnetic_offset(pointer_x: f64, pointer_y: f64, rect: (f64, f64, f64, f64)) -> (f64, f64) {
    let (left, top, width, height) = rect;
    let dx = pointer_x - left - width / 2.0;
    let dy = pointer_y - top - height / 2.0;
    (dx * MAGNETIC_STRENGTH, dy * MAGNETIC_STRENGTH)
}

pub fn magnetic_transform(offset: (f64, f64)) -> String {
    format!("translate({}px, {}px)", offset.0, offset.1)
}

/// ページ内リンクのスクロール先
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorScroll {
    /// `#` だけのリンク
    Top,
    To(f64),
    /// 対象が無いのでブラウザに任せる
    Ignore,
}

/// # Arguments
/// * `href` - リンクのhref（`#` で始まる）
/// * `target_top` - 対象要素の offsetTop（見つからなければNone）
/// * `offset` - 固定ヘッダーの高さ
pub fn anchor_scroll(href: &str, target_top: Option<f64>, offset: f64) -> AnchorScroll {
    if href == "#" {
        return AnchorScroll::Top;
    }
    match target_top {
        Some(top) => AnchorScroll::To(top - offset),
        None => AnchorScroll::Ignore,
    }
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_desktop() {
        let style = hero_parallax(140.0, 1280.0, 900.0, 768.0).unwrap();
        assert_eq!(style.transform, "translateY(70px)");
        assert!((style.opacity - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_parallax_mobile_resets() {
        assert_eq!(hero_parallax(140.0, 375.0, 800.0, 768.0), Some(HeroStyle::reset()));
    }

    #[test]
    fn test_parallax_offscreen() {
        assert_eq!(hero_parallax(900.0, 1280.0, 900.0, 768.0), None);
    }

    #[test]
    fn test_parallax_opacity_clamped() {
        let style = hero_parallax(800.0, 1920.0, 1080.0, 768.0).unwrap();
        assert_eq!(style.opacity, 0.0);
    }

    #[test]
    fn test_magnetic_offset() {
        let offset = magnetic_offset(150.0, 40.0, (100.0, 20.0, 80.0, 20.0));
        assert!((offset.0 - 1.0).abs() < 1e-9);
        assert!((offset.1 - 1.0).abs() < 1e-9);
        assert_eq!(magnetic_transform((1.0, -2.5)), "translate(1px, -2.5px)");
    }

    #[test]
    fn test_anchor_scroll() {
        assert_eq!(anchor_scroll("#", None, 80.0), AnchorScroll::Top);
        assert_eq!(anchor_scroll("#about", Some(500.0), 80.0), AnchorScroll::To(420.0));
        assert_eq!(anchor_scroll("#missing", None, 80.0), AnchorScroll::Ignore);
    }

    #[test]
    fn test_back_to_top() {
        assert!(!back_to_top_visible(300.0, 300.0));
        assert!(back_to_top_visible(301.0, 300.0));
    }
}
