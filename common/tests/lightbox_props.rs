//! ライトボックスの巡回ナビゲーションの性質テスト

use codeaayu_common::{ImageDescriptor, ImageSet, LightboxViewer};
use proptest::prelude::*;

fn viewer_with(len: usize) -> LightboxViewer {
    let images: ImageSet = (0..len)
        .map(|i| ImageDescriptor::new(format!("thumbs/{}.jpg", i)))
        .collect();
    LightboxViewer::new(images)
}

proptest! {
    /// 任意の位置からn回nextすると (i + n) mod len
    #[test]
    fn next_n_times_wraps(len in 1usize..40, start in 0usize..40, n in 0usize..200) {
        let start = start % len;
        let mut viewer = viewer_with(len);
        prop_assert!(viewer.open(start));
        for _ in 0..n {
            viewer.next();
        }
        prop_assert_eq!(viewer.current_index(), (start + n) % len);
    }

    /// previousはnextの逆
    #[test]
    fn previous_undoes_next(len in 1usize..40, start in 0usize..40, n in 0usize..100) {
        let start = start % len;
        let mut viewer = viewer_with(len);
        viewer.open(start);
        for _ in 0..n {
            viewer.next();
        }
        for _ in 0..n {
            viewer.previous();
        }
        prop_assert_eq!(viewer.current_index(), start);
    }

    /// インデックスは常に範囲内
    #[test]
    fn index_stays_in_bounds(len in 1usize..20, moves in prop::collection::vec(any::<bool>(), 0..100)) {
        let mut viewer = viewer_with(len);
        viewer.open(0);
        for forward in moves {
            if forward { viewer.next() } else { viewer.previous() }
            prop_assert!(viewer.current_index() < len);
        }
    }

    /// 表示srcはフル解像度優先
    #[test]
    fn display_src_prefers_full(thumb in "[a-z]{1,12}\\.jpg", full in proptest::option::of("[a-z]{1,12}\\.png")) {
        let mut image = ImageDescriptor::new(thumb.clone());
        if let Some(full) = &full {
            image = image.with_full(full.clone());
        }
        let mut viewer = LightboxViewer::new(ImageSet::new(vec![image]));
        viewer.open(0);
        let expected = full.unwrap_or(thumb);
        prop_assert_eq!(viewer.current().unwrap().display_src(), expected.as_str());
    }
}

#[test]
fn boundaries_wrap() {
    let mut viewer = viewer_with(5);
    viewer.open(0);
    viewer.previous();
    assert_eq!(viewer.current_index(), 4);

    viewer.open(4);
    viewer.next();
    assert_eq!(viewer.current_index(), 0);
}

#[test]
fn close_twice() {
    let mut viewer = viewer_with(3);
    viewer.open(1);
    viewer.close();
    assert!(!viewer.is_open());
    viewer.close();
    assert!(!viewer.is_open());
}
