//! ページ上の既存マークアップに振る舞いを付けるコントローラ
//!
//! 各コントローラは対象の要素が無ければ何もせずに戻る。

pub mod contact_form;
pub mod filter;
pub mod fragments;
pub mod gallery;
pub mod navigation;
pub mod observe;
pub mod page;
pub mod scroll;
pub mod theme;
