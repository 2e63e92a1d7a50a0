//! CodeAayu Creatives 共通ライブラリ
//!
//! サイトの各コントローラが持つ状態と規則をDOMから切り離して定義する。
//! WASM側（web-wasm）はDOMを一度だけ読み取り、ここの型に取り込んでから操作する。

pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod filter;
pub mod fragments;
pub mod gallery;
pub mod modal;
pub mod navigation;
pub mod notification;
pub mod theme;

pub use config::SiteConfig;
pub use contact::{is_valid_email, ContactSubmission, SubmissionGuard, SubmitResponse};
pub use error::{Error, Result, ValidationError};
pub use filter::{Filter, FilterController};
pub use fragments::{FragmentOutcome, FragmentSpec, LoadReport};
pub use gallery::{ImageDescriptor, ImageSet, KeyAction, LightboxViewer};
pub use modal::{ImageLoadState, ImageModal};
pub use navigation::{DropdownState, MenuState, SectionBounds};
pub use notification::{Notification, NotificationCenter, NotificationKind, NotificationPhase};
pub use theme::Theme;
