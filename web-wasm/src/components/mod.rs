//! UIコンポーネント

pub mod image_modal;
pub mod lightbox;
pub mod notification;
