//! 外部HTTP呼び出し

pub mod forms;
pub mod http;
