//! 通知バナー
//!
//! 同時に表示するのは1件だけ。新しい通知は前の通知を置き換える。
//! 消去は2段階（Leaving でスライドアウト → 削除）。
//! タイマーはidで対象を指定するので、置き換え済みの通知のタイマーは何もしない。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    /// `notification notification-<kind>`
    pub fn css_class(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✕",
            NotificationKind::Info => "ℹ",
        }
    }

    /// (背景, 文字, 枠線)
    pub fn colors(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            NotificationKind::Success => ("#d4edda", "#155724", "#c3e6cb"),
            NotificationKind::Error => ("#f8d7da", "#721c24", "#f5c6cb"),
            NotificationKind::Info => ("#d1ecf1", "#0c5460", "#bee5eb"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

impl Notification {
    pub fn is_leaving(&self) -> bool {
        self.phase == NotificationPhase::Leaving
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 通知を表示し、そのidを返す。表示中の通知は置き換えられる
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification {
            id,
            message: message.into(),
            kind,
            phase: NotificationPhase::Visible,
        });
        id
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// 1段階目：フェードアウト開始
    ///
    /// 対象が表示中でなければfalse（置き換え済み・削除済み・消去中）。
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(notification) if notification.id == id && !notification.is_leaving() => {
                notification.phase = NotificationPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// 2段階目：削除
    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// 表示中の通知数（0か1）
    pub fn len(&self) -> usize {
        usize::from(self.current.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
