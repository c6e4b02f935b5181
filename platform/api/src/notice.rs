//! One-way, user-facing notifications.
//!
//! Services emit a [`Notice`] after every mutation or sign-in attempt. Whoever
//! renders them (a UI toast layer, the CLI's stderr) subscribes; nobody is
//! required to listen.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
    Info,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Notice {
    Toast { level: Level, message: String },
    Navigate { to: String },
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice::Toast {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice::Toast {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice::Toast {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn navigate(to: impl Into<String>) -> Self {
        Notice::Navigate { to: to.into() }
    }
}

/// Cloneable sender half of the notification channel.
#[derive(Clone, Debug)]
pub struct Notifier {
    tx: broadcast::Sender<Notice>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    pub fn notify(&self, notice: Notice) {
        debug!(?notice, "notice");
        // no receivers is fine
        let _ = self.tx.send(notice);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notice::error(message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(Notice::info(message));
    }
}

/// Pull every notice currently queued on `rx` without waiting.
pub fn drain(rx: &mut broadcast::Receiver<Notice>) -> Vec<Notice> {
    let mut out = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(notice) => out.push(notice),
            Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
            Err(_) => break,
        }
    }
    out
}
