//! Transient notices shown in the editor's status bar.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity level for status bar notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

/// A short-lived status bar notice.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub body: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    /// Creates an info notice with a 4-second TTL.
    pub fn info(body: impl Into<String>) -> Self {
        Self::with_ttl(NotificationLevel::Info, body, Duration::from_secs(4))
    }

    /// Creates a warning notice with a 6-second TTL.
    pub fn warning(body: impl Into<String>) -> Self {
        Self::with_ttl(NotificationLevel::Warning, body, Duration::from_secs(6))
    }

    pub fn with_ttl(level: NotificationLevel, body: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level,
            body: body.into(),
            created_at: Instant::now(),
            ttl,
        }
    }

    /// Returns `true` if this notice has exceeded its TTL.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// A bounded queue of notices that auto-evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    /// Creates a new queue with the given maximum capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a notice, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(level = ?notification.level, body = %notification.body, "notice");
        self.evict_expired();
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// The most recent notice that has not expired.
    pub fn latest(&mut self) -> Option<&Notification> {
        self.evict_expired();
        self.items.back()
    }

    /// Returns the number of notices currently in the queue (including expired).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(8)
    }
}
