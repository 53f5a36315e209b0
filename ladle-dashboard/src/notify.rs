//! Toast notification queue
//!
//! Managers push notices; the UI drains and displays them. The queue is
//! bounded, dropping the oldest entry on overflow.

use std::collections::VecDeque;

const DEFAULT_CAPACITY: usize = 16;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A single user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Bounded FIFO of pending notices
#[derive(Debug, Default)]
pub struct NoticeQueue {
    queue: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        if self.queue.len() == DEFAULT_CAPACITY {
            self.queue.pop_front();
        }
        let message = message.into();
        tracing::debug!(?level, %message, "notice");
        self.queue.push_back(Notice { level, message });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Remove and return all pending notices, oldest first
    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }
}
