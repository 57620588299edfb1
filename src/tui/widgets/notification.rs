//! Toast notification widget
//!
//! Short-lived messages shown over the top-right corner: generation
//! results, copy confirmations and errors.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Get the title for this notification type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Type of notification
    pub notification_type: NotificationType,
    /// Time when notification was created (for auto-dismiss)
    created_at: Instant,
    /// How long to display it
    duration: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Top-right area a toast is drawn in
    pub fn area(frame: Rect) -> Rect {
        let width = 44.min(frame.width);
        let height = 4.min(frame.height);
        Rect::new(frame.x + frame.width - width, frame.y, width, height)
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        let color = kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// A queue of notifications to display, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification behind the ones already shown
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Check if there are no notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Number of queued notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::error("Please enter a Name");
        assert_eq!(n.message, "Please enter a Name");
        assert_eq!(n.notification_type, NotificationType::Error);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_notification_colors() {
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_notification_queue() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::success("Report generated successfully!"));
        queue.push(Notification::info("Form cleared"));
        queue.remove_expired();

        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.current().unwrap().message,
            "Report generated successfully!"
        );
    }

    #[test]
    fn test_toast_area_fits_small_frames() {
        let area = NotificationWidget::area(Rect::new(0, 0, 30, 2));
        assert_eq!(area, Rect::new(0, 0, 30, 2));

        let area = NotificationWidget::area(Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(56, 0, 44, 4));
    }
}
