//! Swipe session configuration options.

use core::time::Duration;

/// Configuration options for a [`SwipeSession`](crate::SwipeSession).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use card_picker::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_long_press_cancel_after(Duration::from_secs(1))
///     .with_delay_before_commit(Some(Duration::from_millis(800)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionOptions {
    /// How long a press must be held before the card being entered is
    /// discarded.
    pub long_press_cancel_after: Duration,
    /// Delay after which a resolved card is committed on its own.
    /// `None` waits for an explicit commit.
    pub delay_before_commit: Option<Duration>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            long_press_cancel_after: Duration::from_millis(500),
            delay_before_commit: None,
        }
    }
}

impl SessionOptions {
    /// Sets how long a press must be held to discard the card.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use card_picker::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_long_press_cancel_after(Duration::from_secs(2));
    /// assert_eq!(options.long_press_cancel_after, Duration::from_secs(2));
    /// ```
    #[must_use]
    pub const fn with_long_press_cancel_after(mut self, delay: Duration) -> Self {
        self.long_press_cancel_after = delay;
        self
    }

    /// Sets the automatic commit delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use card_picker::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_delay_before_commit(Some(Duration::from_secs(3)));
    /// assert_eq!(options.delay_before_commit, Some(Duration::from_secs(3)));
    /// ```
    #[must_use]
    pub const fn with_delay_before_commit(mut self, delay: Option<Duration>) -> Self {
        self.delay_before_commit = delay;
        self
    }
}
