//! The rotating header image of the overview.

use crate::prefs::Theme;
use crate::Result;
use anyhow::ensure;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

const LIGHT_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1583873698943-8456d7882940?q=80&w=2274&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1681171248831-b54636671c39?q=80&w=1335&auto=format&fit=crop",
];

const DARK_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1565967511849-76a60a516170?q=80&w=2071&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1692386585871-f53c4a1c0d41?q=80&w=1335&auto=format&fit=crop",
];

/// The header images for `theme`.
pub fn hero_images(theme: Theme) -> Vec<String> {
    let images = if theme.is_dark() {
        DARK_IMAGES
    } else {
        LIGHT_IMAGES
    };
    images.iter().map(|s| s.to_string()).collect()
}

/// Advances an image index on a fixed period in a background task. The task stops when the
/// carousel is stopped or dropped.
#[derive(Debug)]
pub struct HeroCarousel {
    images: Vec<String>,
    index: watch::Receiver<usize>,
    task: Option<JoinHandle<()>>,
}

impl HeroCarousel {
    /// Starts rotating through `images`. Must be called from within a tokio runtime. With a single
    /// image (or none) no task is spawned and the index stays at zero.
    pub fn start(images: Vec<String>, period: Duration) -> Result<Self> {
        ensure!(!period.is_zero(), "The carousel period must be greater than zero");
        let (tx, index) = watch::channel(0usize);
        let count = images.len();
        let task = if count > 1 {
            debug!("Starting the hero carousel with {count} images every {period:?}");
            Some(tokio::spawn(rotate(tx, count, period)))
        } else {
            None
        };
        Ok(Self {
            images,
            index,
            task,
        })
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// The index of the image currently shown.
    pub fn current(&self) -> usize {
        *self.index.borrow()
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current()).map(String::as_str)
    }

    /// A receiver that is notified every time the index changes.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    pub fn stop(mut self) {
        self.abort();
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            trace!("Stopping the hero carousel");
            task.abort();
        }
    }
}

impl Drop for HeroCarousel {
    fn drop(&mut self) {
        self.abort();
    }
}

async fn rotate(tx: watch::Sender<usize>, count: usize, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;
    loop {
        ticker.tick().await;
        tx.send_modify(|ix| *ix = (*ix + 1) % count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Instant};

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img{i}")).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_rotates_on_period() {
        let carousel = HeroCarousel::start(images(3), DEFAULT_INTERVAL).unwrap();
        let mut rx = carousel.subscribe();
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.current_image(), Some("img0"));

        let begin = Instant::now();
        let mut seen = Vec::new();
        for _ in 0..4 {
            rx.changed().await.unwrap();
            seen.push(*rx.borrow_and_update());
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
        assert!(begin.elapsed() >= DEFAULT_INTERVAL * 4);
        assert_eq!(carousel.current(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_task() {
        let carousel = HeroCarousel::start(images(2), Duration::from_secs(1)).unwrap();
        let mut rx = carousel.subscribe();
        drop(carousel);
        let finished = timeout(Duration::from_secs(60), async {
            while rx.changed().await.is_ok() {}
        })
        .await;
        assert!(finished.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_image_never_changes() {
        let carousel = HeroCarousel::start(images(1), Duration::from_secs(1)).unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(carousel.current(), 0);
        carousel.stop();
    }

    #[tokio::test]
    async fn test_zero_period_rejected() {
        assert!(HeroCarousel::start(images(2), Duration::ZERO).is_err());
    }

    #[test]
    fn test_theme_images() {
        assert_eq!(hero_images(Theme::Light).len(), 2);
        assert_ne!(hero_images(Theme::Light), hero_images(Theme::Dark));
    }
}
