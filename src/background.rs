//! Window background: a picture scaled to the window, or a solid colour.

use std::path::Path;
use std::time::{Duration, Instant};

use egui::{Color32, ColorImage};
use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::Result;

/// Smallest window size, also the smallest size the image is scaled to.
pub const MIN_WINDOW_SIZE: [u32; 2] = [620, 500];

pub const FALLBACK_COLOR: Color32 = Color32::from_rgb(0, 0, 128);

pub struct BackgroundImage {
    original: DynamicImage,
}

impl BackgroundImage {
    pub fn open(path: &Path) -> Result<Self> {
        let original = image::open(path)?;
        log::info!(
            "Loaded background {} ({}x{})",
            path.display(),
            original.width(),
            original.height()
        );
        Ok(Self { original })
    }

    /// Scale to fill `window`, never below [`MIN_WINDOW_SIZE`].
    pub fn render(&self, window: [u32; 2]) -> ColorImage {
        let [w, h] = target_size(window);
        log::debug!("Resizing background to {w}x{h}");
        let rgba = self
            .original
            .resize_exact(w, h, FilterType::Lanczos3)
            .to_rgba8();
        ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw())
    }
}

pub fn target_size(window: [u32; 2]) -> [u32; 2] {
    [
        window[0].max(MIN_WINDOW_SIZE[0]),
        window[1].max(MIN_WINDOW_SIZE[1]),
    ]
}

/// Delays rescaling until the window size has been stable for `delay`.
#[derive(Debug)]
pub struct ResizeDebounce {
    delay: Duration,
    pending: Option<([u32; 2], Instant)>,
    applied: Option<[u32; 2]>,
}

impl ResizeDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            applied: None,
        }
    }

    /// Record the current window size. A new size restarts the timer.
    pub fn observe(&mut self, size: [u32; 2], now: Instant) {
        match self.pending {
            Some((pending, _)) if pending == size => {}
            None if self.applied == Some(size) => {}
            _ => self.pending = Some((size, now + self.delay)),
        }
    }

    /// Size to rescale to, once the timer has expired.
    pub fn due(&mut self, now: Instant) -> Option<[u32; 2]> {
        let (size, deadline) = self.pending?;
        if now < deadline {
            return None;
        }
        self.pending = None;
        if self.applied == Some(size) {
            return None;
        }
        self.applied = Some(size);
        Some(size)
    }

    /// Time until the pending rescale fires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_respects_minimum_size() {
        let bg = BackgroundImage {
            original: DynamicImage::new_rgb8(8, 6),
        };
        let img = bg.render([100, 80]);
        assert_eq!(img.size, [620, 500]);
    }

    #[test]
    fn test_render_fills_window() {
        let bg = BackgroundImage {
            original: DynamicImage::new_rgb8(8, 6),
        };
        let img = bg.render([800, 640]);
        assert_eq!(img.size, [800, 640]);
        assert_eq!(img.pixels.len(), 800 * 640);
    }

    #[test]
    fn test_target_size_mixed() {
        assert_eq!(target_size([1000, 300]), [1000, 500]);
    }

    #[test]
    fn test_open_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(BackgroundImage::open(&path).is_err());
    }

    #[test]
    fn test_debounce_waits_for_quiet_period() {
        let start = Instant::now();
        let delay = Duration::from_millis(100);
        let mut debounce = ResizeDebounce::new(delay);

        debounce.observe([700, 550], start);
        assert_eq!(debounce.due(start + Duration::from_millis(50)), None);

        // Still resizing: timer restarts
        debounce.observe([720, 560], start + Duration::from_millis(60));
        assert_eq!(debounce.due(start + Duration::from_millis(120)), None);
        assert_eq!(
            debounce.remaining(start + Duration::from_millis(120)),
            Some(Duration::from_millis(40))
        );

        assert_eq!(
            debounce.due(start + Duration::from_millis(160)),
            Some([720, 560])
        );
        assert_eq!(debounce.due(start + Duration::from_millis(300)), None);
    }

    #[test]
    fn test_debounce_same_size_each_frame() {
        let start = Instant::now();
        let mut debounce = ResizeDebounce::new(Duration::from_millis(100));

        for ms in [0, 16, 33, 50, 66, 83] {
            debounce.observe([620, 500], start + Duration::from_millis(ms));
        }
        assert_eq!(
            debounce.due(start + Duration::from_millis(100)),
            Some([620, 500])
        );

        // Unchanged size after applying does not schedule again
        debounce.observe([620, 500], start + Duration::from_millis(200));
        assert_eq!(debounce.remaining(start + Duration::from_millis(200)), None);
    }

    #[test]
    fn test_debounce_back_to_applied_size() {
        let start = Instant::now();
        let mut debounce = ResizeDebounce::new(Duration::from_millis(100));

        debounce.observe([800, 600], start);
        assert_eq!(debounce.due(start + Duration::from_millis(100)), Some([800, 600]));

        debounce.observe([900, 600], start + Duration::from_millis(110));
        debounce.observe([800, 600], start + Duration::from_millis(120));
        assert_eq!(debounce.due(start + Duration::from_millis(400)), None);
    }
}
