//! Viewport width tracking for mounted carousels.
//!
//! `ResizeEvents` is the host's resize notifier. A mounted carousel holds a
//! `ResizeSubscription`; dropping it removes the listener, so mounting and
//! unmounting any number of times leaves no listener behind.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use super::config::CarouselConfig;

/// Width assumed before the host reports one.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

type Listener = Box<dyn Fn(u32) + Send + Sync>;

struct Registry {
    width: u32,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Resize notifier shared by everything mounted on one page.
#[derive(Clone)]
pub struct ResizeEvents {
    registry: Arc<Mutex<Registry>>,
}

impl Default for ResizeEvents {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH)
    }
}

impl std::fmt::Debug for ResizeEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeEvents")
            .field("width", &self.width())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ResizeEvents {
    pub fn new(initial_width: u32) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                width: initial_width,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Current viewport width.
    pub fn width(&self) -> u32 {
        lock(&self.registry).width
    }

    /// Register a listener. It stays registered until the returned guard drops.
    ///
    /// Listeners run while the hub is locked and must not call back into it.
    pub fn subscribe<F>(&self, listener: F) -> ResizeSubscription
    where
        F: Fn(u32) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));

        ResizeSubscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Record a new width and notify every listener.
    pub fn resize(&self, width: u32) {
        let mut registry = lock(&self.registry);
        registry.width = width;
        for (_, listener) in &registry.listeners {
            listener(width);
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

/// Scoped registration; removes its listener on drop.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// A carousel attached to a viewport.
#[derive(Debug)]
pub struct MountedCarousel {
    config: CarouselConfig,
    width: Arc<AtomicU32>,
    _subscription: ResizeSubscription,
}

impl MountedCarousel {
    /// Attach `config` to `events`, starting from the current width.
    pub fn attach(config: CarouselConfig, events: &ResizeEvents) -> Self {
        let width = Arc::new(AtomicU32::new(events.width()));
        let tracked = Arc::clone(&width);
        let subscription = events.subscribe(move |w| tracked.store(w, Ordering::Relaxed));

        Self {
            config,
            width,
            _subscription: subscription,
        }
    }

    /// Latest width seen.
    pub fn viewport_width(&self) -> u32 {
        self.width.load(Ordering::Relaxed)
    }

    /// Slides visible at the latest width.
    pub fn visible_slides(&self) -> u32 {
        self.config.slides_for_width(self.viewport_width())
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Detach from the viewport.
    pub fn unmount(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_slides_follow_resizes() {
        let events = ResizeEvents::new(1440);
        let mounted = MountedCarousel::attach(CarouselConfig::default(), &events);
        assert_eq!(mounted.visible_slides(), 4);

        events.resize(1000);
        assert_eq!(mounted.viewport_width(), 1000);
        assert_eq!(mounted.visible_slides(), 3);

        events.resize(400);
        assert_eq!(mounted.visible_slides(), 1);
    }

    #[test]
    fn test_unmount_removes_listener() {
        let events = ResizeEvents::default();
        for _ in 0..100 {
            let mounted = MountedCarousel::attach(CarouselConfig::default(), &events);
            assert_eq!(events.listener_count(), 1);
            mounted.unmount();
        }
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_one_listener_per_mount() {
        let events = ResizeEvents::default();
        let a = MountedCarousel::attach(CarouselConfig::default(), &events);
        let b = MountedCarousel::attach(CarouselConfig::for_slides(2), &events);
        assert_eq!(events.listener_count(), 2);

        drop(a);
        assert_eq!(events.listener_count(), 1);
        events.resize(900);
        assert_eq!(b.visible_slides(), 2);
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let events = ResizeEvents::default();
        let subscription = events.subscribe(|_| {});
        drop(events);
        drop(subscription);
    }

    #[test]
    fn test_listeners_see_every_width() {
        let events = ResizeEvents::new(800);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _guard = events.subscribe(move |w| sink.lock().unwrap().push(w));

        events.resize(600);
        events.resize(1300);
        assert_eq!(*seen.lock().unwrap(), [600, 1300]);
        assert_eq!(events.width(), 1300);
    }
}
