//! Layout-only state driven by viewport events: the auto-hiding header and
//! the horizontally scrolling category strip.
//!
//! [`Viewport`] is the single event source. Scroll events are coalesced and
//! delivered at most once per [`Viewport::animation_frame`]; resize events are
//! delivered immediately. Listeners stay registered for as long as their
//! [`Subscription`] guard lives.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Scroll position past which scrolling down hides the header.
pub const HEADER_HIDE_AFTER: f64 = 100.0;
/// Scroll position within which the header is always shown.
pub const HEADER_TOP_ZONE: f64 = 10.0;
/// Distance moved by one category-strip arrow click.
pub const CATEGORY_SCROLL_STEP: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    Scroll { y: f64 },
    Resize { width: f64, height: f64 },
}

type Listener = Rc<RefCell<dyn FnMut(ViewportEvent)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    pending_scroll: Option<f64>,
}

/// Frame-limited source of scroll and resize notifications.
#[derive(Default)]
pub struct Viewport {
    registry: Rc<RefCell<Registry>>,
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it is removed when the returned guard drops.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl FnMut(ViewportEvent) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Record a scroll position. Only the latest one before the next frame is delivered.
    pub fn scrolled(&self, y: f64) {
        self.registry.borrow_mut().pending_scroll = Some(y);
    }

    pub fn resized(&self, width: f64, height: f64) {
        self.dispatch(ViewportEvent::Resize { width, height });
    }

    /// Flush the pending scroll, if any. Returns whether an event was delivered.
    pub fn animation_frame(&self) -> bool {
        let pending = self.registry.borrow_mut().pending_scroll.take();
        match pending {
            Some(y) => {
                self.dispatch(ViewportEvent::Scroll { y });
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    fn dispatch(&self, event: ViewportEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while handling.
        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            (&mut *listener.borrow_mut())(event);
        }
    }
}

/// Keeps a viewport listener registered until dropped.
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Scroll-direction header visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderVisibility {
    visible: bool,
    last_scroll_y: f64,
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            last_scroll_y: 0.0,
        }
    }
}

impl HeaderVisibility {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Apply one scroll position and return the new visibility.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        if y > self.last_scroll_y && y > HEADER_HIDE_AFTER {
            self.visible = false;
        } else if y < self.last_scroll_y {
            self.visible = true;
        }
        if y < HEADER_TOP_ZONE {
            self.visible = true;
        }
        self.last_scroll_y = y;
        self.visible
    }
}

/// Horizontal category strip with overflow arrows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryStrip {
    content_width: f64,
    visible_width: f64,
    offset: f64,
}

impl CategoryStrip {
    #[must_use]
    pub fn new(content_width: f64, visible_width: f64) -> Self {
        Self {
            content_width,
            visible_width,
            offset: 0.0,
        }
    }

    /// Re-measure after mount or resize. The offset is re-clamped.
    pub fn measure(&mut self, content_width: f64, visible_width: f64) {
        self.content_width = content_width;
        self.visible_width = visible_width;
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    #[must_use]
    pub fn arrows_visible(&self) -> bool {
        self.content_width > self.visible_width
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn scroll_left(&mut self) {
        self.offset = (self.offset - CATEGORY_SCROLL_STEP).max(0.0);
    }

    pub fn scroll_right(&mut self) {
        self.offset = (self.offset + CATEGORY_SCROLL_STEP).min(self.max_offset());
    }

    fn max_offset(&self) -> f64 {
        (self.content_width - self.visible_width).max(0.0)
    }
}

#[derive(Debug)]
struct ChromeState {
    header: HeaderVisibility,
    strip: CategoryStrip,
}

/// Header and category strip wired to a [`Viewport`].
///
/// The strip's content width is fixed by its chips; only the visible width
/// follows the viewport, so resize events re-measure with the new width.
pub struct ChromeController {
    state: Rc<RefCell<ChromeState>>,
    _subscription: Subscription,
}

impl ChromeController {
    #[must_use]
    pub fn attach(viewport: &Viewport, strip_content_width: f64, strip_visible_width: f64) -> Self {
        let state = Rc::new(RefCell::new(ChromeState {
            header: HeaderVisibility::default(),
            strip: CategoryStrip::new(strip_content_width, strip_visible_width),
        }));
        let listener_state = Rc::clone(&state);
        let subscription = viewport.subscribe(move |event| {
            let mut state = listener_state.borrow_mut();
            match event {
                ViewportEvent::Scroll { y } => {
                    state.header.on_scroll(y);
                }
                ViewportEvent::Resize { width, .. } => {
                    let content = state.strip.content_width;
                    state.strip.measure(content, width);
                }
            }
        });
        Self {
            state,
            _subscription: subscription,
        }
    }

    #[must_use]
    pub fn header_visible(&self) -> bool {
        self.state.borrow().header.is_visible()
    }

    #[must_use]
    pub fn strip(&self) -> CategoryStrip {
        self.state.borrow().strip
    }

    pub fn scroll_categories_left(&self) {
        self.state.borrow_mut().strip.scroll_left();
    }

    pub fn scroll_categories_right(&self) {
        self.state.borrow_mut().strip.scroll_right();
    }
}
