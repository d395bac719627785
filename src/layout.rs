//! Geometry seam between the scroll engine and whatever lays the page out.
//!
//! The engine never touches markup: it asks a [`LayoutSource`] for document
//! offsets and screen-space boxes of opaque element handles, and everything
//! downstream is plain arithmetic on the returned numbers.

use std::cell::RefCell;

/// Screen-space box, same convention as `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    /// Document-space y of the middle of the screen.
    pub fn center(&self) -> f64 {
        self.scroll_y + self.height * 0.5
    }
}

/// Document-space vertical extent of a floor (`offsetTop`/`offsetHeight`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn mid(&self) -> f64 {
        (self.top + self.top + self.height) * 0.5
    }
}

pub trait LayoutSource {
    type Handle: Clone;

    fn viewport(&self) -> Viewport;
    fn offset_top(&self, handle: &Self::Handle) -> f64;
    fn offset_height(&self, handle: &Self::Handle) -> f64;
    fn bounding_box(&self, handle: &Self::Handle) -> Rect;

    fn span(&self, handle: &Self::Handle) -> Span {
        Span { top: self.offset_top(handle), height: self.offset_height(handle) }
    }
}

/// In-memory page: elements are document-space boxes, the viewport is a
/// movable window over them. Lets the engine run without a browser.
#[derive(Debug, Default)]
pub struct SimulatedLayout {
    elements: RefCell<Vec<Span>>,
    viewport: RefCell<Viewport>,
}

impl SimulatedLayout {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            elements: RefCell::new(Vec::new()),
            viewport: RefCell::new(Viewport { scroll_y: 0.0, height: viewport_height }),
        }
    }

    /// Adds an element at document offset `top` and returns its handle.
    pub fn add(&self, top: f64, height: f64) -> usize {
        let mut elements = self.elements.borrow_mut();
        elements.push(Span { top, height });
        elements.len() - 1
    }

    pub fn move_to(&self, handle: usize, top: f64, height: f64) {
        if let Some(el) = self.elements.borrow_mut().get_mut(handle) {
            *el = Span { top, height };
        }
    }

    pub fn scroll_to(&self, scroll_y: f64) {
        self.viewport.borrow_mut().scroll_y = scroll_y;
    }

    pub fn resize(&self, viewport_height: f64) {
        self.viewport.borrow_mut().height = viewport_height;
    }

    fn get(&self, handle: usize) -> Span {
        self.elements.borrow().get(handle).copied().unwrap_or_default()
    }
}

impl LayoutSource for SimulatedLayout {
    type Handle = usize;

    fn viewport(&self) -> Viewport {
        *self.viewport.borrow()
    }

    fn offset_top(&self, handle: &usize) -> f64 {
        self.get(*handle).top
    }

    fn offset_height(&self, handle: &usize) -> f64 {
        self.get(*handle).height
    }

    fn bounding_box(&self, handle: &usize) -> Rect {
        let el = self.get(*handle);
        Rect::new(el.top - self.viewport.borrow().scroll_y, el.height)
    }
}
