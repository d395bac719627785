//! Per-frame driver state and the page structure it animates.

use crate::config::SceneConfig;
use crate::cover::{self, CoverState, GateState};
use crate::floors::{self, Shadow};
use crate::layout::{LayoutSource, Span};
use crate::parallax::ParallaxFrame;
use crate::scroll::SmoothedScroll;
use crate::tilt::{DividerProbe, PanelTilt, TiltEngine};

#[derive(Debug, Clone)]
pub struct Floor<H> {
    pub section: H,
    pub card: Option<H>,
    pub cover: Option<H>,
    /// Text of the first heading, if the floor has one.
    pub heading: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Divider<H> {
    pub line: Option<H>,
    pub panel: Option<H>,
}

/// Element handles discovered once at load. Counts never change afterwards.
#[derive(Debug, Clone)]
pub struct Scene<H> {
    pub floors: Vec<Floor<H>>,
    pub dividers: Vec<Divider<H>>,
}

impl<H: Clone> Scene<H> {
    pub fn spans<L: LayoutSource<Handle = H>>(&self, layout: &L) -> Vec<Span> {
        self.floors.iter().map(|f| layout.span(&f.section)).collect()
    }

    pub fn probes<L: LayoutSource<Handle = H>>(&self, layout: &L) -> Vec<DividerProbe> {
        self.dividers
            .iter()
            .map(|d| DividerProbe {
                line: d.line.as_ref().map(|h| layout.bounding_box(h)),
                panel: d.panel.as_ref().map(|h| layout.bounding_box(h)),
                panel_height: d.panel.as_ref().map(|h| layout.offset_height(h)),
            })
            .collect()
    }

    pub fn headings(&self) -> Vec<Option<String>> {
        self.floors.iter().map(|f| f.heading.clone()).collect()
    }
}

/// Everything the presenter needs to write for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub smoothed: f64,
    pub parallax: ParallaxFrame,
    /// Indexed like `Scene::dividers`.
    pub tilts: Vec<Option<PanelTilt>>,
    pub active_floor: Option<usize>,
    /// Shadow for the active floor's card, absent when it has no card.
    pub shadow: Option<Shadow>,
    /// Indexed like `Scene::floors`.
    pub covers: Vec<CoverState>,
}

/// Mutable animation state, owned by the frame loop.
#[derive(Debug, Clone)]
pub struct AnimationContext {
    cfg: SceneConfig,
    scroll: SmoothedScroll,
    tilt: TiltEngine,
}

impl AnimationContext {
    pub fn new(cfg: SceneConfig) -> Self {
        Self {
            scroll: SmoothedScroll::new(cfg.smoothing),
            tilt: TiltEngine::new(cfg.tilt.clone()),
            cfg,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.cfg
    }

    pub fn smoothed(&self) -> f64 {
        self.scroll.value()
    }

    pub fn tilt(&self) -> &TiltEngine {
        &self.tilt
    }

    /// Drops layout-dependent caches after the window changes size.
    pub fn resize(&mut self) {
        log::debug!("resize: dropping calibrated divider pivots");
        self.tilt.resize();
    }

    /// One animation tick: sample, smooth, then parallax, tilt, shadow and
    /// covers, in that order.
    pub fn tick<L: LayoutSource>(
        &mut self,
        layout: &L,
        scene: &Scene<L::Handle>,
        user: Option<&str>,
    ) -> Frame {
        let viewport = layout.viewport();
        let smoothed = self.scroll.update(viewport.scroll_y);
        let parallax = ParallaxFrame::from_smoothed(smoothed, &self.cfg.parallax);

        let tilts = self.tilt.update(&scene.probes(layout), viewport.height);

        let active_floor = floors::locate(&scene.spans(layout), viewport.center());
        let shadow = active_floor
            .and_then(|i| scene.floors[i].card.as_ref())
            .map(|card| layout.bounding_box(card))
            .map(|card| floors::shadow(card, viewport.height, &self.cfg.shadow));

        let gate = GateState::from_session(user);
        let covers = cover::covers(gate, active_floor, scene.floors.len());

        Frame { smoothed, parallax, tilts, active_floor, shadow, covers }
    }
}

/// Walls and elevator show once the page has scrolled past the hero.
pub fn chrome_visible(scroll_y: f64, hero: Span, margin: f64) -> bool {
    scroll_y > hero.top + hero.height - margin
}
