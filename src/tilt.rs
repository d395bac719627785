//! Ceiling/floor panels that hinge open as a divider crosses the screen.
//!
//! The first divider is a fixed ceiling, the last a fixed floor. Interior
//! dividers are snapped shut while outside the gap between their neighbours
//! and swing toward a magnet at screen center while inside it.

use crate::config::TiltConfig;
use crate::layout::Rect;

/// Screen-space boxes of one divider's reference line and tilt panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DividerProbe {
    pub line: Option<Rect>,
    pub panel: Option<Rect>,
    /// Layout height of the panel, unaffected by its current rotation.
    pub panel_height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelTilt {
    /// `rotateX` angle in degrees; negative leans toward the ceiling.
    pub angle: f64,
    /// `translateZ` depth in px.
    pub depth: f64,
    /// Freshly calibrated `transform-origin` y in px, set only on the frame the
    /// pivot was measured.
    pub pivot: Option<f64>,
}

impl PanelTilt {
    fn flat(angle: f64) -> Self {
        Self { angle, depth: 0.0, pivot: None }
    }

    pub fn transform_css(&self) -> String {
        format!("translate3d(-50%, 0, {}px) rotateX({}deg)", self.depth, self.angle)
    }

    pub fn origin_css(pivot: f64) -> String {
        format!("50% {pivot}px")
    }
}

#[derive(Debug, Clone)]
pub struct TiltEngine {
    cfg: TiltConfig,
    angles: Vec<Option<f64>>,
    pivots: Vec<Option<f64>>,
}

impl TiltEngine {
    pub fn new(cfg: TiltConfig) -> Self {
        Self { cfg, angles: Vec::new(), pivots: Vec::new() }
    }

    /// Forgets every calibrated pivot; they are re-measured on next use.
    pub fn resize(&mut self) {
        self.pivots.iter_mut().for_each(|p| *p = None);
    }

    pub fn angle(&self, index: usize) -> Option<f64> {
        self.angles.get(index).copied().flatten()
    }

    pub fn pivot(&self, index: usize) -> Option<f64> {
        self.pivots.get(index).copied().flatten()
    }

    /// Advances every divider by one tick. `None` marks a divider whose line
    /// or panel is missing; it is left untouched this frame.
    pub fn update(
        &mut self,
        probes: &[DividerProbe],
        viewport_height: f64,
    ) -> Vec<Option<PanelTilt>> {
        let n = probes.len();
        if self.angles.len() < n {
            self.angles.resize(n, None);
            self.pivots.resize(n, None);
        }

        let pinned = self.cfg.pinned_angle;
        (0..n)
            .map(|i| {
                let probe = probes[i];
                let (line, panel) = (probe.line?, probe.panel?);
                if i == 0 {
                    return Some(PanelTilt::flat(-pinned));
                }
                if i == n - 1 {
                    return Some(PanelTilt::flat(pinned));
                }
                let panel_height = probe.panel_height.filter(|h| *h > 0.0);
                Some(self.update_interior(i, line, panel, panel_height, probes, viewport_height))
            })
            .collect()
    }

    fn update_interior(
        &mut self,
        i: usize,
        line: Rect,
        panel: Rect,
        panel_height: Option<f64>,
        probes: &[DividerProbe],
        vh: f64,
    ) -> PanelTilt {
        let cfg = &self.cfg;
        let line_center = line.center();
        let prev_bottom = probes[i - 1].line.map_or(f64::NEG_INFINITY, |r| r.bottom());
        let next_top = probes.get(i + 1).and_then(|p| p.line).map_or(f64::INFINITY, |r| r.top);
        let active = line_center > prev_bottom && line_center < next_top;

        let pivot = match self.pivots[i] {
            Some(_) => None,
            None => {
                let h = panel_height
                    .or((panel.height > 0.0).then_some(panel.height))
                    .unwrap_or(1.0);
                let y = (line_center - panel.top - h * cfg.pivot_lift).clamp(0.0, h);
                self.pivots[i] = Some(y);
                Some(y)
            }
        };

        if !active {
            let angle =
                if line_center <= prev_bottom { -cfg.pinned_angle } else { cfg.pinned_angle };
            self.angles[i] = Some(angle);
            return PanelTilt { pivot, ..PanelTilt::flat(angle) };
        }

        let t = ((line_center - vh / 2.0) / (vh * cfg.magnet_band))
            .clamp(-cfg.t_limit, cfg.t_limit);
        let target = if t < 0.0 { t * cfg.max_up } else { t * cfg.max_down };

        let prev = self.angles[i].unwrap_or(0.0);
        let angle = prev + (target - prev) * cfg.ease;
        self.angles[i] = Some(angle);

        let depth =
            if angle < 0.0 { angle.abs() * cfg.depth_up } else { angle.abs() * cfg.depth_down };
        PanelTilt { angle, depth, pivot }
    }
}
