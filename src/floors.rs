//! Which floor is "current", and how its card is lifted off the page.

use crate::config::ShadowConfig;
use crate::layout::{Rect, Span};

/// Index of the floor whose midpoint is nearest `center` (document space).
///
/// Ties go to the earlier floor.
pub fn locate(spans: &[Span], center: f64) -> Option<usize> {
    let mut best = None;
    let mut best_dist = f64::INFINITY;
    for (i, span) in spans.iter().enumerate() {
        let d = (center - span.mid()).abs();
        if d < best_dist {
            best_dist = d;
            best = Some(i);
        }
    }
    best
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub offset_y: f64,
    pub blur: f64,
    pub color: String,
}

impl Shadow {
    pub fn to_css(&self) -> String {
        format!("0 {}px {}px {}", self.offset_y, self.blur, self.color)
    }
}

/// Depth shadow for a card: flat when it sits at screen center, deeper and
/// shifted as it drifts toward either edge.
pub fn shadow(card: Rect, viewport_height: f64, cfg: &ShadowConfig) -> Shadow {
    let half = viewport_height * 0.5;
    let norm = ((half - card.center()) / half).clamp(-1.0, 1.0);
    let depth = norm.abs() * cfg.depth_swing;
    let offset = norm * cfg.offset_swing;
    Shadow {
        offset_y: cfg.base_offset + offset,
        blur: cfg.base_blur + depth,
        color: cfg.color.clone(),
    }
}
