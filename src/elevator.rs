//! Discrete floor index over continuous scroll, with up/down and jump buttons.

use crate::config::ElevatorConfig;
use crate::floors;
use crate::layout::{Span, Viewport};

/// What the elevator panel should show after a resync.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorView {
    pub index: usize,
    pub label: String,
    pub name: String,
    /// One flag per jump button; only the current floor's is set.
    pub jumps: Vec<bool>,
}

#[derive(Debug, Clone)]
pub struct Elevator {
    cfg: ElevatorConfig,
    names: Vec<String>,
    jump_count: usize,
    last_index: usize,
}

impl Elevator {
    /// `headings` holds the first heading text of each floor, if it has one.
    pub fn new(cfg: ElevatorConfig, headings: &[Option<String>], jump_count: usize) -> Self {
        let names = headings
            .iter()
            .enumerate()
            .map(|(i, h)| match h {
                Some(text) => text.trim().to_owned(),
                None => format!("Этаж {}", cfg.top_floor_number - i as i64),
            })
            .collect();
        Self { cfg, names, jump_count, last_index: 0 }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn label(&self, index: usize) -> String {
        (self.cfg.top_floor_number - index as i64).to_string()
    }

    /// Nearest floor to screen center, remembered as the last index.
    pub fn current_index(&mut self, spans: &[Span], viewport: Viewport) -> usize {
        self.last_index = floors::locate(spans, viewport.center()).unwrap_or(0);
        self.last_index
    }

    pub fn clamp_index(&self, index: i64) -> Option<usize> {
        let last = self.names.len().checked_sub(1)?;
        Some(index.clamp(0, last as i64) as usize)
    }

    /// Scroll offset that lands on floor `index` (clamped into range).
    pub fn goto(&self, spans: &[Span], index: i64) -> Option<f64> {
        let i = self.clamp_index(index)?;
        spans.get(i).map(|s| s.top + self.cfg.landing_offset)
    }

    /// Scroll offset for the floor `delta` steps away from the current one.
    pub fn step(&mut self, spans: &[Span], viewport: Viewport, delta: i64) -> Option<f64> {
        let current = self.current_index(spans, viewport) as i64;
        self.goto(spans, current + delta)
    }

    pub fn sync(&mut self, spans: &[Span], viewport: Viewport) -> ElevatorView {
        let index = self.current_index(spans, viewport);
        ElevatorView {
            index,
            label: self.label(index),
            name: self
                .names
                .get(index)
                .filter(|n| !n.is_empty())
                .cloned()
                .unwrap_or_else(|| "Этаж".to_owned()),
            jumps: (0..self.jump_count).map(|j| j == index).collect(),
        }
    }
}
