/// Exponentially damped copy of the page scroll offset.
///
/// Deliberately unclamped: during a fast fling it trails the real offset and
/// may sit past the document end for a few frames.
#[derive(Debug, Clone)]
pub struct SmoothedScroll {
    value: f64,
    factor: f64,
}

impl SmoothedScroll {
    pub fn new(factor: f64) -> Self {
        Self { value: 0.0, factor }
    }

    /// Moves the value `factor` of the way toward `target`; call once per tick.
    pub fn update(&mut self, target: f64) -> f64 {
        self.value += (target - self.value) * self.factor;
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
