use crate::config::ParallaxConfig;

/// Style parameters for one parallax layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTransform {
    pub translate_y: f64,
    pub scale: f64,
    /// Only the top layer is centered with `translateX(-50%)`.
    pub centered: bool,
}

impl LayerTransform {
    fn shifted(translate_y: f64) -> Self {
        Self { translate_y, scale: 1.0, centered: false }
    }

    pub fn to_css(&self) -> String {
        let base = format!("translate3d(0, {}px, 0)", self.translate_y);
        match (self.centered, self.scale != 1.0) {
            (true, _) => format!("translateX(-50%) {base} scale({})", self.scale),
            (false, true) => format!("{base} scale({})", self.scale),
            (false, false) => base,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    pub background: LayerTransform,
    pub mid: LayerTransform,
    pub gradient: LayerTransform,
    pub gradient_opacity: f64,
    pub top: LayerTransform,
}

impl ParallaxFrame {
    pub fn from_smoothed(smoothed: f64, cfg: &ParallaxConfig) -> Self {
        let progress = (smoothed / cfg.fade_distance).min(1.0);
        let gradient_opacity =
            if progress < cfg.fade_ramp { progress / cfg.fade_ramp } else { 1.0 };

        let scale_progress = (smoothed / cfg.top_scale_distance).min(1.0);
        let scale = 1.0 + (cfg.top_max_scale - 1.0) * scale_progress;

        Self {
            background: LayerTransform::shifted(smoothed / cfg.background_divisor),
            mid: LayerTransform::shifted(smoothed / cfg.mid_divisor),
            gradient: LayerTransform::shifted(smoothed / cfg.gradient_divisor),
            gradient_opacity,
            top: LayerTransform {
                translate_y: smoothed / cfg.top_divisor,
                scale,
                centered: true,
            },
        }
    }
}
