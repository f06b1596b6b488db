//! Scroll-driven and entrance animation parameters.
//!
//! Everything here is a pure function of a scroll position or an index.
//! Components read the window and feed the numbers in; nothing in this
//! module touches gallery state.

/// Linear map from `input` to `output`, clamped to the output range.
pub fn interpolate(x: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let [x0, x1] = input;
    let [y0, y1] = output;
    if (x1 - x0).abs() < f64::EPSILON {
        return y0;
    }
    let t = ((x - x0) / (x1 - x0)).clamp(0.0, 1.0);
    y0 + (y1 - y0) * t
}

/// How far a section has scrolled past the top of the viewport.
///
/// 0 while its top edge is at or below the viewport top, 1 once its bottom
/// edge reaches the viewport top.
pub fn scroll_progress(section_top: f64, section_height: f64) -> f64 {
    if section_height <= 0.0 {
        return 0.0;
    }
    (-section_top / section_height).clamp(0.0, 1.0)
}

/// Whether a box intersects the viewport grown (or shrunk, if negative) by
/// `margin_px` on each side.
pub fn in_view(rect_top: f64, rect_bottom: f64, viewport_height: f64, margin_px: f64) -> bool {
    rect_top < viewport_height + margin_px && rect_bottom > -margin_px
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub y_percent: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl HeroFrame {
    pub fn at(progress: f64) -> Self {
        HeroFrame {
            y_percent: interpolate(progress, [0.0, 1.0], [0.0, 50.0]),
            scale: interpolate(progress, [0.0, 1.0], [1.0, 1.1]),
            opacity: interpolate(progress, [0.0, 0.8], [1.0, 0.0]),
        }
    }

    pub fn background_style(&self) -> String {
        format!(
            "transform: translateY({:.3}%) scale({:.4});",
            self.y_percent, self.scale
        )
    }

    pub fn content_style(&self) -> String {
        format!("opacity: {:.4};", self.opacity)
    }
}

impl Default for HeroFrame {
    fn default() -> Self {
        HeroFrame::at(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Entrance {
    pub const HERO_HEADING: Entrance = Entrance { delay_s: 0.4, duration_s: 1.0 };
    pub const HERO_SUBTITLE: Entrance = Entrance { delay_s: 0.6, duration_s: 1.0 };
    pub const HERO_CTA: Entrance = Entrance { delay_s: 0.8, duration_s: 1.0 };
    pub const SCROLL_INDICATOR: Entrance = Entrance { delay_s: 1.5, duration_s: 1.0 };
    pub const PORTFOLIO_HEADER: Entrance = Entrance { delay_s: 0.0, duration_s: 0.8 };

    pub fn style(&self) -> String {
        format!(
            "animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.delay_s, self.duration_s
        )
    }
}

const CARD_STAGGER_S: f64 = 0.1;

pub fn card_entrance(index: usize) -> Entrance {
    Entrance {
        delay_s: index as f64 * CARD_STAGGER_S,
        duration_s: 0.8,
    }
}
