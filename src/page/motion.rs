//! Entrance timings and the inline styles that play them.
//!
//! A block renders once in its initial phase and is switched to the final
//! phase after mount; the CSS transition does the rest. Nothing switches a
//! block back, so an entrance plays at most once.

const EASE: &str = "ease-out";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub duration_s: f64,
    pub delay_s: f64,
    pub rise_px: f64,
}

impl Entrance {
    pub const BRAND: Self = Self::fade(0.5, 0.0);
    pub const HERO_TITLE: Self = Self::rise(0.8, 0.2);
    pub const HERO_COPY: Self = Self::rise(0.8, 0.4);
    pub const SECTION: Self = Self::rise(0.6, 0.0);
    pub const OVERLAY: Self = Self::fade(0.3, 0.0);

    const fn fade(duration_s: f64, delay_s: f64) -> Self {
        Self {
            duration_s,
            delay_s,
            rise_px: 0.0,
        }
    }

    const fn rise(duration_s: f64, delay_s: f64) -> Self {
        Self {
            duration_s,
            delay_s,
            rise_px: 20.0,
        }
    }

    fn transition(&self) -> String {
        let timing = format!("{}s {EASE} {}s", self.duration_s, self.delay_s);
        if self.rise_px == 0.0 {
            format!("transition: opacity {timing};")
        } else {
            format!("transition: opacity {timing}, transform {timing};")
        }
    }

    pub fn style(&self, phase: Phase) -> String {
        let transition = self.transition();
        match (phase, self.rise_px == 0.0) {
            (Phase::Initial, true) => format!("opacity: 0; {transition}"),
            (Phase::Initial, false) => format!(
                "opacity: 0; transform: translateY({}px); {transition}",
                self.rise_px
            ),
            (Phase::Final, true) => format!("opacity: 1; {transition}"),
            (Phase::Final, false) => format!("opacity: 1; transform: translateY(0px); {transition}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initial,
    Final,
}

impl Phase {
    /// Reduced-motion users start (and stay) in the final phase.
    pub fn on_mount(reduced_motion: bool) -> Self {
        if reduced_motion {
            Self::Final
        } else {
            Self::Initial
        }
    }
}
