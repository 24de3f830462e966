const FADE_DOMAIN: (f64, f64) = (0.0, 200.0);
const OPACITY_RANGE: (f64, f64) = (1.0, 0.0);
const SCALE_RANGE: (f64, f64) = (1.0, 0.8);

/// Maps `input` from `domain` onto `range` linearly, holding the end values
/// outside the domain.
pub fn interpolate(input: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (start, end) = domain;
    if end == start {
        return range.0;
    }

    let progress = ((input - start) / (end - start)).clamp(0.0, 1.0);
    range.0 + (range.1 - range.0) * progress
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub opacity: f64,
    pub scale: f64,
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self::at_offset(0.0)
    }
}

impl HeroTransform {
    pub fn at_offset(scroll_offset: f64) -> Self {
        Self {
            opacity: interpolate(scroll_offset, FADE_DOMAIN, OPACITY_RANGE),
            scale: interpolate(scroll_offset, FADE_DOMAIN, SCALE_RANGE),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.3});",
            self.opacity, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn opacity_fades_out_over_first_two_hundred_units() {
        assert_close(HeroTransform::at_offset(0.0).opacity, 1.0);
        assert_close(HeroTransform::at_offset(100.0).opacity, 0.5);
        assert_close(HeroTransform::at_offset(200.0).opacity, 0.0);
        assert_close(HeroTransform::at_offset(500.0).opacity, 0.0);
    }

    #[test]
    fn scale_shrinks_to_eighty_percent() {
        assert_close(HeroTransform::at_offset(0.0).scale, 1.0);
        assert_close(HeroTransform::at_offset(100.0).scale, 0.9);
        assert_close(HeroTransform::at_offset(200.0).scale, 0.8);
        assert_close(HeroTransform::at_offset(1_000.0).scale, 0.8);
    }

    #[test]
    fn negative_overscroll_holds_initial_values() {
        assert_eq!(HeroTransform::at_offset(-40.0), HeroTransform::default());
    }

    #[test]
    fn style_renders_opacity_and_scale() {
        assert_eq!(
            HeroTransform::at_offset(100.0).style(),
            "opacity: 0.500; transform: scale(0.900);"
        );
    }

    #[test]
    fn degenerate_domain_returns_range_start() {
        assert_close(interpolate(5.0, (3.0, 3.0), (2.0, 4.0)), 2.0);
    }
}
