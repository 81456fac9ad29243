//! One-way entrance state for scroll-revealed page regions.

use super::error::AnimationError;

/// Visibility phase of a region. `Visible` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Visible,
}

/// Outcome of feeding an event into a [`Reveal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The region just became visible; fires once per region.
    Revealed,
    Unchanged,
}

/// One intersection report for a region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Intersection {
    /// Visible fraction of the region (0.0 when not intersecting).
    pub ratio: f64,
    /// Height of the visible part, in CSS pixels.
    pub visible_px: f64,
    /// Height of the viewport, in CSS pixels (0.0 when unknown).
    pub viewport_px: f64,
}

impl Intersection {
    /// How much of the region counts as seen: its own visible fraction, or
    /// the share of the viewport it fills, whichever is larger.
    ///
    /// A region taller than `viewport / threshold` can never show
    /// `threshold` of itself, but it does fill the viewport.
    pub fn coverage(&self) -> f64 {
        if self.ratio <= 0.0 {
            return 0.0;
        }
        let filled = if self.viewport_px > 0.0 {
            self.visible_px / self.viewport_px
        } else {
            0.0
        };
        self.ratio.max(filled).min(1.0)
    }
}

/// Observer thresholds between 0 and the reveal threshold, so tall regions
/// keep reporting while they scroll in.
const OBSERVER_STEPS: u32 = 10;

/// Tracks whether a region has entered the viewport.
///
/// The `Hidden -> Visible` transition fires the first time the coverage of
/// the region (see [`Intersection::coverage`]) is positive and reaches
/// `threshold`. Leaving and re-entering the viewport afterwards changes
/// nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    threshold: f64,
    phase: RevealPhase,
}

impl Reveal {
    /// Creates a hidden region with the given visible-ratio threshold.
    pub fn new(threshold: f64) -> Result<Self, AnimationError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(AnimationError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            phase: RevealPhase::Hidden,
        })
    }

    /// Ratios at which the browser should report this region.
    pub fn observer_thresholds(&self) -> Vec<f64> {
        if self.threshold == 0.0 {
            return vec![0.0];
        }
        (0..OBSERVER_STEPS)
            .map(|k| self.threshold * f64::from(k) / f64::from(OBSERVER_STEPS))
            .chain(std::iter::once(self.threshold))
            .collect()
    }

    /// Feeds the current coverage of the region.
    pub fn observe(&mut self, ratio: f64) -> Transition {
        if ratio > 0.0 && ratio >= self.threshold {
            self.show()
        } else {
            Transition::Unchanged
        }
    }

    /// Forces the region visible when it cannot be observed.
    pub fn fail_open(&mut self) -> Transition {
        self.show()
    }

    fn show(&mut self) -> Transition {
        match self.phase {
            RevealPhase::Hidden => {
                self.phase = RevealPhase::Visible;
                Transition::Revealed
            }
            RevealPhase::Visible => Transition::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let reveal = Reveal::new(0.3).unwrap();
        assert_eq!(reveal.phase, RevealPhase::Hidden);
        assert_eq!(reveal.phase, RevealPhase::Hidden);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut reveal = Reveal::new(0.3).unwrap();
        assert_eq!(reveal.observe(0.0), Transition::Unchanged);
        assert_eq!(reveal.observe(0.29), Transition::Unchanged);
        assert_eq!(reveal.phase, RevealPhase::Hidden);
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut reveal = Reveal::new(0.1).unwrap();
        assert_eq!(reveal.observe(0.1), Transition::Revealed);
        // Scroll away and back.
        assert_eq!(reveal.observe(0.0), Transition::Unchanged);
        assert_eq!(reveal.observe(0.8), Transition::Unchanged);
        assert_eq!(reveal.fail_open(), Transition::Unchanged);
        assert_eq!(reveal.phase, RevealPhase::Visible);
    }

    #[test]
    fn test_zero_threshold_needs_some_overlap() {
        let mut reveal = Reveal::new(0.0).unwrap();
        assert_eq!(reveal.observe(0.0), Transition::Unchanged);
        assert_eq!(reveal.observe(0.01), Transition::Revealed);
    }

    #[test]
    fn test_tall_region_reveals_when_it_fills_the_viewport() {
        // Region twenty viewports tall: at most 5% of it is ever visible.
        let mut reveal = Reveal::new(0.1).unwrap();
        let entering = Intersection {
            ratio: 0.0025,
            visible_px: 40.0,
            viewport_px: 800.0,
        };
        assert_eq!(reveal.observe(entering.coverage()), Transition::Unchanged);

        let filling = Intersection {
            ratio: 0.05,
            visible_px: 800.0,
            viewport_px: 800.0,
        };
        assert_eq!(filling.coverage(), 1.0);
        assert_eq!(reveal.observe(filling.coverage()), Transition::Revealed);
    }

    #[test]
    fn test_coverage_edges() {
        let away = Intersection {
            ratio: 0.0,
            visible_px: 0.0,
            viewport_px: 800.0,
        };
        assert_eq!(away.coverage(), 0.0);

        let unknown_viewport = Intersection {
            ratio: 0.3,
            visible_px: 120.0,
            viewport_px: 0.0,
        };
        assert_eq!(unknown_viewport.coverage(), 0.3);
    }

    #[test]
    fn test_observer_thresholds() {
        let steps = Reveal::new(0.3).unwrap().observer_thresholds();
        assert_eq!(steps.len(), 11);
        assert_eq!(steps.first(), Some(&0.0));
        assert_eq!(steps.last(), Some(&0.3));
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Reveal::new(0.0).unwrap().observer_thresholds(), vec![0.0]);
    }

    #[test]
    fn test_fail_open() {
        let mut reveal = Reveal::new(0.3).unwrap();
        assert_eq!(reveal.fail_open(), Transition::Revealed);
        assert_eq!(reveal.phase, RevealPhase::Visible);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        assert_eq!(
            Reveal::new(1.5),
            Err(AnimationError::InvalidThreshold(1.5))
        );
        assert!(Reveal::new(-0.1).is_err());
        assert!(Reveal::new(f64::NAN).is_err());
    }
}
