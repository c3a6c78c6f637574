use crate::models::{ColorWeight, GREEN, PositionTally, RED};

/// Vote count at which a highlight reaches full intensity.
pub const SATURATION_THRESHOLD: u32 = 100;

/// Faintest opacity a covered run is ever drawn with.
pub const MIN_OPACITY: f64 = 0.1;

/// Tuning for the tally-to-colour curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeOptions {
    pub saturation_threshold: u32,
    pub min_opacity: f64,
}

impl Default for ShadeOptions {
    fn default() -> Self {
        Self {
            saturation_threshold: SATURATION_THRESHOLD,
            min_opacity: MIN_OPACITY,
        }
    }
}

impl ShadeOptions {
    pub fn with_saturation(saturation_threshold: u32) -> Self {
        Self {
            saturation_threshold,
            ..Self::default()
        }
    }

    pub fn opacity(&self, tally: &PositionTally) -> f64 {
        // A zero threshold would divide by zero; treat it as saturating at one vote
        let threshold = self.saturation_threshold.max(1) as f64;
        let floor = if self.min_opacity.is_nan() {
            MIN_OPACITY
        } else {
            self.min_opacity.clamp(0.0, 1.0)
        };
        (tally.dominant() as f64 / threshold).clamp(floor, 1.0)
    }

    pub fn color_of(&self, tally: &PositionTally) -> ColorWeight {
        let opacity = self.opacity(tally);

        if tally.up > tally.down {
            ColorWeight::Solid { color: GREEN, opacity }
        } else if tally.down > tally.up {
            ColorWeight::Solid { color: RED, opacity }
        } else {
            ColorWeight::Gradient { top: GREEN, bottom: RED, opacity }
        }
    }
}

/// Colour for a covered tally using the default curve.
pub fn color_of(tally: &PositionTally) -> ColorWeight {
    ShadeOptions::default().color_of(tally)
}
