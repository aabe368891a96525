use std::str::FromStr;

/// Easing curves used by the scroll animator.
///
/// Each curve maps normalized progress in `[0, 1]` to eased progress in
/// `[0, 1]` with `ease(0) == 0` and `ease(1) == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    CubicInOut,
    QuartOut,
    QuintInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Easing::QuartOut => {
                let u = t - 1.0;
                1.0 - u * u * u * u
            }
            Easing::QuintInOut => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    let u = t - 1.0;
                    1.0 + 16.0 * u * u * u * u * u
                }
            }
        }
    }
}

impl FromStr for Easing {
    type Err = ();

    /// Parses the names used in data attributes and the JS facade.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cubic-in-out" | "easeInOutCubic" => Ok(Easing::CubicInOut),
            "quart-out" | "easeOutQuart" => Ok(Easing::QuartOut),
            "quint-in-out" | "easeInOutQuint" => Ok(Easing::QuintInOut),
            _ => Err(()),
        }
    }
}
