//! Entrance timing for the showcase.
//!
//! Everything here is declarative: each element gets an inline style with a
//! target pose and a CSS transition, and the browser does the sequencing.
//! Flipping the visibility flag swaps hidden poses for resting poses; the
//! per-card `transition-delay` produces the cascade.

use crate::config::ShowcaseConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseInOut,
    EaseOut,
}

impl Easing {
    fn as_css(self) -> &'static str {
        match self {
            Self::EaseInOut => "ease-in-out",
            Self::EaseOut => "ease-out",
        }
    }
}

/// Vertical offset in px and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub offset_y: f64,
    pub opacity: f64,
}

impl Pose {
    pub const RESTING: Self = Self {
        offset_y: 0.0,
        opacity: 1.0,
    };

    fn css(self) -> String {
        format!(
            "transform: translateY({}px); opacity: {};",
            self.offset_y, self.opacity
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub duration_ms: u64,
    pub delay_ms: u64,
    pub easing: Easing,
}

impl Timing {
    fn css(self, properties: &[&str]) -> String {
        let parts: Vec<String> = properties
            .iter()
            .map(|property| {
                format!(
                    "{property} {}ms {} {}ms",
                    self.duration_ms,
                    self.easing.as_css(),
                    self.delay_ms
                )
            })
            .collect();
        format!("transition: {};", parts.join(", "))
    }

    fn delayed(self, delay_ms: u64) -> Self {
        Self { delay_ms, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPlan {
    pub heading_hidden: Pose,
    pub heading: Timing,
    pub grid: Timing,
    pub card_hidden: Pose,
    pub card: Timing,
    pub stagger_ms: u64,
    pub delay_children_ms: u64,
}

impl Default for MotionPlan {
    fn default() -> Self {
        Self::standard()
    }
}

impl MotionPlan {
    pub fn standard() -> Self {
        Self::from_config(&ShowcaseConfig::default())
    }

    pub fn from_config(config: &ShowcaseConfig) -> Self {
        Self {
            heading_hidden: Pose {
                offset_y: -20.0,
                opacity: 0.0,
            },
            heading: Timing {
                duration_ms: config.heading_duration_ms,
                delay_ms: 0,
                easing: Easing::EaseInOut,
            },
            grid: Timing {
                duration_ms: config.grid_duration_ms,
                delay_ms: 0,
                easing: Easing::EaseInOut,
            },
            card_hidden: Pose {
                offset_y: 30.0,
                opacity: 0.0,
            },
            card: Timing {
                duration_ms: config.card_duration_ms,
                delay_ms: 0,
                easing: Easing::EaseOut,
            },
            stagger_ms: config.stagger_ms,
            delay_children_ms: config.delay_children_ms,
        }
    }

    /// Same poses with every duration and delay zeroed.
    pub fn reduced(self) -> Self {
        let still = |timing: Timing| Timing {
            duration_ms: 0,
            delay_ms: 0,
            ..timing
        };

        Self {
            heading: still(self.heading),
            grid: still(self.grid),
            card: still(self.card),
            stagger_ms: 0,
            delay_children_ms: 0,
            ..self
        }
    }

    pub fn card_delay_ms(&self, index: usize) -> u64 {
        let index = u64::try_from(index).unwrap_or(u64::MAX);
        self.delay_children_ms
            .saturating_add(self.stagger_ms.saturating_mul(index))
    }

    pub fn heading_style(&self, visible: bool) -> String {
        let pose = if visible {
            Pose::RESTING
        } else {
            self.heading_hidden
        };
        format!("{} {}", pose.css(), self.heading.css(&["transform", "opacity"]))
    }

    pub fn grid_style(&self, visible: bool) -> String {
        let opacity = if visible { 1.0 } else { 0.0 };
        format!("opacity: {opacity}; {}", self.grid.css(&["opacity"]))
    }

    pub fn card_style(&self, index: usize, visible: bool) -> String {
        let pose = if visible {
            Pose::RESTING
        } else {
            self.card_hidden
        };
        let timing = self.card.delayed(self.card_delay_ms(index));
        format!("{} {}", pose.css(), timing.css(&["transform", "opacity"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_moves_from_hidden_to_resting_pose() {
        let plan = MotionPlan::standard();

        assert_eq!(
            plan.heading_style(false),
            "transform: translateY(-20px); opacity: 0; \
             transition: transform 700ms ease-in-out 0ms, opacity 700ms ease-in-out 0ms;"
        );
        assert_eq!(
            plan.heading_style(true),
            "transform: translateY(0px); opacity: 1; \
             transition: transform 700ms ease-in-out 0ms, opacity 700ms ease-in-out 0ms;"
        );
    }

    #[test]
    fn cards_cascade_by_fixed_stagger() {
        let plan = MotionPlan::standard();

        let delays: Vec<u64> = (0..3).map(|index| plan.card_delay_ms(index)).collect();
        assert_eq!(delays, vec![0, 200, 400]);
        assert_eq!(
            plan.card_style(2, true),
            "transform: translateY(0px); opacity: 1; \
             transition: transform 600ms ease-out 400ms, opacity 600ms ease-out 400ms;"
        );
        assert!(plan.card_style(1, false).starts_with("transform: translateY(30px); opacity: 0;"));
    }

    #[test]
    fn heading_never_starts_after_first_card() {
        let plan = MotionPlan::standard();

        assert!(plan.heading.delay_ms <= plan.card_delay_ms(0));
    }

    #[test]
    fn delay_children_offsets_every_card() {
        let config = ShowcaseConfig {
            delay_children_ms: 100,
            stagger_ms: 50,
            ..ShowcaseConfig::default()
        };
        let plan = MotionPlan::from_config(&config);

        assert_eq!(plan.card_delay_ms(0), 100);
        assert_eq!(plan.card_delay_ms(3), 250);
    }

    #[test]
    fn reduced_motion_zeroes_timings_but_keeps_poses() {
        let plan = MotionPlan::standard().reduced();

        assert_eq!(plan.card_delay_ms(2), 0);
        assert_eq!(plan.card.duration_ms, 0);
        assert_eq!(plan.heading.duration_ms, 0);
        assert_eq!(plan.card_hidden.offset_y, 30.0);
        assert_eq!(
            plan.grid_style(false),
            "opacity: 0; transition: opacity 0ms ease-in-out 0ms;"
        );
    }

    #[test]
    fn grid_fades_in_when_visible() {
        let plan = MotionPlan::standard();

        assert_eq!(
            plan.grid_style(true),
            "opacity: 1; transition: opacity 300ms ease-in-out 0ms;"
        );
    }
}
