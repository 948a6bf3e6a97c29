use crate::logging::LogLevel;
use crate::state::DEFAULT_VISIBILITY_THRESHOLD;

pub const DEFAULT_HEADING_DURATION_MS: u64 = 700;
pub const DEFAULT_GRID_DURATION_MS: u64 = 300;
pub const DEFAULT_CARD_DURATION_MS: u64 = 600;
pub const DEFAULT_STAGGER_MS: u64 = 200;
pub const DEFAULT_DELAY_CHILDREN_MS: u64 = 0;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
pub const DEFAULT_PROJECT_IMAGES: [&str; 3] = [
    "/previews/ecommerce.svg",
    "/previews/tasks.svg",
    "/previews/portfolio.svg",
];

const VISIBILITY_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const DURATION_MS_BOUNDS: (u64, u64) = (0, 10_000);
const DELAY_MS_BOUNDS: (u64, u64) = (0, 5_000);

#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseConfig {
    pub visibility_threshold: f64,
    pub heading_duration_ms: u64,
    pub grid_duration_ms: u64,
    pub card_duration_ms: u64,
    pub stagger_ms: u64,
    pub delay_children_ms: u64,
    pub log_level: LogLevel,
    pub project_images: Vec<String>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            heading_duration_ms: DEFAULT_HEADING_DURATION_MS,
            grid_duration_ms: DEFAULT_GRID_DURATION_MS,
            card_duration_ms: DEFAULT_CARD_DURATION_MS,
            stagger_ms: DEFAULT_STAGGER_MS,
            delay_children_ms: DEFAULT_DELAY_CHILDREN_MS,
            log_level: DEFAULT_LOG_LEVEL,
            project_images: DEFAULT_PROJECT_IMAGES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ShowcaseConfig {
    /// Builds the config from a key lookup such as the mount point's
    /// `data-*` attributes. Unknown or out-of-range values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let visibility_threshold = parse_f64_with_bounds(
            &lookup,
            "visibility-threshold",
            DEFAULT_VISIBILITY_THRESHOLD,
            VISIBILITY_THRESHOLD_BOUNDS,
        );
        let heading_duration_ms = parse_u64_with_bounds(
            &lookup,
            "heading-duration-ms",
            DEFAULT_HEADING_DURATION_MS,
            DURATION_MS_BOUNDS,
        );
        let grid_duration_ms = parse_u64_with_bounds(
            &lookup,
            "grid-duration-ms",
            DEFAULT_GRID_DURATION_MS,
            DURATION_MS_BOUNDS,
        );
        let card_duration_ms = parse_u64_with_bounds(
            &lookup,
            "card-duration-ms",
            DEFAULT_CARD_DURATION_MS,
            DURATION_MS_BOUNDS,
        );
        let stagger_ms =
            parse_u64_with_bounds(&lookup, "stagger-ms", DEFAULT_STAGGER_MS, DELAY_MS_BOUNDS);
        let delay_children_ms = parse_u64_with_bounds(
            &lookup,
            "delay-children-ms",
            DEFAULT_DELAY_CHILDREN_MS,
            DELAY_MS_BOUNDS,
        );
        let log_level = parse_log_level(&lookup, "log-level", DEFAULT_LOG_LEVEL);
        let project_images = parse_list(&lookup, "project-images").unwrap_or_else(|| {
            DEFAULT_PROJECT_IMAGES.iter().map(ToString::to_string).collect()
        });

        Self {
            visibility_threshold,
            heading_duration_ms,
            grid_duration_ms,
            card_duration_ms,
            stagger_ms,
            delay_children_ms,
            log_level,
            project_images,
        }
    }
}

pub fn parse_non_empty_string(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn parse_u64_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
    bounds: (u64, u64),
) -> u64 {
    lookup(name)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub fn parse_u16_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u16,
    bounds: (u16, u16),
) -> u16 {
    lookup(name)
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub fn parse_f64_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: f64,
    bounds: (f64, f64),
) -> f64 {
    lookup(name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub fn parse_log_level(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: LogLevel,
) -> LogLevel {
    parse_non_empty_string(lookup, name)
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}

/// Comma separated and trimmed. Blank entries keep their position so
/// positional consumers see the gap. `None` when every entry is blank.
pub fn parse_list(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<Vec<String>> {
    let values: Vec<String> = parse_non_empty_string(lookup, name)?
        .split(',')
        .map(str::trim)
        .map(ToString::to_string)
        .collect();

    values.iter().any(|value| !value.is_empty()).then_some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::{bind_projects, FALLBACK_PROJECT_IMAGE, PROJECT_DESCRIPTORS};
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| values.get(key).cloned()
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = ShowcaseConfig::from_lookup(|_| None);

        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.visibility_threshold, 0.1);
        assert_eq!(config.stagger_ms, 200);
        assert_eq!(config.project_images.len(), 3);
    }

    #[test]
    fn values_inside_bounds_are_accepted() {
        let config = ShowcaseConfig::from_lookup(lookup_from(&[
            ("visibility-threshold", " 0.25 "),
            ("card-duration-ms", "450"),
            ("stagger-ms", "120"),
            ("log-level", "DEBUG"),
        ]));

        assert_eq!(config.visibility_threshold, 0.25);
        assert_eq!(config.card_duration_ms, 450);
        assert_eq!(config.stagger_ms, 120);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_or_garbage_falls_back_to_default() {
        let config = ShowcaseConfig::from_lookup(lookup_from(&[
            ("visibility-threshold", "1.5"),
            ("heading-duration-ms", "99999"),
            ("stagger-ms", "-4"),
            ("log-level", "verbose"),
        ]));

        assert_eq!(config.visibility_threshold, DEFAULT_VISIBILITY_THRESHOLD);
        assert_eq!(config.heading_duration_ms, DEFAULT_HEADING_DURATION_MS);
        assert_eq!(config.stagger_ms, DEFAULT_STAGGER_MS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn project_images_are_split_on_commas() {
        let config = ShowcaseConfig::from_lookup(lookup_from(&[(
            "project-images",
            "a.jpg, b.jpg , c.jpg ",
        )]));

        assert_eq!(config.project_images, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn blank_project_image_keeps_its_position() {
        let config =
            ShowcaseConfig::from_lookup(lookup_from(&[("project-images", "a.jpg,,c.jpg")]));
        assert_eq!(config.project_images, vec!["a.jpg", "", "c.jpg"]);

        let records = bind_projects(&PROJECT_DESCRIPTORS, &config.project_images);
        let images: Vec<&str> = records.iter().map(|record| record.image.as_str()).collect();
        assert_eq!(images, vec!["a.jpg", FALLBACK_PROJECT_IMAGE, "c.jpg"]);
    }

    #[test]
    fn blank_project_images_keep_defaults() {
        let lookup = lookup_from(&[("project-images", " , ")]);

        assert_eq!(parse_list(&lookup, "project-images"), None);
        assert_eq!(
            ShowcaseConfig::from_lookup(lookup).project_images,
            ShowcaseConfig::default().project_images
        );
    }
}
