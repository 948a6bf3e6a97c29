use serde::Serialize;
use std::fmt;

pub const PROJECT_COUNT: usize = 3;
pub const FALLBACK_PROJECT_IMAGE: &str = "/previews/default.svg";
pub const PLACEHOLDER_LINK: &str = "#";

/// Compile-time project data. Images are bound later, by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
}

pub const PROJECT_DESCRIPTORS: [ProjectDescriptor; PROJECT_COUNT] = [
    ProjectDescriptor {
        title: "E-Commerce Platform",
        description: "A full-featured online shopping platform with product management, cart functionality, and payment processing.",
        technologies: &["React", "Node.js", "MongoDB"],
        live_url: PLACEHOLDER_LINK,
        github_url: PLACEHOLDER_LINK,
    },
    ProjectDescriptor {
        title: "Task Management App",
        description: "A productivity application that helps users organize tasks, set deadlines, and track progress.",
        technologies: &["React", "Firebase", "Tailwind CSS"],
        live_url: PLACEHOLDER_LINK,
        github_url: PLACEHOLDER_LINK,
    },
    ProjectDescriptor {
        title: "Portfolio Website",
        description: "A responsive portfolio website showcasing projects and skills with a modern design.",
        technologies: &["Next.js", "Tailwind CSS", "Framer Motion"],
        live_url: PLACEHOLDER_LINK,
        github_url: PLACEHOLDER_LINK,
    },
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: String,
    pub live_url: &'static str,
    pub github_url: &'static str,
}

impl ProjectRecord {
    fn from_descriptor(descriptor: &ProjectDescriptor, image: String) -> Self {
        Self {
            title: descriptor.title,
            description: descriptor.description,
            technologies: descriptor.technologies,
            image,
            live_url: descriptor.live_url,
            github_url: descriptor.github_url,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShowcaseError {
    MissingImages { expected: usize, supplied: usize },
}

impl fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingImages { expected, supplied } => write!(
                f,
                "expected at least {expected} project images, received {supplied}"
            ),
        }
    }
}

impl std::error::Error for ShowcaseError {}

/// Reports descriptor positions that will bind to the fallback image,
/// either past the end of `images` or blank.
pub fn check_images<S: AsRef<str>>(images: &[S]) -> Result<(), ShowcaseError> {
    let supplied = images
        .iter()
        .take(PROJECT_COUNT)
        .filter(|value| !value.as_ref().trim().is_empty())
        .count();

    if supplied < PROJECT_COUNT {
        return Err(ShowcaseError::MissingImages {
            expected: PROJECT_COUNT,
            supplied,
        });
    }

    Ok(())
}

/// Zips descriptors with images by position. Positions past the end of
/// `images` bind to [`FALLBACK_PROJECT_IMAGE`]; surplus images are ignored.
pub fn bind_projects<S: AsRef<str>>(
    descriptors: &[ProjectDescriptor],
    images: &[S],
) -> Vec<ProjectRecord> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            let image = images
                .get(index)
                .map(|value| value.as_ref().trim())
                .filter(|value| !value.is_empty())
                .unwrap_or(FALLBACK_PROJECT_IMAGE)
                .to_string();
            ProjectRecord::from_descriptor(descriptor, image)
        })
        .collect()
}
