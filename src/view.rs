use crate::motion::MotionPlan;
use crate::projects::ProjectRecord;
use crate::state::ShowcaseState;

pub const SECTION_ANCHOR_ID: &str = "projects";
pub const SECTION_TITLE: &str = "My Projects";
pub const SECTION_SUBTITLE: &str =
    "Here are some of my recent projects that showcase my skills and expertise";
pub const FEATURED_RIBBON_LABEL: &str = "Featured";
pub const VIEW_PROJECT_LABEL: &str = "View Project";
pub const LIVE_LINK_LABEL: &str = "View live project";
pub const SOURCE_LINK_LABEL: &str = "View GitHub repository";

#[derive(Clone, Debug, PartialEq)]
pub struct HeadingView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub style: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub index: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: String,
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub hovered: bool,
    pub slot_style: String,
}

impl CardView {
    /// Gradient overlay and the two action links.
    pub fn overlay_visible(&self) -> bool {
        self.hovered
    }

    pub fn image_alt(&self) -> &'static str {
        self.title
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseView {
    pub anchor_id: &'static str,
    pub heading: HeadingView,
    pub grid_style: String,
    pub cards: Vec<CardView>,
}

pub fn render_view(
    records: &[ProjectRecord],
    state: &ShowcaseState,
    motion: &MotionPlan,
) -> ShowcaseView {
    let visible = state.visibility.is_visible();

    let cards = records
        .iter()
        .enumerate()
        .map(|(index, record)| CardView {
            index,
            title: record.title,
            description: record.description,
            technologies: record.technologies,
            image: record.image.clone(),
            live_url: record.live_url,
            github_url: record.github_url,
            hovered: state.hover.is_hovered(index),
            slot_style: motion.card_style(index, visible),
        })
        .collect();

    ShowcaseView {
        anchor_id: SECTION_ANCHOR_ID,
        heading: HeadingView {
            title: SECTION_TITLE,
            subtitle: SECTION_SUBTITLE,
            style: motion.heading_style(visible),
        },
        grid_style: motion.grid_style(visible),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::{bind_projects, PROJECT_DESCRIPTORS};
    use crate::state::ShowcaseAction;

    fn sample_records() -> Vec<ProjectRecord> {
        bind_projects(&PROJECT_DESCRIPTORS, &["a.jpg", "b.jpg", "c.jpg"])
    }

    #[test]
    fn renders_three_cards_bound_by_position() {
        let view = render_view(
            &sample_records(),
            &ShowcaseState::default(),
            &MotionPlan::standard(),
        );

        assert_eq!(view.anchor_id, "projects");
        assert_eq!(view.cards.len(), 3);
        for (index, card) in view.cards.iter().enumerate() {
            assert_eq!(card.index, index);
            assert_eq!(card.title, PROJECT_DESCRIPTORS[index].title);
            assert_eq!(card.image_alt(), card.title);
        }
        assert_eq!(view.cards[1].image, "b.jpg");
        assert_eq!(view.cards[1].technologies, &["React", "Firebase", "Tailwind CSS"]);
    }

    #[test]
    fn hidden_until_revealed() {
        let records = sample_records();
        let motion = MotionPlan::standard();
        let mut state = ShowcaseState::default();

        let before = render_view(&records, &state, &motion);
        assert_eq!(before.heading.style, motion.heading_style(false));
        assert_eq!(before.grid_style, motion.grid_style(false));
        assert!(before.cards.iter().all(|card| card.slot_style.contains("opacity: 0;")));

        state.apply(ShowcaseAction::Intersect { ratio: 0.2 });
        let after = render_view(&records, &state, &motion);
        assert_eq!(after.heading.style, motion.heading_style(true));
        assert!(after.cards.iter().all(|card| card.slot_style.contains("opacity: 1;")));
    }

    #[test]
    fn overlay_only_on_hovered_card() {
        let records = sample_records();
        let motion = MotionPlan::standard();
        let mut state = ShowcaseState::default();

        let idle = render_view(&records, &state, &motion);
        assert!(idle.cards.iter().all(|card| !card.overlay_visible()));

        state.apply(ShowcaseAction::PointerEnter(1));
        let hovered = render_view(&records, &state, &motion);
        let visible: Vec<usize> = hovered
            .cards
            .iter()
            .filter(|card| card.overlay_visible())
            .map(|card| card.index)
            .collect();
        assert_eq!(visible, vec![1]);

        state.apply(ShowcaseAction::PointerLeave);
        let left = render_view(&records, &state, &motion);
        assert!(left.cards.iter().all(|card| !card.overlay_visible()));
    }

    #[test]
    fn rerender_with_same_inputs_is_identical() {
        let records = sample_records();
        let motion = MotionPlan::standard();
        let mut state = ShowcaseState::default();
        state.apply(ShowcaseAction::Intersect { ratio: 1.0 });
        state.apply(ShowcaseAction::PointerEnter(2));

        assert_eq!(
            render_view(&records, &state, &motion),
            render_view(&records, &state, &motion)
        );
    }

    #[test]
    fn hover_does_not_change_entrance_styles() {
        let records = sample_records();
        let motion = MotionPlan::standard();
        let mut state = ShowcaseState::default();
        state.apply(ShowcaseAction::Intersect { ratio: 1.0 });
        let resting = render_view(&records, &state, &motion);

        state.apply(ShowcaseAction::PointerEnter(0));
        let hovered = render_view(&records, &state, &motion);

        assert_eq!(resting.cards[0].slot_style, hovered.cards[0].slot_style);
    }
}
