use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent,
};
use yew::prelude::*;

use crate::config::ShowcaseConfig;
use crate::logging::{log_event, LogLevel};
use crate::motion::MotionPlan;
use crate::projects::{bind_projects, check_images, ShowcaseError, PROJECT_DESCRIPTORS};
use crate::state::{reaches_threshold, strongest_intersection, ShowcaseAction, ShowcaseState};
use crate::view::{
    render_view, CardView, FEATURED_RIBBON_LABEL, LIVE_LINK_LABEL, SOURCE_LINK_LABEL,
    VIEW_PROJECT_LABEL,
};

const MOUNT_POINT_ID: &str = "app";

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[derive(Clone, PartialEq)]
struct ShowcaseStore(ShowcaseState);

impl Reducible for ShowcaseStore {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        if next.apply(action) {
            Rc::new(Self(next))
        } else {
            self
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn reveal_without_observer(
    dispatcher: &UseReducerDispatcher<ShowcaseStore>,
    log_level: LogLevel,
    reason: &str,
) {
    log_event(
        log_level,
        LogLevel::Warn,
        "showcase_observer_unavailable",
        json!({ "reason": reason }),
    );
    dispatcher.dispatch(ShowcaseAction::Intersect { ratio: 1.0 });
}

/// Watches `container` until it first crosses `threshold`, then disconnects.
fn observe_once(
    container: &NodeRef,
    threshold: f64,
    dispatcher: UseReducerDispatcher<ShowcaseStore>,
    log_level: LogLevel,
) -> Option<(IntersectionObserver, IntersectionCallback)> {
    let Some(element) = container.cast::<Element>() else {
        reveal_without_observer(&dispatcher, log_level, "missing container");
        return None;
    };

    let callback_dispatcher = dispatcher.clone();
    let callback = IntersectionCallback::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let ratio = strongest_intersection(
                entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.is_intersecting(), entry.intersection_ratio())),
            );

            let Some(ratio) = ratio else {
                return;
            };

            if reaches_threshold(ratio, threshold) {
                observer.disconnect();
                log_event(
                    log_level,
                    LogLevel::Info,
                    "showcase_revealed",
                    json!({ "ratio": ratio }),
                );
            }

            callback_dispatcher.dispatch(ShowcaseAction::Intersect { ratio });
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(_) => {
                reveal_without_observer(&dispatcher, log_level, "observer construction failed");
                return None;
            }
        };

    observer.observe(&element);
    Some((observer, callback))
}

#[derive(Properties, PartialEq)]
pub struct ProjectShowcaseProps {
    pub project_images: Vec<AttrValue>,
    #[prop_or_default]
    pub config: ShowcaseConfig,
}

#[function_component(ProjectShowcase)]
pub fn project_showcase(props: &ProjectShowcaseProps) -> Html {
    let log_level = props.config.log_level;
    let container_ref = use_node_ref();
    let store = {
        let threshold = props.config.visibility_threshold;
        use_reducer(move || ShowcaseStore(ShowcaseState::new(threshold)))
    };
    let records = use_memo(props.project_images.clone(), |images| {
        let images: Vec<&str> = images.iter().map(|image| image.as_str()).collect();
        bind_projects(&PROJECT_DESCRIPTORS, &images)
    });
    let motion = use_memo(props.config.clone(), |config| {
        let plan = MotionPlan::from_config(config);
        if prefers_reduced_motion() {
            plan.reduced()
        } else {
            plan
        }
    });

    {
        let records = records.clone();
        use_effect_with(props.project_images.clone(), move |images| {
            let images: Vec<&str> = images.iter().map(|image| image.as_str()).collect();
            if let Err(ShowcaseError::MissingImages { expected, supplied }) = check_images(&images) {
                log_event(
                    log_level,
                    LogLevel::Warn,
                    "showcase_images_missing",
                    json!({ "expected": expected, "supplied": supplied }),
                );
            }
            log_event(
                log_level,
                LogLevel::Debug,
                "showcase_mounted",
                json!({
                    "images": images.len(),
                    "projects": serde_json::to_value(&*records).unwrap_or_default(),
                }),
            );
            || ()
        });
    }

    {
        let container_ref = container_ref.clone();
        let dispatcher = store.dispatcher();
        let threshold = store.0.threshold();
        use_effect_with((), move |_| {
            let observation = observe_once(&container_ref, threshold, dispatcher, log_level);
            move || {
                if let Some((observer, callback)) = observation {
                    observer.disconnect();
                    drop(callback);
                }
            }
        });
    }

    let on_enter = {
        let dispatcher = store.dispatcher();
        Callback::from(move |index: usize| {
            dispatcher.dispatch(ShowcaseAction::PointerEnter(index));
        })
    };

    let on_leave = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ShowcaseAction::PointerLeave))
    };

    let view = render_view(&records, &store.0, &motion);

    html! {
        <section id={view.anchor_id} class="showcase">
            <div class="showcase-container" ref={container_ref}>
                <div class="showcase-heading" style={view.heading.style}>
                    <h2 class="showcase-title">
                        {view.heading.title}
                        <span class="showcase-title-underline" aria-hidden="true"></span>
                    </h2>
                    <p class="showcase-subtitle">{view.heading.subtitle}</p>
                </div>
                <div class="showcase-grid" style={view.grid_style}>
                    { for view.cards.into_iter().map(|card| {
                        let key = card.index;
                        html! {
                            <ProjectCard
                                key={key}
                                card={card}
                                on_enter={on_enter.clone()}
                                on_leave={on_leave.clone()}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    card: CardView,
    on_enter: Callback<usize>,
    on_leave: Callback<()>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let card = &props.card;

    let onmouseenter = {
        let on_enter = props.on_enter.clone();
        let index = card.index;
        Callback::from(move |_: MouseEvent| on_enter.emit(index))
    };

    let onmouseleave = {
        let on_leave = props.on_leave.clone();
        Callback::from(move |_: MouseEvent| on_leave.emit(()))
    };

    html! {
        <div class="project-card-slot" style={card.slot_style.clone()}>
            <article
                class={classes!("project-card", card.hovered.then_some("is-hovered"))}
                onmouseenter={onmouseenter}
                onmouseleave={onmouseleave}
            >
                <div class="project-media">
                    <img class="project-image" src={card.image.clone()} alt={card.image_alt()} loading="lazy" />
                    <div class={classes!("project-overlay", card.overlay_visible().then_some("is-visible"))}>
                        <div class="project-actions">
                            <a class="project-action" href={card.live_url} aria-label={LIVE_LINK_LABEL}>
                                <svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 12a3 3 0 11-6 0 3 3 0 016 0z" />
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z" />
                                </svg>
                            </a>
                            <a class="project-action" href={card.github_url} aria-label={SOURCE_LINK_LABEL}>
                                <svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="currentColor" viewBox="0 0 24 24">
                                    <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z" />
                                </svg>
                            </a>
                        </div>
                    </div>
                </div>

                <div class="project-body">
                    <h3 class="project-title">{card.title}</h3>
                    <p class="project-description">{card.description}</p>
                    <ul class="project-tags">
                        { for card.technologies.iter().map(|tech| html! {
                            <li class="project-tag">{*tech}</li>
                        }) }
                    </ul>
                    <div class="project-footer">
                        <a class="project-link" href={card.live_url}>
                            {VIEW_PROJECT_LABEL}
                            <svg xmlns="http://www.w3.org/2000/svg" class="icon project-link-arrow" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M14 5l7 7m0 0l-7 7m7-7H3" />
                            </svg>
                        </a>
                    </div>
                </div>

                <div class="project-ribbon" aria-hidden="true">
                    <span class="project-ribbon-label">{FEATURED_RIBBON_LABEL}</span>
                </div>
            </article>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ShowcaseConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let project_images: Vec<AttrValue> = props
        .config
        .project_images
        .iter()
        .cloned()
        .map(AttrValue::from)
        .collect();

    html! {
        <main id="content">
            <ProjectShowcase project_images={project_images} config={props.config.clone()} />
        </main>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
        .expect("missing #app mount point");
    let config = ShowcaseConfig::from_lookup(|key| root.get_attribute(&format!("data-{key}")));

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
