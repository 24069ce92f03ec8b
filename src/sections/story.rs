use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::state::role::UserRole;

struct StoryStep {
    tag: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

const CUSTOMER_STEPS: &[StoryStep] = &[
    StoryStep {
        tag: "PROJECT INTAKE",
        title: "Blueprint Your Vision",
        description: "Submit your construction project with detailed specs, blueprints, and budget. Our system matches you with the right expertise.",
        accent: "#3b82f6",
    },
    StoryStep {
        tag: "BIDDING PHASE",
        title: "Vetted Crew Bids",
        description: "Receive competitive proposals from pre-qualified builders. Every contractor is background-checked and performance-rated.",
        accent: "#f59e0b",
    },
    StoryStep {
        tag: "NEGOTIATION",
        title: "Seal the Deal",
        description: "Compare bids side-by-side, negotiate terms, and lock in your preferred builder with transparent contracts.",
        accent: "#10b981",
    },
    StoryStep {
        tag: "EXECUTION",
        title: "Build with Confidence",
        description: "Track progress with milestone-based payments, quality inspections, and real-time site updates until completion.",
        accent: "#8b5cf6",
    },
];

const BUILDER_STEPS: &[StoryStep] = &[
    StoryStep {
        tag: "DISCOVERY",
        title: "Scout Projects",
        description: "Browse curated construction opportunities filtered by your trade, capacity, location, and expertise level.",
        accent: "#3b82f6",
    },
    StoryStep {
        tag: "PROPOSAL",
        title: "Place Your Bid",
        description: "Submit detailed proposals with your pricing, timeline, crew strength, and past project portfolio.",
        accent: "#f59e0b",
    },
    StoryStep {
        tag: "CONTRACT",
        title: "Win & Negotiate",
        description: "Communicate directly with project owners, finalize scope, and sign off on milestones and deliverables.",
        accent: "#10b981",
    },
    StoryStep {
        tag: "GROWTH",
        title: "Deliver & Grow",
        description: "Execute with excellence, earn verified reviews, and unlock priority access to premium projects.",
        accent: "#8b5cf6",
    },
];

#[derive(Properties, PartialEq)]
pub struct StoryProps {
    pub role: UserRole,
}

/// "How we build" timeline. Steps slide in from alternating sides as they
/// scroll into view; the reveal is a class toggle driven by a scroll
/// listener, with the motion itself in CSS.
#[function_component(Story)]
pub fn story(props: &StoryProps) -> Html {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let threshold = window_clone
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(800.0)
                    * 0.85;

                if let Ok(steps) = document.query_selector_all(".timeline-step") {
                    for i in 0..steps.length() {
                        let Some(node) = steps.item(i) else { continue };
                        let Ok(el) = node.dyn_into::<web_sys::Element>() else { continue };
                        if el.get_bounding_client_rect().top() < threshold
                            && !el.class_name().contains("timeline-step--visible")
                        {
                            el.set_class_name(&format!("{} timeline-step--visible", el.class_name()));
                        }
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Reveal anything already in view before the first scroll.
            scroll_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL)
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        props.role,
    );

    let steps = if props.role.is_customer() {
        CUSTOMER_STEPS
    } else {
        BUILDER_STEPS
    };

    html! {
        <div class="story">
            <div class="story-header">
                <div class="section-badge">{"👷 The Process"}</div>
                <h2 class="section-title section-title--large">
                    {"How We "}<span class="section-title-accent">{"Build"}</span>
                </h2>
                <p class="section-subtitle">
                    {"From blueprint to handover: a transparent, milestone-driven process designed for construction excellence."}
                </p>
            </div>

            <div class="timeline">
                <div class="timeline-spine" aria-hidden="true"></div>
                {
                    steps.iter().enumerate().map(|(i, step)| {
                        let side = if i % 2 == 0 { "timeline-step--left" } else { "timeline-step--right" };
                        html! {
                            <div class={classes!("timeline-step", side)} key={format!("{}-{}", props.role.label(), i)}>
                                <div
                                    class="timeline-card"
                                    style={format!("border-top: 3px solid {};", step.accent)}
                                >
                                    <div class="timeline-card-meta">
                                        <span
                                            class="timeline-tag"
                                            style={format!("color: {a}; border-color: {a};", a = step.accent)}
                                        >
                                            {step.tag}
                                        </span>
                                        <span class="timeline-phase">
                                            { format!("PHASE {:02}", i + 1) }
                                        </span>
                                    </div>
                                    <h3 class="timeline-title">{step.title}</h3>
                                    <p class="timeline-copy">{step.description}</p>
                                </div>
                                <div
                                    class="timeline-node"
                                    style={format!("border-color: {a}; color: {a};", a = step.accent)}
                                >
                                    { i + 1 }
                                </div>
                                <div class="timeline-spacer"></div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="story-cta">
                <button class="hero-cta">{"Start Your Project"}</button>
            </div>
        </div>
    }
}
