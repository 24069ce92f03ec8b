use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::state::role::UserRole;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub role: UserRole,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    // Fade and shrink the hero as it scrolls away: opacity 1 -> 0 and
    // scale 1 -> 0.95 over the first 400px of scroll.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(hero) = document.query_selector(".hero").ok().flatten() {
                    if let Ok(hero) = hero.dyn_into::<web_sys::HtmlElement>() {
                        let y = window_clone.scroll_y().unwrap_or(0.0);
                        let t = (y / 400.0).clamp(0.0, 1.0);
                        let opacity = 1.0 - t;
                        let scale = 1.0 - 0.05 * t;
                        let _ = hero.set_attribute(
                            "style",
                            &format!("opacity: {opacity}; transform: scale({scale});"),
                        );
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
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
        (),
    );

    let (line_one, highlight, line_two) = if props.role.is_customer() {
        ("Find the Right", "Builders", "For Your Vision")
    } else {
        ("Discover Quality", "Projects", "to Bid On")
    };

    let description = if props.role.is_customer() {
        "Post your construction projects and get matched with vetted builders \
         who bring excellence to every build."
    } else {
        "Access high-quality construction projects and showcase your expertise. \
         Bid, negotiate, and grow your firm."
    };

    let (primary_cta, secondary_cta) = if props.role.is_customer() {
        ("Post a Project", "Find Builders")
    } else {
        ("Browse Projects", "View Your Bids")
    };

    html! {
        <header class="hero">
            <div class="hero-background"></div>
            <div class="hero-shape hero-shape--square"></div>
            <div class="hero-shape hero-shape--diamond"></div>

            <div class="hero-content">
                <div class="hero-badge">
                    {"✨ The Future of Construction Collaboration"}
                </div>

                <h1 class="hero-title">
                    <span>{line_one}</span>{" "}
                    <span class="hero-title-accent">{highlight}</span>
                    <br />
                    <span>{line_two}</span>
                </h1>

                <p class="hero-subtitle">{description}</p>

                <div class="hero-cta-group">
                    <button class="hero-cta">{primary_cta}{" →"}</button>
                    <button class="hero-cta hero-cta--outline">{secondary_cta}</button>
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">{"⌄"}</div>
        </header>
    }
}
