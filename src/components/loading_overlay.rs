use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub visible: bool,
}

/// Full-screen overlay shown while the page "loads". Purely cosmetic; the
/// app root flips `visible` with fixed-duration timers.
#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <div class="loading-overlay">
            <div class="loading-overlay__inner">
                <div class="loader"></div>
                <p class="loading-overlay__label">{"Building Foundation"}</p>
            </div>
        </div>
    }
}
