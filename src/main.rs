use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod state {
    pub mod projects;
    pub mod role;
    pub mod wizard;
}
mod components {
    pub mod loading_overlay;
    pub mod navbar;
}
mod sections {
    pub mod discovery;
    pub mod finale;
    pub mod hero;
    pub mod journey;
    pub mod story;
}

use components::loading_overlay::LoadingOverlay;
use components::navbar::Navbar;
use sections::discovery::Discovery;
use sections::finale::Finale;
use sections::hero::Hero;
use sections::journey::Journey;
use sections::story::Story;
use state::role::UserRole;

// Overlay delays in ms. Nothing is actually loading; these just pace the
// transitions.
const MOUNT_OVERLAY_MS: u32 = 900;
const SWITCH_OVERLAY_MS: u32 = 600;

#[function_component]
fn App() -> Html {
    let role = use_state(UserRole::default);
    let loading = use_state(|| true);

    // Initial overlay, dismissed after a fixed delay. The Timeout is owned
    // by the effect so teardown cancels it instead of poking dropped state.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(MOUNT_OVERLAY_MS, move || {
                    loading.set(false);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    // Flash the overlay again whenever the page comes back to the
    // foreground.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let doc = document.clone();

                let visibility_callback = Closure::wrap(Box::new(move || {
                    if doc.visibility_state() == web_sys::VisibilityState::Visible {
                        loading.set(true);
                        let loading = loading.clone();
                        Timeout::new(SWITCH_OVERLAY_MS, move || {
                            loading.set(false);
                        })
                        .forget();
                    }
                }) as Box<dyn FnMut()>);

                document
                    .add_event_listener_with_callback(
                        "visibilitychange",
                        visibility_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "visibilitychange",
                            visibility_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let on_role_change = {
        let role = role.clone();
        let loading = loading.clone();
        Callback::from(move |new_role: UserRole| {
            if *role == new_role {
                return;
            }
            info!("switching role to {}", new_role.label());
            role.set(new_role);
            loading.set(true);
            let loading = loading.clone();
            Timeout::new(SWITCH_OVERLAY_MS, move || {
                loading.set(false);
            })
            .forget();
        })
    };

    html! {
        <div class="page">
            <LoadingOverlay visible={*loading} />
            <Navbar selected_role={*role} on_role_change={on_role_change} />

            <Hero role={*role} />

            {
                if role.is_customer() {
                    html! {
                        <>
                            <section class="section">
                                <Journey />
                            </section>
                            <section class="section section--tinted">
                                <Discovery />
                            </section>
                        </>
                    }
                } else {
                    html! {
                        <section class="section section--tinted">
                            <Discovery builder_view={true} />
                        </section>
                    }
                }
            }

            <section class="section">
                <Story role={*role} />
            </section>

            <section class="section section--dark">
                <Finale role={*role} />
            </section>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
