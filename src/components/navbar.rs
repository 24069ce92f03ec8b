use yew::prelude::*;

use crate::state::role::UserRole;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub selected_role: UserRole,
    pub on_role_change: Callback<UserRole>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let pick = |role: UserRole| {
        let on_role_change = props.on_role_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_role_change.emit(role);
        })
    };

    let role_class = |role: UserRole| {
        classes!(
            "role-button",
            (props.selected_role == role).then_some("role-button--active")
        )
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-brand">
                    <span class="nav-logo" aria-hidden="true">{"🏗"}</span>
                    <span class="nav-wordmark">
                        {"Civil"}<span class="nav-wordmark-accent">{"Connect"}</span>
                    </span>
                </div>

                <div class="role-toggle" role="group" aria-label="Choose your role">
                    <button
                        class={role_class(UserRole::Customer)}
                        onclick={pick(UserRole::Customer)}
                    >
                        {"Customer"}
                    </button>
                    <button
                        class={role_class(UserRole::Builder)}
                        onclick={pick(UserRole::Builder)}
                    >
                        {"Builder"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
