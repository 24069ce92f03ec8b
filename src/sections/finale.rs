use yew::prelude::*;

use crate::state::role::UserRole;

const FOOTER_LINKS: &[&str] = &["About", "Features", "Builders", "Contact", "Privacy"];

#[derive(Properties, PartialEq)]
pub struct FinaleProps {
    pub role: UserRole,
}

#[function_component(Finale)]
pub fn finale(props: &FinaleProps) -> Html {
    let headline = if props.role.is_customer() {
        "Your Vision, Built Right"
    } else {
        "Your Next Project Awaits"
    };

    let copy = if props.role.is_customer() {
        "Connect with top-tier builders and firms to bring your construction \
         dreams to life with quality and precision."
    } else {
        "Access high-quality projects, compete fairly, and grow your \
         construction business on India's leading platform."
    };

    let (primary_cta, secondary_cta) = if props.role.is_customer() {
        ("Post Your First Project", "Find Builders")
    } else {
        ("Browse Available Bids", "View My Proposals")
    };

    html! {
        <div class="finale">
            <div class="finale-message">
                <p class="finale-kicker">{"Where ambitious projects meet exceptional builders"}</p>
                <h2 class="finale-headline">
                    {headline}
                    <br />
                    <span class="finale-headline-accent">{"on CivilConnect"}</span>
                </h2>
                <p class="finale-copy">{copy}</p>
            </div>

            <div class="finale-cta-group">
                <button class="finale-cta">{primary_cta}{" →"}</button>
                <button class="finale-cta finale-cta--outline">{secondary_cta}</button>
            </div>

            <div class="finale-divider"></div>

            <footer class="finale-footer">
                <div class="footer-links">
                    {
                        FOOTER_LINKS.iter().map(|&label| html! {
                            <a key={label} href="#" class="footer-link">{label}</a>
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-social">
                    <a href="#" class="footer-social-link" aria-label="Email">{"✉"}</a>
                    <a href="#" class="footer-social-link" aria-label="LinkedIn">{"in"}</a>
                    <a href="#" class="footer-social-link" aria-label="Twitter">{"𝕏"}</a>
                </div>

                <p class="footer-copyright">
                    {"© 2024 CivilConnect. Building the future together."}
                </p>
            </footer>
        </div>
    }
}
