use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::wizard::{self, WizardState, STEPS};

/// The customer project-submission flow: a four-step wizard over
/// [`WizardState`]. Fields are never validated; submitting on the last
/// step logs the payload and shows the completion card.
#[function_component(Journey)]
pub fn journey() -> Html {
    let wizard = use_state(WizardState::new);

    let set_field = {
        let wizard = wizard.clone();
        move |name: &'static str| {
            let wizard = wizard.clone();
            Callback::from(move |value: String| {
                let mut next = (*wizard).clone();
                next.set_field(name, value);
                wizard.set(next);
            })
        }
    };

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            let submitting = next.on_last_step();
            next.advance();
            if submitting {
                info!(
                    "project submitted: {}",
                    serde_json::to_string(&next.submission()).unwrap_or_default()
                );
            }
            wizard.set(next);
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.retreat();
            wizard.set(next);
        })
    };

    let on_restart = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.reset();
            wizard.set(next);
        })
    };

    let step = wizard.current();
    let step_index = wizard.step_index();

    html! {
        <div class="journey">
            <div class="journey-header">
                <div class="section-badge">{"👷 Project Submission"}</div>
                <h2 class="section-title">
                    {"Share Your "}<span class="section-title-accent">{"Vision"}</span>
                </h2>
                <p class="section-subtitle">
                    {"Tell us about your construction project. We'll match you with the right builders."}
                </p>
            </div>

            if !wizard.is_complete() {
                <div class="wizard-card">
                    <div
                        class="wizard-stripe"
                        style={format!("background: repeating-linear-gradient(90deg, {a}, {a} 20px, transparent 20px, transparent 30px);", a = step.accent)}
                    ></div>

                    <div class="wizard-indicators">
                        {
                            STEPS.iter().enumerate().map(|(i, _)| {
                                let dot_class = if i < step_index {
                                    "wizard-dot wizard-dot--done"
                                } else if i == step_index {
                                    "wizard-dot wizard-dot--current"
                                } else {
                                    "wizard-dot"
                                };
                                html! {
                                    <div class="wizard-indicator" key={i}>
                                        <div class={dot_class}>
                                            { if i < step_index { "✓".to_string() } else { (i + 1).to_string() } }
                                        </div>
                                        if i < STEPS.len() - 1 {
                                            <div class={classes!("wizard-connector", (i < step_index).then_some("wizard-connector--done"))}></div>
                                        }
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="wizard-step-header">
                        <p class="wizard-step-count">
                            { format!("Step {} of {}", step_index + 1, STEPS.len()) }
                        </p>
                        <h3 class="wizard-step-title">{step.title}</h3>
                        <p class="wizard-step-subtitle">{step.subtitle}</p>
                    </div>

                    <div class="wizard-progress">
                        <div
                            class="wizard-progress-fill"
                            style={format!("width: {}%; background: {};", wizard.progress() * 100.0, step.accent)}
                        ></div>
                    </div>

                    <div class="wizard-fields">
                        { render_step_fields(&wizard, &set_field) }
                    </div>

                    <div class="wizard-buttons">
                        <button
                            class="wizard-back"
                            disabled={step_index == 0}
                            onclick={on_back}
                        >
                            {"← Back"}
                        </button>
                        <button class="wizard-next" onclick={on_next}>
                            { if wizard.on_last_step() { "Submit Project →" } else { "Continue →" } }
                        </button>
                    </div>
                </div>
            } else {
                <div class="wizard-card wizard-card--complete">
                    <div class="wizard-stripe wizard-stripe--success"></div>
                    <div class="wizard-complete">
                        <div class="wizard-complete-icon">{"✓"}</div>
                        <h3 class="wizard-complete-title">{"Project Submitted! 🎉"}</h3>
                        <p class="wizard-complete-copy">
                            {"Our team will review your project and connect you with top-rated builders within "}
                            <strong>{"24 hours"}</strong>{"."}
                        </p>
                        <button class="wizard-next" onclick={on_restart}>
                            {"✨ Submit Another Project"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}

fn render_step_fields(
    wizard: &WizardState,
    set_field: &dyn Fn(&'static str) -> Callback<String>,
) -> Html {
    match wizard.current().id {
        "basics" => html! {
            <>
                <TextField
                    label="Full Name"
                    placeholder="e.g., Rajesh Kumar"
                    value={wizard.field(wizard::NAME).to_string()}
                    on_change={set_field(wizard::NAME)}
                />
                <TextField
                    label="Email Address"
                    input_type="email"
                    placeholder="rajesh@company.com"
                    value={wizard.field(wizard::EMAIL).to_string()}
                    on_change={set_field(wizard::EMAIL)}
                />
                <TextField
                    label="Phone Number"
                    placeholder="+91 98765 43210"
                    value={wizard.field(wizard::PHONE).to_string()}
                    on_change={set_field(wizard::PHONE)}
                />
            </>
        },
        "project" => html! {
            <>
                <SelectField
                    label="Project Type"
                    value={wizard.field(wizard::PROJECT_TYPE).to_string()}
                    on_change={set_field(wizard::PROJECT_TYPE)}
                    options={vec![
                        ("".to_string(), "Select construction type...".to_string()),
                        ("residential".to_string(), "🏠 Residential".to_string()),
                        ("commercial".to_string(), "🏢 Commercial".to_string()),
                        ("industrial".to_string(), "🏭 Industrial".to_string()),
                        ("mixed".to_string(), "🏗️ Mixed-Use Development".to_string()),
                        ("renovation".to_string(), "🔨 Renovation / Remodel".to_string()),
                    ]}
                />
                <SelectField
                    label="Budget Range"
                    value={wizard.field(wizard::BUDGET).to_string()}
                    on_change={set_field(wizard::BUDGET)}
                    options={vec![
                        ("".to_string(), "Select budget range...".to_string()),
                        ("under50l".to_string(), "Under ₹50 Lakhs".to_string()),
                        ("50l-1cr".to_string(), "₹50 Lakhs – 1 Crore".to_string()),
                        ("1cr-5cr".to_string(), "₹1 – 5 Crore".to_string()),
                        ("5cr-10cr".to_string(), "₹5 – 10 Crore".to_string()),
                        ("above10cr".to_string(), "₹10 Crore+".to_string()),
                    ]}
                />
            </>
        },
        "details" => html! {
            <TextAreaField
                label="Project Description"
                placeholder="Describe your construction project: type of structure, number of floors, special requirements, timeline expectations, any architectural preferences..."
                value={wizard.field(wizard::DESCRIPTION).to_string()}
                on_change={set_field(wizard::DESCRIPTION)}
            />
        },
        _ => html! {
            <>
                <TextField
                    label="Plot / Khasra Number"
                    placeholder="e.g., Plot 42, Sector 15"
                    value={wizard.field(wizard::PLOT).to_string()}
                    on_change={set_field(wizard::PLOT)}
                />
                <TextField
                    label="City / District"
                    placeholder="e.g., Gurugram, Haryana"
                    value={wizard.field(wizard::CITY).to_string()}
                    on_change={set_field(wizard::CITY)}
                />
            </>
        },
    }
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    label: &'static str,
    #[prop_or("text")]
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    on_change: Callback<String>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="form-field">
            <label class="form-label">{props.label}</label>
            <input
                type={props.input_type}
                class="form-input"
                placeholder={props.placeholder}
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SelectFieldProps {
    label: &'static str,
    value: String,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
}

#[function_component(SelectField)]
fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class="form-field">
            <label class="form-label">{props.label}</label>
            <select class="form-input form-select" value={props.value.clone()} {onchange}>
                {
                    props.options.iter().map(|(value, label)| html! {
                        <option
                            key={value.clone()}
                            value={value.clone()}
                            selected={*value == props.value}
                        >
                            {label.clone()}
                        </option>
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TextAreaFieldProps {
    label: &'static str,
    placeholder: &'static str,
    value: String,
    on_change: Callback<String>,
}

#[function_component(TextAreaField)]
fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
        })
    };

    html! {
        <div class="form-field">
            <label class="form-label">{props.label}</label>
            <textarea
                class="form-input form-textarea"
                rows="7"
                placeholder={props.placeholder}
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}
