use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::config;
use crate::sections::contact_models::{ContactFormState, Field, FormAction, FormStatus, LicenseType};
use crate::utils::reveal::{reveal_classes, use_reveal};

const FAQ: [(&str, &str); 3] = [
    (
        "What types of licenses do you buy?",
        "We purchase a wide range of business software licenses, including Microsoft, Adobe, Oracle, SAP, and more.",
    ),
    (
        "How is the price determined?",
        "We analyze current market rates, remaining subscription time, and transferability to offer competitive prices.",
    ),
    (
        "How long does the process take?",
        "From submission to payment, the process typically takes 1-3 business days depending on license complexity.",
    ),
];

/// Pulls `(name, value)` off whichever form control fired the event.
fn control_value(e: &Event) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

fn input_class(has_error: bool) -> Classes {
    classes!(
        "w-full", "px-4", "py-2", "rounded-md", "border", "bg-white", "dark:bg-gray-700",
        "text-gray-900", "dark:text-white", "focus:outline-none", "focus:ring-2", "focus:ring-blue-500",
        if has_error { "border-red-500" } else { "border-gray-300 dark:border-gray-600" }
    )
}

#[function_component(ContactFormSection)]
pub fn contact_form_section() -> Html {
    let (section_ref, in_view) = use_reveal(config::REVEAL_THRESHOLD);
    let state = use_reducer(ContactFormState::default);

    // Simulated request, then the thank-you panel times out. Each timeout is
    // owned by the effect for the current status and dropped when it changes
    // or the section unmounts.
    {
        let dispatcher = state.dispatcher();
        let status = state.status;
        let form = state.form.clone();
        use_effect_with_deps(
            move |status| {
                let pending = match status {
                    FormStatus::Submitting => {
                        log::info!("Submitting contact form");
                        match serde_json::to_string(&form) {
                            Ok(payload) => log::debug!("Contact payload: {}", payload),
                            Err(e) => log::warn!("Could not encode contact payload: {}", e),
                        }
                        Some(Timeout::new(config::SUBMIT_DELAY_MS, move || {
                            dispatcher.dispatch(FormAction::Finished);
                        }))
                    }
                    FormStatus::Submitted => Some(Timeout::new(config::SUBMITTED_RESET_MS, move || {
                        dispatcher.dispatch(FormAction::Reset);
                    })),
                    FormStatus::Editing => None,
                };
                move || drop(pending)
            },
            status,
        );
    }

    let onchange = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let Some((name, value)) = control_value(&e) else {
                return;
            };
            match Field::from_name(&name) {
                Some(field) => state.dispatch(FormAction::Edit(field, value)),
                None => log::warn!("Edit from unknown form control {:?}", name),
            }
        })
    };
    // Text controls report on every keystroke so errors clear as the user types.
    let oninput = {
        let onchange = onchange.clone();
        Callback::from(move |e: InputEvent| onchange.emit(e.into()))
    };
    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(FormAction::Submit);
        })
    };
    let send_another = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(FormAction::Reset))
    };

    let error_for = |field: Field| -> Html {
        match state.errors.get(field) {
            Some(error) => html! {
                <p class="mt-1 text-sm text-red-600 flex items-center">
                    <i class="fas fa-circle-exclamation mr-1"></i>
                    {error.to_string()}
                </p>
            },
            None => html! {},
        }
    };
    let has_error = |field: Field| state.errors.get(field).is_some();
    let label_class = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1";
    let submitting = state.status == FormStatus::Submitting;

    html! {
        <section id="contact" ref={section_ref} class="py-16 md:py-24 bg-white dark:bg-gray-800">
            <div class="container mx-auto px-4 md:px-8">
                <div class="max-w-5xl mx-auto">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                        <div class={classes!("transition-all", "duration-700", reveal_classes(in_view, "-translate-x-12"))}>
                            <h2 class="text-3xl md:text-4xl font-bold mb-6 text-gray-900 dark:text-white">
                                {"Ready to Turn Your Unused Licenses into Cash?"}
                            </h2>
                            <p class="text-xl text-gray-600 dark:text-gray-300 mb-8">
                                {"Fill out the form, and our team will get back to you with a free valuation within 24 hours."}
                            </p>

                            <div class="bg-gray-50 dark:bg-gray-900 rounded-xl p-6 mb-8">
                                <h3 class="text-xl font-semibold mb-4 text-gray-900 dark:text-white">{"Common Questions"}</h3>
                                <div class="space-y-4">
                                    { for FAQ.iter().map(|(question, answer)| html! {
                                        <div>
                                            <h4 class="font-medium text-gray-800 dark:text-gray-100 mb-1">{*question}</h4>
                                            <p class="text-gray-600 dark:text-gray-400 text-sm">{*answer}</p>
                                        </div>
                                    }) }
                                </div>
                            </div>

                            <div class="flex items-center space-x-4">
                                <img
                                    src="https://images.pexels.com/photos/3184338/pexels-photo-3184338.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
                                    alt="Customer service team"
                                    class="w-16 h-16 rounded-full object-cover"
                                    loading="lazy"
                                />
                                <div>
                                    <div class="font-medium text-gray-900 dark:text-white">{"Need assistance?"}</div>
                                    <div class="text-blue-700 dark:text-blue-400">{config::get_support_email()}</div>
                                </div>
                            </div>
                        </div>

                        <div class={classes!("transition-all", "duration-700", reveal_classes(in_view, "translate-x-12"))}>
                            <div class="bg-white dark:bg-gray-900 rounded-xl shadow-lg p-8">
                                if state.status == FormStatus::Submitted {
                                    <div class="text-center py-8">
                                        <div class="w-16 h-16 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-4">
                                            <i class="fas fa-check text-3xl text-green-600"></i>
                                        </div>
                                        <h3 class="text-2xl font-semibold mb-2 text-gray-900 dark:text-white">{"Thank You!"}</h3>
                                        <p class="text-gray-600 dark:text-gray-300 mb-6">
                                            {"Your message has been submitted successfully. Our team will get back to you within 24 hours with a free valuation."}
                                        </p>
                                        <Button variant={ButtonVariant::Outline} onclick={send_another}>
                                            {"Send Another Message"}
                                        </Button>
                                    </div>
                                } else {
                                    <form {onsubmit} novalidate=true>
                                        <h3 class="text-2xl font-semibold mb-6 text-gray-900 dark:text-white">{"Get a Free Valuation"}</h3>

                                        <div class="space-y-4">
                                            <div>
                                                <label for="name" class={label_class}>{"Full Name"}</label>
                                                <input
                                                    type="text" id="name" name={Field::Name.name()}
                                                    value={state.form.name.clone()}
                                                    oninput={oninput.clone()}
                                                    class={input_class(has_error(Field::Name))}
                                                    placeholder="John Doe"
                                                />
                                                { error_for(Field::Name) }
                                            </div>

                                            <div>
                                                <label for="email" class={label_class}>{"Email Address"}</label>
                                                <input
                                                    type="email" id="email" name={Field::Email.name()}
                                                    value={state.form.email.clone()}
                                                    oninput={oninput.clone()}
                                                    class={input_class(has_error(Field::Email))}
                                                    placeholder="john@company.com"
                                                />
                                                { error_for(Field::Email) }
                                            </div>

                                            <div>
                                                <label for="company" class={label_class}>{"Company Name"}</label>
                                                <input
                                                    type="text" id="company" name={Field::Company.name()}
                                                    value={state.form.company.clone()}
                                                    oninput={oninput.clone()}
                                                    class={input_class(has_error(Field::Company))}
                                                    placeholder="Acme Inc."
                                                />
                                                { error_for(Field::Company) }
                                            </div>

                                            <div>
                                                <label for="licenseType" class={label_class}>{"License Type"}</label>
                                                <select
                                                    id="licenseType" name={Field::LicenseType.name()}
                                                    onchange={onchange.clone()}
                                                    class={input_class(has_error(Field::LicenseType))}
                                                >
                                                    <option value="" selected={state.form.license_type.is_none()}>{"Select License Type"}</option>
                                                    { for LicenseType::ALL.iter().map(|license| html! {
                                                        <option
                                                            value={license.value()}
                                                            selected={state.form.license_type == Some(*license)}
                                                        >
                                                            {license.label()}
                                                        </option>
                                                    }) }
                                                </select>
                                                { error_for(Field::LicenseType) }
                                            </div>

                                            <div>
                                                <label for="message" class={label_class}>{"Message"}</label>
                                                <textarea
                                                    id="message" name={Field::Message.name()}
                                                    rows="4"
                                                    value={state.form.message.clone()}
                                                    oninput={oninput.clone()}
                                                    class={input_class(has_error(Field::Message))}
                                                    placeholder="Describe the software licenses you wish to sell..."
                                                />
                                                { error_for(Field::Message) }
                                            </div>
                                        </div>

                                        <div class="mt-6">
                                            <Button
                                                button_type="submit"
                                                size={ButtonSize::Lg}
                                                full_width=true
                                                disabled={submitting}
                                            >
                                                { if submitting { "Submitting..." } else { "Get Free Valuation" } }
                                            </Button>
                                        </div>

                                        <p class="text-xs text-gray-500 mt-4 text-center">
                                            {"By submitting this form, you agree to our Privacy Policy and Terms of Service."}
                                        </p>
                                    </form>
                                }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
