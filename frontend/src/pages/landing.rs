use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::chat::chat_widget::ChatWidget;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::sections::contact_form::ContactFormSection;
use crate::sections::hero::Hero;
use crate::sections::how_it_works::HowItWorks;
use crate::sections::testimonials::Testimonials;
use crate::sections::why_choose_us::WhyChooseUs;
use crate::utils::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // The browser tries to jump to `#contact` etc. before the sections exist,
    // so redo the jump once they are rendered.
    {
        use_effect_with_deps(
            move |_| {
                let pending = web_sys::window()
                    .and_then(|window| window.location().hash().ok())
                    .map(|hash| hash.trim_start_matches('#').to_string())
                    .filter(|id| !id.is_empty())
                    .map(|id| {
                        Timeout::new(100, move || {
                            if let Some(element) = web_sys::window()
                                .and_then(|w| w.document())
                                .and_then(|doc| doc.get_element_by_id(&id))
                            {
                                element.scroll_into_view_with_bool(true);
                            }
                        })
                    });
                move || drop(pending)
            },
            (),
        );
    }

    html! {
        <div class={classes!("min-h-screen", props.theme.is_dark().then_some("dark"))}>
            <div class="bg-white dark:bg-gray-900 transition-colors duration-200">
                <Navbar theme={props.theme} on_toggle_theme={props.on_toggle_theme.clone()} />
                <main>
                    <Hero />
                    <HowItWorks />
                    <WhyChooseUs />
                    <Testimonials />
                    <ContactFormSection />
                </main>
                <Footer />
                <ChatWidget />
            </div>
        </div>
    }
}
