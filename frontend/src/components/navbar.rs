use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::theme_toggle::ThemeToggle;
use crate::config;
use crate::utils::theme::Theme;

pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#how-it-works", "How It Works"),
    ("#why-choose-us", "Why Choose Us"),
    ("#testimonials", "Testimonials"),
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLL_THRESHOLD
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    // Solid background once the page has scrolled
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(is_scrolled(scroll_y));
                                }
                            }
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to attach scroll listener: {:?}", e);
                    }
                    if let Ok(scroll_y) = window.scroll_y() {
                        scrolled.set(is_scrolled(scroll_y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let nav_class = if *scrolled {
        "bg-white dark:bg-gray-900 shadow-md dark:shadow-gray-800 py-2"
    } else {
        "bg-transparent py-4"
    };
    let link_class = "text-gray-700 dark:text-gray-300 hover:text-blue-700 dark:hover:text-blue-400 transition-colors";

    html! {
        <nav class={classes!("fixed", "top-0", "left-0", "right-0", "z-50", "transition-all", "duration-300", nav_class)}>
            <div class="container mx-auto px-4 md:px-8">
                <div class="flex items-center justify-between">
                    <a href="#" class="flex items-center hover:scale-105 transition-transform">
                        <i class="fas fa-display text-2xl text-blue-700 dark:text-blue-400 mr-2"></i>
                        <span class="text-xl font-bold text-blue-900 dark:text-white">{"SoftSell"}</span>
                    </a>

                    <div class="hidden md:flex items-center space-x-8">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class={link_class}>{*label}</a>
                        }) }
                        <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                        <Button href="#contact" size={ButtonSize::Sm}>{"Get Started"}</Button>
                    </div>

                    <div class="md:hidden flex items-center space-x-4">
                        <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                        <button
                            onclick={toggle_menu}
                            class={link_class}
                            aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        >
                            <i class={if *menu_open { "fas fa-xmark text-2xl" } else { "fas fa-bars text-2xl" }}></i>
                        </button>
                    </div>
                </div>

                if *menu_open {
                    <div class="md:hidden absolute top-full left-0 right-0 bg-white dark:bg-gray-900 shadow-md dark:shadow-gray-800 py-4 px-4 flex flex-col space-y-4">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} onclick={close_menu.clone()} class={classes!(link_class, "py-2")}>{*label}</a>
                        }) }
                        <Button href="#contact" variant={ButtonVariant::Secondary} onclick={close_menu.clone()} full_width=true>
                            {"Get Started"}
                        </Button>
                    </div>
                }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        let targets: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
        assert_eq!(targets, ["#how-it-works", "#why-choose-us", "#testimonials"]);
    }
}
