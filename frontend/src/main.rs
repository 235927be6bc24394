use yew::prelude::*;
use yew_router::prelude::*;

mod config;

mod utils {
    pub mod reveal;
    pub mod theme;
}
mod chat {
    pub mod chat_widget;
    pub mod conversation;
    pub mod responder;
}
mod components {
    pub mod button;
    pub mod footer;
    pub mod navbar;
    pub mod theme_toggle;
}
mod sections {
    pub mod contact_form;
    pub mod contact_models;
    pub mod hero;
    pub mod how_it_works;
    pub mod testimonials;
    pub mod why_choose_us;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use utils::theme::Theme;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct PageProps {
    route: Route,
    theme: Theme,
    on_toggle_theme: Callback<()>,
}

// Single page: unknown paths still get the landing page.
#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    match props.route {
        Route::Landing | Route::NotFound => html! {
            <Landing theme={props.theme} on_toggle_theme={props.on_toggle_theme.clone()} />
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(Theme::load);

    {
        let current = *theme;
        use_effect_with_deps(
            move |theme| {
                theme.persist();
                || ()
            },
            current,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggle();
            log::info!("Theme switched to {}", next);
            theme.set(next);
        })
    };

    let current = *theme;
    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route: Route| html! {
                <Page {route} theme={current} on_toggle_theme={on_toggle_theme.clone()} />
            }} />
        </BrowserRouter>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting SoftSell frontend");
    yew::Renderer::<App>::new().render();
}
