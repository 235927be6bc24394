use yew::prelude::*;

use crate::utils::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let (icon, label) = if props.theme.is_dark() {
        ("fas fa-sun text-yellow-400", "Switch to light mode")
    } else {
        ("fas fa-moon text-gray-700", "Switch to dark mode")
    };

    html! {
        <button
            {onclick}
            class="p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
            aria-label={label}
            title={label}
        >
            <i class={icon}></i>
        </button>
    }
}
