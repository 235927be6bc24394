use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub full_width: bool,
    /// Renders an anchor instead of a button when set.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or(AttrValue::from("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub disabled: bool,
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, full_width: bool) -> Classes {
    let variant = match variant {
        ButtonVariant::Primary => "bg-blue-700 text-white hover:bg-blue-800 shadow-sm",
        ButtonVariant::Secondary => "bg-teal-500 text-white hover:bg-teal-600 shadow-sm",
        ButtonVariant::Outline => {
            "bg-transparent border-2 border-blue-700 text-blue-700 hover:bg-blue-50 dark:text-blue-400 dark:border-blue-400 dark:hover:bg-gray-800"
        }
    };
    let size = match size {
        ButtonSize::Sm => "text-sm px-3 py-1.5",
        ButtonSize::Md => "text-base px-4 py-2",
        ButtonSize::Lg => "text-lg px-6 py-3",
    };
    classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "rounded-md",
        "font-medium",
        "transition-all",
        "duration-200",
        "focus:outline-none",
        "focus:ring-2",
        "focus:ring-blue-500",
        "focus:ring-offset-2",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed",
        variant.split_whitespace().collect::<Vec<_>>(),
        size.split_whitespace().collect::<Vec<_>>(),
        full_width.then_some("w-full"),
    )
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = button_classes(props.variant, props.size, props.full_width);
    let onclick = props.onclick.clone();

    if let Some(href) = props.href.clone() {
        return html! {
            <a {href} {class} {onclick}>
                { for props.children.iter() }
            </a>
        };
    }

    html! {
        <button
            type={props.button_type.clone()}
            {class}
            {onclick}
            disabled={props.disabled}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        let class = button_classes(ButtonVariant::default(), ButtonSize::default(), false);
        assert!(class.contains("bg-blue-700"));
        assert!(class.contains("px-4"));
        assert!(!class.contains("w-full"));
    }

    #[test]
    fn test_outline_large_full_width() {
        let class = button_classes(ButtonVariant::Outline, ButtonSize::Lg, true);
        assert!(class.contains("border-blue-700"));
        assert!(class.contains("text-lg"));
        assert!(class.contains("w-full"));
        assert!(!class.contains("bg-blue-700"));
    }

    #[test]
    fn test_secondary_small() {
        let class = button_classes(ButtonVariant::Secondary, ButtonSize::Sm, false);
        assert!(class.contains("bg-teal-500"));
        assert!(class.contains("py-1.5"));
        assert!(!class.contains("border-2"));
    }
}
