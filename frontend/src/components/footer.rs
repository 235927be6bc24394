use yew::prelude::*;

use crate::components::navbar::NAV_LINKS;
use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().format("%Y").to_string();
    let support = config::get_support_email();

    html! {
        <footer class="bg-gray-900 text-gray-400 py-12">
            <div class="container mx-auto px-4 md:px-8">
                <div class="flex flex-col md:flex-row justify-between gap-8">
                    <div>
                        <div class="flex items-center mb-3">
                            <i class="fas fa-display text-xl text-blue-400 mr-2"></i>
                            <span class="text-lg font-bold text-white">{"SoftSell"}</span>
                        </div>
                        <p class="max-w-sm text-sm">
                            {"Helping businesses recover value from unused software licenses."}
                        </p>
                    </div>
                    <div class="flex flex-col space-y-2 text-sm">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="hover:text-white transition-colors">{*label}</a>
                        }) }
                        <a href="#contact" class="hover:text-white transition-colors">{"Contact"}</a>
                    </div>
                    <div class="text-sm">
                        <div class="text-white font-medium mb-2">{"Questions?"}</div>
                        <a href={format!("mailto:{}", support)} class="hover:text-white transition-colors">{support}</a>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-6 text-xs text-center">
                    {format!("© {} SoftSell. All rights reserved.", year)}
                </div>
            </div>
        </footer>
    }
}
