use yew::prelude::*;

use crate::config;
use crate::utils::reveal::{reveal_classes, use_reveal};

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "fas fa-dollar-sign",
        "Best Market Value",
        "Our proprietary valuation engine ensures you get the highest possible return for your software licenses. We analyze current market trends to offer competitive prices.",
    ),
    (
        "fas fa-shield-halved",
        "Secure Transactions",
        "Your data and transactions are protected with enterprise-grade security. We use bank-level encryption and secure transfer protocols to keep your information safe.",
    ),
    (
        "fas fa-clock",
        "Fast Processing",
        "Get quotes in minutes and payment within 24-48 hours. Our streamlined process eliminates unnecessary delays so you can access your funds quickly.",
    ),
    (
        "fas fa-award",
        "Compliance Guaranteed",
        "All transactions are fully compliant with software licensing regulations and legal requirements. Our legal team ensures all transfers are properly documented.",
    ),
];

const STATS: [(&str, &str); 3] = [
    ("$10M+", "Recovered for clients"),
    ("5,000+", "Transactions completed"),
    ("24hrs", "Average payment time"),
];

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let (section_ref, in_view) = use_reveal(config::REVEAL_THRESHOLD);

    html! {
        <section id="why-choose-us" ref={section_ref} class="py-16 md:py-24 bg-white dark:bg-gray-800">
            <div class="container mx-auto px-4 md:px-8">
                <div class="text-center mb-16">
                    <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "mb-4", "text-gray-900", "dark:text-white", "transition-all", "duration-700", reveal_classes(in_view, "translate-y-8"))}>
                        {"Why Choose SoftSell"}
                    </h2>
                    <p class={classes!("text-xl", "text-gray-600", "dark:text-gray-300", "max-w-xl", "mx-auto", "transition-all", "duration-700", "delay-100", reveal_classes(in_view, "translate-y-8"))}>
                        {"We've helped thousands of businesses recover value from their unused software assets."}
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    { for FEATURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                        <div
                            class={classes!("transition-all", "duration-700", "transform", reveal_classes(in_view, "translate-y-12"))}
                            style={format!("transition-delay: {}ms", i as u32 * config::REVEAL_STAGGER_MS)}
                        >
                            <div class="h-full bg-white dark:bg-gray-900 rounded-xl p-6 border border-gray-100 dark:border-gray-700 hover:border-blue-200 hover:shadow-md transition-all">
                                <div class="flex items-center mb-4">
                                    <div class="w-12 h-12 rounded-lg bg-blue-100 dark:bg-blue-900/40 flex items-center justify-center mr-4">
                                        <i class={classes!(*icon, "text-xl", "text-blue-700", "dark:text-blue-400")}></i>
                                    </div>
                                    <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{*title}</h3>
                                </div>
                                <p class="text-gray-600 dark:text-gray-300">{*description}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class={classes!("mt-16", "text-center", "transition-all", "duration-700", "delay-700", if in_view { "opacity-100" } else { "opacity-0" })}>
                    <div class="flex flex-wrap justify-center gap-8 items-center">
                        { for STATS.iter().enumerate().map(|(i, (figure, caption))| html! {
                            <>
                                if i > 0 {
                                    <div class="bg-gray-300 dark:bg-gray-600 w-px h-16 hidden md:block"></div>
                                }
                                <div class="text-center px-6">
                                    <div class="text-4xl font-bold text-blue-700 dark:text-blue-400 mb-2">{*figure}</div>
                                    <p class="text-gray-600 dark:text-gray-300">{*caption}</p>
                                </div>
                            </>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
