use yew::prelude::*;

use crate::config;
use crate::utils::reveal::{reveal_classes, use_reveal};

struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        icon: "fas fa-upload",
        title: "Upload License Details",
        description: "Share your unused software license information through our secure platform. We support all major vendors.",
    },
    Step {
        icon: "fas fa-dollar-sign",
        title: "Get Valuation",
        description: "Receive a competitive market valuation within minutes. Our AI pricing engine ensures you get the best possible offer.",
    },
    Step {
        icon: "fas fa-credit-card",
        title: "Get Paid",
        description: "Accept the offer and receive payment via your preferred method within 24-48 hours. Fast, secure, and hassle-free.",
    },
];

fn render_step(index: usize, step: &Step, in_view: bool) -> Html {
    let number = index + 1;
    html! {
        <div
            class={classes!("transition-all", "duration-700", "transform", reveal_classes(in_view, "translate-y-12"))}
            style={format!("transition-delay: {}ms", index as u32 * config::REVEAL_STAGGER_MS)}
        >
            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6 h-full hover:shadow-lg transition-shadow">
                <div class="w-14 h-14 rounded-full bg-blue-100 dark:bg-blue-900/40 flex items-center justify-center mb-4">
                    <i class={classes!(step.icon, "text-2xl", "text-blue-700", "dark:text-blue-400")}></i>
                </div>
                <h3 class="text-xl font-semibold mb-2 text-gray-900 dark:text-white">{step.title}</h3>
                <p class="text-gray-600 dark:text-gray-300">{step.description}</p>
                <div class="mt-4 flex items-center">
                    <div class="w-8 h-8 rounded-full bg-blue-700 text-white flex items-center justify-center font-bold">
                        {number.to_string()}
                    </div>
                    if number < STEPS.len() {
                        <div class="h-0.5 bg-blue-200 flex-grow ml-2 hidden md:block"></div>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let (section_ref, in_view) = use_reveal(config::REVEAL_THRESHOLD);

    html! {
        <section id="how-it-works" ref={section_ref} class="py-16 md:py-24 bg-gray-50 dark:bg-gray-900">
            <div class="container mx-auto px-4 md:px-8">
                <div class="text-center mb-16">
                    <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "mb-4", "text-gray-900", "dark:text-white", "transition-all", "duration-700", reveal_classes(in_view, "translate-y-8"))}>
                        {"How It Works"}
                    </h2>
                    <p class={classes!("text-xl", "text-gray-600", "dark:text-gray-300", "max-w-xl", "mx-auto", "transition-all", "duration-700", "delay-100", reveal_classes(in_view, "translate-y-8"))}>
                        {"Our streamlined process makes it easy to convert your unused software licenses into cash."}
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    { for STEPS.iter().enumerate().map(|(i, step)| render_step(i, step, in_view)) }
                </div>

                <div class={classes!("mt-16", "bg-blue-700", "rounded-xl", "p-8", "text-white", "text-center", "max-w-3xl", "mx-auto", "transition-all", "duration-700", "delay-500", reveal_classes(in_view, "scale-95"))}>
                    <div class="flex justify-center mb-4">
                        <i class="fas fa-circle-check text-5xl"></i>
                    </div>
                    <h3 class="text-2xl font-semibold mb-2">{"Ready to get started?"}</h3>
                    <p class="mb-6">{"Convert your unused software licenses into cash today."}</p>
                    <a href="#contact" class="inline-block bg-white text-blue-700 font-medium px-6 py-3 rounded-md hover:bg-blue-50 transition-colors">
                        {"Get a Free Valuation"}
                    </a>
                </div>
            </div>
        </section>
    }
}
