use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::utils::reveal::reveal_classes;

// The hero is above the fold, so it animates on mount instead of on scroll.
#[function_component(Hero)]
pub fn hero() -> Html {
    let is_visible = use_state(|| false);
    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                is_visible.set(true);
                || ()
            },
            (),
        );
    }

    html! {
        <section class="relative pt-24 pb-16 md:pt-32 md:pb-24 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-blue-50 to-white dark:from-gray-900 dark:to-gray-800 -z-10"></div>
            <div class="absolute top-0 right-0 w-full h-full overflow-hidden -z-10">
                <div class="absolute -right-64 -top-64 w-[800px] h-[800px] rounded-full bg-blue-100/50 dark:bg-blue-900/20 blur-3xl"></div>
                <div class="absolute right-1/3 top-1/4 w-[600px] h-[600px] rounded-full bg-teal-100/30 dark:bg-teal-900/10 blur-3xl"></div>
            </div>

            <div class="container mx-auto px-4 md:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class={classes!("transform", "transition-all", "duration-1000", reveal_classes(*is_visible, "translate-y-12"))}>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-gray-900 dark:text-white leading-tight mb-4">
                            {"Transform Unused Software into "}
                            <span class="text-blue-700 dark:text-blue-400">{"Instant Value"}</span>
                        </h1>
                        <p class="text-xl text-gray-600 dark:text-gray-300 mb-8 md:pr-12">
                            {"SoftSell helps businesses recover costs from unused software licenses. Get fair market value, instant quotes, and fast payouts."}
                        </p>
                        <div class="flex flex-col sm:flex-row space-y-4 sm:space-y-0 sm:space-x-4">
                            <Button size={ButtonSize::Lg} href="#contact">
                                {"Get a Quote"}
                                <i class="fas fa-arrow-right ml-2"></i>
                            </Button>
                            <Button size={ButtonSize::Lg} variant={ButtonVariant::Outline} href="#how-it-works">
                                {"How It Works"}
                            </Button>
                        </div>
                        <div class="mt-8 flex items-center text-gray-500 dark:text-gray-400">
                            <i class="fas fa-dollar-sign text-green-500 mr-2"></i>
                            <span>{"Over $10M recovered for our clients in 2024"}</span>
                        </div>
                    </div>

                    <div class={classes!("relative", "transform", "transition-all", "duration-1000", "delay-300", reveal_classes(*is_visible, "translate-y-12"))}>
                        <div class="relative mx-auto max-w-md lg:max-w-full">
                            <div class="relative bg-white dark:bg-gray-800 rounded-2xl shadow-xl overflow-hidden p-1">
                                <img
                                    src="https://images.pexels.com/photos/7681069/pexels-photo-7681069.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
                                    alt="Software license valuation"
                                    class="rounded-xl w-full object-cover"
                                    loading="lazy"
                                />
                                <div class="absolute inset-0 bg-gradient-to-t from-black/40 via-transparent to-transparent rounded-xl"></div>
                                <div class="absolute bottom-0 left-0 p-6">
                                    <div class="bg-white/90 backdrop-blur-sm rounded-lg p-4 shadow-lg max-w-xs">
                                        <div class="flex items-center mb-2">
                                            <div class="h-3 w-3 rounded-full bg-green-500 mr-2"></div>
                                            <span class="text-sm font-medium text-green-700">{"Instant Valuation"}</span>
                                        </div>
                                        <p class="text-gray-700 text-sm">
                                            {"Get a fair market price for your unused software licenses in minutes."}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
