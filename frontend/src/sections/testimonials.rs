use yew::prelude::*;

use crate::config;
use crate::utils::reveal::{reveal_classes, use_reveal};

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "SoftSell helped us recover over $50,000 from unused enterprise software licenses. The process was quick and their valuation was higher than we expected. Highly recommended for any IT department looking to optimize their software spend.",
        name: "Sarah Chen",
        role: "CTO",
        company: "Nexus Innovations",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Testimonial {
        quote: "As a growing startup, cash flow is critical. SoftSell allowed us to recover capital from over-purchased software licenses with minimal effort. Their team was professional, and the payment was processed within 24 hours of acceptance.",
        name: "Marcus Johnson",
        role: "CFO",
        company: "TechFront Solutions",
        image: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

/// Index into a fixed set of slides; prev/next wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            active: (self.active + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            active: (self.active + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn go_to(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Self {
            active: index,
            ..self
        }
    }
}

fn render_card(testimonial: &Testimonial, is_active: bool) -> Html {
    html! {
        <div class={classes!(
            "transition-all", "duration-500", "transform",
            if is_active { "opacity-100 scale-100" } else { "opacity-0 scale-95 absolute inset-x-0 top-0 pointer-events-none" }
        )}>
            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-lg p-8 md:p-10">
                <div class="flex mb-6 text-yellow-400">
                    { for (0..5).map(|_| html! { <i class="fas fa-star mr-1"></i> }) }
                </div>
                <blockquote class="text-gray-700 dark:text-gray-200 text-lg md:text-xl italic mb-8">
                    {format!("\"{}\"", testimonial.quote)}
                </blockquote>
                <div class="flex items-center">
                    <img src={testimonial.image} alt={testimonial.name} class="w-14 h-14 rounded-full object-cover mr-4" loading="lazy" />
                    <div>
                        <div class="font-semibold text-gray-800 dark:text-white">{testimonial.name}</div>
                        <div class="text-gray-600 dark:text-gray-400">{format!("{}, {}", testimonial.role, testimonial.company)}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let (section_ref, in_view) = use_reveal(config::REVEAL_THRESHOLD);
    let carousel = use_state(|| Carousel::new(TESTIMONIALS.len()));

    let go_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let go_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };
    let arrow_class = "bg-white dark:bg-gray-700 rounded-full w-10 h-10 shadow-md hover:bg-blue-50 dark:hover:bg-gray-600 transition-colors text-gray-700 dark:text-gray-200";

    html! {
        <section id="testimonials" ref={section_ref} class="py-16 md:py-24 bg-gray-50 dark:bg-gray-900">
            <div class="container mx-auto px-4 md:px-8">
                <div class="text-center mb-16">
                    <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "mb-4", "text-gray-900", "dark:text-white", "transition-all", "duration-700", reveal_classes(in_view, "translate-y-8"))}>
                        {"What Our Clients Say"}
                    </h2>
                    <p class={classes!("text-xl", "text-gray-600", "dark:text-gray-300", "max-w-xl", "mx-auto", "transition-all", "duration-700", "delay-100", reveal_classes(in_view, "translate-y-8"))}>
                        {"Trusted by businesses of all sizes to maximize the value of their software assets."}
                    </p>
                </div>

                <div class={classes!("max-w-3xl", "mx-auto", "transition-all", "duration-700", "delay-200", if in_view { "opacity-100" } else { "opacity-0" })}>
                    <div class="relative">
                        { for TESTIMONIALS.iter().enumerate().map(|(i, t)| render_card(t, i == carousel.active())) }

                        <div class="flex justify-center mt-8 space-x-2">
                            { for (0..TESTIMONIALS.len()).map(|i| {
                                let onclick = {
                                    let carousel = carousel.clone();
                                    Callback::from(move |_: MouseEvent| carousel.set(carousel.go_to(i)))
                                };
                                html! {
                                    <button
                                        {onclick}
                                        class={classes!(
                                            "w-3", "h-3", "rounded-full", "transition-all",
                                            if i == carousel.active() { "bg-blue-700 scale-110" } else { "bg-gray-300 hover:bg-gray-400" }
                                        )}
                                        aria-label={format!("Go to testimonial {}", i + 1)}
                                    />
                                }
                            }) }
                        </div>

                        <div class="absolute top-1/2 -translate-y-1/2 left-0 -ml-4 md:-ml-6">
                            <button onclick={go_prev} class={arrow_class} aria-label="Previous testimonial">
                                <i class="fas fa-chevron-left"></i>
                            </button>
                        </div>
                        <div class="absolute top-1/2 -translate-y-1/2 right-0 -mr-4 md:-mr-6">
                            <button onclick={go_next} class={arrow_class} aria-label="Next testimonial">
                                <i class="fas fa-chevron-right"></i>
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let c = Carousel::new(2);
        assert_eq!(c.next().active(), 1);
        assert_eq!(c.next().next().active(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let c = Carousel::new(3);
        assert_eq!(c.prev().active(), 2);
        assert_eq!(c.prev().prev().prev().active(), 0);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let c = Carousel::new(2).go_to(1);
        assert_eq!(c.active(), 1);
        assert_eq!(c.go_to(5).active(), 1);
    }

    #[test]
    fn test_empty_carousel_is_stable() {
        let c = Carousel::new(0);
        assert_eq!(c.next().active(), 0);
        assert_eq!(c.prev().active(), 0);
    }
}
