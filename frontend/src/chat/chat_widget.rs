use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chat::conversation::{ChatAction, Conversation, Sender};
use crate::config;

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let conversation = use_reducer(Conversation::default);
    let input = use_state(String::new);
    let bottom_ref = use_node_ref();

    // Simulated typing delay. The pending timeout lives in the effect, so it is
    // cancelled if the widget unmounts before the reply lands.
    {
        let dispatcher = conversation.dispatcher();
        let awaiting = conversation.awaiting();
        use_effect_with_deps(
            move |awaiting| {
                let pending = awaiting.map(|id| {
                    log::debug!("Reply to {} scheduled in {}ms", id, config::REPLY_DELAY_MS);
                    Timeout::new(config::REPLY_DELAY_MS, move || {
                        dispatcher.dispatch(ChatAction::Deliver(id));
                    })
                });
                move || drop(pending)
            },
            awaiting,
        );
    }

    // Keep the newest message in view
    {
        let bottom_ref = bottom_ref.clone();
        let deps = (
            conversation.messages().len(),
            conversation.is_typing(),
            conversation.is_open(),
        );
        use_effect_with_deps(
            move |_| {
                if let Some(bottom) = bottom_ref.cast::<web_sys::Element>() {
                    bottom.scroll_into_view_with_bool(false);
                }
                || ()
            },
            deps,
        );
    }

    let on_open = {
        let conversation = conversation.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Chat widget opened");
            conversation.dispatch(ChatAction::Open);
        })
    };
    let on_close = {
        let conversation = conversation.clone();
        Callback::from(move |_: MouseEvent| conversation.dispatch(ChatAction::Close))
    };
    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };
    let on_submit = {
        let conversation = conversation.clone();
        let input = input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = (*input).clone();
            if text.trim().is_empty() {
                return;
            }
            if conversation.is_typing() {
                gloo_console::log!("Reply still pending, holding message");
                return;
            }
            conversation.dispatch(ChatAction::Submit(text));
            input.set(String::new());
        })
    };

    let can_send = !input.trim().is_empty() && !conversation.is_typing();

    html! {
        <>
            <button
                onclick={on_open}
                class={classes!(
                    "fixed", "bottom-4", "right-4", "bg-blue-700", "text-white", "w-14", "h-14",
                    "rounded-full", "shadow-lg", "z-50", "hover:scale-110", "transition-transform",
                    conversation.is_open().then_some("hidden")
                )}
                aria-label="Open chat"
            >
                <i class="fas fa-comment-dots text-2xl"></i>
            </button>

            if conversation.is_open() {
                <div class="fixed bottom-4 right-4 w-96 max-w-[calc(100vw-2rem)] h-[500px] bg-white dark:bg-gray-800 rounded-lg shadow-xl flex flex-col z-50">
                    <div class="p-4 border-b dark:border-gray-700 flex justify-between items-center bg-blue-700 text-white rounded-t-lg">
                        <h3 class="font-semibold">{"SoftSell Assistant"}</h3>
                        <button onclick={on_close} class="hover:bg-blue-800 p-1 rounded" aria-label="Close chat">
                            <i class="fas fa-xmark"></i>
                        </button>
                    </div>

                    <div class="flex-1 overflow-y-auto p-4 space-y-4">
                        { for conversation.messages().iter().map(|message| {
                            let is_user = message.sender == Sender::User;
                            html! {
                                <div
                                    key={message.id.to_string()}
                                    class={classes!("flex", if is_user { "justify-end" } else { "justify-start" })}
                                >
                                    <div class={classes!(
                                        "max-w-[80%]", "p-3", "rounded-lg",
                                        if is_user {
                                            "bg-blue-700 text-white"
                                        } else {
                                            "bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-white"
                                        }
                                    )}>
                                        { message.text.clone() }
                                    </div>
                                </div>
                            }
                        }) }
                        if conversation.is_typing() {
                            <div class="flex items-center space-x-2 text-gray-500">
                                <i class="fas fa-spinner animate-spin"></i>
                                <span>{"Typing..."}</span>
                            </div>
                        }
                        <div ref={bottom_ref}></div>
                    </div>

                    <form onsubmit={on_submit} class="p-4 border-t dark:border-gray-700">
                        <div class="flex space-x-2">
                            <input
                                type="text"
                                value={(*input).clone()}
                                oninput={on_input}
                                placeholder="Type your message..."
                                class="flex-1 p-2 border dark:border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 dark:bg-gray-700 dark:text-white"
                            />
                            <button
                                type="submit"
                                disabled={!can_send}
                                class="bg-blue-700 text-white px-3 rounded-lg hover:bg-blue-800 disabled:opacity-50 disabled:cursor-not-allowed"
                                aria-label="Send"
                            >
                                <i class="fas fa-paper-plane"></i>
                            </button>
                        </div>
                    </form>
                </div>
            }
        </>
    }
}
