/// Simulated "assistant is typing" latency before a canned reply lands.
pub const REPLY_DELAY_MS: u32 = 1_000;

/// Simulated network latency for the contact form.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// How long the "Thank You" panel stays up before the form comes back.
pub const SUBMITTED_RESET_MS: u32 = 5_000;

/// Fraction of a section that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Stagger between cards inside a revealed section.
pub const REVEAL_STAGGER_MS: u32 = 150;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Scroll offset (px) after which the navbar gets its solid background.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 10.0;

pub const GREETING: &str = "Hi! How can I help you today?";

pub fn get_support_email() -> &'static str {
    option_env!("SOFTSELL_SUPPORT_EMAIL").unwrap_or("support@softsell.com")
}
