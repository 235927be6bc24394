/// The five canned answers the assistant knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Process,
    Valuation,
    Payment,
    Security,
    Default,
}

impl Reply {
    pub fn text(self) -> &'static str {
        match self {
            Reply::Default => "I'm here to help you with any questions about selling your software licenses!",
            Reply::Process => "The process is simple: 1. Submit your license details through our form 2. Get an instant valuation 3. Accept the offer and receive payment within 24-48 hours.",
            Reply::Valuation => "Our valuations are based on current market rates, remaining subscription time, and license transferability. Submit your details for a precise quote.",
            Reply::Payment => "We offer secure payments via bank transfer or PayPal, typically processed within 24-48 hours after accepting an offer.",
            Reply::Security => "We use bank-level encryption and secure protocols to protect all transactions and data transfers.",
        }
    }
}

// First match wins, so order matters: "how much does it cost" is a process question.
const RULES: &[(&[&str], Reply)] = &[
    (&["how", "process"], Reply::Process),
    (&["price", "cost", "worth"], Reply::Valuation),
    (&["pay", "payment"], Reply::Payment),
    (&["secure", "safe"], Reply::Security),
];

/// Picks the canned reply for a user message.
///
/// Matching is case-insensitive substring containment, so "payday" counts as
/// a payment question. Callers are expected to drop blank input before
/// getting here; blank input simply lands on the default reply.
pub fn classify(input: &str) -> Reply {
    let normalized = input.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|(_, reply)| *reply)
        .unwrap_or(Reply::Default)
}

pub fn generate_response(input: &str) -> &'static str {
    classify(input).text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_keywords() {
        assert_eq!(classify("How does this work?"), Reply::Process);
        assert_eq!(classify("explain the PROCESS please"), Reply::Process);
        assert_eq!(classify("anyhow, hi"), Reply::Process);
    }

    #[test]
    fn test_first_rule_wins_over_later_rules() {
        assert_eq!(
            generate_response("how much does it cost"),
            Reply::Process.text()
        );
        // "process" beats "payment" too
        assert_eq!(classify("payment process"), Reply::Process);
    }

    #[test]
    fn test_valuation_keywords() {
        assert_eq!(classify("What's the price?"), Reply::Valuation);
        assert_eq!(classify("Cost?"), Reply::Valuation);
        assert_eq!(classify("is my license worth anything"), Reply::Valuation);
    }

    #[test]
    fn test_valuation_beats_payment() {
        assert_eq!(classify("what does the payment cost"), Reply::Valuation);
    }

    #[test]
    fn test_payment_keywords() {
        assert_eq!(classify("When do I get my pay?"), Reply::Payment);
        assert_eq!(classify("payment options"), Reply::Payment);
    }

    #[test]
    fn test_security_keywords() {
        assert_eq!(generate_response("Is this secure?"), Reply::Security.text());
        assert_eq!(classify("is it SAFE"), Reply::Security);
    }

    #[test]
    fn test_default_reply() {
        assert_eq!(classify("hello there"), Reply::Default);
        assert_eq!(
            generate_response("hello there"),
            "I'm here to help you with any questions about selling your software licenses!"
        );
    }

    #[test]
    fn test_reply_catalog_is_exact() {
        assert_eq!(
            Reply::Process.text(),
            "The process is simple: 1. Submit your license details through our form 2. Get an instant valuation 3. Accept the offer and receive payment within 24-48 hours."
        );
        assert_eq!(
            Reply::Valuation.text(),
            "Our valuations are based on current market rates, remaining subscription time, and license transferability. Submit your details for a precise quote."
        );
        assert_eq!(
            Reply::Payment.text(),
            "We offer secure payments via bank transfer or PayPal, typically processed within 24-48 hours after accepting an offer."
        );
        assert_eq!(
            Reply::Security.text(),
            "We use bank-level encryption and secure protocols to protect all transactions and data transfers."
        );
    }
}
