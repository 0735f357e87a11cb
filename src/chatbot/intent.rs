//! Intent classification using regex patterns.
//!
//! A fixed, ordered table of (intent, pattern) pairs evaluated with
//! first-match-wins semantics. The order is load-bearing: patterns overlap
//! ("cancel my booking" matches both the cancel and booking patterns), and
//! a message resolves to whichever intent sits earlier in the table. Keep
//! the table data-driven so order and coverage stay independently testable.
#![allow(dead_code)]

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// The closed set of intents the chatbot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Booking,
    Specialty,
    Payment,
    Features,
    Experience,
    Price,
    Search,
    Cancel,
    Reschedule,
    Ratings,
    Darkmode,
    Account,
    Notifications,
    Mobile,
    Emergency,
    Support,
    Verification,
    Privacy,
    Refund,
    AppointmentStatus,
    PaymentHistory,
    LawyerProfile,
    /// Default when nothing matches.
    Help,
}

impl Intent {
    /// Every intent, including the default.
    pub const ALL: [Intent; 24] = [
        Intent::Greeting,
        Intent::Booking,
        Intent::Specialty,
        Intent::Payment,
        Intent::Features,
        Intent::Experience,
        Intent::Price,
        Intent::Search,
        Intent::Cancel,
        Intent::Reschedule,
        Intent::Ratings,
        Intent::Darkmode,
        Intent::Account,
        Intent::Notifications,
        Intent::Mobile,
        Intent::Emergency,
        Intent::Support,
        Intent::Verification,
        Intent::Privacy,
        Intent::Refund,
        Intent::AppointmentStatus,
        Intent::PaymentHistory,
        Intent::LawyerProfile,
        Intent::Help,
    ];

    /// Wire tag for the intent.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Booking => "booking",
            Intent::Specialty => "specialty",
            Intent::Payment => "payment",
            Intent::Features => "features",
            Intent::Experience => "experience",
            Intent::Price => "price",
            Intent::Search => "search",
            Intent::Cancel => "cancel",
            Intent::Reschedule => "reschedule",
            Intent::Ratings => "ratings",
            Intent::Darkmode => "darkmode",
            Intent::Account => "account",
            Intent::Notifications => "notifications",
            Intent::Mobile => "mobile",
            Intent::Emergency => "emergency",
            Intent::Support => "support",
            Intent::Verification => "verification",
            Intent::Privacy => "privacy",
            Intent::Refund => "refund",
            Intent::AppointmentStatus => "appointment_status",
            Intent::PaymentHistory => "payment_history",
            Intent::LawyerProfile => "lawyer_profile",
            Intent::Help => "help",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The fixed priority order. Cancel is evaluated before booking so
/// "cancel my booking" resolves to cancel; price before payment so cost
/// and fee questions resolve to price. Later rows can be shadowed by
/// earlier ones ("payment history" resolves to payment) - that is the
/// documented behavior, not an accident to fix here.
const PATTERNS: &[(Intent, &str)] = &[
    (
        Intent::Greeting,
        r"\b(hello|hi|hey|greetings|howdy)\b|what'?s up|\bsup\b",
    ),
    (
        Intent::Cancel,
        r"\bcancel|\bwithdraw\b|\bremove\b|\bdelete\b",
    ),
    (
        Intent::Reschedule,
        r"reschedul|change.*time|move.*appointment|different.*time",
    ),
    (
        Intent::Price,
        r"\bprice|\bfees?\b|\bcost|\bbudget\b|how much|\brange\b|\bcharge|\bconsultation\b",
    ),
    (
        Intent::Payment,
        r"\bpayment\b|\bpay\b|\bstripe\b|\bsecure\b|\bcredit\b|\bcard\b|how.*pay",
    ),
    (
        Intent::Booking,
        r"\bbook|\bappointment|how.*use|tutorial|\bguide\b|\bsteps\b|\bprocess\b",
    ),
    (
        Intent::Specialty,
        r"special|type.*lawyer|criminal|family|corporate|immigration|\btax\b|real.*estate|employment|bankruptcy|estate|intellectual property|ip law",
    ),
    (
        Intent::Features,
        r"\bfeature|what.*can|capabilit|what.*do|\bworks\b|\boffer",
    ),
    (
        Intent::Experience,
        r"experience|\byears\b|qualified|\bsenior\b|\bjunior\b",
    ),
    (
        Intent::Search,
        r"\bsearch|\bfind\b|\bfilter|\blook\b|\bbrowse|\bdiscover",
    ),
    (
        Intent::Ratings,
        r"\brate\b|\breview|\brating|feedback|opinion|\bcomment",
    ),
    (
        Intent::Darkmode,
        r"dark.*mode|\btheme\b|light.*mode|night.*mode",
    ),
    (
        Intent::Account,
        r"\baccount\b|\bprofile\b|\bsettings\b|password|logout|login|\buser\b",
    ),
    (
        Intent::Notifications,
        r"notification|\balert|reminder|\bemail\b|notify",
    ),
    (
        Intent::Mobile,
        r"\bmobile\b|\bapp\b|\bios\b|\bandroid\b|\bphone\b|\btablet\b|responsive",
    ),
    (
        Intent::Emergency,
        r"emergency|\burgent|\basap\b|immediately|\brush\b|quickly",
    ),
    (
        Intent::Verification,
        r"\bverif|\blicens|certified|credential",
    ),
    (
        Intent::Privacy,
        r"\bprivacy\b|encrypt|\bgdpr\b|confidential|\bdata\b",
    ),
    (Intent::Refund, r"\brefund|money.*back"),
    (
        Intent::AppointmentStatus,
        r"\bstatus\b|\bpending\b|\bconfirmed\b|\bcompleted\b",
    ),
    (
        Intent::PaymentHistory,
        r"payment.*history|transaction|receipt|invoice",
    ),
    (
        Intent::LawyerProfile,
        r"lawyer.*profile|profile.*information|about.*lawyer|lawyer.*details",
    ),
    (
        Intent::Support,
        r"support|\bhelp\b|contact|assist|\bissue|problem|\berror",
    ),
];

static MATCHERS: LazyLock<Vec<(Intent, Regex)>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|(intent, pattern)| {
            let re = Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid pattern for {}: {}", intent, e));
            (*intent, re)
        })
        .collect()
});

/// Classify one message into exactly one intent.
///
/// Normalizes (case-fold, trim) and scans the table in order; the first
/// matching pattern wins. Empty or unmatched input yields [`Intent::Help`].
pub fn classify(message: &str) -> Intent {
    let text = message.to_lowercase();
    let text = text.trim();

    for (intent, re) in MATCHERS.iter() {
        if re.is_match(text) {
            return *intent;
        }
    }

    Intent::Help
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_inputs() {
        assert_eq!(classify("How much does it cost?"), Intent::Price);
        assert_eq!(classify("hi there"), Intent::Greeting);
        assert_eq!(classify("asdkjasd"), Intent::Help);
        assert_eq!(classify("cancel my booking"), Intent::Cancel);
    }

    #[test]
    fn test_default_on_empty_and_whitespace() {
        assert_eq!(classify(""), Intent::Help);
        assert_eq!(classify("   \t  "), Intent::Help);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("HELLO"), Intent::Greeting);
        assert_eq!(classify("  ReScHeDuLe please  "), Intent::Reschedule);
    }

    #[test]
    fn test_one_message_per_intent() {
        let cases = [
            ("hey", Intent::Greeting),
            ("how do I book an appointment", Intent::Booking),
            ("do you have family law experts", Intent::Specialty),
            ("can I pay with a credit card", Intent::Payment),
            ("what features does this have", Intent::Features),
            ("how many years of experience", Intent::Experience),
            ("what is the consultation fee", Intent::Price),
            ("I want to browse lawyers", Intent::Search),
            ("cancel it", Intent::Cancel),
            ("I need a different time", Intent::Reschedule),
            ("where do I leave a review", Intent::Ratings),
            ("is there a dark mode", Intent::Darkmode),
            ("I forgot my password", Intent::Account),
            ("do you send reminders", Intent::Notifications),
            ("is there an android version", Intent::Mobile),
            ("this is urgent", Intent::Emergency),
            ("are your lawyers licensed", Intent::Verification),
            ("is my information confidential", Intent::Privacy),
            ("can I get my money back", Intent::Refund),
            ("is it confirmed yet", Intent::AppointmentStatus),
            ("where are my receipts", Intent::PaymentHistory),
            ("tell me about the lawyer", Intent::LawyerProfile),
            ("I have a problem", Intent::Support),
        ];

        for (message, expected) in cases {
            assert_eq!(classify(message), expected, "message: {:?}", message);
        }
    }

    #[test]
    fn test_priority_order_artifacts() {
        // Overlapping patterns resolve by table position. These are the
        // known shadowings; a change here means the order moved.
        assert_eq!(classify("cancel and tell me the price"), Intent::Cancel);
        assert_eq!(classify("show my payment history"), Intent::Payment);
        assert_eq!(classify("open the lawyer profile"), Intent::Account);
        assert_eq!(classify("is the payment secure"), Intent::Payment);
        assert_eq!(classify("appointment status"), Intent::Booking);
    }

    #[test]
    fn test_help_keyword_is_support_not_default() {
        // "help" has its own pattern row; the Help intent is only the
        // no-match fallback.
        assert_eq!(classify("help"), Intent::Support);
        assert_eq!(classify("can you help me"), Intent::Support);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for _ in 0..10 {
            assert_eq!(classify("cancel my booking"), Intent::Cancel);
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for intent in Intent::ALL {
            assert!(seen.insert(intent.label()));
        }
    }
}
