//! Canned reply pools, four per intent.
//!
//! This is the product copy the bot falls back to whenever no generative
//! backend is configured or the backend call fails.

use super::intent::Intent;

/// The reply pool for an intent. Always non-empty.
pub fn pool(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Greeting => &[
            "Hello! 👋 Welcome to LawBook. How can I assist you today?",
            "Hi there! Welcome to LawBook. What legal service are you looking for?",
            "Welcome! 🎯 I'm your LawBook assistant. What can I help you with?",
            "Hey! 👋 Welcome! Ask me about lawyers, bookings, features, or anything else!",
        ],
        Intent::Booking => &[
            "To book an appointment:\n1️⃣ Browse our lawyers\n2️⃣ Click on their profile\n3️⃣ Fill appointment details (date, time, issue)\n4️⃣ Proceed to secure payment\n5️⃣ Confirmation email sent!",
            "Booking is easy! Find a lawyer → Choose date/time → Pay → Done! It takes just 2 minutes.",
            "Follow these steps:\n• Search for a lawyer\n• View their profile\n• Select appointment date\n• Complete payment\n• Get instant confirmation",
            "Simple 3-step process: 1) Find lawyer 2) Choose time 3) Pay securely",
        ],
        Intent::Specialty => &[
            "We have 10 specialties:\n🏢 Corporate Law\n⚖️ Criminal Defense\n👨‍👩‍👧‍👦 Family Law\n🔬 IP Law\n🌍 Immigration Law\n💰 Tax Law\n🏠 Real Estate\n💼 Employment Law\n💔 Bankruptcy\n📋 Estate Planning",
            "Our lawyers specialize in: Corporate, Criminal, Family, IP, Immigration, Tax, Real Estate, Employment, Bankruptcy, and Estate Planning!",
            "All major legal fields covered! From business to family law, we have experts. Use filters to find your specialty!",
            "Criminal, Family, Corporate, Real Estate, Immigration, Tax, Employment, IP, Bankruptcy, Estate Planning - we have them all!",
        ],
        Intent::Payment => &[
            "💳 Secure Stripe payment\n✅ Instant confirmation\n🔒 Encrypted transactions\n💰 No hidden fees\n📧 Payment receipt emailed",
            "We use Stripe for security. Pay online → Get confirmation → Chat with lawyer. All safe & secure!",
            "Payment details:\n• Accepted: Credit/Debit cards\n• Security: PCI-DSS compliant\n• Instant booking confirmation\n• No cancellation fees",
            "Safe payment through Stripe. Your information is encrypted. Instant booking after payment!",
        ],
        Intent::Features => &[
            "LawBook features:\n🌙 Dark mode\n🔍 Smart search\n💬 Live chat\n💳 Secure payment\n📱 Mobile app\n✨ Real-time updates\n⭐ Ratings & reviews",
            "We offer: Dark mode, advanced search, real-time chat with lawyers, secure payments, booking management, and more!",
            "Features:\n✅ Find lawyers by specialty\n✅ Real-time messaging\n✅ Secure payments\n✅ Manage bookings\n✅ Leave reviews",
            "Everything you need: Search, chat, pay, and manage - all in one app!",
        ],
        Intent::Experience => &[
            "👨‍⚖️ Our lawyers have 9-18+ years of experience\n📊 Filter by experience level\n⭐ All certified & licensed\n✅ Qualified professionals",
            "Experience ranges from 9 to 18+ years. Choose based on your preference! All are licensed professionals.",
            "We have:\n• Junior lawyers (9-12 years)\n• Senior lawyers (13-16 years)\n• Expert lawyers (17+ years)",
            "Experience filter available! Find lawyers with exactly the experience level you need.",
        ],
        Intent::Price => &[
            "💰 Consultation fees: $110-$200\n📊 Use price slider to filter\n🎯 Transparent pricing\n✅ No hidden charges",
            "Fees vary by specialty and experience. $110-$200 range. Use the price filter to find your budget!",
            "Pricing structure:\n• Junior lawyers: $110-$130\n• Mid-level: $130-$160\n• Senior lawyers: $160-$200",
            "Clear pricing! Filter by your budget and find the right lawyer.",
        ],
        Intent::Search => &[
            "🔍 Advanced search:\n1️⃣ Search by name or specialty\n2️⃣ Filter by experience\n3️⃣ Filter by price range\n4️⃣ Toggle to see results instantly!",
            "Our search is powerful! Type to search, then use advanced filters. Real-time results!",
            "Search tips:\n• Search box: Find by name\n• Specialty filter: Choose type\n• Experience slider: Select level\n• Price slider: Set budget",
            "Use the search to find exactly what you need - by name, specialty, experience, and price!",
        ],
        Intent::Cancel => &[
            "❌ To cancel appointment:\n1️⃣ Go to \"My Bookings\"\n2️⃣ Click appointment\n3️⃣ Hit \"Cancel\"\n4️⃣ Refund processed in 3-5 days\n⚠️ Cancel before appointment time",
            "Cancel anytime before your appointment in \"My Bookings\". Refund within 3-5 business days!",
            "Cancellation:\n• Must cancel before appointment\n• Full refund processed\n• Takes 3-5 days\n• Confirmation email sent",
            "Need to cancel? Go to bookings and hit cancel. Quick refund guaranteed!",
        ],
        Intent::Reschedule => &[
            "📅 To reschedule:\n1️⃣ Open \"My Bookings\"\n2️⃣ Click appointment\n3️⃣ Select \"Reschedule\"\n4️⃣ Choose new time\n5️⃣ Confirm\n✅ No extra charges!",
            "Rescheduling is free! Just go to your bookings, pick a new time, and confirm. Easy!",
            "Steps to reschedule:\n• Click appointment\n• Hit reschedule button\n• Pick new date/time\n• Save changes\n• Done!",
            "Simple rescheduling - no fees, no hassle! Change your time anytime.",
        ],
        Intent::Ratings => &[
            "⭐ Leave reviews on lawyer profiles\n📝 Rate 1-5 stars\n💬 Write comments\n👥 Help others decide\n🎁 Your feedback matters!",
            "Rate lawyers after your appointment! Your reviews help others find the best lawyer for them.",
            "How to rate:\n1. Open completed appointment\n2. Click \"Rate Lawyer\"\n3. Choose stars (1-5)\n4. Write review\n5. Submit",
            "Share your experience! Your ratings help build trust in our community.",
        ],
        Intent::Darkmode => &[
            "🌙 Dark mode:\n1️⃣ Click sun/moon icon in navbar\n2️⃣ Theme switches instantly\n3️⃣ Preference saved automatically\n✅ Easy on the eyes!",
            "Dark mode toggle in navbar! Click the sun/moon icon to switch. Your choice is saved!",
            "Dark mode features:\n• Easy on eyes\n• Reduces strain\n• Saves battery\n• Auto-saved preference",
            "Click the theme toggle in navbar for dark mode. Perfect for night browsing!",
        ],
        Intent::Account => &[
            "👤 Account settings:\n• View profile\n• Manage bookings\n• Payment history\n• Notification settings\n• Change password\n• Logout anytime",
            "Your account dashboard has everything - bookings, payments, settings, and more!",
            "In your account:\n✓ Profile info\n✓ Booking history\n✓ Payment records\n✓ Preferences\n✓ Security settings",
            "Full account control! Manage everything from your profile.",
        ],
        Intent::Notifications => &[
            "🔔 Get notified:\n📧 Email confirmations\n📱 App notifications\n⏰ Appointment reminders\n💬 Message alerts\n⚙️ Customize in settings",
            "You'll get notified for bookings, messages, and reminders. Adjust in notification settings!",
            "Notification types:\n• Booking confirmed\n• Appointment reminder\n• New message alert\n• Payment receipt\n• Cancellation notice",
            "Stay updated with notifications! Customize which alerts you receive.",
        ],
        Intent::Mobile => &[
            "📱 Mobile experience:\n• Fully responsive\n• PWA installable\n• Works offline\n• Touch-optimized\n• All features available",
            "Our app works great on mobile! Install on your home screen for app-like experience. Full functionality!",
            "Mobile features:\n✓ Install as app\n✓ Offline access\n✓ Push notifications\n✓ Quick booking\n✓ Chat on-the-go",
            "Perfect on any device! Responsive design and fully optimized for mobile.",
        ],
        Intent::Emergency => &[
            "🚨 Emergency consultation:\n📞 Contact support\n💬 Chat with us\n⏰ We respond within 30 mins\n👨‍⚖️ Urgent appointments available",
            "Need urgent help? Chat with us or browse urgent availability. Same-day appointments possible!",
            "For emergencies:\n• Use urgent filter\n• Chat support online\n• Priority response\n• Quick booking",
            "Urgent consultations available! Chat support can help prioritize your appointment.",
        ],
        Intent::Support => &[
            "💬 Need help?\n📧 Email: support@lawbook.com\n💬 Live chat: Always available\n⏰ Response: Within 30 mins\n🎯 We're here to help!",
            "Support team available 24/7! Use live chat or email. We respond quickly!",
            "Contact support:\n• Live chat (fastest)\n• Email support\n• In-app help center\n• FAQ section",
            "Having issues? Chat with support right now! We're here to help.",
        ],
        Intent::Verification => &[
            "✅ Lawyer verification:\n🔍 Licensed professionals\n📋 Credentials checked\n⭐ Background verified\n👨‍⚖️ Bar association certified",
            "All lawyers are verified, licensed, and certified. Trust & safety guaranteed!",
            "Every lawyer:\n✓ Licensed & certified\n✓ Verified credentials\n✓ Background checked\n✓ Professional insurance\n✓ Disciplinary records clear",
            "All professionals verified! We ensure only qualified lawyers on platform.",
        ],
        Intent::Privacy => &[
            "🔒 Your privacy:\n🔐 Encrypted data\n📋 GDPR compliant\n✅ No data selling\n🔒 Secure messaging",
            "Your data is secure! Encrypted, private, and never shared with third parties.",
            "Privacy features:\n• End-to-end encryption\n• GDPR compliant\n• Secure payment\n• Private consultations\n• Data protection",
            "Complete privacy protection! Your information stays confidential.",
        ],
        Intent::Refund => &[
            "💰 Refund policy:\n⏱️ Cancel before appointment\n💵 Full refund guaranteed\n📅 Processed in 3-5 days\n✅ No questions asked",
            "Cancel anytime before your appointment for full refund. Simple as that!",
            "Refund details:\n• Full amount refunded\n• Auto-processed\n• 3-5 business days\n• No cancellation fee",
            "Money-back guarantee if you cancel! Hassle-free refunds.",
        ],
        Intent::AppointmentStatus => &[
            "📅 Check appointment status:\n1️⃣ Go to \"My Bookings\"\n2️⃣ See all appointments\n3️⃣ View details\n4️⃣ Track progress",
            "View all appointments in \"My Bookings\" - pending, confirmed, completed, all in one place!",
            "Appointment statuses:\n• Pending payment\n• Confirmed\n• In progress\n• Completed\n• Cancelled",
            "Track every appointment in your bookings dashboard!",
        ],
        Intent::PaymentHistory => &[
            "💳 Payment history:\n📊 View all transactions\n📧 Download receipts\n📅 Filter by date\n💰 Total spent",
            "All payment records in account! View receipts anytime, download PDFs!",
            "In payment history:\n• All transactions\n• Receipt PDFs\n• Refund history\n• Invoice details\n• Date filters",
            "Full payment records available! Access receipts anytime.",
        ],
        Intent::LawyerProfile => &[
            "👨‍⚖️ Lawyer profile includes:\n👤 Bio & photo\n⭐ Ratings & reviews\n📋 Specialties\n📊 Experience\n💰 Fee\n📅 Availability",
            "Each lawyer profile shows everything - experience, ratings, specialty, availability, and more!",
            "Profile details:\n✓ Qualifications\n✓ Years experience\n✓ Client reviews\n✓ Available times\n✓ Consultation fee",
            "Complete lawyer profiles help you choose the best fit!",
        ],
        Intent::Help => &[
            "🆘 I can help with:\n📚 How to use LawBook\n🔍 Finding lawyers\n📅 Booking appointments\n💳 Payments & refunds\n⚙️ Account management\n🔒 Privacy & security\n💬 Real-time support\n\nWhat would you like to know?",
            "Ask me about: Booking, lawyers, features, payments, account, privacy, mobile, or anything LawBook related!",
            "I'm here for:\n✓ How to book\n✓ Finding lawyers\n✓ Technical help\n✓ Account issues\n✓ Payment questions\n✓ And much more!",
            "Any questions about LawBook? I can help with bookings, lawyers, payments, account, privacy - everything!",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pool_has_four_replies() {
        for intent in Intent::ALL {
            let replies = pool(intent);
            assert_eq!(replies.len(), 4, "intent: {}", intent);
            for reply in replies {
                assert!(!reply.trim().is_empty(), "intent: {}", intent);
            }
        }
    }

    #[test]
    fn test_pools_are_distinct() {
        // A reply string should not leak between intents.
        let greeting = pool(Intent::Greeting);
        let refund = pool(Intent::Refund);
        for reply in greeting {
            assert!(!refund.contains(reply));
        }
    }
}
