use crate::models::{Faq, FaqCategory};

fn category(key: &str, title: &str, icon: &str, questions: [(&str, &str); 3]) -> FaqCategory {
    FaqCategory {
        key: key.into(),
        title: title.into(),
        icon: icon.into(),
        questions: questions
            .into_iter()
            .map(|(question, answer)| Faq {
                question: question.into(),
                answer: answer.into(),
            })
            .collect(),
    }
}

pub fn faq_categories() -> Vec<FaqCategory> {
    vec![
        category(
            "general",
            "General Inquiries",
            "❓",
            [
                (
                    "What is DisasterHaven?",
                    "DisasterHaven is a platform designed to provide real-time alerts, resources, and community support during natural disasters and emergencies. Our goal is to ensure quick response and coordination to help keep communities safe.",
                ),
                (
                    "How do I sign up for alerts?",
                    "You can sign up for alerts by creating an account on our Signup page. Once registered, you can customize your alert preferences to receive notifications relevant to your location and interests.",
                ),
                (
                    "Is my data secure?",
                    "Yes, we take data security seriously. We use industry-standard encryption and security measures to protect your personal information. Please review our Privacy Policy for more details.",
                ),
            ],
        ),
        category(
            "alerts",
            "Alerts & Notifications",
            "⚠️",
            [
                (
                    "How do I customize my alert preferences?",
                    "After logging in, navigate to your profile settings. Here, you can specify the types of alerts you wish to receive, set your location preferences, and manage notification settings.",
                ),
                (
                    "What types of alerts does DisasterHaven provide?",
                    "We provide alerts for a variety of natural disasters and emergencies, including hurricanes, floods, wildfires, earthquakes, and more. Our alerts are sourced from reliable public emergency APIs to ensure accuracy.",
                ),
                (
                    "How quickly will I receive alerts?",
                    "Our alert system is designed to provide real-time notifications. You should receive alerts as soon as they are issued by official sources, ensuring you have timely information to stay safe.",
                ),
            ],
        ),
        category(
            "donation",
            "Donation & Support",
            "❤️",
            [
                (
                    "How can I donate to disaster relief efforts?",
                    "You can donate to disaster relief efforts through our Donation page. We partner with reputable organizations to ensure your contributions reach those in need. We accept various forms of payment for your convenience.",
                ),
                (
                    "Are my donations tax-deductible?",
                    "Donations made through our platform to registered non-profit organizations are typically tax-deductible. Please check with the specific organization and consult your tax advisor for confirmation.",
                ),
                (
                    "How does DisasterHaven ensure donations are used effectively?",
                    "We carefully vet our partner organizations to ensure they have a proven track record of effective disaster relief. We also provide transparency reports to show how donations are being used to support affected communities.",
                ),
            ],
        ),
        category(
            "recovery",
            "Recovery Resources",
            "🛡️",
            [
                (
                    "How do I apply for disaster assistance?",
                    "You can apply for disaster assistance through our Recovery page, which links to various aid programs. You'll need to provide documentation about your identity, residence, and disaster-related damages. Our app provides guidance for each step of the application process.",
                ),
                (
                    "What resources are available for temporary housing?",
                    "We provide a list of resources for temporary housing on our Shelters page. These resources include emergency shelters, transitional housing programs, and assistance with finding temporary accommodation.",
                ),
                (
                    "How can I get help with mental health support?",
                    "We offer a directory of mental health resources on our Community page. These resources include counseling services, support groups, and crisis hotlines to help you cope with the emotional impact of disasters.",
                ),
            ],
        ),
        category(
            "contact",
            "Contact & Support",
            "✉️",
            [
                (
                    "How can I contact DisasterHaven support?",
                    "You can contact our support team through the Contact Us form on our Help page. We aim to respond to all inquiries within 24 hours. You can also reach us via phone during business hours.",
                ),
                (
                    "What if I have a suggestion for improving the app?",
                    "We welcome your suggestions! Please use the Contact Us form on our Help page to submit your ideas. Our team reviews all feedback to improve our platform and better serve our users.",
                ),
                (
                    "How do I report a bug or technical issue?",
                    "If you encounter a bug or technical issue, please report it through the Contact Us form on our Help page. Provide as much detail as possible, including the steps to reproduce the issue, so our team can resolve it quickly.",
                ),
            ],
        ),
    ]
}
