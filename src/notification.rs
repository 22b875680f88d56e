//! Enrollment notices for the payment verifier.
//!
//! Nothing is sent from here. The notice is rendered as text and wrapped in a
//! WhatsApp click-to-chat link that the buyer's browser opens.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::Enrollment;

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds `wa.me` deep links addressed to one phone number.
#[derive(Debug, Clone)]
pub struct WhatsAppLink {
    phone_number: String,
}

impl WhatsAppLink {
    /// `phone_number` in international format without `+`, e.g. `918302718516`.
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }

    pub fn url(&self, message: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone_number,
            utf8_percent_encode(message, URI_COMPONENT)
        )
    }
}

/// Renders the message the verifier receives for a new order.
///
/// Contact details are the ones typed at checkout.
pub fn enrollment_message(enrollment: &Enrollment) -> String {
    let Enrollment { purchase, order, course, .. } = enrollment;
    format!(
        "🔥 NEW COURSE ENROLLMENT 🔥\n\
         \n\
         Order ID: #{}\n\
         Student: {}\n\
         Email: {}\n\
         Mobile: {}\n\
         Course: {}\n\
         Amount: ₹{}\n\
         UTR: {}\n\
         \n\
         Please verify payment and provide course access.",
        order.id, purchase.name, purchase.email, purchase.mobile, course.title, order.amount, order.utr_number,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, CourseState, Order, OrderStatus, Purchase, Student};
    use chrono::Utc;
    use percent_encoding::percent_decode_str;

    fn enrollment() -> Enrollment {
        let now = Utc::now();
        Enrollment {
            purchase: Purchase {
                name: "Asha Rao".to_string(),
                email: "asha@x.com".to_string(),
                mobile: "9999999999".to_string(),
                course_id: 1,
                utr_number: "ABCDEF123456".to_string(),
            },
            order: Order {
                id: 17,
                student_id: 2,
                course_id: 1,
                utr_number: "ABCDEF123456".to_string(),
                amount: 999,
                status: OrderStatus::Pending,
                created_at: now,
            },
            student: Student {
                id: 2,
                name: "Asha R".to_string(),
                email: "asha@x.com".to_string(),
                mobile: "9999999999".to_string(),
                created_at: now,
            },
            course: Course {
                id: 1,
                title: "Ethical Hacking Fundamentals".to_string(),
                description: String::new(),
                price: 999,
                original_price: 15999,
                duration: "40+ Hours".to_string(),
                level: "Beginner".to_string(),
                features: vec![],
                state: CourseState::Active,
                created_at: now,
            },
        }
    }

    #[test]
    fn test_message_lists_order_details() {
        let message = enrollment_message(&enrollment());

        assert!(message.starts_with("🔥 NEW COURSE ENROLLMENT 🔥\n\nOrder ID: #17\n"));
        assert!(message.contains("Student: Asha Rao\n"));
        assert!(message.contains("Course: Ethical Hacking Fundamentals\n"));
        assert!(message.contains("Amount: ₹999\n"));
        assert!(message.contains("UTR: ABCDEF123456\n"));
    }

    #[test]
    fn test_url_encodes_like_uri_component() {
        let link = WhatsAppLink::new("918302718516");
        let url = link.url("Hi (there)! a+b=c #1\n₹");

        assert_eq!(url, "https://wa.me/918302718516?text=Hi%20(there)!%20a%2Bb%3Dc%20%231%0A%E2%82%B9");
    }

    #[test]
    fn test_url_round_trips_message() {
        let message = enrollment_message(&enrollment());
        let url = WhatsAppLink::new("918302718516").url(&message);

        let text = url.split_once("?text=").unwrap().1;
        assert_eq!(percent_decode_str(text).decode_utf8().unwrap(), message);
    }
}
