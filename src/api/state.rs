use crate::app_system::StorefrontSystem;
use crate::clients::{CourseClient, OrderClient, StudentClient};
use crate::notification::WhatsAppLink;

/// Handles shared by every route handler.
///
/// Cloning is cheap: each client is a channel sender.
#[derive(Clone)]
pub struct AppState {
    pub courses: CourseClient,
    pub students: StudentClient,
    pub orders: OrderClient,
    pub whatsapp: WhatsAppLink,
}

impl AppState {
    pub fn new(system: &StorefrontSystem, whatsapp: WhatsAppLink) -> Self {
        Self {
            courses: system.course_client.clone(),
            students: system.student_client.clone(),
            orders: system.order_client.clone(),
            whatsapp,
        }
    }
}
