use crate::domain::OrderStatus;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Overwrites the verification status, leaving every other field untouched.
    SetStatus(OrderStatus),
}
