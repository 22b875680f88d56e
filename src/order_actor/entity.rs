use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderId, OrderStatus};
use super::actions::OrderAction;

impl Entity for Order {
    type Id = OrderId;
    type CreatePayload = OrderCreate;
    type Patch = (); // Orders change only through SetStatus
    type Action = OrderAction;
    /// The status the order had before the action.
    type ActionResult = OrderStatus;

    const KIND: &'static str = "Order";

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is initialized with status `pending` unless the payload says otherwise.
    fn from_create(id: OrderId, payload: OrderCreate) -> Result<Self, String> {
        if payload.utr_number.trim().is_empty() {
            return Err("utr number must not be empty".to_string());
        }
        Ok(Self {
            id,
            student_id: payload.student_id,
            course_id: payload.course_id,
            utr_number: payload.utr_number,
            amount: payload.amount,
            status: payload.status.unwrap_or_default(),
            created_at: Utc::now(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderStatus, String> {
        match action {
            OrderAction::SetStatus(status) => Ok(std::mem::replace(&mut self.status, status)),
        }
    }
}
