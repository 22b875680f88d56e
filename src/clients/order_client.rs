use tracing::{debug, error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::{CourseClient, StudentClient};
use crate::domain::{Enrollment, Order, OrderCreate, OrderId, OrderStatus, Purchase, StudentCreate, StudentId};
use crate::order_actor::{OrderAction, OrderError};

/// Client for interacting with the Order actor.
///
/// Besides plain order bookkeeping, this client runs the checkout workflow,
/// resolving the course and the student before recording an order.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    course_client: CourseClient,
    student_client: StudentClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, course_client: CourseClient, student_client: StudentClient) -> Self {
        Self {
            inner,
            course_client,
            student_client,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.list(None).await?)
    }

    /// Orders placed by one student; unknown students are an error rather than an empty list.
    #[instrument(skip(self))]
    pub async fn list_orders_for_student(&self, student_id: StudentId) -> Result<Vec<Order>, OrderError> {
        self.student_client.get_student(student_id).await?;
        debug!("Sending request");
        let orders = self
            .inner
            .list(Some(Box::new(move |order: &Order| order.student_id == student_id)))
            .await?;
        Ok(orders)
    }

    #[instrument(skip(self, payload), fields(student_id = payload.student_id, course_id = payload.course_id))]
    pub async fn create_order(&self, payload: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        Ok(self.inner.create(payload).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        let (order, previous) = self.inner.perform_action(id, OrderAction::SetStatus(status)).await?;
        info!(%previous, %status, "Order status updated");
        Ok(order)
    }

    /// Runs a checkout: course lookup, student lookup-or-create, then order creation.
    ///
    /// The three store calls do not form a transaction. A failure after the
    /// student step leaves the student registered.
    #[instrument(skip(self, purchase), fields(course_id = purchase.course_id, email = %purchase.email))]
    pub async fn purchase(&self, purchase: Purchase) -> Result<Enrollment, OrderError> {
        info!("Processing purchase request");

        // Step 1: Resolve course
        let course = match self.course_client.get_active_course(purchase.course_id).await {
            Ok(course) => {
                info!(course_title = %course.title, price = course.price, "Course resolved");
                course
            }
            Err(e) => {
                error!(error = %e, "Course lookup failed");
                return Err(e.into());
            }
        };

        // Step 2: Resolve student
        let contact = StudentCreate::new(&purchase.name, &purchase.email, &purchase.mobile);
        let student = match self.student_client.find_or_create(contact).await {
            Ok(student) => student,
            Err(e) => {
                error!(error = %e, "Student resolution failed");
                return Err(e.into());
            }
        };

        // Step 3: Record order at the current price
        let order = self
            .create_order(OrderCreate {
                student_id: student.id,
                course_id: course.id,
                utr_number: purchase.utr_number.clone(),
                amount: course.price,
                status: None,
            })
            .await?;

        info!(order_id = order.id, student_id = student.id, amount = order.amount, "Order recorded");

        Ok(Enrollment {
            purchase,
            order,
            student,
            course,
        })
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::{Entity, FrameworkError};
    use crate::domain::{Course, CourseState, Student};
    use crate::mock_framework::{create_mock_client, expect_create, expect_find, expect_get};
    use chrono::Utc;

    fn course(id: u64, price: u32, state: CourseState) -> Course {
        Course {
            id,
            title: "Ethical Hacking Fundamentals".to_string(),
            description: "Intro".to_string(),
            price,
            original_price: 15999,
            duration: "40+ Hours".to_string(),
            level: "Beginner".to_string(),
            features: vec![],
            state,
            created_at: Utc::now(),
        }
    }

    fn purchase() -> Purchase {
        Purchase {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            mobile: "9999999999".to_string(),
            course_id: 1,
            utr_number: "ABCDEF123456".to_string(),
        }
    }

    #[tokio::test]
    async fn test_purchase_flow() {
        // 1. Setup Mocks
        let (course_inner, mut course_rx) = create_mock_client::<Course>(10);
        let (student_inner, mut student_rx) = create_mock_client::<Student>(10);
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);

        let order_client = OrderClient::new(
            order_inner,
            CourseClient::new(course_inner),
            StudentClient::new(student_inner),
        );

        // 2. Execute purchase in background
        let task = tokio::spawn(async move { order_client.purchase(purchase()).await });

        // 3. Verify Interactions
        let (course_id, responder) = expect_get(&mut course_rx).await.expect("Expected Course Get");
        assert_eq!(course_id, 1);
        responder.send(Ok(Some(course(1, 999, CourseState::Active)))).unwrap();

        let (_, responder) = expect_find(&mut student_rx).await.expect("Expected Student Find");
        responder.send(Ok(None)).unwrap();

        let (payload, responder) = expect_create(&mut student_rx).await.expect("Expected Student Create");
        assert_eq!(payload.name, "A");
        assert_eq!(payload.mobile, "9999999999");
        responder
            .send(Ok(Student {
                id: 5,
                name: payload.name,
                email: payload.email,
                mobile: payload.mobile,
                created_at: Utc::now(),
            }))
            .unwrap();

        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.student_id, 5);
        assert_eq!(payload.course_id, 1);
        assert_eq!(payload.amount, 999);
        assert_eq!(payload.utr_number, "ABCDEF123456");
        assert_eq!(payload.status, None);
        responder.send(Ok(Order::from_create(1, payload).unwrap())).unwrap();

        // 4. Verify Result
        let enrollment = task.await.unwrap().unwrap();
        assert_eq!(enrollment.order.id, 1);
        assert_eq!(enrollment.student.id, 5);
        assert_eq!(enrollment.course.price, 999);
    }

    #[tokio::test]
    async fn test_purchase_of_withdrawn_course_stops_before_student_lookup() {
        let (course_inner, mut course_rx) = create_mock_client::<Course>(10);
        let (student_inner, mut student_rx) = create_mock_client::<Student>(10);
        let (order_inner, _order_rx) = create_mock_client::<Order>(10);

        let order_client = OrderClient::new(
            order_inner,
            CourseClient::new(course_inner),
            StudentClient::new(student_inner),
        );

        let task = tokio::spawn(async move { order_client.purchase(purchase()).await });

        let (_, responder) = expect_get(&mut course_rx).await.expect("Expected Course Get");
        responder.send(Ok(Some(course(1, 999, CourseState::Inactive)))).unwrap();

        let result = task.await.unwrap();
        assert_eq!(
            result.unwrap_err(),
            OrderError::Course(crate::course_actor::CourseError::NotFound("1".to_string()))
        );
        assert!(student_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_update_status_maps_missing_order() {
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);
        let (course_inner, _) = create_mock_client::<Course>(1);
        let (student_inner, _) = create_mock_client::<Student>(1);
        let order_client = OrderClient::new(
            order_inner,
            CourseClient::new(course_inner),
            StudentClient::new(student_inner),
        );

        let task = tokio::spawn(async move { order_client.update_status(42, OrderStatus::Verified).await });

        let (id, action, responder) = crate::mock_framework::expect_action(&mut order_rx)
            .await
            .expect("Expected Order Action");
        assert_eq!(id, 42);
        assert!(matches!(action, OrderAction::SetStatus(OrderStatus::Verified)));
        responder
            .send(Err(FrameworkError::NotFound { kind: "Order", id: "42".to_string() }))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), OrderError::NotFound("42".to_string()));
    }
}
