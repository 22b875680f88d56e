use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::{info, instrument};

use super::seed::default_catalog;
use super::SystemError;
use crate::actor_framework::ResourceActor;
use crate::clients::{CourseClient, OrderClient, StudentClient};
use crate::domain::{Course, Order, Student};

/// How long shutdown waits for the store actors to drain.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// The process root that owns every store actor.
///
/// Responsible for starting up actors, wiring clients together, seeding the
/// catalog, and handling shutdown.
pub struct StorefrontSystem {
    pub course_client: CourseClient,
    pub student_client: StudentClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

/// Ids start at 1 and grow by one per create, for the life of the process.
fn id_sequence() -> impl Fn() -> u64 + Send + Sync + 'static {
    let counter = AtomicU64::new(1);
    move || counter.fetch_add(1, Ordering::SeqCst)
}

impl StorefrontSystem {
    /// Spawns the store actors; must run inside a tokio runtime.
    pub fn new(channel_capacity: usize) -> Self {
        // 1. Course store
        let (course_actor, course_resource_client) = ResourceActor::<Course>::new(channel_capacity, id_sequence());
        let course_client = CourseClient::new(course_resource_client);
        let course_handle = tokio::spawn(course_actor.run());

        // 2. Student store
        let (student_actor, student_resource_client) = ResourceActor::<Student>::new(channel_capacity, id_sequence());
        let student_client = StudentClient::new(student_resource_client);
        let student_handle = tokio::spawn(student_actor.run());

        // 3. Order store, whose client orchestrates the other two
        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(channel_capacity, id_sequence());
        let order_client = OrderClient::new(order_resource_client, course_client.clone(), student_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        info!(channel_capacity, "Storefront system started");

        Self {
            course_client,
            student_client,
            order_client,
            handles: vec![course_handle, student_handle, order_handle],
        }
    }

    /// Loads the default catalog. Returns how many courses were created.
    #[instrument(skip(self))]
    pub async fn seed_catalog(&self) -> Result<usize, SystemError> {
        let catalog = default_catalog();
        let count = catalog.len();
        for course in catalog {
            self.course_client.create_course(course).await?;
        }
        info!(count, "Catalog seeded");
        Ok(count)
    }

    /// Drops this system's clients and waits for the actors to finish.
    ///
    /// Actors stop once every client clone is gone, so handles given to the
    /// HTTP layer must be dropped first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        let Self {
            course_client,
            student_client,
            order_client,
            handles,
        } = self;

        // Drop clients to close channels
        drop(order_client);
        drop(student_client);
        drop(course_client);

        let drain = async {
            for handle in handles {
                handle.await?;
            }
            Ok::<(), SystemError>(())
        };
        tokio::time::timeout(SHUTDOWN_GRACE, drain)
            .await
            .map_err(|_| SystemError::ShutdownTimeout(SHUTDOWN_GRACE))??;

        info!("System shutdown complete.");
        Ok(())
    }
}
