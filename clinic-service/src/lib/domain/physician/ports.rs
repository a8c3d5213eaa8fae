use async_trait::async_trait;

use crate::domain::pagination::Page;
use crate::domain::pagination::PageRequest;
use crate::domain::physician::models::NewPhysician;
use crate::domain::physician::models::Physician;
use crate::domain::physician::models::PhysicianId;
use crate::domain::physician::models::RegisterPhysicianCommand;
use crate::domain::physician::models::UpdatePhysicianCommand;
use crate::physician::errors::PhysicianError;

/// Port for physician lifecycle operations.
#[async_trait]
pub trait PhysicianServicePort: Send + Sync + 'static {
    /// List active physicians, one page at a time.
    ///
    /// # Returns
    /// Requested page; empty when past the last page
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_physicians(&self, request: PageRequest) -> Result<Page<Physician>, PhysicianError>;

    /// Register a new, active physician.
    ///
    /// # Errors
    /// * `DocumentAlreadyExists` - Document number is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register_physician(
        &self,
        command: RegisterPhysicianCommand,
    ) -> Result<Physician, PhysicianError>;

    /// Retrieve a physician whether active or not.
    ///
    /// # Errors
    /// * `NotFound` - Physician does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_physician(&self, id: &PhysicianId) -> Result<Physician, PhysicianError>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// * `NotFound` - Physician does not exist
    /// * `DocumentAlreadyExists` - New document number belongs to another physician
    /// * `DatabaseError` - Database operation failed
    async fn update_physician(
        &self,
        id: &PhysicianId,
        command: UpdatePhysicianCommand,
    ) -> Result<Physician, PhysicianError>;

    /// Soft-delete a physician.
    ///
    /// # Errors
    /// * `NotFound` - Physician does not exist
    /// * `DatabaseError` - Database operation failed
    async fn deactivate_physician(&self, id: &PhysicianId) -> Result<(), PhysicianError>;
}

/// Persistence operations for the physician aggregate.
#[async_trait]
pub trait PhysicianRepository: Send + Sync + 'static {
    /// Insert a physician; storage assigns the id.
    ///
    /// # Errors
    /// * `DocumentAlreadyExists` - Document uniqueness violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, physician: NewPhysician) -> Result<Physician, PhysicianError>;

    /// # Returns
    /// Optional physician (None if not found), regardless of active flag
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &PhysicianId) -> Result<Option<Physician>, PhysicianError>;

    /// Page through active physicians ordered by name, then id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_active_page(
        &self,
        request: &PageRequest,
    ) -> Result<Page<Physician>, PhysicianError>;

    /// Read, apply `command` and write back inside one transaction.
    ///
    /// # Errors
    /// * `NotFound` - Physician does not exist
    /// * `DocumentAlreadyExists` - Document uniqueness violated
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        id: &PhysicianId,
        command: UpdatePhysicianCommand,
    ) -> Result<Physician, PhysicianError>;

    /// Clear the active flag.
    ///
    /// # Errors
    /// * `NotFound` - Physician does not exist
    /// * `DatabaseError` - Database operation failed
    async fn deactivate(&self, id: &PhysicianId) -> Result<(), PhysicianError>;
}
