use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::pagination::Page;
use crate::domain::pagination::PageRequest;
use crate::domain::physician::models::NewPhysician;
use crate::domain::physician::models::Physician;
use crate::domain::physician::models::PhysicianId;
use crate::domain::physician::models::RegisterPhysicianCommand;
use crate::domain::physician::models::UpdatePhysicianCommand;
use crate::physician::errors::PhysicianError;
use crate::physician::ports::PhysicianRepository;
use crate::physician::ports::PhysicianServicePort;

/// Domain service implementation for the physician lifecycle.
pub struct PhysicianService<PR>
where
    PR: PhysicianRepository,
{
    repository: Arc<PR>,
}

impl<PR> PhysicianService<PR>
where
    PR: PhysicianRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PhysicianServicePort for PhysicianService<PR>
where
    PR: PhysicianRepository,
{
    async fn list_physicians(&self, request: PageRequest) -> Result<Page<Physician>, PhysicianError> {
        self.repository.find_active_page(&request).await
    }

    async fn register_physician(
        &self,
        command: RegisterPhysicianCommand,
    ) -> Result<Physician, PhysicianError> {
        let physician = NewPhysician {
            name: command.name,
            email: command.email,
            phone: command.phone,
            document: command.document,
            specialty: command.specialty,
            address: command.address,
            active: true,
        };

        let created = self.repository.create(physician).await?;

        tracing::info!(
            physician_id = %created.id,
            document = %created.document,
            specialty = %created.specialty,
            "Physician registered"
        );

        Ok(created)
    }

    async fn get_physician(&self, id: &PhysicianId) -> Result<Physician, PhysicianError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PhysicianError::NotFound(id.to_string()))
    }

    async fn update_physician(
        &self,
        id: &PhysicianId,
        command: UpdatePhysicianCommand,
    ) -> Result<Physician, PhysicianError> {
        let updated = self.repository.update(id, command).await?;

        tracing::info!(physician_id = %updated.id, "Physician updated");

        Ok(updated)
    }

    async fn deactivate_physician(&self, id: &PhysicianId) -> Result<(), PhysicianError> {
        self.repository.deactivate(id).await?;

        tracing::info!(physician_id = %id, "Physician deactivated");

        Ok(())
    }
}
