use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::pagination::Page;
use crate::domain::pagination::PageRequest;
use crate::domain::physician::models::Address;
use crate::domain::physician::models::DocumentNumber;
use crate::domain::physician::models::EmailAddress;
use crate::domain::physician::models::NewPhysician;
use crate::domain::physician::models::PhoneNumber;
use crate::domain::physician::models::Physician;
use crate::domain::physician::models::PhysicianId;
use crate::domain::physician::models::PhysicianName;
use crate::domain::physician::models::RequiredText;
use crate::domain::physician::models::Specialty;
use crate::domain::physician::models::UpdatePhysicianCommand;
use crate::domain::physician::ports::PhysicianRepository;
use crate::physician::errors::PhysicianError;

const DOCUMENT_UNIQUE_CONSTRAINT: &str = "physicians_document_key";

pub struct PostgresPhysicianRepository {
    pool: PgPool,
}

impl PostgresPhysicianRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PhysicianRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    document: String,
    specialty: String,
    street: String,
    district: String,
    city: String,
    number: String,
    complement: String,
    active: bool,
}

impl TryFrom<PhysicianRow> for Physician {
    type Error = PhysicianError;

    /// A stored row that fails validation is a storage fault, never a client error.
    fn try_from(r: PhysicianRow) -> Result<Self, Self::Error> {
        let id = r.id;
        validate_row(r).map_err(|e| {
            PhysicianError::DatabaseError(format!("stored physician {} is invalid: {}", id, e))
        })
    }
}

fn validate_row(r: PhysicianRow) -> Result<Physician, PhysicianError> {
    Ok(Physician {
        id: PhysicianId(r.id),
        name: PhysicianName::new(r.name)?,
        email: EmailAddress::new(r.email)?,
        phone: PhoneNumber::new(r.phone)?,
        document: DocumentNumber::new(r.document)?,
        specialty: r.specialty.parse::<Specialty>()?,
        address: Address {
            street: RequiredText::new(r.street)?,
            district: RequiredText::new(r.district)?,
            city: RequiredText::new(r.city)?,
            number: RequiredText::new(r.number)?,
            complement: RequiredText::new(r.complement)?,
        },
        active: r.active,
    })
}

fn map_write_error(e: sqlx::Error, document: &DocumentNumber) -> PhysicianError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some(DOCUMENT_UNIQUE_CONSTRAINT)
        {
            return PhysicianError::DocumentAlreadyExists(document.to_string());
        }
    }
    PhysicianError::DatabaseError(e.to_string())
}

fn database_error(e: sqlx::Error) -> PhysicianError {
    PhysicianError::DatabaseError(e.to_string())
}

#[async_trait]
impl PhysicianRepository for PostgresPhysicianRepository {
    async fn create(&self, physician: NewPhysician) -> Result<Physician, PhysicianError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO physicians (
                name, email, phone, document, specialty,
                street, district, city, number, complement, active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(physician.name.as_str())
        .bind(physician.email.as_str())
        .bind(physician.phone.as_str())
        .bind(physician.document.as_str())
        .bind(physician.specialty.as_str())
        .bind(physician.address.street.as_str())
        .bind(physician.address.district.as_str())
        .bind(physician.address.city.as_str())
        .bind(physician.address.number.as_str())
        .bind(physician.address.complement.as_str())
        .bind(physician.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &physician.document))?;

        Ok(physician.with_id(PhysicianId(id)))
    }

    async fn find_by_id(&self, id: &PhysicianId) -> Result<Option<Physician>, PhysicianError> {
        let row = sqlx::query_as::<_, PhysicianRow>(
            r#"
            SELECT id, name, email, phone, document, specialty,
                   street, district, city, number, complement, active
            FROM physicians
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Physician::try_from).transpose()
    }

    async fn find_active_page(
        &self,
        request: &PageRequest,
    ) -> Result<Page<Physician>, PhysicianError> {
        let rows = sqlx::query_as::<_, PhysicianRow>(
            r#"
            SELECT id, name, email, phone, document, specialty,
                   street, district, city, number, complement, active
            FROM physicians
            WHERE active
            ORDER BY name ASC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM physicians WHERE active")
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        let physicians = rows
            .into_iter()
            .map(Physician::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(
            physicians,
            request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn update(
        &self,
        id: &PhysicianId,
        command: UpdatePhysicianCommand,
    ) -> Result<Physician, PhysicianError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let row = sqlx::query_as::<_, PhysicianRow>(
            r#"
            SELECT id, name, email, phone, document, specialty,
                   street, district, city, number, complement, active
            FROM physicians
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.0)
        .fetch_optional(&mut *tx)
        .await
        .map_err(database_error)?
        .ok_or(PhysicianError::NotFound(id.to_string()))?;

        let mut physician = Physician::try_from(row)?;
        physician.apply_update(command);

        sqlx::query(
            r#"
            UPDATE physicians
            SET name = $2, email = $3, phone = $4, document = $5,
                street = $6, district = $7, city = $8, number = $9, complement = $10
            WHERE id = $1
            "#,
        )
        .bind(physician.id.0)
        .bind(physician.name.as_str())
        .bind(physician.email.as_str())
        .bind(physician.phone.as_str())
        .bind(physician.document.as_str())
        .bind(physician.address.street.as_str())
        .bind(physician.address.district.as_str())
        .bind(physician.address.city.as_str())
        .bind(physician.address.number.as_str())
        .bind(physician.address.complement.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &physician.document))?;

        tx.commit().await.map_err(database_error)?;

        Ok(physician)
    }

    async fn deactivate(&self, id: &PhysicianId) -> Result<(), PhysicianError> {
        let result = sqlx::query(
            r#"
            UPDATE physicians
            SET active = FALSE
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(PhysicianError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
