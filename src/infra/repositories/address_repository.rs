//! Address repository: lookups are always scoped by parent contact.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::address::{self, ActiveModel, Entity as AddressEntity};
use crate::domain::{Address, AddressRequest};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Address repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Insert an address under `contact_id`
    async fn create(&self, contact_id: Uuid, data: AddressRequest) -> AppResult<Address>;

    /// Find an address by id, only if it belongs to `contact_id`
    async fn find_in_contact(&self, contact_id: Uuid, id: Uuid) -> AppResult<Option<Address>>;

    /// Replace all mutable fields
    async fn update(&self, id: Uuid, data: AddressRequest) -> AppResult<Address>;

    /// Hard delete
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Every address of a contact, oldest first
    async fn list_by_contact(&self, contact_id: Uuid) -> AppResult<Vec<Address>>;
}

/// Concrete implementation of AddressRepository
pub struct AddressStore {
    db: DatabaseConnection,
}

impl AddressStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for AddressStore {
    async fn create(&self, contact_id: Uuid, data: AddressRequest) -> AppResult<Address> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            contact_id: Set(contact_id),
            street: Set(data.street),
            city: Set(data.city),
            province: Set(data.province),
            country: Set(data.country),
            postal_code: Set(data.postal_code),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Address::from(model))
    }

    async fn find_in_contact(&self, contact_id: Uuid, id: Uuid) -> AppResult<Option<Address>> {
        let result = AddressEntity::find_by_id(id)
            .filter(address::Column::ContactId.eq(contact_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Address::from))
    }

    async fn update(&self, id: Uuid, data: AddressRequest) -> AppResult<Address> {
        let mut active: ActiveModel = AddressEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Address")?
            .into();

        active.street = Set(data.street);
        active.city = Set(data.city);
        active.province = Set(data.province);
        active.country = Set(data.country);
        active.postal_code = Set(data.postal_code);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Address::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = AddressEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Address"));
        }

        Ok(())
    }

    async fn list_by_contact(&self, contact_id: Uuid) -> AppResult<Vec<Address>> {
        let models = AddressEntity::find()
            .filter(address::Column::ContactId.eq(contact_id))
            .order_by_asc(address::Column::CreatedAt)
            .order_by_asc(address::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Address::from).collect())
    }
}
