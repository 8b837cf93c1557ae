//! Address service. Every operation resolves the parent contact under the
//! caller first, so a foreign or missing contact reports 404 before any
//! address validation runs.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::contact_service::owned_contact;
use crate::domain::{AddressRequest, AddressResponse, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Address service trait for dependency injection.
#[async_trait]
pub trait AddressService: Send + Sync {
    async fn create(
        &self,
        user: &User,
        contact_id: Uuid,
        request: AddressRequest,
    ) -> AppResult<AddressResponse>;

    async fn get(&self, user: &User, contact_id: Uuid, address_id: Uuid)
        -> AppResult<AddressResponse>;

    async fn update(
        &self,
        user: &User,
        contact_id: Uuid,
        address_id: Uuid,
        request: AddressRequest,
    ) -> AppResult<AddressResponse>;

    async fn remove(&self, user: &User, contact_id: Uuid, address_id: Uuid) -> AppResult<()>;

    async fn list(&self, user: &User, contact_id: Uuid) -> AppResult<Vec<AddressResponse>>;
}

/// Concrete implementation of AddressService using Unit of Work.
pub struct AddressManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AddressManager<U> {
    /// Create new address service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn contact_id(&self, user: &User, contact_id: Uuid) -> AppResult<Uuid> {
        let contact = owned_contact(self.uow.contacts().as_ref(), user, contact_id).await?;
        Ok(contact.id)
    }
}

#[async_trait]
impl<U: UnitOfWork> AddressService for AddressManager<U> {
    async fn create(
        &self,
        user: &User,
        contact_id: Uuid,
        request: AddressRequest,
    ) -> AppResult<AddressResponse> {
        let contact_id = self.contact_id(user, contact_id).await?;
        request.validate()?;

        let address = self.uow.addresses().create(contact_id, request).await?;
        tracing::info!(%contact_id, address_id = %address.id, "Address created");

        Ok(AddressResponse::from(address))
    }

    async fn get(
        &self,
        user: &User,
        contact_id: Uuid,
        address_id: Uuid,
    ) -> AppResult<AddressResponse> {
        let contact_id = self.contact_id(user, contact_id).await?;

        let address = self
            .uow
            .addresses()
            .find_in_contact(contact_id, address_id)
            .await?
            .ok_or_not_found("Address")?;

        Ok(AddressResponse::from(address))
    }

    async fn update(
        &self,
        user: &User,
        contact_id: Uuid,
        address_id: Uuid,
        request: AddressRequest,
    ) -> AppResult<AddressResponse> {
        let contact_id = self.contact_id(user, contact_id).await?;
        request.validate()?;

        let addresses = self.uow.addresses();
        let address = addresses
            .find_in_contact(contact_id, address_id)
            .await?
            .ok_or_not_found("Address")?;
        let updated = addresses.update(address.id, request).await?;

        Ok(AddressResponse::from(updated))
    }

    async fn remove(&self, user: &User, contact_id: Uuid, address_id: Uuid) -> AppResult<()> {
        let contact_id = self.contact_id(user, contact_id).await?;

        let addresses = self.uow.addresses();
        let address = addresses
            .find_in_contact(contact_id, address_id)
            .await?
            .ok_or_not_found("Address")?;
        addresses.delete(address.id).await?;

        tracing::info!(%contact_id, address_id = %address.id, "Address removed");
        Ok(())
    }

    async fn list(&self, user: &User, contact_id: Uuid) -> AppResult<Vec<AddressResponse>> {
        let contact_id = self.contact_id(user, contact_id).await?;

        let addresses = self.uow.addresses().list_by_contact(contact_id).await?;
        Ok(addresses.into_iter().map(AddressResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::{MockAddressRepository, MockContactRepository};
    use crate::services::test_support::{test_address, test_contact, test_user, TestUnitOfWork};

    fn valid_request() -> AddressRequest {
        AddressRequest {
            street: Some("Jalan Belum Ada".to_string()),
            city: Some("Jakarta".to_string()),
            province: Some("DKI Jakarta".to_string()),
            country: "Indonesia".to_string(),
            postal_code: "11111".to_string(),
        }
    }

    fn no_contact() -> MockContactRepository {
        let mut contacts = MockContactRepository::new();
        contacts.expect_find_owned().returning(|_, _| Ok(None));
        contacts
    }

    fn owned(user: &User) -> (MockContactRepository, Uuid) {
        let contact = test_contact(user.id);
        let id = contact.id;
        let mut contacts = MockContactRepository::new();
        contacts
            .expect_find_owned()
            .returning(move |_, _| Ok(Some(contact.clone())));
        (contacts, id)
    }

    fn service(
        contacts: MockContactRepository,
        addresses: MockAddressRepository,
    ) -> AddressManager<TestUnitOfWork> {
        AddressManager::new(Arc::new(
            TestUnitOfWork::new()
                .with_contacts(contacts)
                .with_addresses(addresses),
        ))
    }

    #[tokio::test]
    async fn test_create_under_missing_contact_reports_contact() {
        let user = test_user("khannedy");

        let mut addresses = MockAddressRepository::new();
        addresses.expect_create().never();

        // Invalid body: the contact lookup still wins
        let mut invalid = valid_request();
        invalid.country = String::new();

        let result = service(no_contact(), addresses)
            .create(&user, Uuid::new_v4(), invalid)
            .await;

        assert!(matches!(result, Err(AppError::NotFound("Contact"))));
    }

    #[tokio::test]
    async fn test_create_validates_after_contact_check() {
        let user = test_user("khannedy");
        let (contacts, contact_id) = owned(&user);

        let mut addresses = MockAddressRepository::new();
        addresses.expect_create().never();

        let mut invalid = valid_request();
        invalid.postal_code = String::new();

        let result = service(contacts, addresses)
            .create(&user, contact_id, invalid)
            .await;

        match result {
            Err(AppError::Validation(fields)) => assert!(fields.contains_key("postal_code")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_attaches_to_contact() {
        let user = test_user("khannedy");
        let (contacts, contact_id) = owned(&user);

        let mut addresses = MockAddressRepository::new();
        addresses
            .expect_create()
            .withf(move |id, data| *id == contact_id && data.country == "Indonesia")
            .times(1)
            .returning(|contact_id, data| {
                let mut address = test_address(contact_id);
                address.postal_code = data.postal_code;
                Ok(address)
            });

        let response = service(contacts, addresses)
            .create(&user, contact_id, valid_request())
            .await
            .unwrap();

        assert_eq!(response.postal_code, "11111");
    }

    #[tokio::test]
    async fn test_get_missing_address() {
        let user = test_user("khannedy");
        let (contacts, contact_id) = owned(&user);

        let mut addresses = MockAddressRepository::new();
        addresses
            .expect_find_in_contact()
            .returning(|_, _| Ok(None));

        let result = service(contacts, addresses)
            .get(&user, contact_id, Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::NotFound("Address"))));
    }

    #[tokio::test]
    async fn test_remove_deletes_address() {
        let user = test_user("khannedy");
        let (contacts, contact_id) = owned(&user);
        let address = test_address(contact_id);
        let address_id = address.id;

        let mut addresses = MockAddressRepository::new();
        addresses
            .expect_find_in_contact()
            .returning(move |_, _| Ok(Some(address.clone())));
        addresses
            .expect_delete()
            .withf(move |id| *id == address_id)
            .times(1)
            .returning(|_| Ok(()));

        service(contacts, addresses)
            .remove(&user, contact_id, address_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_under_foreign_contact() {
        let user = test_user("intruder");

        let mut addresses = MockAddressRepository::new();
        addresses.expect_list_by_contact().never();

        let result = service(no_contact(), addresses)
            .list(&user, Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::NotFound("Contact"))));
    }
}
