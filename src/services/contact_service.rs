//! Contact service - validation, ownership and search over a user's contacts.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Contact, ContactRequest, ContactResponse, SearchContactRequest, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{ContactRepository, UnitOfWork};
use crate::types::Paginated;

/// Contact service trait for dependency injection.
///
/// Contacts owned by another user are reported as not found.
#[async_trait]
pub trait ContactService: Send + Sync {
    async fn create(&self, user: &User, request: ContactRequest) -> AppResult<ContactResponse>;

    async fn get(&self, user: &User, contact_id: Uuid) -> AppResult<ContactResponse>;

    async fn update(
        &self,
        user: &User,
        contact_id: Uuid,
        request: ContactRequest,
    ) -> AppResult<ContactResponse>;

    async fn remove(&self, user: &User, contact_id: Uuid) -> AppResult<()>;

    async fn search(
        &self,
        user: &User,
        request: SearchContactRequest,
    ) -> AppResult<Paginated<ContactResponse>>;
}

/// Resolve a contact owned by `user`, or `NotFound("Contact")`.
pub(crate) async fn owned_contact(
    contacts: &dyn ContactRepository,
    user: &User,
    contact_id: Uuid,
) -> AppResult<Contact> {
    contacts
        .find_owned(user.id, contact_id)
        .await?
        .ok_or_not_found("Contact")
}

/// Concrete implementation of ContactService using Unit of Work.
pub struct ContactManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ContactManager<U> {
    /// Create new contact service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ContactService for ContactManager<U> {
    async fn create(&self, user: &User, request: ContactRequest) -> AppResult<ContactResponse> {
        request.validate()?;

        let contact = self.uow.contacts().create(user.id, request).await?;
        tracing::info!(user_id = %user.id, contact_id = %contact.id, "Contact created");

        Ok(ContactResponse::from(contact))
    }

    async fn get(&self, user: &User, contact_id: Uuid) -> AppResult<ContactResponse> {
        let contact = owned_contact(self.uow.contacts().as_ref(), user, contact_id).await?;
        Ok(ContactResponse::from(contact))
    }

    async fn update(
        &self,
        user: &User,
        contact_id: Uuid,
        request: ContactRequest,
    ) -> AppResult<ContactResponse> {
        request.validate()?;

        let contacts = self.uow.contacts();
        let contact = owned_contact(contacts.as_ref(), user, contact_id).await?;
        let updated = contacts.update(contact.id, request).await?;

        Ok(ContactResponse::from(updated))
    }

    async fn remove(&self, user: &User, contact_id: Uuid) -> AppResult<()> {
        let contacts = self.uow.contacts();
        let contact = owned_contact(contacts.as_ref(), user, contact_id).await?;
        contacts.delete(contact.id).await?;

        tracing::info!(user_id = %user.id, contact_id = %contact.id, "Contact removed");
        Ok(())
    }

    async fn search(
        &self,
        user: &User,
        request: SearchContactRequest,
    ) -> AppResult<Paginated<ContactResponse>> {
        request.validate()?;

        let filter = request.filter();
        let paging = request.pagination();
        tracing::debug!(user_id = %user.id, ?filter, ?paging, "Searching contacts");

        let (contacts, total) = self
            .uow
            .contacts()
            .search(user.id, filter, paging)
            .await?;

        Ok(Paginated::new(contacts, paging, total).map(ContactResponse::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactFilter;
    use crate::errors::AppError;
    use crate::infra::MockContactRepository;
    use crate::services::test_support::{test_contact, test_user, TestUnitOfWork};
    use crate::types::PaginationParams;

    fn request() -> ContactRequest {
        ContactRequest {
            first_name: "Ilham".to_string(),
            last_name: Some("Rh".to_string()),
            email: Some("ilham@example.com".to_string()),
            phone: Some("06886945".to_string()),
        }
    }

    fn service(contacts: MockContactRepository) -> ContactManager<TestUnitOfWork> {
        ContactManager::new(Arc::new(TestUnitOfWork::new().with_contacts(contacts)))
    }

    #[tokio::test]
    async fn test_create_scopes_to_user() {
        let user = test_user("khannedy");
        let owner = user.id;

        let mut contacts = MockContactRepository::new();
        contacts
            .expect_create()
            .withf(move |user_id, data| *user_id == owner && data.first_name == "Ilham")
            .times(1)
            .returning(|user_id, data| {
                let mut contact = test_contact(user_id);
                contact.first_name = data.first_name;
                contact.email = data.email;
                Ok(contact)
            });

        let response = service(contacts).create(&user, request()).await.unwrap();

        assert_eq!(response.first_name, "Ilham");
        assert_eq!(response.email.as_deref(), Some("ilham@example.com"));
    }

    #[tokio::test]
    async fn test_create_invalid_persists_nothing() {
        let user = test_user("khannedy");

        let mut contacts = MockContactRepository::new();
        contacts.expect_create().never();

        let invalid = ContactRequest {
            first_name: String::new(),
            last_name: None,
            email: Some("ilham".to_string()),
            phone: None,
        };
        let result = service(contacts).create(&user, invalid).await;

        match result {
            Err(AppError::Validation(fields)) => {
                assert!(fields.contains_key("first_name"));
                assert!(fields.contains_key("email"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_foreign_contact_is_not_found() {
        let user = test_user("intruder");

        let mut contacts = MockContactRepository::new();
        contacts.expect_find_owned().returning(|_, _| Ok(None));

        let result = service(contacts).get(&user, Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound("Contact"))));
    }

    #[tokio::test]
    async fn test_update_requires_ownership() {
        let user = test_user("intruder");

        let mut contacts = MockContactRepository::new();
        contacts.expect_find_owned().returning(|_, _| Ok(None));
        contacts.expect_update().never();

        let result = service(contacts)
            .update(&user, Uuid::new_v4(), request())
            .await;

        assert!(matches!(result, Err(AppError::NotFound("Contact"))));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let user = test_user("khannedy");

        let mut contacts = MockContactRepository::new();
        contacts.expect_find_owned().never();

        let mut invalid = request();
        invalid.first_name = String::new();
        let result = service(contacts).update(&user, Uuid::new_v4(), invalid).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_remove_deletes_owned_contact() {
        let user = test_user("khannedy");
        let contact = test_contact(user.id);
        let contact_id = contact.id;

        let mut contacts = MockContactRepository::new();
        contacts
            .expect_find_owned()
            .returning(move |_, _| Ok(Some(contact.clone())));
        contacts
            .expect_delete()
            .withf(move |id| *id == contact_id)
            .times(1)
            .returning(|_| Ok(()));

        service(contacts).remove(&user, contact_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_search_passes_filters_and_builds_paging() {
        let user = test_user("khannedy");
        let owner = user.id;

        let mut contacts = MockContactRepository::new();
        contacts
            .expect_search()
            .withf(move |user_id, filter, paging| {
                *user_id == owner
                    && *filter
                        == ContactFilter {
                            name: Some("ilh".to_string()),
                            email: None,
                            phone: None,
                        }
                    && *paging == PaginationParams { page: 2, size: 1 }
            })
            .returning(|_, _, _| Ok((vec![], 1)));

        let page = service(contacts)
            .search(
                &user,
                SearchContactRequest {
                    name: Some("ilh".to_string()),
                    page: 2,
                    size: 1,
                    ..SearchContactRequest::default()
                },
            )
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.paging.current_page, 2);
        assert_eq!(page.paging.total_page, 1);
        assert_eq!(page.paging.size, 1);
    }

    #[tokio::test]
    async fn test_search_rejects_zero_page() {
        let user = test_user("khannedy");

        let mut contacts = MockContactRepository::new();
        contacts.expect_search().never();

        let result = service(contacts)
            .search(
                &user,
                SearchContactRequest {
                    page: 0,
                    ..SearchContactRequest::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
