//! Contact repository: owner-scoped lookups and filtered search.

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::contact::{self, ActiveModel, Entity as ContactEntity};
use crate::domain::{Contact, ContactFilter, ContactRequest};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Contact repository trait for dependency injection.
///
/// Every read is scoped by owner, so a foreign contact looks exactly
/// like a missing one.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a contact owned by `user_id`
    async fn create(&self, user_id: Uuid, data: ContactRequest) -> AppResult<Contact>;

    /// Find a contact by id, only if owned by `user_id`
    async fn find_owned(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<Contact>>;

    /// Replace all mutable fields
    async fn update(&self, id: Uuid, data: ContactRequest) -> AppResult<Contact>;

    /// Hard delete; addresses go with it through the foreign key
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// One page of the owner's contacts matching every provided filter,
    /// plus the total number of matches
    async fn search(
        &self,
        user_id: Uuid,
        filter: ContactFilter,
        paging: PaginationParams,
    ) -> AppResult<(Vec<Contact>, u64)>;
}

/// Concrete implementation of ContactRepository
pub struct ContactStore {
    db: DatabaseConnection,
}

impl ContactStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `LOWER(column) LIKE '%term%' ESCAPE '\'`, portable across Postgres and SQLite.
/// The term is matched literally: `%`, `_` and `\` in it are escaped.
fn contains_ci(column: contact::Column, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn search_condition(user_id: Uuid, filter: &ContactFilter) -> Condition {
    let mut condition = Condition::all().add(contact::Column::UserId.eq(user_id));

    if let Some(name) = &filter.name {
        condition = condition.add(
            Condition::any()
                .add(contains_ci(contact::Column::FirstName, name))
                .add(contains_ci(contact::Column::LastName, name)),
        );
    }
    if let Some(email) = &filter.email {
        condition = condition.add(contains_ci(contact::Column::Email, email));
    }
    if let Some(phone) = &filter.phone {
        condition = condition.add(contains_ci(contact::Column::Phone, phone));
    }

    condition
}

#[async_trait]
impl ContactRepository for ContactStore {
    async fn create(&self, user_id: Uuid, data: ContactRequest) -> AppResult<Contact> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            phone: Set(data.phone),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Contact::from(model))
    }

    async fn find_owned(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<Contact>> {
        let result = ContactEntity::find_by_id(id)
            .filter(contact::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Contact::from))
    }

    async fn update(&self, id: Uuid, data: ContactRequest) -> AppResult<Contact> {
        let mut active: ActiveModel = ContactEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Contact")?
            .into();

        active.first_name = Set(data.first_name);
        active.last_name = Set(data.last_name);
        active.email = Set(data.email);
        active.phone = Set(data.phone);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Contact::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ContactEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Contact"));
        }

        Ok(())
    }

    async fn search(
        &self,
        user_id: Uuid,
        filter: ContactFilter,
        paging: PaginationParams,
    ) -> AppResult<(Vec<Contact>, u64)> {
        let paginator = ContactEntity::find()
            .filter(search_condition(user_id, &filter))
            .order_by_asc(contact::Column::CreatedAt)
            .order_by_asc(contact::Column::Id)
            .paginate(&self.db, paging.size);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(paging.page_index()).await?;

        Ok((models.into_iter().map(Contact::from).collect(), total))
    }
}
