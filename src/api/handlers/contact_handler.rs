//! Contact handlers.

use axum::{
    extract::{Extension, Path, State},
    routing::get,
    Router,
};

use crate::api::extractors::{parse_id, AppJson, AppQuery};
use crate::api::AppState;
use crate::domain::{ContactRequest, ContactResponse, SearchContactRequest, User};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Paginated};

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(search).post(create))
        .route(
            "/contacts/:contact_id",
            get(get_contact).put(update).delete(remove),
        )
}

/// Create a contact
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    security(("api_token" = [])),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact created", body = ContactResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<ContactRequest>,
) -> AppResult<ApiResponse<ContactResponse>> {
    let contact = state.contact_service.create(&user, payload).await?;
    Ok(ApiResponse::new(contact))
}

/// Get one of the caller's contacts
#[utoipa::path(
    get,
    path = "/api/contacts/{contact_id}",
    tag = "Contacts",
    security(("api_token" = [])),
    params(("contact_id" = String, Path, description = "Contact ID (UUID)")),
    responses(
        (status = 200, description = "Contact", body = ContactResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact is not found")
    )
)]
pub async fn get_contact(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> AppResult<ApiResponse<ContactResponse>> {
    let contact_id = parse_id(&contact_id, "Contact")?;
    let contact = state.contact_service.get(&user, contact_id).await?;
    Ok(ApiResponse::new(contact))
}

/// Replace a contact's fields
#[utoipa::path(
    put,
    path = "/api/contacts/{contact_id}",
    tag = "Contacts",
    security(("api_token" = [])),
    params(("contact_id" = String, Path, description = "Contact ID (UUID)")),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = ContactResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact is not found")
    )
)]
pub async fn update(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    AppJson(payload): AppJson<ContactRequest>,
) -> AppResult<ApiResponse<ContactResponse>> {
    let contact_id = parse_id(&contact_id, "Contact")?;
    let contact = state
        .contact_service
        .update(&user, contact_id, payload)
        .await?;
    Ok(ApiResponse::new(contact))
}

/// Delete a contact together with its addresses
#[utoipa::path(
    delete,
    path = "/api/contacts/{contact_id}",
    tag = "Contacts",
    security(("api_token" = [])),
    params(("contact_id" = String, Path, description = "Contact ID (UUID)")),
    responses(
        (status = 200, description = "Contact deleted", body = String, example = json!({"data": "OK"})),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact is not found")
    )
)]
pub async fn remove(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> AppResult<ApiResponse<&'static str>> {
    let contact_id = parse_id(&contact_id, "Contact")?;
    state.contact_service.remove(&user, contact_id).await?;
    Ok(ApiResponse::ok())
}

/// Search the caller's contacts
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "Contacts",
    security(("api_token" = [])),
    params(SearchContactRequest),
    responses(
        (status = 200, description = "One page of matching contacts with paging metadata", body = [ContactResponse]),
        (status = 400, description = "Invalid paging parameters"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn search(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchContactRequest>,
) -> AppResult<Paginated<ContactResponse>> {
    state.contact_service.search(&user, query).await
}
