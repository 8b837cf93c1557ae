//! Address handlers, nested under a contact.

use axum::{
    extract::{Extension, Path, State},
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::{parse_id, AppJson};
use crate::api::AppState;
use crate::domain::{AddressRequest, AddressResponse, User};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Create address routes
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contacts/:contact_id/addresses",
            get(list).post(create),
        )
        .route(
            "/contacts/:contact_id/addresses/:address_id",
            get(get_address).put(update).delete(remove),
        )
}

/// The contact id is checked first. A malformed address id becomes the nil
/// UUID, which matches no row, so the contact lookup still runs before the
/// address is reported missing.
fn parse_ids(contact_id: &str, address_id: &str) -> AppResult<(Uuid, Uuid)> {
    let contact_id = parse_id(contact_id, "Contact")?;
    let address_id = Uuid::parse_str(address_id).unwrap_or(Uuid::nil());
    Ok((contact_id, address_id))
}

/// Add an address to a contact
#[utoipa::path(
    post,
    path = "/api/contacts/{contact_id}/addresses",
    tag = "Addresses",
    security(("api_token" = [])),
    params(("contact_id" = String, Path, description = "Contact ID (UUID)")),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address created", body = AddressResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact is not found")
    )
)]
pub async fn create(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    AppJson(payload): AppJson<AddressRequest>,
) -> AppResult<ApiResponse<AddressResponse>> {
    let contact_id = parse_id(&contact_id, "Contact")?;
    let address = state
        .address_service
        .create(&user, contact_id, payload)
        .await?;
    Ok(ApiResponse::new(address))
}

/// List a contact's addresses
#[utoipa::path(
    get,
    path = "/api/contacts/{contact_id}/addresses",
    tag = "Addresses",
    security(("api_token" = [])),
    params(("contact_id" = String, Path, description = "Contact ID (UUID)")),
    responses(
        (status = 200, description = "Addresses of the contact", body = [AddressResponse]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact is not found")
    )
)]
pub async fn list(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> AppResult<ApiResponse<Vec<AddressResponse>>> {
    let contact_id = parse_id(&contact_id, "Contact")?;
    let addresses = state.address_service.list(&user, contact_id).await?;
    Ok(ApiResponse::new(addresses))
}

/// Get one address of a contact
#[utoipa::path(
    get,
    path = "/api/contacts/{contact_id}/addresses/{address_id}",
    tag = "Addresses",
    security(("api_token" = [])),
    params(
        ("contact_id" = String, Path, description = "Contact ID (UUID)"),
        ("address_id" = String, Path, description = "Address ID (UUID)")
    ),
    responses(
        (status = 200, description = "Address", body = AddressResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact or address is not found")
    )
)]
pub async fn get_address(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    Path((contact_id, address_id)): Path<(String, String)>,
) -> AppResult<ApiResponse<AddressResponse>> {
    let (contact_id, address_id) = parse_ids(&contact_id, &address_id)?;
    let address = state
        .address_service
        .get(&user, contact_id, address_id)
        .await?;
    Ok(ApiResponse::new(address))
}

/// Replace an address's fields
#[utoipa::path(
    put,
    path = "/api/contacts/{contact_id}/addresses/{address_id}",
    tag = "Addresses",
    security(("api_token" = [])),
    params(
        ("contact_id" = String, Path, description = "Contact ID (UUID)"),
        ("address_id" = String, Path, description = "Address ID (UUID)")
    ),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address updated", body = AddressResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact or address is not found")
    )
)]
pub async fn update(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    Path((contact_id, address_id)): Path<(String, String)>,
    AppJson(payload): AppJson<AddressRequest>,
) -> AppResult<ApiResponse<AddressResponse>> {
    let (contact_id, address_id) = parse_ids(&contact_id, &address_id)?;
    let address = state
        .address_service
        .update(&user, contact_id, address_id, payload)
        .await?;
    Ok(ApiResponse::new(address))
}

/// Delete an address
#[utoipa::path(
    delete,
    path = "/api/contacts/{contact_id}/addresses/{address_id}",
    tag = "Addresses",
    security(("api_token" = [])),
    params(
        ("contact_id" = String, Path, description = "Contact ID (UUID)"),
        ("address_id" = String, Path, description = "Address ID (UUID)")
    ),
    responses(
        (status = 200, description = "Address deleted", body = String, example = json!({"data": "OK"})),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact or address is not found")
    )
)]
pub async fn remove(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    Path((contact_id, address_id)): Path<(String, String)>,
) -> AppResult<ApiResponse<&'static str>> {
    let (contact_id, address_id) = parse_ids(&contact_id, &address_id)?;
    state
        .address_service
        .remove(&user, contact_id, address_id)
        .await?;
    Ok(ApiResponse::ok())
}
