use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::MakeRequestUuid;
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::trace::TraceLayer;
use tower_http::ServiceBuilderExt;

use structs::{api, person};

use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::store::PersonStore;

pub mod configuration;
pub mod error;
pub mod extractors;
pub mod store;
pub mod structs;
pub mod telemetry;

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

#[tracing::instrument(skip_all)]
async fn list_people(State(store): State<PersonStore>) -> Result<impl IntoResponse, ApiError> {
    let people = store.list_all().await?;
    let body = people.into_iter().map(to_person_body).collect::<Vec<_>>();
    Ok(Json(body))
}

#[tracing::instrument(skip_all)]
async fn create_person(
    State(store): State<PersonStore>,
    ValidatedJson(body): ValidatedJson<api::PersonPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let created = store.create(to_new_person(body)).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/pessoas/{}", created.id))],
        Json(to_person_body(created)),
    ))
}

#[tracing::instrument(skip_all)]
async fn get_person(
    State(store): State<PersonStore>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let person = store.get(id).await?.ok_or(ApiError::PersonNotFound)?;
    Ok(Json(to_person_body(person)))
}

#[tracing::instrument(skip_all)]
async fn update_person(
    State(store): State<PersonStore>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<api::PersonPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = store
        .update(id, to_new_person(body))
        .await?
        .ok_or(ApiError::PersonNotFound)?;
    Ok(Json(to_person_body(updated)))
}

#[tracing::instrument(skip_all)]
async fn delete_person(
    State(store): State<PersonStore>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !store.delete(id).await? {
        return Err(ApiError::PersonNotFound);
    }
    Ok(Json(json!({ "message": "Pessoa deletada com sucesso" })))
}

fn to_new_person(payload: api::PersonPayload) -> person::NewPerson {
    person::NewPerson {
        name: payload.name,
        email: payload.email,
        birth_date: payload.birth_date,
        phone: payload.phone,
    }
}

fn to_person_body(person: person::Person) -> api::PersonBody {
    api::PersonBody {
        id: person.id,
        name: person.name,
        email: person.email,
        birth_date: person.birth_date,
        phone: person.phone,
    }
}

pub async fn run(listener: TcpListener, store: PersonStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

fn app(store: PersonStore) -> Router {
    Router::new()
        .route("/health-check", get(health_check))
        .route("/pessoas", get(list_people))
        .route("/pessoas", post(create_person))
        .route("/pessoas/:id", get(get_person))
        .route("/pessoas/:id", put(update_person))
        .route("/pessoas/:id", delete(delete_person))
        .layer(
            ServiceBuilder::new()
                .set_x_request_id(MakeRequestUuid)
                .layer(SetSensitiveHeadersLayer::new([
                    header::AUTHORIZATION,
                    header::COOKIE,
                ]))
                .layer(TraceLayer::new_for_http())
                .propagate_x_request_id(),
        )
        .with_state(store)
}
