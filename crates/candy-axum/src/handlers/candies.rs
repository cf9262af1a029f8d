//! Candy handlers - the catalog pages and their form submissions.
//!
//! Every failure is answered with a 500 and one fixed message per
//! operation; see [`HttpError`].

use axum::extract::multipart::MultipartRejection;
use axum::extract::{FromRequest, Multipart, Path, Query, Request, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use candy_core::{CandyFilter, PageRequest};

use super::intake::read_candy_form;
use crate::error::{HttpError, HttpResultExt};
use crate::state::AppState;

const LIST_FAILED: &str = "Error loading the candies";
const ADMIN_FAILED: &str = "Error loading the candies in the admin panel";
const NEW_FORM_FAILED: &str = "Error loading the new candy form";
const CREATE_FAILED: &str = "Error adding the candy";
const EDIT_FORM_FAILED: &str = "Error loading the candy for editing";
const UPDATE_FAILED: &str = "Error updating the candy";
const DELETE_FAILED: &str = "Error deleting the candy";

/// Where create and update land afterwards.
const LIST_PATH: &str = "/candies";
/// Where delete lands afterwards.
const ADMIN_PATH: &str = "/candies/admin";

/// Query string of the public listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    /// Kind filter; blank means no filter.
    pub tipo: Option<String>,
}

/// Query string of the admin listing.
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub page: Option<String>,
}

/// Method override carried by HTML forms, which can only POST.
#[derive(Debug, Default, Deserialize)]
pub struct MethodOverride {
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

fn requested_page(state: &AppState, raw: Option<&str>) -> u32 {
    PageRequest::from_query(raw, state.candies.page_size()).page()
}

fn parse_id(raw: &str, message: &'static str) -> Result<i64, HttpError> {
    raw.trim().parse::<i64>().or_http(message)
}

/// List candies, optionally filtered by kind.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, HttpError> {
    let page = requested_page(&state, query.page.as_deref());
    let filter = CandyFilter::from_query(query.tipo.as_deref());

    let candies = state.candies.list(page, filter).await.or_http(LIST_FAILED)?;
    Ok(Html(state.views.list(&candies).or_http(LIST_FAILED)?))
}

/// Admin panel listing, never filtered.
pub async fn admin(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Html<String>, HttpError> {
    let page = requested_page(&state, query.page.as_deref());

    let candies = state
        .candies
        .list(page, CandyFilter::all())
        .await
        .or_http(ADMIN_FAILED)?;
    Ok(Html(state.views.admin(&candies).or_http(ADMIN_FAILED)?))
}

/// Empty creation form.
pub async fn new_form(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    Ok(Html(state.views.new_form().or_http(NEW_FORM_FAILED)?))
}

/// Create a candy from a multipart form.
pub async fn create(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Redirect, HttpError> {
    let form = read_candy_form(multipart.or_http(CREATE_FAILED)?)
        .await
        .or_http(CREATE_FAILED)?;

    state
        .candies
        .create(form.fields, form.upload)
        .await
        .or_http(CREATE_FAILED)?;
    Ok(Redirect::to(LIST_PATH))
}

/// Edit form prefilled with the stored candy.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, HttpError> {
    let id = parse_id(&id, EDIT_FORM_FAILED)?;
    let candy = state.candies.get(id).await.or_http(EDIT_FORM_FAILED)?;
    Ok(Html(state.views.edit_form(&candy).or_http(EDIT_FORM_FAILED)?))
}

/// Update a candy from a multipart form.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Redirect, HttpError> {
    let id = parse_id(&id, UPDATE_FAILED)?;
    let form = read_candy_form(multipart.or_http(UPDATE_FAILED)?)
        .await
        .or_http(UPDATE_FAILED)?;

    state
        .candies
        .update(id, form.fields, form.upload)
        .await
        .or_http(UPDATE_FAILED)?;
    Ok(Redirect::to(LIST_PATH))
}

/// Delete a candy and its image file.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, HttpError> {
    let id = parse_id(&id, DELETE_FAILED)?;
    state.candies.delete(id).await.or_http(DELETE_FAILED)?;
    Ok(Redirect::to(ADMIN_PATH))
}

/// `POST /candies/{id}?_method=PUT|DELETE`, dispatched to [`update`] or [`remove`].
pub async fn method_override(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<MethodOverride>,
    request: Request,
) -> Result<Response, HttpError> {
    let method = query.method.unwrap_or_default().to_ascii_uppercase();

    match method.as_str() {
        "PUT" | "PATCH" => {
            let multipart = Multipart::from_request(request, &state).await;
            Ok(update(State(state), Path(id), multipart)
                .await?
                .into_response())
        }
        "DELETE" => Ok(remove(State(state), Path(id)).await?.into_response()),
        other => Err(HttpError::new(
            "Unsupported form method",
            anyhow::anyhow!("POST /candies/{id} with _method={other:?}"),
        )),
    }
}
