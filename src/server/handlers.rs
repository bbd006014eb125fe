use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
  model::{LimitResp, PartnerResp, SetLimitReq},
  prelude::*,
  state::AppState,
  sv,
};

#[derive(Serialize)]
struct ErrorBody {
  code: u16,
  message: String,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match self.kind() {
      ErrorKind::NotFound => StatusCode::NOT_FOUND,
      ErrorKind::InvalidState | ErrorKind::InvalidArgument => {
        StatusCode::BAD_REQUEST
      }
      ErrorKind::Internal => {
        error!("request failed: {self}");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };

    let body = ErrorBody { code: status.as_u16(), message: self.to_string() };
    (status, Json(body)).into_response()
  }
}

pub async fn health() -> &'static str {
  "OK"
}

pub async fn partners(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<PartnerResp>>> {
  let repo = app.partners();
  let partners = sv::Partners::new(&repo).all().await?;
  Ok(Json(partners.iter().map(PartnerResp::from).collect()))
}

pub async fn limit(
  State(app): State<Arc<AppState>>,
  Path((id, limit_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<LimitResp>> {
  let repo = app.partners();
  let limit = sv::Limits::new(&repo).get(id, limit_id).await?;
  Ok(Json(LimitResp::from(&limit)))
}

pub async fn set_limit(
  State(app): State<Arc<AppState>>,
  Path(id): Path<Uuid>,
  req: Result<Json<SetLimitReq>, JsonRejection>,
) -> Result<impl IntoResponse> {
  let Json(req) = req.map_err(|err| Error::InvalidArgs(err.body_text()))?;
  let repo = app.partners();
  let limit = sv::Limits::new(&repo).set(id, req).await?;

  let location = format!("/api/v1/partners/{id}/limits/{}", limit.id);
  Ok((
    StatusCode::CREATED,
    [(header::LOCATION, location)],
    Json(LimitResp::from(&limit)),
  ))
}

pub async fn cancel_limit(
  State(app): State<Arc<AppState>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode> {
  let repo = app.partners();
  sv::Limits::new(&repo).cancel_active(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
