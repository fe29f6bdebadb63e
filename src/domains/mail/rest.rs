use axum::{
  body::Bytes,
  extract::{DefaultBodyLimit, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::SendResult;
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn mail_routes() -> Router<SharedAppState> {
  Router::new().route(
    "/send_mail",
    post(send_mail_handler).layer(DefaultBodyLimit::disable()),
  )
}

pub async fn send_mail_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<SendResult>, AppError> {
  // Send failures are reported in the body only; the response itself is 200.
  let result = state.send_mail(&body).await?;
  Ok(JsonResponse(result))
}
