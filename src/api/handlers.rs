use crate::application::member::MemberService;
use crate::domain::{Member, MemberId};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{JoinMemberRequest, MemberResponse},
};

// ============================================================================
// Extractors
// ============================================================================

/// JSONボディ抽出（失敗時は`ApiError`のJSONエラーレスポンスを返す）
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// パスパラメータ抽出（失敗時は`ApiError`のJSONエラーレスポンスを返す）
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
pub struct AppState {
    pub member_service: MemberService,
}

fn to_response(member: Member) -> Result<MemberResponse, ApiError> {
    MemberResponse::from_member(member)
        .ok_or_else(|| ApiError::Internal("stored member has no id".to_string()))
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /members - 会員を登録
///
/// 強制されるビジネスルール:
/// - 名前が空でないこと
/// - 同じ名前の会員が存在しないこと
pub async fn join_member(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<JoinMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let member = req.to_member().ok_or(ApiError::InvalidMemberName)?;
    let name = member.name.clone();

    let member_id = state.member_service.join(member).await?;

    let response = MemberResponse {
        id: member_id,
        name,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /members - 全会員を登録順で取得
pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = state.member_service.find_members().await?;

    let response = members
        .into_iter()
        .map(to_response)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(response))
}

/// GET /members/:id - 会員を1人取得
pub async fn get_member(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .member_service
        .find_one(MemberId::from_u64(id))
        .await?
        .ok_or(ApiError::MemberNotFound)?;

    Ok(Json(to_response(member)?))
}
