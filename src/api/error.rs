use crate::application::member::MemberApplicationError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと、API層で検出するエラーをHTTPレスポンスにマッピングする。
#[derive(Debug)]
pub enum ApiError {
    /// アプリケーション層のエラー
    Application(MemberApplicationError),
    /// 会員名が空
    InvalidMemberName,
    /// 会員が見つからない
    MemberNotFound,
    /// リクエストのボディまたはパスを解釈できない
    ///
    /// ステータスは抽出器の判定（400/415/422など）をそのまま使う。
    InvalidRequest { status: StatusCode, message: String },
    /// 保存済み会員にIDがない（内部不整合）
    Internal(String),
}

impl From<MemberApplicationError> for ApiError {
    fn from(err: MemberApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::MemberNotFound => (
                StatusCode::NOT_FOUND,
                "MEMBER_NOT_FOUND",
                "Member not found".to_string(),
            ),

            // 409 Conflict - 同名の会員が既に存在する
            ApiError::Application(MemberApplicationError::DuplicateMember) => (
                StatusCode::CONFLICT,
                "DUPLICATE_MEMBER",
                MemberApplicationError::DuplicateMember.to_string(),
            ),

            // 422 Unprocessable Entity - 入力が不正
            ApiError::InvalidMemberName => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_MEMBER_NAME",
                "Member name must not be empty".to_string(),
            ),

            // 4xx - リクエストの形式が不正
            ApiError::InvalidRequest { status, message } => (status, "INVALID_REQUEST", message),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(MemberApplicationError::RepositoryError(ref e)) => {
                tracing::error!("Member repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access member repository".to_string(),
                )
            }
            ApiError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
