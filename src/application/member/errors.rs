use thiserror::Error;

/// 重複会員エラーのメッセージ（利用者向けの固定文言）
pub const DUPLICATE_MEMBER_MESSAGE: &str = "a member with this name already exists";

/// 会員管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum MemberApplicationError {
    /// 同じ名前の会員が既に存在する（ビジネスルール違反）
    #[error("{}", DUPLICATE_MEMBER_MESSAGE)]
    DuplicateMember,

    /// MemberRepositoryのエラー
    #[error("Member repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, MemberApplicationError>;
