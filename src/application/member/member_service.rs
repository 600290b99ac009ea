use crate::domain::{Member, MemberId};
use crate::ports::MemberRepository;
use std::sync::Arc;

use super::errors::{MemberApplicationError, Result};

/// 会員サービス
///
/// 「同じ名前の会員は2人存在しない」という不変条件を強制し、
/// 会員の登録と参照を提供する。
///
/// リポジトリはコンストラクタで注入される（共有のグローバル状態は持たない）。
/// サービス自身は状態を持たない。
pub struct MemberService {
    repository: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// 会員を登録する
    ///
    /// ビジネスルール：
    /// - 同じ名前（大文字小文字を区別した完全一致）の会員が存在しないこと
    ///
    /// 保存は`save_if_name_absent`で行い、名前の確認と保存がリポジトリ内で不可分になる。
    /// 同じリポジトリを共有するサービスが並行して登録しても、同名の会員は1人しか保存されない。
    ///
    /// # 戻り値
    /// 成功時はリポジトリが採番した会員ID
    ///
    /// # エラー
    /// - DuplicateMember: 同名の会員が既に存在する
    /// - RepositoryError: リポジトリの読み書きに失敗
    pub async fn join(&self, member: Member) -> Result<MemberId> {
        // 1. 重複会員の確認
        let existing = self
            .repository
            .find_by_name(&member.name)
            .await
            .map_err(MemberApplicationError::RepositoryError)?;

        if existing.is_some() {
            tracing::warn!(name = %member.name, "join rejected: duplicate member name");
            return Err(MemberApplicationError::DuplicateMember);
        }

        // 2. 保存（IDはリポジトリが採番する）
        // 確認後に別の呼び出し元が同名で保存していた場合は`None`が返る
        let name = member.name.clone();
        let saved = self
            .repository
            .save_if_name_absent(member)
            .await
            .map_err(MemberApplicationError::RepositoryError)?
            .ok_or_else(|| {
                tracing::warn!(name = %name, "join rejected: name taken concurrently");
                MemberApplicationError::DuplicateMember
            })?;

        let id = saved.id.ok_or_else(|| {
            MemberApplicationError::RepositoryError("repository returned a member without id".into())
        })?;

        tracing::info!(member_id = id.value(), name = %saved.name, "member joined");
        Ok(id)
    }

    /// IDで会員を1人取得する
    ///
    /// 見つからない場合は`None`（エラーではない）。
    pub async fn find_one(&self, id: MemberId) -> Result<Option<Member>> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(MemberApplicationError::RepositoryError)
    }

    /// 全会員を登録順で取得する
    pub async fn find_members(&self) -> Result<Vec<Member>> {
        self.repository
            .find_all()
            .await
            .map_err(MemberApplicationError::RepositoryError)
    }
}
