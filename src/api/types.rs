use serde::{Deserialize, Serialize};

use crate::domain::{Member, MemberId};

/// 会員登録リクエスト（POST /members）
#[derive(Debug, Deserialize)]
pub struct JoinMemberRequest {
    pub name: String,
}

impl JoinMemberRequest {
    /// リクエストを未保存の会員に変換する
    ///
    /// 名前が空（空白のみを含む）の場合は`None`を返す。
    /// 名前の有無以外の入力検証は行わない。
    pub fn to_member(&self) -> Option<Member> {
        if self.name.trim().is_empty() {
            return None;
        }
        Some(Member::new(self.name.clone()))
    }
}

/// 会員レスポンス（POST /members, GET /members, GET /members/:id）
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberResponse {
    pub id: MemberId,
    pub name: String,
}

impl MemberResponse {
    /// 保存済みの会員からレスポンスを作る
    ///
    /// IDのない（未保存の）会員は`None`。
    pub fn from_member(member: Member) -> Option<Self> {
        Some(Self {
            id: member.id?,
            name: member.name,
        })
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
