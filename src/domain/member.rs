use super::MemberId;

/// 会員
///
/// 不変条件：永続化された会員同士で`name`が重複しない（大文字小文字を区別した完全一致）。
/// この不変条件はアプリケーション層の`join`で強制される。
///
/// IDは保存前は`None`で、リポジトリが保存時にのみ採番する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Option<MemberId>,
    pub name: String,
}

impl Member {
    /// 未保存の会員を作成する（IDなし）
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// 採番されたIDを付与した会員を返す
    ///
    /// リポジトリ実装が保存時に使用する。
    pub fn with_id(self, id: MemberId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
