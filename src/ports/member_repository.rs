use crate::domain::{Member, MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員リポジトリポート
///
/// 会員レコードの保管を抽象化する。保存された会員はリポジトリが排他的に所有し、
/// 呼び出し側には複製を返す。変更はすべてこのポートの操作を経由する。
///
/// 見つからない場合は`None`を返し、エラーにはしない。
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 会員を保存する
    ///
    /// 次の連番IDを採番して付与し、保存した会員を返す。
    /// IDは1から始まり、`clear`後も再利用されない。
    async fn save(&self, member: Member) -> Result<Member>;

    /// 同名の会員がいない場合だけ保存する
    ///
    /// 名前の確認と保存を1つの不可分な操作として行う。
    /// 同名の会員が既に存在する場合は何も保存せず`None`を返す（IDも採番しない）。
    /// 同じリポジトリを共有するすべての呼び出し元に対して名前の一意性を保証する。
    async fn save_if_name_absent(&self, member: Member) -> Result<Option<Member>>;

    /// IDで会員を取得する
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>>;

    /// 名前で会員を検索する
    ///
    /// 登録順に走査し、名前が完全一致する最初の会員を返す。
    async fn find_by_name(&self, name: &str) -> Result<Option<Member>>;

    /// 全会員を登録順で取得する（スナップショット）
    async fn find_all(&self) -> Result<Vec<Member>>;

    /// 全会員を削除する
    ///
    /// テストの独立性のためだけに使用する。本番の契約には含まれない。
    async fn clear(&self) -> Result<()>;
}
