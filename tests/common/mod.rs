#![allow(dead_code)]

use member_registry::adapters::memory::InMemoryMemberRepository;
use member_registry::application::member::MemberService;
use std::sync::Arc;

/// テストごとに新しいリポジトリとサービスを作成する
///
/// リポジトリはサービスに注入したものと同じインスタンスを返すので、
/// テスト側からストアの中身を確認したり`clear`したりできる。
pub fn create_test_service() -> (Arc<InMemoryMemberRepository>, MemberService) {
    let repository = Arc::new(InMemoryMemberRepository::new());
    let service = MemberService::new(repository.clone());
    (repository, service)
}
