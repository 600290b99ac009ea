use member_registry::adapters::memory::InMemoryMemberRepository;
use member_registry::application::member::{
    DUPLICATE_MEMBER_MESSAGE, MemberApplicationError, MemberService,
};
use member_registry::domain::{Member, MemberId};
use member_registry::ports::{MemberRepository, member_repository};
use std::sync::Arc;

mod common;

use common::create_test_service;

// ============================================================================
// join
// ============================================================================

#[tokio::test]
async fn test_join_then_find_one_returns_same_name() {
    // given
    let (_repository, service) = create_test_service();
    let member = Member::new("spring");

    // when
    let saved_id = service.join(member.clone()).await.unwrap();

    // then
    let found = service.find_one(saved_id).await.unwrap().unwrap();
    assert_eq!(found.name, member.name);
    assert_eq!(found.id, Some(saved_id));
}

#[tokio::test]
async fn test_join_distinct_names_produces_increasing_ids() {
    let (_repository, service) = create_test_service();

    let first = service.join(Member::new("spring")).await.unwrap();
    let second = service.join(Member::new("summer")).await.unwrap();

    assert_ne!(first, second);
    assert!(first < second);
    assert_eq!(first, MemberId::from_u64(1));
    assert_eq!(second, MemberId::from_u64(2));
}

#[tokio::test]
async fn test_join_duplicate_name_fails() {
    // given
    let (repository, service) = create_test_service();
    let member1 = Member::new("string");
    let member2 = Member::new("string");

    // when
    service.join(member1).await.unwrap();
    let result = service.join(member2).await;

    // then
    let err = result.unwrap_err();
    assert!(matches!(err, MemberApplicationError::DuplicateMember));
    assert_eq!(err.to_string(), DUPLICATE_MEMBER_MESSAGE);
    assert_eq!(err.to_string(), "a member with this name already exists");

    let members = repository.find_all().await.unwrap();
    assert_eq!(members.iter().filter(|m| m.name == "string").count(), 1);
}

#[tokio::test]
async fn test_duplicate_check_is_case_sensitive() {
    let (_repository, service) = create_test_service();

    service.join(Member::new("spring")).await.unwrap();
    let result = service.join(Member::new("Spring")).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_rejected_join_does_not_consume_an_id() {
    let (_repository, service) = create_test_service();

    service.join(Member::new("spring")).await.unwrap();
    service.join(Member::new("spring")).await.unwrap_err();
    let next = service.join(Member::new("summer")).await.unwrap();

    assert_eq!(next, MemberId::from_u64(2));
}

#[tokio::test]
async fn test_concurrent_joins_with_same_name_admit_exactly_one() {
    let (repository, service) = create_test_service();
    let service = Arc::new(service);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.join(Member::new("race")).await })
        })
        .collect();

    let results = futures::future::join_all(handles).await;
    let succeeded = results
        .into_iter()
        .map(|r| r.expect("join task panicked"))
        .filter(|r| r.is_ok())
        .count();

    assert_eq!(succeeded, 1);
    assert_eq!(repository.find_all().await.unwrap().len(), 1);
}

// ============================================================================
// find_one / find_members
// ============================================================================

#[tokio::test]
async fn test_find_one_unknown_id_is_none() {
    let (_repository, service) = create_test_service();

    let result = service.find_one(MemberId::from_u64(42)).await;

    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_find_members_empty_without_joins() {
    let (_repository, service) = create_test_service();

    assert!(service.find_members().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_members_in_insertion_order() {
    let (_repository, service) = create_test_service();
    let names = ["winter", "autumn", "spring", "summer"];
    for name in names {
        service.join(Member::new(name)).await.unwrap();
    }

    let members = service.find_members().await.unwrap();

    assert_eq!(members.len(), names.len());
    let found: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(found, names);
}

// ============================================================================
// clear / 独立性
// ============================================================================

#[tokio::test]
async fn test_clear_empties_store() {
    let (repository, service) = create_test_service();
    service.join(Member::new("spring")).await.unwrap();
    service.join(Member::new("summer")).await.unwrap();

    repository.clear().await.unwrap();

    assert!(service.find_members().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_name_is_available_again_after_clear() {
    let (repository, service) = create_test_service();
    service.join(Member::new("spring")).await.unwrap();

    repository.clear().await.unwrap();
    let id = service.join(Member::new("spring")).await.unwrap();

    // IDは再利用されない
    assert_eq!(id, MemberId::from_u64(2));
}

#[tokio::test]
async fn test_services_with_separate_repositories_are_isolated() {
    let (_repository_a, service_a) = create_test_service();
    let (_repository_b, service_b) = create_test_service();

    service_a.join(Member::new("spring")).await.unwrap();

    assert!(service_b.join(Member::new("spring")).await.is_ok());
    assert_eq!(service_b.find_members().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_services_sharing_a_repository_share_the_invariant() {
    let (repository, service_a) = create_test_service();
    let service_b = MemberService::new(repository.clone());

    service_a.join(Member::new("spring")).await.unwrap();
    let result = service_b.join(Member::new("spring")).await;

    assert!(matches!(
        result,
        Err(MemberApplicationError::DuplicateMember)
    ));
}

// ============================================================================
// 並行登録（リポジトリ共有）
// ============================================================================

/// 名前検索の直後に一度タスクを譲るリポジトリ
///
/// 重複確認と保存の間に他のタスクが割り込めるようにする。
struct YieldingRepository {
    inner: InMemoryMemberRepository,
}

#[async_trait::async_trait]
impl MemberRepository for YieldingRepository {
    async fn save(&self, member: Member) -> member_repository::Result<Member> {
        self.inner.save(member).await
    }

    async fn save_if_name_absent(
        &self,
        member: Member,
    ) -> member_repository::Result<Option<Member>> {
        self.inner.save_if_name_absent(member).await
    }

    async fn find_by_id(&self, id: MemberId) -> member_repository::Result<Option<Member>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_name(&self, name: &str) -> member_repository::Result<Option<Member>> {
        let found = self.inner.find_by_name(name).await;
        tokio::task::yield_now().await;
        found
    }

    async fn find_all(&self) -> member_repository::Result<Vec<Member>> {
        self.inner.find_all().await
    }

    async fn clear(&self) -> member_repository::Result<()> {
        self.inner.clear().await
    }
}

#[tokio::test]
async fn test_concurrent_joins_through_services_sharing_a_repository() {
    let repository = Arc::new(YieldingRepository {
        inner: InMemoryMemberRepository::new(),
    });
    let service_a = MemberService::new(repository.clone());
    let service_b = MemberService::new(repository.clone());

    // 両方の重複確認が保存より先に終わる
    let (a, b) = tokio::join!(
        service_a.join(Member::new("spring")),
        service_b.join(Member::new("spring")),
    );

    assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
    let rejected = if a.is_ok() { b } else { a };
    assert!(matches!(
        rejected,
        Err(MemberApplicationError::DuplicateMember)
    ));

    let stored = repository.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "spring");
}
