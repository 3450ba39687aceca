//! # 사용자 관리 서비스 구현
//!
//! 사용자 리소스의 비즈니스 규칙을 구현하는 애플리케이션 서비스입니다.
//! Spring Framework의 `@Service` 계층에 해당하며, 저장소 호출과 매핑
//! 계층을 조율하고 위반된 불변식을 타입이 있는 실패로 변환합니다.
//!
//! ## 연산별 계약
//!
//! | 연산 | 불변식 | 위반 시 실패 |
//! |------|--------|--------------|
//! | `find_all` | 결과가 비어 있지 않음 | `EmptyResult` |
//! | `find_by_name` | 일치 결과가 존재함 | `NotFound` |
//! | `save` | 저장소가 레코드를 돌려줌 | `Unavailable` |
//! | `update` | 대상 식별자가 존재함 | `NotFound`, 이후 `Unavailable` |
//! | `delete_by_id` | 대상 식별자가 존재함 | `NotFound` |
//!
//! 모든 연산은 첫 번째 위반 시점에 즉시 실패하며(fail-fast),
//! 부분 변경을 시도하지 않습니다. 재시도와 보상 처리는 없습니다.

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use once_cell::sync::Lazy;
use crate::{
    core::{
        errors::AppError,
        registry::{Service, ServiceRegistration},
    },
    domain::{
        dto::users::service::service_user::{ServiceUserRequest, ServiceUserResponse},
        mapper,
    },
    repositories::users::{user_repo::UserRepository, UserStore},
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소 어댑터([`UserStore`])와 매핑 계층을 조율하여 사용자 리소스의
/// 전체 생명주기를 관리합니다. 상태 코드는 알지 못하며, 실패는 모두
/// [`AppError`] 변형으로 표현됩니다.
///
/// ## 의존성 주입
///
/// 서비스는 구체 타입이 아니라 `Arc<dyn UserStore>`에 의존합니다.
/// 운영 구성에서는 MongoDB 리포지토리가 주입되고, 테스트에서는
/// 인메모리 구현으로 대체됩니다.
///
/// ```rust,ignore
/// let user_service = UserService::instance(); // 항상 동일한 인스턴스
/// let users = user_service.find_all().await?;
/// ```
pub struct UserService {
    /// 사용자 저장소 어댑터
    store: Arc<dyn UserStore>,
}

/// 서비스 싱글톤 인스턴스
static INSTANCE: Lazy<Arc<UserService>> =
    Lazy::new(|| Arc::new(UserService::new(UserRepository::instance())));

impl UserService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        INSTANCE.clone()
    }

    /// 주어진 저장소 어댑터로 서비스를 생성합니다.
    fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 전체 사용자 목록 조회
    ///
    /// 저장된 모든 사용자를 순서 그대로 응답 DTO로 매핑하여 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<ServiceUserResponse>)` - 비어 있지 않은 사용자 목록
    /// * `Err(AppError::EmptyResult)` - 저장소가 비어 있는 경우
    pub async fn find_all(&self) -> Result<Vec<ServiceUserResponse>, AppError> {
        let users = self.store.find_all().await?;

        let response: Vec<ServiceUserResponse> = users
            .into_iter()
            .map(mapper::to_service_response)
            .collect();

        if response.is_empty() {
            return Err(AppError::EmptyResult("Sorry the database is empty!".to_string()));
        }

        Ok(response)
    }

    /// 이름으로 사용자 검색
    ///
    /// 이름에 검색어를 포함하는 사용자를 대소문자 구분 없이 조회합니다.
    ///
    /// # 인자
    ///
    /// * `name` - 검색할 이름 조각
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<ServiceUserResponse>)` - 일치한 사용자 목록
    /// * `Err(AppError::NotFound)` - 일치한 사용자가 없는 경우
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<ServiceUserResponse>, AppError> {
        let users = self.store.find_by_name_containing_ignore_case(name).await?;

        let response: Vec<ServiceUserResponse> = users
            .into_iter()
            .map(mapper::to_service_response)
            .collect();

        if response.is_empty() {
            return Err(AppError::NotFound("User not found!".to_string()));
        }

        Ok(response)
    }

    /// 새 사용자 저장
    ///
    /// 요청을 식별자가 비어 있는 엔티티로 매핑하여 영속화합니다.
    /// 식별자는 저장소 어댑터가 할당합니다.
    ///
    /// # 인자
    ///
    /// * `request` - 저장할 사용자 정보
    ///
    /// # 반환값
    ///
    /// * `Ok(ServiceUserResponse)` - 할당된 식별자를 포함한 저장 결과
    /// * `Err(AppError::Unavailable)` - 저장소가 레코드를 돌려주지 않은 경우
    pub async fn save(&self, request: ServiceUserRequest) -> Result<ServiceUserResponse, AppError> {
        let user = mapper::to_user_for_save(&request);

        let saved = self.store.save(user).await?;

        saved
            .map(mapper::to_service_response)
            .ok_or_else(|| AppError::Unavailable("Unreachable server!".to_string()))
    }

    /// 기존 사용자 수정
    ///
    /// 존재 확인 후 해당 식별자의 레코드를 요청 내용으로 전체 교체합니다.
    /// 요청 본문의 식별자는 신뢰하지 않으며 호출자가 전달한 `id`가 강제됩니다.
    ///
    /// # 인자
    ///
    /// * `id` - 수정 대상 레코드의 식별자
    /// * `request` - 덮어쓸 사용자 정보
    ///
    /// # 반환값
    ///
    /// * `Ok(ServiceUserResponse)` - 교체된 레코드
    /// * `Err(AppError::NotFound)` - 해당 식별자의 레코드가 없는 경우 (쓰기 미수행)
    /// * `Err(AppError::Unavailable)` - 저장소가 레코드를 돌려주지 않은 경우
    pub async fn update(
        &self,
        id: &str,
        request: ServiceUserRequest,
    ) -> Result<ServiceUserResponse, AppError> {
        let exists = self.store.exists_by_id(id).await?;
        if !exists {
            return Err(AppError::NotFound("Id not found".to_string()));
        }

        let user = mapper::to_user_for_update(id, &request);

        let saved = self.store.save(user).await?;

        saved
            .map(mapper::to_service_response)
            .ok_or_else(|| AppError::Unavailable("Unreachable server!".to_string()))
    }

    /// 사용자 삭제
    ///
    /// 존재 확인 후 해당 식별자의 레코드를 삭제합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 삭제 대상 레코드의 식별자
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 삭제 완료
    /// * `Err(AppError::NotFound)` - 해당 식별자의 레코드가 없는 경우 (삭제 미수행)
    pub async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let exists = self.store.exists_by_id(id).await?;
        if !exists {
            return Err(AppError::NotFound("User to delete not found!".to_string()));
        }

        self.store.delete_by_id(id).await?;

        Ok(())
    }
}

#[async_trait]
impl Service for UserService {
    fn name(&self) -> &str {
        "user_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn construct_user_service() -> Box<dyn Any + Send + Sync> {
    Box::new(UserService::instance())
}

fn init_user_service() -> BoxFuture<'static, Result<(), Box<dyn std::error::Error>>> {
    Box::pin(async { Service::init(&*UserService::instance()).await })
}

inventory::submit! {
    ServiceRegistration {
        name: "user_service",
        constructor: construct_user_service,
        init: init_user_service,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use crate::domain::entities::users::user::User;

    /// 테스트용 인메모리 저장소
    ///
    /// 저장된 레코드와 함께 쓰기/삭제 연산 호출 여부를 기록하여,
    /// 존재 확인 실패 시 변경 연산이 호출되지 않았음을 검증할 수 있게 합니다.
    struct InMemoryUserStore {
        users: Mutex<Vec<User>>,
        save_called: AtomicBool,
        delete_called: AtomicBool,
        /// true면 save가 레코드를 돌려주지 않는 저장소를 흉내낸다
        swallow_writes: bool,
    }

    impl InMemoryUserStore {
        fn empty() -> Self {
            Self::with_users(vec![])
        }

        fn with_users(users: Vec<User>) -> Self {
            Self {
                users: Mutex::new(users),
                save_called: AtomicBool::new(false),
                delete_called: AtomicBool::new(false),
                swallow_writes: false,
            }
        }

        fn swallowing_writes() -> Self {
            Self {
                swallow_writes: true,
                ..Self::empty()
            }
        }
    }

    #[async_trait]
    impl UserStore for InMemoryUserStore {
        async fn find_all(&self) -> Result<Vec<User>, AppError> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn find_by_name_containing_ignore_case(
            &self,
            name: &str,
        ) -> Result<Vec<User>, AppError> {
            let needle = name.to_lowercase();
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .filter(|u| u.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn exists_by_id(&self, id: &str) -> Result<bool, AppError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .any(|u| u.id.as_deref() == Some(id)))
        }

        async fn save(&self, mut user: User) -> Result<Option<User>, AppError> {
            self.save_called.store(true, Ordering::SeqCst);

            if self.swallow_writes {
                return Ok(None);
            }

            let mut users = self.users.lock().unwrap();
            match user.id.clone() {
                None => {
                    user.id = Some(format!("{}", users.len() + 1));
                    users.push(user.clone());
                }
                Some(id) => {
                    users.retain(|u| u.id.as_deref() != Some(id.as_str()));
                    users.push(user.clone());
                }
            }
            Ok(Some(user))
        }

        async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
            self.delete_called.store(true, Ordering::SeqCst);

            let mut users = self.users.lock().unwrap();
            let before = users.len();
            users.retain(|u| u.id.as_deref() != Some(id));
            Ok(users.len() < before)
        }
    }

    fn sample_user(id: &str, name: &str) -> User {
        User {
            id: Some(id.to_string()),
            name: name.to_string(),
            surname: "Souza".to_string(),
            age: "20".to_string(),
            cpf: "123".to_string(),
            login: "andrews".to_string(),
            password: "123".to_string(),
            admin: false,
        }
    }

    fn sample_request(name: &str) -> ServiceUserRequest {
        ServiceUserRequest {
            id: None,
            name: name.to_string(),
            surname: "Souza".to_string(),
            age: "20".to_string(),
            cpf: "123".to_string(),
            login: "andrews".to_string(),
            password: "123".to_string(),
        }
    }

    fn service_with(store: InMemoryUserStore) -> UserService {
        UserService::new(Arc::new(store))
    }

    #[actix_web::test]
    async fn test_find_all_on_empty_store_fails_with_empty_result() {
        let service = service_with(InMemoryUserStore::empty());

        let result = service.find_all().await;

        match result {
            Err(AppError::EmptyResult(message)) => {
                assert_eq!(message, "Sorry the database is empty!");
            }
            other => panic!("expected EmptyResult, got {:?}", other.map(|_| ())),
        }
    }

    #[actix_web::test]
    async fn test_find_all_preserves_length_and_order() {
        let store = InMemoryUserStore::with_users(vec![
            sample_user("1", "Andrews"),
            sample_user("2", "Bruna"),
            sample_user("3", "Carlos"),
        ]);
        let service = service_with(store);

        let response = service.find_all().await.unwrap();

        assert_eq!(response.len(), 3);
        assert_eq!(response[0].id, "1");
        assert_eq!(response[1].id, "2");
        assert_eq!(response[2].id, "3");
    }

    #[actix_web::test]
    async fn test_find_by_name_matches_substring_case_insensitive() {
        let store = InMemoryUserStore::with_users(vec![
            sample_user("1", "Andrews"),
            sample_user("2", "Bruna"),
        ]);
        let service = service_with(store);

        let response = service.find_by_name("DREW").await.unwrap();

        assert_eq!(response.len(), 1);
        assert_eq!(response[0].name, "Andrews");
    }

    #[actix_web::test]
    async fn test_find_by_name_without_match_fails_with_not_found() {
        let store = InMemoryUserStore::with_users(vec![sample_user("1", "Andrews")]);
        let service = service_with(store);

        let result = service.find_by_name("nobody").await;

        match result {
            Err(AppError::NotFound(message)) => assert_eq!(message, "User not found!"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[actix_web::test]
    async fn test_save_assigns_id_and_projects_credentials_out() {
        let service = service_with(InMemoryUserStore::empty());

        let response = service.save(sample_request("Andrews")).await.unwrap();

        assert!(!response.id.is_empty());
        assert_eq!(response.name, "Andrews");
        assert!(!response.admin);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("login").is_none());
        assert!(json.get("password").is_none());
    }

    #[actix_web::test]
    async fn test_save_then_find_by_name_returns_exactly_the_created_record() {
        let store = Arc::new(InMemoryUserStore::empty());
        let service = UserService::new(store);

        let created = service.save(sample_request("Andrews")).await.unwrap();
        let found = service.find_by_name("Andrews").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0], created);
    }

    #[actix_web::test]
    async fn test_save_fails_with_unavailable_when_store_returns_nothing() {
        let service = service_with(InMemoryUserStore::swallowing_writes());

        let result = service.save(sample_request("Andrews")).await;

        match result {
            Err(AppError::Unavailable(message)) => assert_eq!(message, "Unreachable server!"),
            other => panic!("expected Unavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[actix_web::test]
    async fn test_update_replaces_all_fields_for_existing_id() {
        let store = InMemoryUserStore::with_users(vec![sample_user("1", "Andrews")]);
        let service = service_with(store);

        let response = service.update("1", sample_request("Renamed")).await.unwrap();

        assert_eq!(response.id, "1");
        assert_eq!(response.name, "Renamed");
    }

    #[actix_web::test]
    async fn test_update_on_missing_id_fails_without_writing() {
        let store = Arc::new(InMemoryUserStore::empty());
        let service = UserService::new(store.clone());

        let result = service.update("1", sample_request("Andrews")).await;

        match result {
            Err(AppError::NotFound(message)) => assert_eq!(message, "Id not found"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
        assert!(!store.save_called.load(Ordering::SeqCst));
    }

    #[actix_web::test]
    async fn test_delete_on_missing_id_never_reaches_the_store_delete() {
        let store = Arc::new(InMemoryUserStore::empty());
        let service = UserService::new(store.clone());

        let result = service.delete_by_id("1").await;

        match result {
            Err(AppError::NotFound(message)) => {
                assert_eq!(message, "User to delete not found!");
            }
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
        assert!(!store.delete_called.load(Ordering::SeqCst));
    }

    #[actix_web::test]
    async fn test_delete_removes_existing_record() {
        let store = Arc::new(InMemoryUserStore::with_users(vec![sample_user("1", "Andrews")]));
        let service = UserService::new(store.clone());

        service.delete_by_id("1").await.unwrap();

        assert!(store.delete_called.load(Ordering::SeqCst));
        assert!(store.users.lock().unwrap().is_empty());
    }
}
