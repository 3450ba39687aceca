//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB의 `users` 컬렉션을 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **insert-or-replace 저장**: 식별자 유무에 따라 삽입과 전체 교체를 구분
//! - **식별자 할당**: 삽입 시점에 ObjectId 기반 불투명 문자열 식별자 생성
//! - **대소문자 무시 부분 일치 검색**: 이스케이프된 `$regex` 필터 사용
//! - **에러 변환**: 모든 드라이버 오류를 `AppError::DatabaseError`로 전달

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Regex},
    options::{FindOneAndReplaceOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use once_cell::sync::Lazy;
use crate::{
    core::{
        errors::AppError,
        registry::{Repository, RepositoryRegistration, ServiceLocator},
    },
    db::Database,
    domain::entities::users::user::User,
    repositories::users::UserStore,
    utils::string_utils::escape_regex,
};
use futures_util::future::BoxFuture;

/// `users` 컬렉션 이름
const COLLECTION_NAME: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산을 담당하며, [`UserStore`] trait의
/// MongoDB 구현체입니다.
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>`를 반환하며, 드라이버 오류는
/// `AppError::DatabaseError`로 변환되어 메시지가 그대로 전달됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::users::user_repo::UserRepository;
///
/// let repo = UserRepository::instance();
/// let everyone = repo.find_all().await?;
/// let matched = repo.find_by_name_containing_ignore_case("andre").await?;
/// ```
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

/// 리포지토리 싱글톤 인스턴스
static INSTANCE: Lazy<Arc<UserRepository>> = Lazy::new(|| Arc::new(UserRepository::new()));

impl UserRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        INSTANCE.clone()
    }

    /// 새 리포지토리를 생성합니다.
    ///
    /// Database는 main.rs에서 ServiceLocator에 등록된 인스턴스를 주입받습니다.
    fn new() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    /// `users` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 저장된 모든 사용자 조회
    ///
    /// 컬렉션의 모든 도큐먼트를 커서 순서 그대로 수집하여 반환합니다.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이름 부분 일치 검색 (대소문자 무시)
    ///
    /// 검색어의 정규식 메타문자를 이스케이프한 뒤 `$regex` 필터로
    /// 조회합니다. 검색어가 이름의 어느 위치에 있어도 매칭됩니다.
    ///
    /// # 인자
    ///
    /// * `name` - 검색할 이름 조각
    pub async fn find_by_name_containing_ignore_case(&self, name: &str) -> Result<Vec<User>, AppError> {
        let pattern = Regex {
            pattern: escape_regex(name),
            options: "i".to_string(),
        };

        let cursor = self.collection()
            .find(doc! { "name": pattern })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 식별자 존재 확인
    ///
    /// # 인자
    ///
    /// * `id` - 확인할 레코드의 식별자
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 해당 식별자의 레코드가 존재함
    /// * `Ok(false)` - 존재하지 않음
    pub async fn exists_by_id(&self, id: &str) -> Result<bool, AppError> {
        let count = self.collection()
            .count_documents(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// 사용자 저장 (insert-or-replace)
    ///
    /// 식별자가 없는 엔티티는 새 식별자를 할당받아 삽입되고,
    /// 식별자가 있는 엔티티는 해당 도큐먼트 전체를 교체합니다.
    ///
    /// # 인자
    ///
    /// * `user` - 저장할 사용자 (삽입 경로에서는 `id`가 `None`)
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 영속화된 레코드를 다시 읽은 결과
    /// * `Ok(None)` - 저장소가 레코드를 돌려주지 않음
    /// * `Err(AppError::DatabaseError)` - 드라이버 오류
    ///
    /// # 식별자 할당
    ///
    /// 새 식별자는 ObjectId의 16진수 문자열 표현입니다. 식별자는
    /// 이 지점에서 단 한 번 할당되며 이후 변경되지 않습니다.
    pub async fn save(&self, mut user: User) -> Result<Option<User>, AppError> {
        match user.id.clone() {
            None => {
                let id = ObjectId::new().to_hex();
                user.id = Some(id.clone());

                self.collection()
                    .insert_one(&user)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                self.collection()
                    .find_one(doc! { "_id": id.as_str() })
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))
            }
            Some(id) => {
                let options = FindOneAndReplaceOptions::builder()
                    .upsert(true)
                    .return_document(ReturnDocument::After)
                    .build();

                self.collection()
                    .find_one_and_replace(doc! { "_id": id.as_str() }, &user)
                    .with_options(options)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))
            }
        }
    }

    /// 사용자 삭제
    ///
    /// 지정된 식별자의 도큐먼트를 영구적으로 삭제합니다 (소프트 삭제 아님).
    ///
    /// # 인자
    ///
    /// * `id` - 삭제할 레코드의 식별자
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 레코드가 삭제됨
    /// * `Ok(false)` - 해당 식별자의 레코드가 없었음
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let result = self.collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이름 검색 최적화를 위한 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .name("name_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        UserRepository::find_all(self).await
    }

    async fn find_by_name_containing_ignore_case(&self, name: &str) -> Result<Vec<User>, AppError> {
        UserRepository::find_by_name_containing_ignore_case(self, name).await
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, AppError> {
        UserRepository::exists_by_id(self, id).await
    }

    async fn save(&self, user: User) -> Result<Option<User>, AppError> {
        UserRepository::save(self, user).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        UserRepository::delete_by_id(self, id).await
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION_NAME
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        Ok(())
    }
}

fn construct_user_repository() -> Box<dyn Any + Send + Sync> {
    Box::new(UserRepository::instance())
}

fn init_user_repository() -> BoxFuture<'static, Result<(), Box<dyn std::error::Error>>> {
    Box::pin(async { Repository::init(&*UserRepository::instance()).await })
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        constructor: construct_user_repository,
        init: init_user_repository,
    }
}
