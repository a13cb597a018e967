//! 애플리케이션 조립 지점
//!
//! 저장소 연결을 받아 리포지토리 → 서비스 순서로 의존성을 조립합니다.
//! 프레임워크 수준의 DI 컨테이너 대신 명시적 생성자 주입을 사용하므로
//! 의존 관계가 이 파일 한 곳에 모두 드러납니다.

use std::sync::Arc;
use crate::{
    caching::redis::RedisClient,
    db::Database,
    repositories::{
        coupons::coupon_repo::CouponRepository,
        members::member_repo::MemberRepository,
        orders::order_repo::OrderRepository,
        shopping_malls::shopping_mall_repo::ShoppingMallRepository,
        tokens::token_repository::TokenRepository,
    },
    services::{
        auth::google_auth_service::GoogleAuthService,
        auth::token_service::TokenService,
        auth::user_details_service::UserDetailsService,
        coupons::coupon_service::CouponService,
        members::member_service::MemberService,
        orders::order_service::OrderService,
        shopping_malls::shopping_mall_service::ShoppingMallService,
    },
};
use crate::errors::errors::AppError;

/// 전체 서비스 그래프를 보유하는 애플리케이션 상태
///
/// `web::Data`로 감싸 모든 워커 스레드가 공유합니다.
pub struct AppState {
    pub member_repo: Arc<MemberRepository>,
    pub coupon_repo: Arc<CouponRepository>,
    pub mall_repo: Arc<ShoppingMallRepository>,
    pub order_repo: Arc<OrderRepository>,

    pub token_service: Arc<TokenService>,
    pub user_details_service: Arc<UserDetailsService>,
    pub google_auth_service: Arc<GoogleAuthService>,
    pub member_service: Arc<MemberService>,
    pub coupon_service: Arc<CouponService>,
    pub mall_service: Arc<ShoppingMallService>,
    pub order_service: Arc<OrderService>,
}

impl AppState {
    /// 저장소 연결로부터 서비스 그래프를 조립합니다.
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        // 리포지토리 계층
        let member_repo = Arc::new(MemberRepository::new(db.clone(), redis.clone()));
        let coupon_repo = Arc::new(CouponRepository::new(db.clone()));
        let mall_repo = Arc::new(ShoppingMallRepository::new(db.clone()));
        let order_repo = Arc::new(OrderRepository::new(db.clone()));
        let token_repo = Arc::new(TokenRepository::new(redis));

        // 서비스 계층
        let token_service = Arc::new(TokenService::new(token_repo));
        let user_details_service = Arc::new(UserDetailsService::new(member_repo.clone()));
        let google_auth_service = Arc::new(GoogleAuthService::new(
            member_repo.clone(),
            token_service.clone(),
        ));
        let member_service = Arc::new(MemberService::new(
            member_repo.clone(),
            token_service.clone(),
        ));
        let coupon_service = Arc::new(CouponService::new(
            coupon_repo.clone(),
            member_repo.clone(),
        ));
        let mall_service = Arc::new(ShoppingMallService::new(mall_repo.clone()));
        let order_service = Arc::new(OrderService::new(order_repo.clone()));

        Self {
            member_repo,
            coupon_repo,
            mall_repo,
            order_repo,
            token_service,
            user_details_service,
            google_auth_service,
            member_service,
            coupon_service,
            mall_service,
            order_service,
        }
    }

    /// 컬렉션 인덱스를 생성합니다. 서버 시작 시 한 번 호출됩니다.
    pub async fn initialize(&self) -> Result<(), AppError> {
        self.member_repo.create_indexes().await?;
        self.coupon_repo.create_indexes().await?;
        self.mall_repo.create_indexes().await?;
        self.order_repo.create_indexes().await?;

        log::info!("✅ MongoDB 인덱스 초기화 완료");
        Ok(())
    }
}
