//! # Login Service サーバー
//!
//! メールアドレスとパスワードを受け取り、アクセストークンを返す API サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `LOGIN_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `LOGIN_PORT` | **Yes** | ポート番号 |
//! | `SEED_USER_EMAIL` | No | 起動時に登録するユーザーのメールアドレス |
//! | `SEED_USER_PASSWORD_HASH` | No | 登録ユーザーの Argon2id ハッシュ |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! LOGIN_PORT=13010 cargo run -p passgate-login-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use passgate_infra::{
    Argon2PasswordChecker,
    PasswordChecker,
    TokenGenerator,
    UuidTokenGenerator,
    ValidatorEmailValidator,
    repository::{InMemoryUserRepository, UserRepository},
};
use passgate_login_service::{
    app::build_app,
    config::LoginServiceConfig,
    handler::LoginRouter,
    usecase::{AuthUseCase, AuthUseCaseImpl},
};
use passgate_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Login Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("login-service");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "login-service").entered();

    // 設定読み込み
    let config = LoginServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Login Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // 依存コンポーネントを初期化
    let repository = InMemoryUserRepository::new();
    if let Some(seed_user) = &config.seed_user {
        let user = seed_user
            .to_user(&ValidatorEmailValidator)
            .context("シードユーザーの変換に失敗しました")?;
        repository
            .add(user)
            .context("シードユーザーの登録に失敗しました")?;
        tracing::info!(email = %seed_user.email, "シードユーザーを登録しました");
    }
    if repository.is_empty()? {
        tracing::warn!("登録ユーザーがいないため、ログインは常に失敗します");
    } else {
        tracing::info!(user_count = repository.len()?, "ユーザーリポジトリを初期化しました");
    }

    let user_repository: Arc<dyn UserRepository> = Arc::new(repository);
    let password_checker: Arc<dyn PasswordChecker> = Arc::new(Argon2PasswordChecker::new());
    let token_generator: Arc<dyn TokenGenerator> = Arc::new(UuidTokenGenerator);
    let auth_usecase: Arc<dyn AuthUseCase> = Arc::new(AuthUseCaseImpl::new(
        user_repository,
        password_checker,
        token_generator,
    ));

    let login_router = LoginRouter::new(Some(auth_usecase));
    login_router.ensure_configured()?;

    let app = build_app(Arc::new(login_router));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Login Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
