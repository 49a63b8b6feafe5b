use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 로그 구독자를 설치한다. 표준 출력은 결과 표/CSV에 쓰므로 로그는 표준 오류로 보낸다.
///
/// `RUST_LOG`가 없으면 `warn` 수준을 쓴다. 이미 설치된 경우 조용히 넘어간다.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if let Err(err) = result {
        eprintln!("tracing init skipped: {err}");
    }
}
