use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, info_span};

// Domain layer modules
pub mod domain;

// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;

use application::EchoHandler;
use domain::{FunctionKind, ResponseEnvelope};

/// Lambda呼び出し1回分の処理
///
/// コンテキストはリクエストIDのログ出力にのみ使用し、レスポンスには含めない。
/// シリアライズエラーはそのままランタイムへ伝播する。
pub async fn handle_invocation(
    kind: FunctionKind,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();

    let span = info_span!(
        "invocation",
        request_id = %context.request_id,
        function = kind.name()
    );
    let _guard = span.enter();

    info!("イベント受信");

    let envelope = EchoHandler::new(kind).handle(&payload)?;

    info!(status_code = envelope.status_code(), "レスポンス返却");

    Ok(envelope)
}
