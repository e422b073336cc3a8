/// world Lambda関数
///
/// 受信したイベントを `"World function executed successfully!"` と共に
/// bodyへ格納し、ステータスコード200で返却する。
use functions::domain::{FunctionKind, ResponseEnvelope};
use functions::handle_invocation;
use functions::infrastructure::{init_logging, FunctionConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let config = FunctionConfig::from_env()?;
    info!(
        function_name = ?config.function_name,
        version = ?config.version,
        memory_size = ?config.memory_size,
        log_group = ?config.log_group,
        log_stream = ?config.log_stream,
        "world Lambda関数を初期化"
    );

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
async fn handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    handle_invocation(FunctionKind::World, event).await
}
