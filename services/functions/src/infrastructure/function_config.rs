// Lambda関数設定
//
// Lambda実行環境が設定する予約済み環境変数から関数のメタデータを読み込む。
// 起動時のログ出力にのみ使用し、レスポンスの内容には影響しない。

use thiserror::Error;

/// 関数設定のエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionConfigError {
    #[error("AWS_LAMBDA_FUNCTION_MEMORY_SIZEが数値ではありません: {0}")]
    InvalidMemorySize(String),
}

/// Lambda関数設定
///
/// 以下の環境変数から読み込む（すべて任意、空文字は未設定扱い）:
/// - AWS_LAMBDA_FUNCTION_NAME: 関数名
/// - AWS_LAMBDA_FUNCTION_VERSION: 関数バージョン
/// - AWS_LAMBDA_FUNCTION_MEMORY_SIZE: 割り当てメモリ（MB）
/// - AWS_LAMBDA_LOG_GROUP_NAME: CloudWatch Logsグループ名
/// - AWS_LAMBDA_LOG_STREAM_NAME: CloudWatch Logsストリーム名
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionConfig {
    /// 関数名
    pub function_name: Option<String>,
    /// 関数バージョン
    pub version: Option<String>,
    /// 割り当てメモリ（MB）
    pub memory_size: Option<u32>,
    /// ロググループ名
    pub log_group: Option<String>,
    /// ログストリーム名
    pub log_stream: Option<String>,
}

impl FunctionConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # エラー
    /// メモリサイズが設定されていて数値として解釈できない場合
    pub fn from_env() -> Result<Self, FunctionConfigError> {
        let get_optional_string = |key: &str| -> Option<String> {
            std::env::var(key).ok().filter(|s| !s.trim().is_empty())
        };

        let memory_size = get_optional_string("AWS_LAMBDA_FUNCTION_MEMORY_SIZE")
            .map(|v| {
                v.trim()
                    .parse::<u32>()
                    .map_err(|_| FunctionConfigError::InvalidMemorySize(v.clone()))
            })
            .transpose()?;

        Ok(Self {
            function_name: get_optional_string("AWS_LAMBDA_FUNCTION_NAME"),
            version: get_optional_string("AWS_LAMBDA_FUNCTION_VERSION"),
            memory_size,
            log_group: get_optional_string("AWS_LAMBDA_LOG_GROUP_NAME"),
            log_stream: get_optional_string("AWS_LAMBDA_LOG_STREAM_NAME"),
        })
    }
}
