// レスポンスエンベロープ
//
// 各関数が返却するHTTP形式のレスポンス構造を定義する。
// bodyは `{"message": ..., "input": ...}` をJSON文字列化したもの。

use serde::Serialize;

/// 成功時のステータスコード（常にこの値のみを返す）
pub const SUCCESS_STATUS_CODE: u16 = 200;

/// bodyに文字列化して格納するレコード
///
/// フィールドの宣言順がそのままJSONのキー順になる（message → input）。
#[derive(Debug, Serialize)]
pub struct ResponseBody<'a, T: ?Sized> {
    /// 関数ごとの固定メッセージ
    pub message: &'a str,

    /// 受信したイベントをそのまま格納
    pub input: &'a T,
}

impl<'a, T: ?Sized> ResponseBody<'a, T> {
    /// 新しいレスポンスボディを作成
    pub fn new(message: &'a str, input: &'a T) -> Self {
        Self { message, input }
    }
}

/// Lambdaから返却するレスポンスエンベロープ
///
/// `{"statusCode": 200, "body": "<JSON文字列>"}` の形でシリアライズされる。
/// 生成手段は`success`のみで、ステータスコードは常に200となる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope {
    /// HTTPステータスコード
    #[serde(rename = "statusCode")]
    status_code: u16,

    /// JSON文字列化されたレスポンスボディ
    body: String,
}

impl ResponseEnvelope {
    /// ステータスコード200のエンベロープを作成
    pub fn success(body: String) -> Self {
        Self {
            status_code: SUCCESS_STATUS_CODE,
            body,
        }
    }

    /// HTTPステータスコードを取得
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// JSON文字列化されたボディを取得
    pub fn body(&self) -> &str {
        &self.body
    }

    /// bodyをJSONとしてパース
    #[cfg(test)]
    pub(crate) fn parse_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
