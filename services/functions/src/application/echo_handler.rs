// エコーハンドラー
//
// 受信イベントを固定メッセージと組み合わせてbodyに文字列化し、
// ステータスコード200のエンベロープとして返却する。
// bodyのJSONテキストはPythonの `json.dumps` と同じ書式で出力する。

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::{to_dumps_string, FunctionKind, ResponseBody, ResponseEnvelope};

/// エコーハンドラーのエラー型
#[derive(Debug, Error)]
pub enum EchoHandlerError {
    /// 入力がJSONにシリアライズできない
    #[error("レスポンスボディのシリアライズに失敗: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 関数種別ごとの固定メッセージで入力をエコーするハンドラー
///
/// 状態を持たないため、同一インスタンスを並行に使用してよい。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoHandler {
    /// 対象の関数種別
    kind: FunctionKind,
}

impl EchoHandler {
    /// 新しいハンドラーを作成
    pub fn new(kind: FunctionKind) -> Self {
        Self { kind }
    }

    /// イベントを処理してレスポンスエンベロープを生成
    ///
    /// # Arguments
    /// * `event` - 受信イベント（シリアライズ可能な任意の値）
    ///
    /// # Returns
    /// ステータスコード200と、`{"message", "input"}` を文字列化したbody。
    /// 入力のシリアライズに失敗した場合のみエラーを返す。
    pub fn handle<T>(&self, event: &T) -> Result<ResponseEnvelope, EchoHandlerError>
    where
        T: Serialize + ?Sized,
    {
        let body = ResponseBody::new(self.kind.message(), event);
        let body = to_dumps_string(&body)?;

        debug!(
            function = self.kind.name(),
            body_length = body.len(),
            "レスポンスボディ生成"
        );

        Ok(ResponseEnvelope::success(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::init_test_logging;
    use serde::ser::Error as _;
    use serde::Serializer;
    use serde_json::{json, Value};

    fn hello<T: Serialize + ?Sized>(event: &T) -> Result<ResponseEnvelope, EchoHandlerError> {
        EchoHandler::new(FunctionKind::Hello).handle(event)
    }

    fn world<T: Serialize + ?Sized>(event: &T) -> Result<ResponseEnvelope, EchoHandlerError> {
        EchoHandler::new(FunctionKind::World).handle(event)
    }

    // 代表的な入力値のサンプル
    fn sample_events() -> Vec<Value> {
        vec![
            json!({"x": 1}),
            json!([]),
            json!({}),
            json!(null),
            json!(true),
            json!(42),
            json!(-3.5),
            json!("text with \"quotes\" and \\ backslash"),
            json!({"nested": {"list": [1, "two", {"three": 3}], "empty": {}}}),
            json!({"httpMethod": "GET", "path": "/hello", "headers": {"Accept": "*/*"}}),
            json!({"unicode": "こんにちは 🌏"}),
        ]
    }

    // シリアライズに必ず失敗する入力
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot serialize"))
        }
    }

    /// helloはステータス200とHelloメッセージを返す
    #[test]
    fn test_hello_for_all_samples() {
        init_test_logging();

        for event in sample_events() {
            let envelope = hello(&event).unwrap();
            assert_eq!(envelope.status_code(), 200);
            assert_eq!(
                envelope.parse_body().unwrap(),
                json!({"message": "Hello function executed successfully!", "input": event})
            );
        }
    }

    /// worldはステータス200とWorldメッセージを返す
    #[test]
    fn test_world_for_all_samples() {
        init_test_logging();

        for event in sample_events() {
            let envelope = world(&event).unwrap();
            assert_eq!(envelope.status_code(), 200);
            assert_eq!(
                envelope.parse_body().unwrap(),
                json!({"message": "World function executed successfully!", "input": event})
            );
        }
    }

    /// hello({"x": 1}) のbody文字列はjson.dumpsの出力と一致する
    #[test]
    fn test_hello_example_body_text() {
        let envelope = hello(&json!({"x": 1})).unwrap();
        assert_eq!(
            envelope.body(),
            r#"{"message": "Hello function executed successfully!", "input": {"x": 1}}"#
        );
    }

    /// world([]) のbody文字列
    #[test]
    fn test_world_example_body_text() {
        let envelope = world(&json!([])).unwrap();
        assert_eq!(
            envelope.body(),
            r#"{"message": "World function executed successfully!", "input": []}"#
        );
    }

    /// イベントのキー順は受信したJSONのまま保持される
    #[test]
    fn test_event_key_order_is_preserved() {
        let event: Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
        let envelope = hello(&event).unwrap();
        assert_eq!(
            envelope.body(),
            r#"{"message": "Hello function executed successfully!", "input": {"b": 1, "a": 2}}"#
        );
    }

    /// 非ASCII文字を含むイベントは\uXXXX形式でエスケープされる
    #[test]
    fn test_non_ascii_event_is_escaped() {
        let envelope = world(&json!({"greeting": "こんにちは"})).unwrap();
        assert_eq!(
            envelope.body(),
            r#"{"message": "World function executed successfully!", "input": {"greeting": "\u3053\u3093\u306b\u3061\u306f"}}"#
        );
        assert!(envelope.body().is_ascii());
    }

    /// world([]) のbody
    #[test]
    fn test_world_example_empty_list() {
        let envelope = world(&json!([])).unwrap();
        assert_eq!(
            envelope.parse_body().unwrap(),
            json!({"message": "World function executed successfully!", "input": []})
        );
    }

    /// bodyをパースして再シリアライズしても意味的に等しい
    #[test]
    fn test_body_reserialization_is_equivalent() {
        for event in sample_events() {
            let envelope = hello(&event).unwrap();
            let parsed = envelope.parse_body().unwrap();
            let reserialized = serde_json::to_string(&parsed).unwrap();
            let reparsed: Value = serde_json::from_str(&reserialized).unwrap();
            assert_eq!(parsed, reparsed);
        }
    }

    /// bodyのキーはmessage、inputの順に並ぶ
    #[test]
    fn test_body_key_order() {
        let envelope = world(&json!({"z": 0})).unwrap();
        let message_pos = envelope.body().find("\"message\"").unwrap();
        let input_pos = envelope.body().find("\"input\"").unwrap();
        assert!(message_pos < input_pos);
    }

    /// JSON値以外のシリアライズ可能な型も受け付ける
    #[test]
    fn test_accepts_typed_input() {
        #[derive(Serialize)]
        struct Greeting {
            name: &'static str,
            count: u8,
        }

        let envelope = hello(&Greeting { name: "rust", count: 2 }).unwrap();
        assert_eq!(
            envelope.parse_body().unwrap()["input"],
            json!({"name": "rust", "count": 2})
        );

        let envelope = world(&()).unwrap();
        assert_eq!(envelope.parse_body().unwrap()["input"], Value::Null);

        let envelope = world("plain").unwrap();
        assert_eq!(envelope.parse_body().unwrap()["input"], "plain");
    }

    /// シリアライズ不能な入力はSerializeエラーを返す
    #[test]
    fn test_unserializable_input_returns_error() {
        let err = hello(&Unserializable).unwrap_err();
        assert!(matches!(err, EchoHandlerError::Serialize(_)));
        assert!(err.to_string().contains("cannot serialize"));
    }

    /// 同じ入力に対する2関数の違いはmessageのみ
    #[test]
    fn test_functions_differ_only_in_message() {
        let event = json!({"k": [1, 2]});
        let mut hello_body = hello(&event).unwrap().parse_body().unwrap();
        let mut world_body = world(&event).unwrap().parse_body().unwrap();

        assert_ne!(hello_body["message"], world_body["message"]);
        hello_body["message"] = Value::Null;
        world_body["message"] = Value::Null;
        assert_eq!(hello_body, world_body);
    }
}
