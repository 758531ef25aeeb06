use reqwest::{Client, Url};
use serde_json::Value;
use std::future::Future;

use super::error::TranslationError;
use super::language::resolve_language_code;

/// A single translation call as handed to a [`Translator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    /// Lowercased target language code or name.
    pub to: String,
    /// Lowercased source language code, or `auto`.
    pub from: String,
}

impl TranslationRequest {
    /// Builds a request, normalizing both languages to lowercase.
    pub fn new(text: impl Into<String>, to: &str, from: &str) -> Self {
        Self {
            text: text.into(),
            to: to.to_lowercase(),
            from: from.to_lowercase(),
        }
    }
}

/// Outcome of a successful translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    /// Source language as detected by the service, if reported.
    pub detected_language: Option<String>,
}

/// A remote translation service.
pub trait Translator {
    fn translate(
        &self,
        request: &TranslationRequest,
    ) -> impl Future<Output = Result<TranslationResult, TranslationError>> + Send;
}

/// Client for the public Google Translate web endpoint (`translate_a/single`).
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    fn request_url(&self, request: &TranslationRequest) -> Result<Url, TranslationError> {
        let base = format!(
            "{}/translate_a/single",
            self.endpoint.trim_end_matches('/')
        );
        let to = resolve_language_code(&request.to);
        let from = resolve_language_code(&request.from);

        Url::parse_with_params(
            &base,
            [
                ("client", "gtx"),
                ("sl", from.as_str()),
                ("tl", to.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ],
        )
        .map_err(|e| TranslationError::Other(format!("Invalid endpoint URL {base}: {e}")))
    }
}

impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        let url = self.request_url(request)?;
        tracing::debug!(endpoint = %self.endpoint, to = %request.to, from = %request.from, "sending translation request");

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Status { status, body });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;
        let (translated_text, detected_language) = parse_response(&body)?;
        tracing::debug!(detected = ?detected_language, "translation received");

        Ok(TranslationResult {
            original_text: request.text.clone(),
            translated_text,
            detected_language,
        })
    }
}

/// Extracts the translated text and detected language from a response body.
///
/// The body is a nested array: element 0 holds one `[translated, original, ...]`
/// entry per sentence, element 2 holds the detected source language.
fn parse_response(body: &Value) -> Result<(String, Option<String>), TranslationError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::MalformedResponse("missing sentence list".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(TranslationError::MalformedResponse(
            "no translated text".to_string(),
        ));
    }

    let detected = body.get(2).and_then(Value::as_str).map(str::to_string);

    Ok((translated, detected))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_request_new_lowercases_languages() {
        let upper = TranslationRequest::new("Hello", "EN", "AUTO");
        let lower = TranslationRequest::new("Hello", "en", "auto");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_response_joins_sentences() {
        let body = json!([
            [["Hola. ", "Hello. ", null, null, 10], ["Adiós.", "Bye.", null, null, 10]],
            null,
            "en"
        ]);

        let (text, detected) = parse_response(&body).unwrap();
        assert_eq!(text, "Hola. Adiós.");
        assert_eq!(detected, Some("en".to_string()));
    }

    #[test]
    fn test_parse_response_without_detected_language() {
        let body = json!([[["Hola", "Hello"]]]);

        let (text, detected) = parse_response(&body).unwrap();
        assert_eq!(text, "Hola");
        assert_eq!(detected, None);
    }

    #[test]
    fn test_parse_response_rejects_unexpected_shape() {
        assert!(matches!(
            parse_response(&json!({"error": "nope"})),
            Err(TranslationError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_response(&json!([[]])),
            Err(TranslationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_request_url_resolves_language_names() {
        let translator = GoogleTranslator::new("http://localhost:1234/");
        let request = TranslationRequest::new("Hello world", "Spanish", "auto");

        let url = translator.request_url(&request).unwrap();
        assert_eq!(url.path(), "/translate_a/single");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("tl".to_string(), "es".to_string())));
        assert!(pairs.contains(&("sl".to_string(), "auto".to_string())));
        assert!(pairs.contains(&("q".to_string(), "Hello world".to_string())));
    }

    #[test]
    fn test_request_url_uses_canonical_chinese_codes() {
        let translator = GoogleTranslator::new("http://localhost:1234");
        let request = TranslationRequest::new("Hello", "ZH-TW", "auto");
        assert_eq!(request.to, "zh-tw");

        let url = translator.request_url(&request).unwrap();
        assert!(
            url.query_pairs()
                .any(|(k, v)| k == "tl" && v == "zh-TW")
        );
    }

    #[tokio::test]
    async fn test_translate_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("tl".into(), "es".into()),
                Matcher::UrlEncoded("q".into(), "Hello".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[[["Hola","Hello",null,null,10]],null,"en"]"#)
            .create_async()
            .await;

        let translator = GoogleTranslator::new(server.url());
        let result = translator
            .translate(&TranslationRequest::new("Hello", "ES", "auto"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.original_text, "Hello");
        assert_eq!(result.translated_text, "Hola");
        assert_eq!(result.detected_language, Some("en".to_string()));
    }

    #[tokio::test]
    async fn test_translate_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body("invalid target language")
            .create_async()
            .await;

        let translator = GoogleTranslator::new(server.url());
        let err = translator
            .translate(&TranslationRequest::new("Hello", "xx", "auto"))
            .await
            .unwrap_err();

        let TranslationError::Status { status, body } = err else {
            panic!("expected a status error, got {err:?}");
        };
        assert_eq!(status, 400);
        assert!(body.contains("invalid target language"));
    }

    #[tokio::test]
    async fn test_translate_connection_refused() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let translator = GoogleTranslator::new("http://127.0.0.1:9");
        let err = translator
            .translate(&TranslationRequest::new("Hello", "es", "auto"))
            .await
            .unwrap_err();

        assert!(matches!(err, TranslationError::Http(_)));
    }
}
