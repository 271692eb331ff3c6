//! 远程分类模型客户端
//!
//! 调用托管推理服务（如 HF Inference API 形态的端点），
//! 响应为嵌套的 `[[{label, score}, ...]]` 结构。

use async_trait::async_trait;
use serde::Deserialize;

use crate::classifier::EmotionClassifier;
use crate::error::{AppError, Result};
use crate::models::score::ScoredLabel;

/// 远程分类模型客户端
pub struct RemoteClassifier {
    client: reqwest::Client,
    model_name: String,
    base_url: String,
}

#[derive(Deserialize)]
struct RemoteScore {
    label: String,
    score: f64,
}

impl RemoteClassifier {
    pub fn new(base_url: &str, model_name: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            model_name: model_name.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn infer(&self, text: &str) -> Result<Vec<RemoteScore>> {
        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model_name))
            .json(&serde_json::json!({
                "inputs": text,
                "options": { "wait_for_model": true }
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Classification(format!(
                "remote inference failed: {}",
                error_text
            )));
        }

        // 单条输入的响应仍是批量外层数组
        let mut batches: Vec<Vec<RemoteScore>> = response.json().await?;
        if batches.is_empty() {
            return Err(AppError::Classification(
                "remote inference returned empty response".to_string(),
            ));
        }
        Ok(batches.swap_remove(0))
    }
}

#[async_trait]
impl EmotionClassifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<ScoredLabel>> {
        let scores = self.infer(text).await?;
        Ok(scores
            .into_iter()
            .map(|s| ScoredLabel::new(&s.label, s.score))
            .collect())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_remote_classify_decodes_nested_scores() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-model"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([[
                { "label": "joy", "score": 0.82 },
                { "label": "sadness", "score": 0.05 }
            ]])))
            .mount(&server)
            .await;

        let model = RemoteClassifier::new(&server.uri(), "test-model", 5).unwrap();
        let scores = model.classify("I am happy").await.unwrap();

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].label.as_str(), "joy");
        assert_eq!(scores[0].score, 0.82);
    }

    #[tokio::test]
    async fn test_remote_classify_surfaces_http_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-model"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
            .mount(&server)
            .await;

        let model = RemoteClassifier::new(&server.uri(), "test-model", 5).unwrap();
        let err = model.classify("hello").await.unwrap_err();
        assert!(matches!(err, AppError::Classification(_)));
    }

    #[tokio::test]
    async fn test_remote_classify_rejects_empty_batch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-model"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let model = RemoteClassifier::new(&server.uri(), "test-model", 5).unwrap();
        let err = model.classify("hello").await.unwrap_err();
        assert!(matches!(err, AppError::Classification(_)));
    }
}
