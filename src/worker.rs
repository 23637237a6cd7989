use reqwest::blocking::Client as HttpClient;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::{AudioSynthesizer, SentimentModel, TextEmbedder};
use crate::prompt::generation_prompt;
use crate::types::{AudioClip, MusicalParameters, Sentiment, SentimentResult};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Blocking HTTP client for the model-serving worker. Implements all three
/// collaborator traits; transport and non-2xx failures surface as
/// `ModelUnavailable` so the pipeline can degrade.
#[derive(Debug, Clone)]
pub struct WorkerClient {
    http: HttpClient,
    base_url: Url,
}

impl WorkerClient {
    pub fn new(base_url: Option<&str>) -> Result<Self, Error> {
        let url = base_url
            .map(Url::parse)
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL))
            .map_err(|err| Error::Configuration(format!("invalid worker base URL: {err}")))?;
        let http = HttpClient::builder()
            .use_rustls_tls()
            .build()
            .map_err(|err| Error::Configuration(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { http, base_url: url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn health(&self) -> Result<serde_json::Value, Error> {
        let url = self.join("health")?;
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|err| Error::ModelUnavailable(format!("worker health request failed: {err}")))?;
        if !response.status().is_success() {
            return Err(Error::ModelUnavailable(format!(
                "worker responded with status {}",
                response.status()
            )));
        }
        response
            .json()
            .map_err(|err| Error::ModelUnavailable(format!("invalid health payload: {err}")))
    }

    fn join(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|err| Error::Configuration(format!("failed to build worker URL: {err}")))
    }

    fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Resp, Error> {
        let url = self.join(path)?;
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .map_err(|err| Error::ModelUnavailable(format!("worker request failed: {err}")))?;
        if !response.status().is_success() {
            return Err(Error::ModelUnavailable(format!(
                "worker responded with status {}",
                response.status()
            )));
        }
        response
            .json()
            .map_err(|err| Error::ModelUnavailable(format!("invalid worker response: {err}")))
    }
}

#[derive(Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct SentimentResponse {
    label: Sentiment,
    confidence: f32,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    prompt: String,
    parameters: &'a MusicalParameters,
}

#[derive(Deserialize)]
struct SynthesisResponse {
    sample_rate: u32,
    samples: Vec<f32>,
}

impl SentimentModel for WorkerClient {
    fn sentiment(&self, text: &str) -> Result<SentimentResult, Error> {
        let response: SentimentResponse = self.post("sentiment", &TextRequest { text })?;
        Ok(SentimentResult::new(response.label, response.confidence))
    }
}

impl TextEmbedder for WorkerClient {
    fn embed(&self, text: &str) -> Result<Vec<f32>, Error> {
        let response: EmbeddingResponse = self.post("embed", &TextRequest { text })?;
        if response.embedding.is_empty() {
            return Err(Error::ModelUnavailable("worker returned empty embedding".to_string()));
        }
        Ok(response.embedding)
    }
}

impl AudioSynthesizer for WorkerClient {
    fn synthesize(&self, parameters: &MusicalParameters) -> Result<AudioClip, Error> {
        let request = SynthesisRequest { prompt: generation_prompt(parameters), parameters };
        let response: SynthesisResponse = self.post("synthesize", &request)?;
        if response.samples.is_empty() {
            return Err(Error::ModelUnavailable("worker returned empty audio".to_string()));
        }
        Ok(AudioClip { samples: response.samples, sample_rate: response.sample_rate })
    }
}
