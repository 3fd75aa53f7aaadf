//! Client for the PodifyAI summarization service.
//!
//! The service exposes two endpoints: a multipart document-summarization
//! call and a JSON audio-synthesis call. Both are consumed asynchronously;
//! any non-success status or malformed body fails the whole operation, so
//! callers never observe partially populated results.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::intake::SourceDocument;

/// Origin the client talks to. Server-relative audio paths are resolved
/// against this before playback.
pub const SERVICE_ORIGIN: &str = "http://localhost:5000";

/// Summary depth requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    Quick,
    Standard,
    Deep,
}

impl SummaryMode {
    pub fn as_param(self) -> &'static str {
        match self {
            SummaryMode::Quick => "quick",
            SummaryMode::Standard => "standard",
            SummaryMode::Deep => "deep",
        }
    }
}

impl std::fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SummaryMode::Quick => "Quick",
            SummaryMode::Standard => "Standard",
            SummaryMode::Deep => "Deep",
        };
        write!(f, "{}", label)
    }
}

/// Language the summary is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Es,
    Fr,
    De,
    It,
    Pt,
    Hi,
}

impl TargetLanguage {
    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::Es => "es",
            TargetLanguage::Fr => "fr",
            TargetLanguage::De => "de",
            TargetLanguage::It => "it",
            TargetLanguage::Pt => "pt",
            TargetLanguage::Hi => "hi",
        }
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TargetLanguage::Es => "Spanish",
            TargetLanguage::Fr => "French",
            TargetLanguage::De => "German",
            TargetLanguage::It => "Italian",
            TargetLanguage::Pt => "Portuguese",
            TargetLanguage::Hi => "Hindi",
        };
        write!(f, "{}", label)
    }
}

/// Which model family the service should summarize with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelBackend {
    Standard,
    Advanced,
}

impl ModelBackend {
    pub fn as_param(self) -> &'static str {
        match self {
            ModelBackend::Standard => "standard",
            ModelBackend::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for ModelBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ModelBackend::Standard => "Standard",
            ModelBackend::Advanced => "Advanced",
        };
        write!(f, "{}", label)
    }
}

/// Synthesis voice. `Standard` is the plain engine; the named voices are the
/// service's premium set and travel over the wire capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voice {
    #[serde(rename = "standard")]
    Standard,
    Puck,
    Charon,
    Kore,
    Fenrir,
    Aoede,
}

impl Voice {
    pub fn as_param(self) -> &'static str {
        match self {
            Voice::Standard => "standard",
            Voice::Puck => "Puck",
            Voice::Charon => "Charon",
            Voice::Kore => "Kore",
            Voice::Fenrir => "Fenrir",
            Voice::Aoede => "Aoede",
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Voice::Standard => "Standard (Robotic)",
            Voice::Puck => "Puck (Male)",
            Voice::Charon => "Charon (Male)",
            Voice::Kore => "Kore (Female)",
            Voice::Fenrir => "Fenrir (Male)",
            Voice::Aoede => "Aoede (Female)",
        };
        write!(f, "{}", label)
    }
}

/// Configuration snapshot captured at dispatch time. Copied by value into
/// the request so later selector edits never reach an in-flight call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRequest {
    pub mode: SummaryMode,
    pub language: TargetLanguage,
    pub model_backend: ModelBackend,
}

/// Stage timings reported by the service, all in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub extraction_time: f64,
    pub summarization_time: f64,
    pub translation_time: f64,
    pub total_time: f64,
}

impl SummaryMetrics {
    pub fn total_label(&self) -> String {
        format!("{:.1}s", self.total_time)
    }

    pub fn breakdown_label(&self) -> String {
        format!(
            "Extraction: {:.1}s, Summarization: {:.1}s, Translation: {:.1}s",
            self.extraction_time, self.summarization_time, self.translation_time
        )
    }
}

/// Result of one summarization round-trip. Either fully present or absent;
/// the orchestrator never holds a partially populated value.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResult {
    pub original_summary: String,
    pub translated_summary: String,
    pub metrics: Option<SummaryMetrics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    original_summary: String,
    translated_summary: String,
    #[serde(default)]
    metrics: Option<SummaryMetrics>,
}

impl From<SummaryResponse> for SummaryResult {
    fn from(body: SummaryResponse) -> Self {
        SummaryResult {
            original_summary: body.original_summary,
            translated_summary: body.translated_summary,
            metrics: body.metrics,
        }
    }
}

/// Payload for the audio-synthesis endpoint, frozen at dispatch time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioRequest {
    pub translated_summary: String,
    pub language: TargetLanguage,
    pub voice: Voice,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AudioResponse {
    audio_url: String,
}

/// Playable audio produced by one synthesis round-trip, together with the
/// voice that produced it. The encoded bytes are fetched eagerly so playback
/// never races a second network call.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioArtifact {
    pub url: String,
    pub voice: Voice,
    pub audio: Vec<u8>,
}

/// Upload a document and request a summary in the given mode and language.
pub async fn summarize(
    client: &reqwest::Client,
    origin: &str,
    document: SourceDocument,
    request: SummaryRequest,
) -> Result<SummaryResult> {
    info!(
        file = %document.file_name,
        bytes = document.bytes.len(),
        mode = %request.mode,
        language = request.language.code(),
        backend = %request.model_backend,
        "Uploading document for summarization"
    );

    let part = reqwest::multipart::Part::bytes(document.bytes)
        .file_name(document.file_name)
        .mime_str(document.mime_type)
        .context("Labeling document upload")?;
    let form = reqwest::multipart::Form::new()
        .part("file", part)
        .text("mode", request.mode.as_param())
        .text("language", request.language.code())
        .text("model_type", request.model_backend.as_param());

    let response = client
        .post(format!("{origin}/api/summarize"))
        .multipart(form)
        .send()
        .await
        .context("Sending summarization request")?;
    let status = response.status();
    if !status.is_success() {
        bail!("Summarization service responded with {status}");
    }

    let body: SummaryResponse = response
        .json()
        .await
        .context("Parsing summarization response")?;
    debug!(
        original_chars = body.original_summary.len(),
        translated_chars = body.translated_summary.len(),
        has_metrics = body.metrics.is_some(),
        "Summarization response parsed"
    );
    Ok(body.into())
}

/// Synthesize the translated summary into audio and fetch the encoded bytes.
pub async fn synthesize(
    client: &reqwest::Client,
    origin: &str,
    request: AudioRequest,
) -> Result<AudioArtifact> {
    info!(
        language = request.language.code(),
        voice = request.voice.as_param(),
        chars = request.translated_summary.len(),
        "Requesting audio synthesis"
    );

    let voice = request.voice;
    let response = client
        .post(format!("{origin}/api/generate-audio"))
        .json(&request)
        .send()
        .await
        .context("Sending audio-synthesis request")?;
    let status = response.status();
    if !status.is_success() {
        bail!("Audio-synthesis service responded with {status}");
    }

    let body: AudioResponse = response
        .json()
        .await
        .context("Parsing audio-synthesis response")?;
    let url = resolve_audio_url(origin, &body.audio_url);

    let audio = client
        .get(&url)
        .send()
        .await
        .context("Fetching synthesized audio")?
        .error_for_status()
        .context("Fetching synthesized audio")?
        .bytes()
        .await
        .context("Reading synthesized audio body")?
        .to_vec();
    debug!(url = %url, bytes = audio.len(), "Synthesized audio fetched");

    Ok(AudioArtifact { url, voice, audio })
}

/// Resolve a server-relative audio path against the service origin. Absolute
/// URLs pass through untouched.
pub fn resolve_audio_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_response_parses_full_payload() {
        let raw = r#"{
            "originalSummary": "A report about storks.",
            "translatedSummary": "Un informe sobre ciguenas.",
            "metrics": {
                "extractionTime": 1.2,
                "summarizationTime": 3.4,
                "totalTime": 5.1,
                "translationTime": 0.5
            }
        }"#;
        let result: SummaryResult = serde_json::from_str::<SummaryResponse>(raw)
            .expect("valid payload")
            .into();
        assert_eq!(result.original_summary, "A report about storks.");
        assert_eq!(result.translated_summary, "Un informe sobre ciguenas.");
        let metrics = result.metrics.expect("metrics present");
        assert_eq!(metrics.total_label(), "5.1s");
        assert_eq!(
            metrics.breakdown_label(),
            "Extraction: 1.2s, Summarization: 3.4s, Translation: 0.5s"
        );
    }

    #[test]
    fn summary_response_without_metrics_still_parses() {
        let raw = r#"{"originalSummary": "a", "translatedSummary": "b"}"#;
        let result: SummaryResult = serde_json::from_str::<SummaryResponse>(raw)
            .expect("valid payload")
            .into();
        assert!(result.metrics.is_none());
    }

    #[test]
    fn summary_response_missing_field_is_rejected() {
        let raw = r#"{"originalSummary": "only half"}"#;
        assert!(serde_json::from_str::<SummaryResponse>(raw).is_err());
    }

    #[test]
    fn audio_request_uses_service_wire_names() {
        let request = AudioRequest {
            translated_summary: "Hola".to_string(),
            language: TargetLanguage::Es,
            voice: Voice::Kore,
        };
        let value = serde_json::to_value(&request).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({
                "translatedSummary": "Hola",
                "language": "es",
                "voice": "Kore"
            })
        );
    }

    #[test]
    fn standard_voice_serializes_lowercase() {
        let value = serde_json::to_value(Voice::Standard).expect("serializable");
        assert_eq!(value, serde_json::json!("standard"));
    }

    #[test]
    fn audio_url_resolves_against_origin() {
        assert_eq!(
            resolve_audio_url(SERVICE_ORIGIN, "/results/summary_x.mp3"),
            "http://localhost:5000/results/summary_x.mp3"
        );
        assert_eq!(
            resolve_audio_url("http://localhost:5000/", "results/a.mp3"),
            "http://localhost:5000/results/a.mp3"
        );
        assert_eq!(
            resolve_audio_url(SERVICE_ORIGIN, "https://cdn.example/a.mp3"),
            "https://cdn.example/a.mp3"
        );
    }

    #[test]
    fn wire_params_match_service_contract() {
        assert_eq!(SummaryMode::Deep.as_param(), "deep");
        assert_eq!(ModelBackend::Advanced.as_param(), "advanced");
        assert_eq!(TargetLanguage::Hi.code(), "hi");
        assert_eq!(Voice::Aoede.as_param(), "Aoede");
    }
}
