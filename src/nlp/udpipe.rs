// UDPipe REST annotator.
//
// UDPipe runs tokenization, lemmatization and UPOS tagging as a service and
// answers with CoNLL-U wrapped in a small JSON envelope. The public LINDAT
// instance is the default; a self-hosted `udpipe_server` works the same way.
//
// API docs: https://lindat.mff.cuni.cz/services/udpipe/api-reference.php

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::AnnotationError;
use crate::output::truncate_chars;

use super::conllu;
use super::traits::{AnnotatedToken, Annotator};

/// Public LINDAT endpoint.
pub const DEFAULT_UDPIPE_URL: &str = "https://lindat.mff.cuni.cz/services/udpipe/api/process";

/// Model alias resolved by the service to its latest French model.
pub const DEFAULT_UDPIPE_MODEL: &str = "french";

/// Annotator backed by a UDPipe REST service.
pub struct UdpipeAnnotator {
    client: Client,
    url: String,
    model: String,
}

impl UdpipeAnnotator {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Annotator for UdpipeAnnotator {
    async fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError> {
        // Empty `tokenizer`/`tagger` values enable those stages with defaults;
        // the parser is left off since we never read dependency columns.
        let params = [
            ("model", self.model.as_str()),
            ("tokenizer", ""),
            ("tagger", ""),
            ("data", text),
        ];

        let response = self.client.post(&self.url).form(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnnotationError::Status { status, body });
        }

        let envelope: UdpipeResponse = response.json().await?;
        let tokens = conllu::parse(&envelope.result)?;

        debug!(
            model = envelope.model.as_deref().unwrap_or(&self.model),
            tokens = tokens.len(),
            text_preview = %truncate_chars(text, 50),
            "Annotated text"
        );

        Ok(tokens)
    }
}

// --- UDPipe response envelope ---

#[derive(Deserialize)]
struct UdpipeResponse {
    model: Option<String>,
    result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_envelope_parses() {
        let json = r#"{
            "model": "french-gsd-ud-2.12-230717",
            "acknowledgements": ["http://ufal.mff.cuni.cz/udpipe/2"],
            "result": "1\tchat\tchat\tNOUN\t_\t_\t0\troot\t_\t_\n\n"
        }"#;
        let envelope: UdpipeResponse = serde_json::from_str(json).unwrap();
        let tokens = conllu::parse(&envelope.result).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lemma, "chat");
    }

    #[test]
    fn test_defaults() {
        let annotator = UdpipeAnnotator::new(DEFAULT_UDPIPE_URL, DEFAULT_UDPIPE_MODEL);
        assert_eq!(annotator.model(), "french");
    }
}
