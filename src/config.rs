use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::nlp::stopwords::StopwordSet;
use crate::nlp::udpipe::{UdpipeAnnotator, DEFAULT_UDPIPE_MODEL, DEFAULT_UDPIPE_URL};

/// Stopword file looked up in the working directory when nothing is configured.
pub const DEFAULT_STOPWORDS_FILE: &str = "stopwords.txt";

/// Where the stopword set comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum StopwordSource {
    /// Line-delimited file, one lemma per line
    File(PathBuf),
    /// French list bundled with the `stop-words` crate
    BuiltinFrench,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// UDPipe REST endpoint (defaults to the public LINDAT service)
    pub udpipe_url: String,
    /// UDPipe model name or alias (default: french)
    pub udpipe_model: String,
    pub stopwords: StopwordSource,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// VERBATIM_STOPWORDS wins when set. Otherwise ./stopwords.txt is used if
    /// it exists, and the built-in French list if it doesn't.
    pub fn load() -> Result<Self> {
        let stopwords = match env::var("VERBATIM_STOPWORDS") {
            Ok(path) if !path.trim().is_empty() => StopwordSource::File(PathBuf::from(path)),
            _ => default_stopword_source(Path::new(DEFAULT_STOPWORDS_FILE)),
        };

        Ok(Self {
            udpipe_url: env::var("VERBATIM_UDPIPE_URL")
                .unwrap_or_else(|_| DEFAULT_UDPIPE_URL.to_string()),
            udpipe_model: env::var("VERBATIM_UDPIPE_MODEL")
                .unwrap_or_else(|_| DEFAULT_UDPIPE_MODEL.to_string()),
            stopwords,
        })
    }

    /// Override the stopword source with an explicit file (e.g. from a CLI flag).
    pub fn with_stopwords_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.stopwords = StopwordSource::File(path);
        }
        self
    }

    /// Load the stopword set. Called once per run; the set is not cached.
    pub fn load_stopwords(&self) -> Result<StopwordSet> {
        match &self.stopwords {
            StopwordSource::File(path) => Ok(StopwordSet::load(path)?),
            StopwordSource::BuiltinFrench => Ok(StopwordSet::builtin_french()),
        }
    }

    pub fn annotator(&self) -> UdpipeAnnotator {
        UdpipeAnnotator::new(&self.udpipe_url, &self.udpipe_model)
    }
}

fn default_stopword_source(path: &Path) -> StopwordSource {
    if path.is_file() {
        StopwordSource::File(path.to_path_buf())
    } else {
        StopwordSource::BuiltinFrench
    }
}
