use serde::Deserialize;

/// Effective configuration for a single crawl run
///
/// Assembled from the CLI arguments plus an optional TOML settings file;
/// validated before the engine or the HTTP client are constructed.
#[derive(Debug, Clone)]
pub struct Config {
    /// The URL the traversal starts from
    pub start_url: String,

    /// Maximum link-depth to expand to. Signed so an invalid negative
    /// value survives parsing long enough to be reported as a
    /// configuration error.
    pub max_depth: i64,

    pub fetcher: FetcherConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Assembles the effective config from CLI values and file settings
    ///
    /// An explicit output path wins over the file's `results-path`.
    pub fn assemble(
        start_url: String,
        max_depth: i64,
        file: FileConfig,
        output_override: Option<String>,
    ) -> Self {
        let mut output = file.output;
        if let Some(path) = output_override {
            output.results_path = path;
        }

        Self {
            start_url,
            max_depth,
            fetcher: file.fetcher,
            output,
        }
    }
}

/// Settings loaded from the optional TOML file
///
/// Every field has a default, so an empty file (or no file at all) is
/// valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub fetcher: FetcherConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetcher behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// User agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Overall per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path the JSON result file is written to
    #[serde(rename = "results-path", default = "default_results_path")]
    pub results_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
        }
    }
}

fn default_user_agent() -> String {
    format!("imagetrawl/{}", env!("CARGO_PKG_VERSION"))
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_results_path() -> String {
    "results.json".to_string()
}
