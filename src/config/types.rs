use serde::Deserialize;

/// Base URL of the dictionary site
pub const DEFAULT_BASE_URL: &str = "https://tagalog.pinoydictionary.com";

/// Letters crawled when none are configured
pub const DEFAULT_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Default location of the serialized dictionary
pub const DEFAULT_OUTPUT_PATH: &str = "words/tagalog-words.json";

/// Part-of-speech markers used by the dictionary site, in scan order.
///
/// The first block mirrors the site's own tag list; the rest are irregular
/// markers that appear in entries but were never listed.
pub const DEFAULT_PARTS_OF_SPEECH: &[&str] = &[
    "n.",
    "syn.",
    "bot.",
    "zoo.",
    "by ext.",
    "interrog.",
    "gram.",
    "idiom.",
    "prep.",
    "pref.",
    "pers.",
    "conj.",
    "med.",
    "mat.",
    "electr.",
    "mil.",
    "intrj.",
    "adv.",
    "pron.",
    "comp.",
    "adj.",
    "v.",
    "inf.",
    "pl.",
    "coll.",
    "fig.",
    "poss.",
    "anat.",
    "rel.",
    "pseudo-verb",
    "existential",
    "imp.",
    "expr.",
    "excl.",
    "adj",
    "[n]",
    "vinf.",
    "n",
    "v.,inf.",
    "n.,zoo.",
    "adj./adv.",
];

/// Main configuration structure for Tagalog-Scraper
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub fetch: FetchConfig,
    pub extract: ExtractConfig,
    pub output: OutputConfig,
}

/// Where to crawl
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root URL; listing pages live under `{base-url}/list/`
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Letters to crawl, in order
    pub letters: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            letters: DEFAULT_LETTERS.to_string(),
        }
    }
}

/// Page fetching behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Fetch each letter's pages in concurrent batches instead of one by one
    pub concurrent: bool,

    /// Maximum number of in-flight requests per batch (concurrent mode only)
    #[serde(rename = "batch-size")]
    pub batch_size: usize,

    /// Upper bound on a whole request, in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Upper bound on connection setup, in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            concurrent: false,
            batch_size: 10,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: format!("tagalog-scraper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// How the definition text is cut out of a definition block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefinitionSplit {
    /// Split on every occurrence of the anchor tag and keep the final fragment
    #[default]
    LastFragment,

    /// Keep everything after the first occurrence of the anchor tag
    FirstOccurrence,
}

/// Entry extraction settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Known part-of-speech tags, in scan order
    #[serde(rename = "parts-of-speech")]
    pub parts_of_speech: Vec<String>,

    #[serde(rename = "definition-split")]
    pub definition_split: DefinitionSplit,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            parts_of_speech: DEFAULT_PARTS_OF_SPEECH
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            definition_split: DefinitionSplit::default(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the JSON dictionary file
    pub path: String,

    /// Sort entries by headword before writing
    pub sort: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            sort: false,
        }
    }
}

impl Config {
    /// Letters to crawl as characters
    pub fn letters(&self) -> Vec<char> {
        self.site.letters.chars().collect()
    }
}
