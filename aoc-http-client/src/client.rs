//! AOC HTTP client implementation

use crate::error::AocError;
use reqwest::Url;
use reqwest::blocking::Response;
use reqwest::header::HeaderValue;
use tracing::debug;
use zeroize::Zeroize;

/// Base URL of the Advent of Code website
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The AOC HTTP client
///
/// Issues single authenticated GET requests. Redirects follow the transport
/// defaults and no timeout is configured unless a custom
/// [`reqwest::blocking::ClientBuilder`] is supplied through the builder.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let url = AocClient::input_url(&AocClient::default_base_url(), 2024, 1)?;
/// let response = client.open(&url, "your_session_cookie")?;
/// println!("Status: {}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
}

impl AocClient {
    /// Create a new AOC client with rustls-tls configuration
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_http_client::AocClient;
    ///
    /// let client = AocClient::new().expect("Failed to create client");
    /// ```
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// The parsed [`DEFAULT_BASE_URL`]
    pub fn default_base_url() -> Url {
        Url::parse(DEFAULT_BASE_URL).expect("Default base URL should always be valid")
    }

    /// Build the input URL `{base}/{year}/day/{day}/input`
    ///
    /// Any path already present on `base` is replaced.
    ///
    /// # Errors
    ///
    /// Returns `AocError::InvalidUrl` if `base` cannot have path segments.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_http_client::AocClient;
    ///
    /// let url = AocClient::input_url(&AocClient::default_base_url(), 2015, 2).unwrap();
    /// assert_eq!(url.as_str(), "https://adventofcode.com/2015/day/2/input");
    /// ```
    pub fn input_url(base: &Url, year: u16, day: u8) -> Result<Url, AocError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::InvalidUrl(base.to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), "input"]);
        Ok(url)
    }

    /// Create a secure cookie header value from a session string
    ///
    /// This function creates a HeaderValue with the sensitive flag set to true
    /// and zeroizes the temporary string after use.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes());
        cookie_string.zeroize();

        let mut sensitive_header = header_value.map_err(|_| AocError::InvalidSession)?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Send an authenticated GET to `url` and return the successful response
    ///
    /// The body is not read; [`Response`] implements [`std::io::Read`] so the
    /// caller decides how to buffer it.
    ///
    /// # Arguments
    ///
    /// * `url` - The full request URL
    /// * `session` - The session cookie value (without "session=" prefix)
    ///
    /// # Errors
    ///
    /// * `AocError::InvalidSession` - Session contains bytes not allowed in a header
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    pub fn open(&self, url: &Url, session: &str) -> Result<Response, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;

        debug!(%url, "sending GET");
        let response = self
            .client
            .get(url.clone())
            .header("Cookie", cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        Ok(response)
    }
}

/// Builder for configuring an AOC HTTP client
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Default client
/// let client = AocClient::builder().build()?;
///
/// // Custom timeout
/// let client = AocClient::builder()
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(30))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AocClientBuilder {
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            client_builder: None,
        }
    }

    /// Set a custom HTTP client builder
    ///
    /// This allows full customization of the HTTP client (timeouts, proxies,
    /// redirect policy, user agent). The supplied builder is used as-is.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        // Use provided client builder or create default with rustls-tls
        let builder = self.client_builder.unwrap_or_else(|| {
            reqwest::blocking::Client::builder()
                .use_rustls_tls()
                .user_agent(USER_AGENT)
        });

        let client = builder
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client })
    }
}
