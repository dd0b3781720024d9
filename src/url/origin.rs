use crate::url::canonical_path;
use crate::UrlError;
use url::Url;

/// The site origin a crawl run is bound to
///
/// Wraps the parsed seed URL and answers two questions for the rest of the
/// pipeline: "does this link stay on the site?" and "what absolute URL does
/// this canonical path fetch from?".
#[derive(Debug, Clone)]
pub struct Origin {
    seed: Url,
}

impl Origin {
    /// Parses a seed URL into an origin
    ///
    /// Only `http` and `https` URLs with a host are accepted; anything else
    /// cannot anchor a crawl.
    ///
    /// # Arguments
    ///
    /// * `seed_url` - The seed URL string from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Origin)` - The parsed origin
    /// * `Err(UrlError)` - The seed URL is malformed or unsupported
    ///
    /// # Example
    ///
    /// ```
    /// use site_scribe::url::Origin;
    ///
    /// let origin = Origin::from_seed("https://example.com/").unwrap();
    /// assert_eq!(origin.seed_path(), "/");
    /// ```
    pub fn from_seed(seed_url: &str) -> Result<Self, UrlError> {
        let seed = Url::parse(seed_url).map_err(|e| UrlError::Parse(e.to_string()))?;

        if seed.scheme() != "http" && seed.scheme() != "https" {
            return Err(UrlError::InvalidScheme(format!(
                "Only HTTP and HTTPS schemes are supported, got: {}",
                seed.scheme()
            )));
        }

        if seed.host_str().is_none() {
            return Err(UrlError::MissingHost);
        }

        Ok(Self { seed })
    }

    /// The canonical path of the seed URL itself
    pub fn seed_path(&self) -> String {
        canonical_path(&self.seed)
    }

    /// The seed URL as a string, for error reporting
    pub fn seed_url(&self) -> &str {
        self.seed.as_str()
    }

    /// Resolves a canonical path to an absolute URL on this origin
    ///
    /// # Arguments
    ///
    /// * `path` - A canonical path beginning with `/`
    ///
    /// # Returns
    ///
    /// * `Ok(Url)` - The absolute URL to fetch
    /// * `Err(UrlError)` - The path cannot be joined to the origin
    pub fn resolve(&self, path: &str) -> Result<Url, UrlError> {
        self.seed
            .join(path)
            .map_err(|e| UrlError::Parse(format!("{}: {}", path, e)))
    }

    /// Checks whether a URL belongs to the same origin as the seed
    ///
    /// Scheme, host (case-insensitive), and effective port must all match.
    pub fn same_origin(&self, url: &Url) -> bool {
        if url.scheme() != self.seed.scheme() {
            return false;
        }

        let (Some(host), Some(seed_host)) = (url.host_str(), self.seed.host_str()) else {
            return false;
        };

        host.eq_ignore_ascii_case(seed_host)
            && url.port_or_known_default() == self.seed.port_or_known_default()
    }
}
