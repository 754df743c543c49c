//! Static map URL rendering
//!
//! Before any estimate the map shows a fixed city view. Once an estimate is
//! held, it shows the overlay: a path from origin to destination plus the
//! two markers, in that order.

use application::WorkflowSnapshot;
use domain::{MapOverlay, Marker};
use thiserror::Error;
use url::{Url, UrlQuery, form_urlencoded::Serializer};

use crate::config::MapsConfig;

/// Errors raised while preparing the static map endpoint
#[derive(Debug, Error)]
pub enum StaticMapError {
    /// The endpoint is not a URL
    #[error("Invalid static map URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The endpoint cannot take query parameters (e.g. `data:` URLs)
    #[error("Static map URL cannot carry query parameters: {0}")]
    NotHierarchical(String),
}

/// Builds Static Maps image URLs
#[derive(Clone)]
pub struct StaticMapRenderer {
    endpoint: Url,
    config: MapsConfig,
}

impl std::fmt::Debug for StaticMapRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticMapRenderer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl StaticMapRenderer {
    /// Create a renderer for `config.static_map_url`
    ///
    /// Query parameters already present on the endpoint are kept; any
    /// fragment is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute hierarchical URL.
    pub fn new(config: MapsConfig) -> Result<Self, StaticMapError> {
        let mut endpoint = Url::parse(&config.static_map_url)?;
        if endpoint.cannot_be_a_base() {
            return Err(StaticMapError::NotHierarchical(config.static_map_url));
        }
        endpoint.set_fragment(None);
        Ok(Self { endpoint, config })
    }

    /// URL of the view shown before any estimate
    #[must_use]
    pub fn idle_url(&self) -> String {
        let center = self.config.default_center().to_string();
        let zoom = self.config.zoom.to_string();
        self.render(|query| {
            query
                .append_pair("center", &center)
                .append_pair("zoom", &zoom);
        })
    }

    /// URL of the view showing `overlay`
    #[must_use]
    pub fn overlay_url(&self, overlay: &MapOverlay) -> String {
        let [from, to] = overlay.path.points;
        let path = format!(
            "color:{}|weight:{}|{from}|{to}",
            overlay.path.color, overlay.path.weight
        );
        self.render(|query| {
            query.append_pair("path", &path);
            for marker in overlay.markers() {
                query.append_pair("markers", &marker_spec(&marker));
            }
        })
    }

    /// URL for whatever the workflow currently shows
    #[must_use]
    pub fn url_for(&self, snapshot: &WorkflowSnapshot) -> String {
        snapshot
            .overlay()
            .map_or_else(|| self.idle_url(), |overlay| self.overlay_url(&overlay))
    }

    /// Size and scale first, then the view's layers, then the key
    fn render(&self, layers: impl FnOnce(&mut Serializer<'_, UrlQuery<'_>>)) -> String {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair(
                    "size",
                    &format!("{}x{}", self.config.width, self.config.height),
                )
                .append_pair("scale", &self.config.scale.to_string());
            layers(&mut query);
            if let Some(key) = self.config.api_key_str() {
                query.append_pair("key", key);
            }
        }
        url.into()
    }
}

fn marker_spec(marker: &Marker) -> String {
    format!(
        "color:{}|label:{}|{}",
        marker.style.color, marker.style.label, marker.position
    )
}
