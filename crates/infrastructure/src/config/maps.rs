//! Maps configuration: static map rendering and address geocoding.

use domain::Coordinate;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// Google Maps configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    /// Maps API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Static Maps endpoint
    #[serde(default = "default_static_map_url")]
    pub static_map_url: String,

    /// Geocoding endpoint used for address resolution
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Pixel density multiplier (1, 2 or 4)
    #[serde(default = "default_scale")]
    pub scale: u8,

    /// Latitude of the view shown before any estimate
    #[serde(default = "default_center_latitude")]
    pub center_latitude: f64,

    /// Longitude of the view shown before any estimate
    #[serde(default = "default_center_longitude")]
    pub center_longitude: f64,

    /// Zoom level of the view shown before any estimate
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Geocoding request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for MapsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("static_map_url", &self.static_map_url)
            .field("geocoding_url", &self.geocoding_url)
            .field("size", &format!("{}x{}", self.width, self.height))
            .field("scale", &self.scale)
            .field("center", &self.default_center())
            .field("zoom", &self.zoom)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_static_map_url() -> String {
    "https://maps.googleapis.com/maps/api/staticmap".to_string()
}

fn default_geocoding_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

const fn default_width() -> u32 {
    1000
}

const fn default_height() -> u32 {
    800
}

const fn default_scale() -> u8 {
    2
}

const fn default_center_latitude() -> f64 {
    -23.55052
}

const fn default_center_longitude() -> f64 {
    -46.633308
}

const fn default_zoom() -> u8 {
    13
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            static_map_url: default_static_map_url(),
            geocoding_url: default_geocoding_url(),
            width: default_width(),
            height: default_height(),
            scale: default_scale(),
            center_latitude: default_center_latitude(),
            center_longitude: default_center_longitude(),
            zoom: default_zoom(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MapsConfig {
    /// Get the API key as a string reference (for URL building)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Centre of the view shown before any estimate
    #[must_use]
    pub const fn default_center(&self) -> Coordinate {
        Coordinate::new_unchecked(self.center_latitude, self.center_longitude)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("width and height must be greater than 0".to_string());
        }

        if !matches!(self.scale, 1 | 2 | 4) {
            return Err("scale must be 1, 2 or 4".to_string());
        }

        if self.zoom > 21 {
            return Err("zoom must be between 0 and 21".to_string());
        }

        for (name, endpoint) in [
            ("static_map_url", &self.static_map_url),
            ("geocoding_url", &self.geocoding_url),
        ] {
            let url = Url::parse(endpoint).map_err(|e| format!("{name}: {e}"))?;
            if url.cannot_be_a_base() {
                return Err(format!("{name} cannot carry query parameters"));
            }
        }

        Coordinate::new(self.center_latitude, self.center_longitude)
            .map_err(|e| format!("default centre: {e}"))?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
