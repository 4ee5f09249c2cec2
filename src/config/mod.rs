use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

use happy_core::entities::{MapPoint, MapRegion};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "happy.toml";

const ENV_NAME_API_URL: &str = "HAPPY_API_URL";

pub struct Config {
    pub api: Api,
    pub map: Map,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_url) = env::var(ENV_NAME_API_URL) {
            log::debug!("Override API URL from {ENV_NAME_API_URL}");
            cfg.api.set_url(&api_url)?;
        }
        Ok(cfg)
    }
}

pub struct Api {
    /// Base URL of the backend, without trailing slash.
    pub url: String,
    pub request_timeout: Duration,
}

impl Api {
    pub fn set_url(&mut self, url: &str) -> Result<()> {
        self.url = normalize_api_url(url)?;
        Ok(())
    }
}

fn normalize_api_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(anyhow!("Invalid API URL"));
    }
    Ok(url.to_string())
}

pub struct Map {
    pub initial_region: MapRegion,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, map } = from;

        let raw::Api {
            url,
            request_timeout,
        } = api.unwrap_or_default();
        let api = Api {
            url: normalize_api_url(&url)?,
            request_timeout,
        };

        let raw::Map {
            center,
            lat_delta,
            lng_delta,
        } = map.unwrap_or_default();
        let center = MapPoint::try_from_lat_lng_deg(center.lat, center.lng)
            .ok_or_else(|| anyhow!("Invalid map center"))?;
        let initial_region = MapRegion {
            center,
            lat_delta,
            lng_delta,
        };
        if !initial_region.is_valid() {
            return Err(anyhow!("Invalid map region: {initial_region:?}"));
        }
        let map = Map { initial_region };

        Ok(Self { api, map })
    }
}
