//! The service address the test suite talks to, read once from the environment.
//!
//! Consumers normally build a [`Configuration`] at startup and pass it by
//! reference. [`instance`] remains for callers that want a single
//! process-wide copy.
use std::{
    env::{var, VarError},
    sync::LazyLock,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    constants::{api, env},
    errors::ConfigError,
};

/// Where the storage service under test can be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ServiceAddress", into = "ServiceAddress")]
pub struct Configuration {
    /// `http://` followed by the value of `HOST_IP`.
    base_url: String,
    /// Port segment used by bucket endpoints (raw `PORT`).
    port: String,
    /// Port segment used by tenant-scoped endpoints (raw `PORT_TENANT_ID`).
    tenant_port: String,
}

/// Serialized form of [`Configuration`]. Deserialization goes through
/// [`Configuration::new`] so `base_url` is always derived from the host.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ServiceAddress {
    host: String,
    port: String,
    tenant_port: String,
}

impl From<ServiceAddress> for Configuration {
    fn from(address: ServiceAddress) -> Self {
        Self::new(&address.host, &address.port, &address.tenant_port)
    }
}

impl From<Configuration> for ServiceAddress {
    fn from(config: Configuration) -> Self {
        Self {
            host: config.host().to_owned(),
            port: config.port,
            tenant_port: config.tenant_port,
        }
    }
}

static INSTANCE: LazyLock<Configuration> = LazyLock::new(Configuration::from_env);

/// Get the process-wide configuration, loading it permissively from the
/// environment on first use. Logs the separator line on every call.
pub fn instance() -> &'static Configuration {
    log_separator();
    LazyLock::force(&INSTANCE)
}

/// Log the diagnostic separator line.
pub fn log_separator() {
    info!("{}", api::SEPARATOR);
}

impl Configuration {
    /// Construct a configuration from a host and the two port segments.
    pub fn new(host: &str, port: &str, tenant_port: &str) -> Self {
        Self {
            base_url: format!("{}{host}", api::SCHEME_PREFIX),
            port: port.to_owned(),
            tenant_port: tenant_port.to_owned(),
        }
    }

    /// Load from the process environment. Unset or non-unicode variables
    /// become empty strings and are carried into the URLs as such.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| var(name).ok())
    }

    /// Load using an arbitrary variable lookup, substituting empty strings
    /// for anything the lookup does not provide.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).unwrap_or_default();
        let config = Self::new(&get(env::HOST_IP), &get(env::PORT), &get(env::PORT_TENANT_ID));
        debug!(
            base_url = %config.base_url,
            port = %config.port,
            tenant_port = %config.tenant_port,
            "Loaded service address"
        );
        config
    }

    /// Load from the process environment, failing if any variable is missing,
    /// a port segment is malformed, or the resulting URLs do not parse.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_lookup(|name| var(name))
    }

    /// Strict counterpart of [`Configuration::from_lookup`].
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let config = Self::load_strict(lookup).inspect_err(|err| {
            warn!("Rejected service address from environment: {err}");
        })?;
        debug!(base_url = %config.base_url, "Loaded and validated service address");
        Ok(config)
    }

    fn load_strict<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let get = |name: &'static str| match lookup(name) {
            Ok(value) if !value.is_empty() => Ok(value),
            Ok(_) | Err(VarError::NotPresent) => Err(ConfigError::Missing(name)),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
        };
        let config = Self::new(&get(env::HOST_IP)?, &get(env::PORT)?, &get(env::PORT_TENANT_ID)?);
        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is an absolute URL and that each port segment
    /// is `:` followed by a port number which, appended to the base URL,
    /// still parses.
    fn validate(&self) -> Result<(), ConfigError> {
        parse_url(&self.base_url)?;
        for (name, segment) in [(env::PORT, &self.port), (env::PORT_TENANT_ID, &self.tenant_port)] {
            if segment
                .strip_prefix(':')
                .and_then(|number| number.parse::<u16>().ok())
                .is_none()
            {
                return Err(ConfigError::InvalidPortSegment {
                    name,
                    value: segment.clone(),
                });
            }
            parse_url(&format!("{}{segment}", self.base_url))?;
        }
        Ok(())
    }

    /// The host as given in `HOST_IP`.
    fn host(&self) -> &str {
        self.base_url
            .strip_prefix(api::SCHEME_PREFIX)
            .unwrap_or(&self.base_url)
    }

    /// `http://` followed by the host.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Port segment for bucket endpoints.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Port segment for tenant-scoped endpoints.
    pub fn tenant_port(&self) -> &str {
        &self.tenant_port
    }
}

fn parse_url(candidate: &str) -> Result<Url, ConfigError> {
    Url::parse(candidate).map_err(|source| ConfigError::InvalidBaseUrl {
        url: candidate.to_owned(),
        source,
    })
}
