//! Runtime configuration loaded via OrthoConfig.
//!
//! [`DatabaseSettings`] reads `DB_*` variables and renders connection URLs for
//! the default and test databases. [`ServerSettings`] reads `APP_*` variables
//! for the listener and error exposure.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use zeroize::{Zeroize, Zeroizing};

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "course_catalog";
const DEFAULT_DB_PORT_TEST: u16 = 5433;
const DEFAULT_DB_NAME_TEST: &str = "course_catalog_test";
const DEFAULT_DB_USER: &str = "api_user";
const DEFAULT_DB_PASSWORD: &str = "postgres";

const DEFAULT_APP_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_APP_PORT: u16 = 3333;

/// Errors raised while interpreting configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The database mode is neither `default` nor `test`.
    #[error("unknown database mode `{0}`; expected `default` or `test`")]
    UnknownDatabaseMode(String),
    /// The database URL could not be assembled from its parts.
    #[error("invalid database {part}: {message}")]
    InvalidDatabaseUrl {
        /// Component that was rejected.
        part: &'static str,
        /// Parser message.
        message: String,
    },
    /// The listener host is not an IP address.
    #[error("invalid listener host `{0}`")]
    InvalidHost(String),
}

/// Which named database to connect to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatabaseMode {
    /// The service database.
    #[default]
    Default,
    /// The isolated test database selected by the `_TEST` overrides.
    Test,
}

impl DatabaseMode {
    /// Select test mode when `test` is set.
    #[must_use]
    pub const fn from_test_flag(test: bool) -> Self {
        if test { Self::Test } else { Self::Default }
    }
}

impl FromStr for DatabaseMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(Self::Default),
            "test" => Ok(Self::Test),
            _ => Err(ConfigError::UnknownDatabaseMode(raw.to_owned())),
        }
    }
}

/// Database connection values.
///
/// Every value may be left unset; ports carry their defaults and the
/// remaining accessors fill in the rest.
#[derive(Clone, Deserialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(prefix = "DB")]
pub struct DatabaseSettings {
    /// Database host.
    pub host: Option<String>,
    /// Database port.
    #[ortho_config(default = DEFAULT_DB_PORT)]
    pub port: u16,
    /// Database name.
    pub name: Option<String>,
    /// Test database host; falls back to `host`.
    pub host_test: Option<String>,
    /// Test database port.
    #[ortho_config(default = DEFAULT_DB_PORT_TEST)]
    pub port_test: u16,
    /// Test database name.
    pub name_test: Option<String>,
    /// Login role shared by both databases.
    pub user: Option<String>,
    /// Password for `user`.
    pub password: Option<String>,
    /// Extra connection parameters as a query string, e.g. `sslmode=require`.
    pub params: Option<String>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_DB_PORT,
            name: None,
            host_test: None,
            port_test: DEFAULT_DB_PORT_TEST,
            name_test: None,
            user: None,
            password: None,
            params: None,
        }
    }
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("host_test", &self.host_test)
            .field("port_test", &self.port_test)
            .field("name_test", &self.name_test)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("params", &self.params)
            .finish()
    }
}

impl DatabaseSettings {
    /// Host for `mode`.
    #[must_use]
    pub fn host(&self, mode: DatabaseMode) -> &str {
        let host = self.host.as_deref().unwrap_or(DEFAULT_DB_HOST);
        match mode {
            DatabaseMode::Default => host,
            DatabaseMode::Test => self.host_test.as_deref().unwrap_or(host),
        }
    }

    /// Port for `mode`.
    #[must_use]
    pub fn port(&self, mode: DatabaseMode) -> u16 {
        match mode {
            DatabaseMode::Default => self.port,
            DatabaseMode::Test => self.port_test,
        }
    }

    /// Database name for `mode`.
    #[must_use]
    pub fn name(&self, mode: DatabaseMode) -> &str {
        match mode {
            DatabaseMode::Default => self.name.as_deref().unwrap_or(DEFAULT_DB_NAME),
            DatabaseMode::Test => self.name_test.as_deref().unwrap_or(DEFAULT_DB_NAME_TEST),
        }
    }

    /// Login role.
    #[must_use]
    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_DB_USER)
    }

    /// Render a percent-encoded `postgres://` URL for `mode`.
    ///
    /// The intermediate password copy is scrubbed, and the returned URL is
    /// scrubbed when dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDatabaseUrl`] when the host cannot form
    /// a URL.
    pub fn database_url(&self, mode: DatabaseMode) -> Result<Zeroizing<String>, ConfigError> {
        let invalid = |part: &'static str| {
            move |err: url::ParseError| ConfigError::InvalidDatabaseUrl {
                part,
                message: err.to_string(),
            }
        };
        let rejected = |part: &'static str| {
            move |()| ConfigError::InvalidDatabaseUrl {
                part,
                message: "rejected by URL encoder".to_owned(),
            }
        };

        let mut url = Url::parse(&format!("postgres://{}", self.host(mode)))
            .map_err(invalid("host"))?;
        url.set_port(Some(self.port(mode)))
            .map_err(rejected("port"))?;
        url.set_username(self.user()).map_err(rejected("user"))?;

        let mut password = self
            .password
            .clone()
            .unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_owned());
        let outcome = url.set_password(Some(&password));
        password.zeroize();
        outcome.map_err(rejected("password"))?;

        url.path_segments_mut()
            .map_err(rejected("name"))?
            .clear()
            .push(self.name(mode));
        let params = self.params.as_deref().map(str::trim).unwrap_or_default();
        if !params.is_empty() {
            url.set_query(Some(params.trim_start_matches('?')));
        }

        Ok(Zeroizing::new(String::from(url)))
    }
}

/// HTTP listener and presentation values.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "APP")]
pub struct ServerSettings {
    /// Listener IP address.
    pub host: Option<String>,
    /// Listener port.
    pub port: Option<u16>,
    /// Echo internal error messages to clients.
    #[ortho_config(default = false)]
    pub debug: bool,
    /// Database selection, `default` or `test`.
    pub db_mode: Option<String>,
}

impl ServerSettings {
    /// Socket address the listener binds to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_APP_HOST,
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw.to_owned()))?,
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_APP_PORT)))
    }

    /// Database mode selected for the service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownDatabaseMode`] for unrecognised values.
    pub fn db_mode(&self) -> Result<DatabaseMode, ConfigError> {
        self.db_mode
            .as_deref()
            .map_or(Ok(DatabaseMode::Default), DatabaseMode::from_str)
    }
}
