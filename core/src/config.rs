//! Provider configuration: declared values merged with the environment.
//!
//! # Resolution
//! 1. Any declared value still `Unknown` is reported and resolution stops
//!    before the environment is consulted.
//! 2. Each field takes its declared value when one is present, otherwise the
//!    matching `CUSTOM_EXAMPLE_*` environment variable.
//! 3. Every field that is still empty is reported; resolution succeeds only
//!    when all three are non-empty.
//!
//! The environment is an injected [`Environment`] so callers and tests never
//! depend on process state.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::ErrorKind;

pub const USERNAME_ENV: &str = "CUSTOM_EXAMPLE_USERNAME";
pub const PASSWORD_ENV: &str = "CUSTOM_EXAMPLE_PASSWORD";
pub const BASEURL_ENV: &str = "CUSTOM_EXAMPLE_BASEURL";

/// A declared configuration value as the orchestrator sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum ConfigValue {
    /// Not resolvable yet; it may still change during planning.
    Unknown,
    /// Not declared.
    #[default]
    Null,
    /// Declared, possibly empty.
    Known(String),
}

impl ConfigValue {
    pub fn known(value: impl Into<String>) -> Self {
        ConfigValue::Known(value.into())
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ConfigValue::Unknown)
    }
}

impl From<Option<String>> for ConfigValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(ConfigValue::Null, ConfigValue::Known)
    }
}

/// Declared provider configuration, before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeclaredConfig {
    pub username: ConfigValue,
    pub password: ConfigValue,
    pub baseurl: ConfigValue,
}

/// Key-value lookup standing in for the process environment.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Fully resolved configuration; every field is non-empty.
///
/// Immutable once built. The password is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    username: String,
    password: String,
    baseurl: String,
}

impl ProviderConfig {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn baseurl(&self) -> &str {
        &self.baseurl
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("baseurl", &self.baseurl)
            .finish()
    }
}

struct Field {
    attribute: &'static str,
    label: &'static str,
    env_var: &'static str,
}

const USERNAME: Field = Field {
    attribute: "username",
    label: "Username",
    env_var: USERNAME_ENV,
};
const PASSWORD: Field = Field {
    attribute: "password",
    label: "Password",
    env_var: PASSWORD_ENV,
};
const BASEURL: Field = Field {
    attribute: "baseurl",
    label: "baseurl",
    env_var: BASEURL_ENV,
};

/// Merge `declared` with `env` into a [`ProviderConfig`].
///
/// Returns every problem found in the failing phase, never only the first.
pub fn resolve<E: Environment + ?Sized>(
    declared: &DeclaredConfig,
    env: &E,
) -> Result<ProviderConfig, Diagnostics> {
    let [username, password, baseurl] = settle(declared)?;
    let username = lookup(&USERNAME, username, env);
    let password = lookup(&PASSWORD, password, env);
    let baseurl = lookup(&BASEURL, baseurl, env);

    let mut diags = Diagnostics::new();
    for (field, value) in [(&USERNAME, &username), (&PASSWORD, &password), (&BASEURL, &baseurl)] {
        if value.is_empty() {
            diags.push(Diagnostic::attribute_error(
                ErrorKind::Configuration,
                field.attribute,
                format!("Missing {}", field.label),
                format!(
                    "The provider cannot create the todo client as there is a missing or empty \
                     value for the {}. Set it in the provider configuration or use the {} \
                     environment variable.",
                    field.label, field.env_var
                ),
            ));
        }
    }
    if diags.has_error() {
        return Err(diags);
    }

    Ok(ProviderConfig {
        username,
        password,
        baseurl,
    })
}

/// Declared values with every `Unknown` rejected: `None` means "not
/// declared", `Some` is the declared value.
fn settle(declared: &DeclaredConfig) -> Result<[Option<&str>; 3], Diagnostics> {
    let mut diags = Diagnostics::new();
    let settled = [
        (&USERNAME, &declared.username),
        (&PASSWORD, &declared.password),
        (&BASEURL, &declared.baseurl),
    ]
    .map(|(field, value)| match value {
        ConfigValue::Unknown => {
            diags.push(Diagnostic::attribute_error(
                ErrorKind::Configuration,
                field.attribute,
                format!("Unknown {} value", field.label),
                format!(
                    "The provider cannot create the todo client as there is an unknown \
                     configuration value for the {}.",
                    field.label
                ),
            ));
            None
        }
        ConfigValue::Null => Some(None),
        ConfigValue::Known(v) => Some(Some(v.as_str())),
    });

    match settled {
        [Some(username), Some(password), Some(baseurl)] => Ok([username, password, baseurl]),
        _ => Err(diags),
    }
}

fn lookup<E: Environment + ?Sized>(field: &Field, declared: Option<&str>, env: &E) -> String {
    match declared {
        Some(value) => value.to_string(),
        None => env.var(field.env_var).unwrap_or_default(),
    }
}
