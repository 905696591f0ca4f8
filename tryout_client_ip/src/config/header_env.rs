//! Environment provider for client address settings.
//!
//! Keys registered as header lists are always read as comma-separated names,
//! so `CLIENT_IP_FALLBACK_HEADERS=CF-Connecting-IP` yields a one-element list
//! and `A, B` yields two. A value in brackets is handed to figment's own
//! parser. Every other key is taken verbatim as a trimmed string; header
//! names and the unknown marker are never numbers or booleans.

use figment::providers::Env;
use figment::{
    Metadata, Profile, Provider,
    error::Error,
    util::nest,
    value::{Dict, Map, Value},
};
use uncased::UncasedStr;

/// Prefixed environment provider that knows which keys hold header lists.
#[derive(Clone)]
pub(crate) struct HeaderEnv {
    inner: Env,
    list_keys: &'static [&'static str],
}

impl HeaderEnv {
    pub(crate) fn prefixed(prefix: &str, list_keys: &'static [&'static str]) -> Self {
        Self {
            inner: Env::prefixed(prefix),
            list_keys,
        }
    }

    fn holds_list(&self, key: &UncasedStr) -> bool {
        self.list_keys.iter().any(|name| UncasedStr::new(name) == key)
    }

    fn header_list(raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.starts_with('[') {
            return trimmed
                .parse()
                .unwrap_or_else(|_| Value::from(trimmed.to_owned()));
        }
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| Value::from(name.to_owned()))
            .collect::<Vec<_>>()
            .into()
    }

    fn value_for(&self, key: &UncasedStr, raw: &str) -> Value {
        if self.holds_list(key) {
            Self::header_list(raw)
        } else {
            Value::from(raw.trim().to_owned())
        }
    }
}

impl Provider for HeaderEnv {
    fn metadata(&self) -> Metadata {
        self.inner.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();
        for (key, raw) in self.inner.iter() {
            let value = self.value_for(&key, &raw);
            let Some(nested) = nest(key.as_str(), value).into_dict() else {
                return Err(Error::from(format!(
                    "environment key `{key}` produced a non-object value"
                )));
            };
            dict.extend(nested);
        }
        Ok(self.inner.profile.collect(dict))
    }
}
