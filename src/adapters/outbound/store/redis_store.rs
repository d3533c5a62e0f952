use crate::config::RedisConfig;
use crate::errata::domain::Advisory;
use crate::ports::outbound::{AdvisoryStore, CHECKPOINT_KEY};
use crate::shared::error::ErrataError;
use crate::shared::Result;
use std::cell::RefCell;

/// Number of keys requested from Redis per SCAN round trip
const SCAN_BATCH_SIZE: usize = 1000;

/// RedisAdvisoryStore adapter for the advisory cache
///
/// Each advisory is a JSON document stored as a plain string value under its
/// id. The checkpoint lives under [`CHECKPOINT_KEY`] in the same database.
pub struct RedisAdvisoryStore {
    connection: RefCell<redis::Connection>,
}

impl RedisAdvisoryStore {
    pub fn connect(config: &RedisConfig) -> Result<Self> {
        let url = connection_url(config);
        let connection = redis::Client::open(url.as_str())
            .and_then(|client| client.get_connection())
            .map_err(|e| store_error("connect", e))?;

        tracing::debug!(server = %config.server, port = config.port, db = config.db, "connected to advisory store");
        Ok(Self {
            connection: RefCell::new(connection),
        })
    }
}

fn connection_url(config: &RedisConfig) -> String {
    format!("redis://{}:{}/{}", config.server, config.port, config.db)
}

fn store_error(operation: &str, error: impl std::fmt::Display) -> ErrataError {
    ErrataError::Store {
        operation: operation.to_string(),
        details: error.to_string(),
    }
}

fn encode(advisory: &Advisory) -> Result<String> {
    serde_json::to_string(advisory).map_err(|e| store_error("encode", e).into())
}

fn decode(id: &str, value: &str) -> Result<Advisory> {
    serde_json::from_str(value)
        .map_err(|e| store_error("decode", format!("{}: {}", id, e)).into())
}

/// Builds a SCAN MATCH pattern that treats `prefix` literally
fn match_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('*');
    pattern
}

impl AdvisoryStore for RedisAdvisoryStore {
    fn get(&self, id: &str) -> Result<Option<Advisory>> {
        let value: Option<String> = redis::cmd("GET")
            .arg(id)
            .query(&mut *self.connection.borrow_mut())
            .map_err(|e| store_error("GET", e))?;
        value.map(|value| decode(id, &value)).transpose()
    }

    fn contains(&self, id: &str) -> Result<bool> {
        let exists: bool = redis::cmd("EXISTS")
            .arg(id)
            .query(&mut *self.connection.borrow_mut())
            .map_err(|e| store_error("EXISTS", e))?;
        Ok(exists)
    }

    fn put(&self, advisory: &Advisory) -> Result<()> {
        let value = encode(advisory)?;
        redis::cmd("SET")
            .arg(advisory.id())
            .arg(value)
            .query::<()>(&mut *self.connection.borrow_mut())
            .map_err(|e| store_error("SET", e))?;
        Ok(())
    }

    fn scan(&self, prefix: &str) -> Result<Vec<String>> {
        let pattern = match_pattern(prefix);
        let mut connection = self.connection.borrow_mut();
        let mut ids = Vec::new();
        let mut cursor: u64 = 0;

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH_SIZE)
                .query(&mut *connection)
                .map_err(|e| store_error("SCAN", e))?;
            ids.extend(batch.into_iter().filter(|key| key != CHECKPOINT_KEY));
            if next == 0 {
                break;
            }
            cursor = next;
        }

        // SCAN may return a key more than once
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    fn checkpoint(&self) -> Result<Option<String>> {
        let value: Option<String> = redis::cmd("GET")
            .arg(CHECKPOINT_KEY)
            .query(&mut *self.connection.borrow_mut())
            .map_err(|e| store_error("GET", e))?;
        Ok(value)
    }

    fn set_checkpoint(&self, digest: &str) -> Result<()> {
        redis::cmd("SET")
            .arg(CHECKPOINT_KEY)
            .arg(digest)
            .query::<()>(&mut *self.connection.borrow_mut())
            .map_err(|e| store_error("SET", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errata::domain::AdvisoryBuilder;

    fn advisory() -> Advisory {
        let mut builder = AdvisoryBuilder::new("CESA-2019:1234");
        builder
            .synopsis("Important: foo security update")
            .issue_date("2019-05-14 09:23:35")
            .advisory_type("Security Advisory")
            .contact_email("centos-announce@centos.org")
            .release("1")
            .add_reference("https://access.redhat.com/errata/RHSA-2019:1234")
            .add_os_release(7)
            .add_package("foo-1.0-1.el7.x86_64.rpm")
            .add_package("foo-1.0-1.el7.src.rpm");
        builder.build().unwrap()
    }

    #[test]
    fn test_connection_url() {
        let config = RedisConfig {
            server: "cache.example.com".to_string(),
            port: 6380,
            db: 3,
        };
        assert_eq!(connection_url(&config), "redis://cache.example.com:6380/3");
    }

    #[test]
    fn test_encoded_advisory_decodes_to_equal_value() {
        let original = advisory();
        let encoded = encode(&original).unwrap();
        let decoded = decode(original.id(), &encoded).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(
            decoded.packages_for_os_release(7).unwrap(),
            &["foo-1.0-1.el7.x86_64.rpm".to_string()]
        );
    }

    #[test]
    fn test_encoded_form_keeps_empty_sequences() {
        let mut builder = AdvisoryBuilder::new("CEBA-2019:0001");
        builder
            .synopsis("bar bugfix update")
            .issue_date("2019-01-01")
            .advisory_type("Bug Fix Advisory")
            .contact_email("centos-announce@centos.org")
            .release("1");
        let encoded = encode(&builder.build().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["references"], serde_json::json!([]));
        assert_eq!(value["os_releases"], serde_json::json!([]));
        assert_eq!(value["packages_by_os_release"], serde_json::json!({}));
    }

    #[test]
    fn test_decode_rejects_corrupt_value() {
        let err = decode("CESA-2019:1234", "{not json").unwrap_err();
        assert!(err.to_string().contains("'decode' failed"));
        assert!(err.to_string().contains("CESA-2019:1234"));
    }

    #[test]
    fn test_match_pattern_escapes_glob_characters() {
        assert_eq!(match_pattern("CE"), "CE*");
        assert_eq!(match_pattern("a*b?[c]"), "a\\*b\\?\\[c\\]*");
    }

    #[test]
    fn test_connect_to_unreachable_server_is_store_error() {
        let config = RedisConfig {
            server: "127.0.0.1".to_string(),
            port: 1,
            db: 0,
        };
        let err = RedisAdvisoryStore::connect(&config).err().unwrap();
        assert!(err.to_string().contains("Advisory store operation 'connect' failed"));
    }
}
