use crate::config::StoreConfig;
use crate::error::{decode_error, encode_error, map_join_error, map_redb_error, Result};
use async_trait::async_trait;
use linkvault_core::{
    CreateError, LinkRecord, LinkStore, LookupError, RequestedIdentifier, ShortCode,
    StorageError,
};
use linkvault_generator::{custom_code, Generator, RandomGenerator};
use redb::{Database, DatabaseError, ReadOnlyTable, ReadableTable, Table, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info, trace, warn};

/// Upper bound on candidates drawn for one generated identifier.
///
/// With at least 64^8 possible codes this is never reached in practice; it
/// only keeps a broken generator from spinning inside the write transaction.
pub const MAX_GENERATION_ATTEMPTS: usize = 1024;

const OPEN_RETRY_INTERVAL: Duration = Duration::from_millis(25);

type LinkTable<'txn> = Table<'txn, &'static str, &'static [u8]>;
type ReadOnlyLinkTable = ReadOnlyTable<&'static str, &'static [u8]>;

fn link_table(bucket: &str) -> TableDefinition<'_, &'static str, &'static [u8]> {
    TableDefinition::new(bucket)
}

/// redb implementation of the [`LinkStore`] contract.
///
/// Records are JSON documents keyed by identifier in a single table. Every
/// mutation is one redb write transaction; redb admits one writer at a time,
/// which makes check-then-write sequences atomic. Reads run on snapshot
/// transactions and never wait for writers.
///
/// The handle is cheap to clone and all clones share the same database.
pub struct RedbLinkStore<G = RandomGenerator> {
    db: Arc<Database>,
    bucket: Arc<str>,
    generator: Arc<G>,
    // Bounds the wait for redb's writer slot, which has no timeout of its own.
    writer: Arc<Mutex<()>>,
    lock_timeout: Duration,
}

impl<G> Clone for RedbLinkStore<G> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            bucket: Arc::clone(&self.bucket),
            generator: Arc::clone(&self.generator),
            writer: Arc::clone(&self.writer),
            lock_timeout: self.lock_timeout,
        }
    }
}

impl<G> std::fmt::Debug for RedbLinkStore<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbLinkStore")
            .field("bucket", &self.bucket)
            .field("lock_timeout", &self.lock_timeout)
            .finish_non_exhaustive()
    }
}

impl RedbLinkStore<RandomGenerator> {
    /// Opens (or creates) the store with the random identifier generator.
    pub async fn open(config: StoreConfig) -> Result<Self> {
        Self::open_with_generator(config, RandomGenerator).await
    }
}

impl<G: Generator> RedbLinkStore<G> {
    /// Opens (or creates) the store file and makes sure the bucket exists.
    ///
    /// If another process holds the file, opening is retried until
    /// `config.open_timeout` runs out.
    pub async fn open_with_generator(config: StoreConfig, generator: G) -> Result<Self> {
        let StoreConfig {
            path,
            bucket,
            open_timeout,
            lock_timeout,
        } = config;
        let bucket: Arc<str> = Arc::from(bucket);

        let db = {
            let bucket = Arc::clone(&bucket);
            let path = path.clone();
            tokio::task::spawn_blocking(move || {
                let db = open_database(&path, open_timeout)?;
                let txn = db.begin_write().map_err(map_redb_error)?;
                txn.open_table(link_table(&bucket))
                    .map_err(map_redb_error)?;
                txn.commit().map_err(map_redb_error)?;
                Ok::<_, StorageError>(db)
            })
            .await
            .map_err(map_join_error)??
        };

        info!(path = %path.display(), bucket = %bucket, "opened link store");

        Ok(Self {
            db: Arc::new(db),
            bucket,
            generator: Arc::new(generator),
            writer: Arc::new(Mutex::new(())),
            lock_timeout,
        })
    }

    /// Runs `op` inside one write transaction and commits if it succeeds.
    ///
    /// The writer gate is acquired before the blocking task starts, so a
    /// caller that times out never leaves a transaction behind.
    async fn write<T, E, F>(&self, op: F) -> std::result::Result<T, E>
    where
        T: Send + 'static,
        E: From<StorageError> + Send + 'static,
        F: FnOnce(&mut LinkTable<'_>) -> std::result::Result<T, E> + Send + 'static,
    {
        let gate = Arc::clone(&self.writer).lock_owned();
        let permit = tokio::time::timeout(self.lock_timeout, gate)
            .await
            .map_err(|_| {
                StorageError::Timeout(format!(
                    "write transaction not started within {:?}",
                    self.lock_timeout
                ))
            })?;

        let db = Arc::clone(&self.db);
        let bucket = Arc::clone(&self.bucket);
        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let txn = db.begin_write().map_err(map_redb_error)?;
            let output = {
                let mut table = txn.open_table(link_table(&bucket)).map_err(map_redb_error)?;
                op(&mut table)?
            };
            txn.commit().map_err(map_redb_error)?;
            Ok::<T, E>(output)
        })
        .await
        .map_err(|e| E::from(map_join_error(e)))?
    }

    /// Runs `op` against a read-only snapshot of the bucket.
    async fn read<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&ReadOnlyLinkTable) -> Result<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let bucket = Arc::clone(&self.bucket);
        tokio::task::spawn_blocking(move || {
            let txn = db.begin_read().map_err(map_redb_error)?;
            let table = txn.open_table(link_table(&bucket)).map_err(map_redb_error)?;
            op(&table)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn open_database(path: &Path, open_timeout: Duration) -> Result<Database> {
    let started = Instant::now();
    loop {
        match Database::create(path) {
            Ok(db) => return Ok(db),
            Err(DatabaseError::DatabaseAlreadyOpen) if started.elapsed() < open_timeout => {
                std::thread::sleep(OPEN_RETRY_INTERVAL);
            }
            Err(err) => return Err(map_redb_error(err)),
        }
    }
}

fn read_record<T>(table: &T, key: &str) -> Result<Option<LinkRecord>>
where
    T: ReadableTable<&'static str, &'static [u8]>,
{
    let Some(guard) = table.get(key).map_err(map_redb_error)? else {
        return Ok(None);
    };
    serde_json::from_slice(guard.value())
        .map(Some)
        .map_err(|e| decode_error(key, e))
}

fn contains(table: &LinkTable<'_>, key: &str) -> Result<bool> {
    Ok(table.get(key).map_err(map_redb_error)?.is_some())
}

fn put_record(table: &mut LinkTable<'_>, record: &LinkRecord) -> Result<()> {
    let bytes = serde_json::to_vec(record).map_err(encode_error)?;
    table
        .insert(record.code.as_str(), bytes.as_slice())
        .map_err(map_redb_error)?;
    Ok(())
}

#[async_trait]
impl<G: Generator> LinkStore for RedbLinkStore<G> {
    async fn create(
        &self,
        destination: &str,
        requested: RequestedIdentifier,
    ) -> std::result::Result<ShortCode, CreateError> {
        let destination = destination.to_owned();

        match requested {
            RequestedIdentifier::Custom(id) => {
                let code = custom_code(&id)?;
                let created = self
                    .write(move |table| {
                        if contains(table, code.as_str())? {
                            return Err(CreateError::AlreadyExists(code.into_string()));
                        }
                        put_record(table, &LinkRecord::new(code.clone(), destination))?;
                        Ok(code)
                    })
                    .await?;
                debug!(code = %created, "created link with custom id");
                Ok(created)
            }
            RequestedIdentifier::Generated(strength) => {
                let generator = Arc::clone(&self.generator);
                let created = self
                    .write(move |table| {
                        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
                            let code = generator.generate(strength);
                            if !contains(table, code.as_str())? {
                                put_record(table, &LinkRecord::new(code.clone(), destination))?;
                                return Ok(code);
                            }
                            warn!(code = %code, attempt, "generated id already taken, drawing again");
                        }
                        Err(CreateError::Exhausted {
                            attempts: MAX_GENERATION_ATTEMPTS,
                        })
                    })
                    .await?;
                debug!(code = %created, strength = %strength, "created link");
                Ok(created)
            }
        }
    }

    async fn get(&self, code: &ShortCode) -> std::result::Result<String, LookupError> {
        self.find(code).await.map(|record| record.destination)
    }

    async fn find(&self, code: &ShortCode) -> std::result::Result<LinkRecord, LookupError> {
        trace!(code = %code, "looking up link");
        let key = code.clone();
        self.read(move |table| read_record(table, key.as_str()))
            .await?
            .ok_or_else(|| LookupError::NotFound(code.to_string()))
    }

    async fn increment_clicks(&self, code: &ShortCode) -> Result<()> {
        let key = code.clone();
        self.write(move |table| {
            let Some(mut record) = read_record(&*table, key.as_str())? else {
                trace!(code = %key, "click on missing link ignored");
                return Ok(());
            };
            record.clicks = record.clicks.saturating_add(1);
            put_record(table, &record)
        })
        .await
    }

    async fn delete(&self, code: &ShortCode) -> std::result::Result<(), LookupError> {
        let key = code.clone();
        self.write(move |table| {
            let removed = table
                .remove(key.as_str())
                .map_err(map_redb_error)?
                .is_some();
            if removed {
                Ok(())
            } else {
                Err(LookupError::NotFound(key.into_string()))
            }
        })
        .await?;
        debug!(code = %code, "deleted link");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<LinkRecord>> {
        self.read(|table| {
            let mut records = Vec::new();
            for entry in table.iter().map_err(map_redb_error)? {
                let (key, value) = entry.map_err(map_redb_error)?;
                let record: LinkRecord = serde_json::from_slice(value.value())
                    .map_err(|e| decode_error(key.value(), e))?;
                records.push(record);
            }
            Ok(records)
        })
        .await
    }
}
