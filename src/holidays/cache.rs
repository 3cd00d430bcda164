//! Local JSON holiday cache.
//!
//! One file per year, `holiday_cache_<year>.json`, holding the holiday map
//! together with a schema version and the time it was written.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayMap, HolidaySource};

use super::HolidayProvider;

/// Schema version written to and required from cache files.
pub const CACHE_VERSION: u32 = 1;

/// Write time recorded in a cache file.
///
/// Files written by this crate carry an RFC 3339 timestamp. Older cache files
/// carry a local timestamp without an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FetchedAt {
    /// Timestamp with a UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Local timestamp with no offset.
    Naive(NaiveDateTime),
}

impl fmt::Display for FetchedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchedAt::Zoned(at) => write!(f, "{}", at.to_rfc3339()),
            FetchedAt::Naive(at) => write!(f, "{}", at),
        }
    }
}

/// On-disk layout of a cache file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedHolidays {
    /// Schema version of the file.
    pub version: u32,
    /// The year the holidays belong to.
    pub year: i32,
    /// Region the holidays were collected for.
    pub state: String,
    /// When the file was written, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<FetchedAt>,
    /// Date to holiday label.
    pub holidays: HolidayMap,
}

/// A directory of per-year holiday cache files.
///
/// # Example
///
/// ```no_run
/// use reimbursement_engine::holidays::{HolidayCache, HolidayProvider};
///
/// let cache = HolidayCache::new("./cache", "Sabah");
/// let holidays = cache.holidays_for_year(2026)?;
/// println!("{} holidays cached for 2026", holidays.len());
/// # Ok::<(), reimbursement_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCache {
    dir: PathBuf,
    state: String,
}

impl HolidayCache {
    /// Creates a cache rooted at `dir` for the given region.
    pub fn new(dir: impl Into<PathBuf>, state: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            state: state.into(),
        }
    }

    /// Path of the cache file for `year`.
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("holiday_cache_{}.json", year))
    }

    /// Loads and validates the cache file for `year`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::CacheNotFound`] if no file exists
    /// - [`EngineError::CacheParseError`] if the file is not valid cache JSON
    /// - [`EngineError::CacheRejected`] if the version or year does not match
    pub fn load(&self, year: i32) -> EngineResult<CachedHolidays> {
        let path = self.path_for(year);
        let path_str = path.display().to_string();

        let content = fs::read_to_string(&path).map_err(|_| EngineError::CacheNotFound {
            path: path_str.clone(),
        })?;

        let cached: CachedHolidays =
            serde_json::from_str(&content).map_err(|e| EngineError::CacheParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        if cached.version != CACHE_VERSION {
            return Err(EngineError::CacheRejected {
                path: path_str,
                reason: format!(
                    "cache version {} does not match {}",
                    cached.version, CACHE_VERSION
                ),
            });
        }
        if cached.year != year {
            return Err(EngineError::CacheRejected {
                path: path_str,
                reason: format!("cache holds year {}, expected {}", cached.year, year),
            });
        }

        let fetched_at = cached
            .fetched_at
            .map_or_else(|| "unknown".to_string(), |at| at.to_string());
        debug!(
            path = %path_str,
            year,
            holidays = cached.holidays.len(),
            fetched_at = %fetched_at,
            "Loaded holiday cache"
        );
        Ok(cached)
    }

    /// Writes `holidays` as the cache file for `year`, returning its path.
    pub fn store(&self, year: i32, holidays: &HolidayMap) -> EngineResult<PathBuf> {
        let path = self.path_for(year);
        let cached = CachedHolidays {
            version: CACHE_VERSION,
            year,
            state: self.state.clone(),
            fetched_at: Some(FetchedAt::Zoned(Utc::now().fixed_offset())),
            holidays: holidays.clone(),
        };

        write_json(&path, &cached)?;
        debug!(path = %path.display(), year, holidays = holidays.len(), "Stored holiday cache");
        Ok(path)
    }
}

fn write_json(path: &Path, cached: &CachedHolidays) -> EngineResult<()> {
    let write_error = |message: String| EngineError::CacheWriteError {
        path: path.display().to_string(),
        message,
    };

    let json = serde_json::to_string_pretty(cached).map_err(|e| write_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| write_error(e.to_string()))
}

impl HolidayProvider for HolidayCache {
    fn holidays_for_year(&self, year: i32) -> EngineResult<HolidayMap> {
        self.load(year).map(|cached| cached.holidays)
    }

    fn source(&self) -> HolidaySource {
        HolidaySource::Cache
    }
}
