#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use rusty_scorecard::model::{Course, HoleMap, HoleResult};
use rusty_scorecard::storage::{MemoryStore, PersistenceGateway, StorageError};

/// Gateway that fails reads, writes, or both. Successful calls fall through
/// to an inner `MemoryStore` so partially failing setups still hold data.
#[derive(Default)]
pub struct FailingStore {
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub inner: MemoryStore,
    pub save_attempts: AtomicUsize,
}

impl FailingStore {
    pub fn reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn save_attempts(&self) -> usize {
        self.save_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersistenceGateway for FailingStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::new(format!("read of {key} refused")));
        }
        self.inner.load(key).await
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.save_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StorageError::new(format!("write of {key} refused")));
        }
        self.inner.save(key, blob).await
    }
}

pub fn result(strokes: i32, putts: i32) -> HoleResult {
    HoleResult {
        strokes,
        putts,
        sand_save: false,
        up_down: false,
        penalty_strokes: 0,
        fairway_hit: false,
        green_in_regulation: false,
    }
}

/// Holes 1.. recorded with the given stroke counts and two putts each.
pub fn holes_with_strokes(strokes: &[i32]) -> HoleMap {
    (1u8..)
        .zip(strokes.iter())
        .map(|(hole, &s)| (hole, result(s, 2.min(s))))
        .collect()
}

/// Every hole of `course` recorded at `par + over`.
pub fn full_round(course: &Course, over: i32) -> HoleMap {
    course
        .holes()
        .map(|(number, hole)| (number, result(hole.par + over, 2)))
        .collect()
}

/// Front nine of the built-in course, 41 strokes against par 36.
pub const FRONT_NINE_41: [i32; 9] = [5, 4, 5, 4, 5, 3, 5, 6, 4];
