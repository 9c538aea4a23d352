//! Reallocation diagnostics go through the `log` facade.

use std::sync::Mutex;
use std::thread::{self, ThreadId};

use keel_vector::DynamicArray;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Capture {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push((thread::current().id(), record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

/// Install the capturing logger and return every record this thread has
/// logged so far.
fn records() -> Vec<(Level, String)> {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Trace);
    let me = thread::current().id();
    CAPTURE
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(id, _, _)| *id == me)
        .map(|(_, level, msg)| (*level, msg.clone()))
        .collect()
}

#[test]
fn growth_is_traced() {
    let mark = records().len();
    let mut array = DynamicArray::new();
    for i in 0..3 {
        array.push(i);
    }
    let seen = records().split_off(mark);
    assert_eq!(
        seen,
        [(Level::Trace, "reallocating from 2 to 3 slots (2 live)".to_string())]
    );
}

#[test]
fn downsizing_is_reported_at_debug() {
    let mark = records().len();
    let mut array = DynamicArray::from([1, 2, 3, 4, 5]);
    array.reallocate(2);
    let seen = records().split_off(mark);
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, Level::Trace);
    assert_eq!(
        seen[1],
        (
            Level::Debug,
            "downsizing to 2 slots drops 3 trailing elements".to_string()
        )
    );
    assert_eq!(array, [1, 2]);
}

#[test]
fn appends_within_capacity_are_silent() {
    let mark = records().len();
    let mut array = DynamicArray::with_capacity(8);
    for i in 0..8u8 {
        array.push(i);
    }
    assert_eq!(records().len(), mark);
}
