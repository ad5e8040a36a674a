//! Reading recorded test runs
//!
//! Results arrive as a subunit v2 stream, usually piped from a test runner
//! or read back from a file. Each terminal test event becomes one
//! [`TestResult`], yielded in the order the stream completes them.

use crate::error::{Error, Result};
use crate::results::TestResult;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::io::Read;
use subunit::io::sync::iter_stream;
use subunit::types::stream::ScannedItem;
use subunit::types::teststatus::TestStatus as SubunitTestStatus;
use subunit::types::timestamp::Timestamp;
use tracing::{debug, warn};

/// Maximum number of consecutive parse errors before giving up on the stream
const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// How a terminal subunit status maps onto a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Verdict {
    passed: bool,
    skipped: bool,
}

/// Map a subunit status to a verdict (None for non-terminal states)
fn convert_subunit_status(status: SubunitTestStatus) -> Option<Verdict> {
    let verdict = |passed, skipped| Some(Verdict { passed, skipped });
    match status {
        SubunitTestStatus::Success | SubunitTestStatus::ExpectedFailure => verdict(true, false),
        SubunitTestStatus::Failed | SubunitTestStatus::UnexpectedSuccess => verdict(false, false),
        SubunitTestStatus::Skipped => verdict(false, true),
        SubunitTestStatus::Undefined
        | SubunitTestStatus::Enumeration
        | SubunitTestStatus::InProgress => None,
    }
}

/// Convert a subunit timestamp to a chrono DateTime with error context
fn convert_timestamp(timestamp: Timestamp, context: &str) -> Result<DateTime<Utc>> {
    timestamp
        .try_into()
        .map_err(|e| Error::Subunit(format!("Invalid timestamp in {}: {}", context, e)))
}

/// Whole milliseconds between two instants; 0 when negative.
fn elapsed_millis(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    u64::try_from((end - start).num_milliseconds()).unwrap_or(0)
}

/// Call `callback` with every completed test in the stream, in order.
///
/// Start events only record a timestamp; a result's duration is the gap
/// between its start and terminal events, or 0 if either is missing. File
/// attachments sent before the terminal event are collected into the
/// result's details. Undecodable data is skipped, up to
/// `MAX_CONSECUTIVE_ERRORS` items in a row.
///
/// Returns the number of results passed to `callback`.
pub fn for_each_result<R, F>(reader: R, mut callback: F) -> Result<usize>
where
    R: Read,
    F: FnMut(TestResult) -> Result<()>,
{
    let mut start_times: HashMap<String, DateTime<Utc>> = HashMap::new();
    let mut attachments: HashMap<String, Vec<String>> = HashMap::new();
    let mut consecutive_errors = 0;
    let mut count = 0;

    for item in iter_stream(reader) {
        let event = match item {
            Ok(ScannedItem::Event(event)) => {
                consecutive_errors = 0;
                event
            }
            Ok(ScannedItem::Bytes(_)) => {
                // Interleaved non-subunit output
                consecutive_errors = 0;
                continue;
            }
            Ok(ScannedItem::Unknown(_, _)) | Err(_) => {
                consecutive_errors += 1;
                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    warn!(
                        collected = count,
                        "too many consecutive undecodable items, stopping early"
                    );
                    break;
                }
                continue;
            }
        };

        let Some(ref test_id) = event.test_id else {
            continue;
        };

        if event.status == SubunitTestStatus::InProgress {
            if let Some(timestamp) = event.timestamp {
                start_times.insert(test_id.clone(), convert_timestamp(timestamp, "start event")?);
            }
            continue;
        }

        if event.status == SubunitTestStatus::Undefined {
            if let Some((_, content)) = &event.file.file {
                attachments
                    .entry(test_id.clone())
                    .or_default()
                    .push(String::from_utf8_lossy(content).into_owned());
            }
            continue;
        }

        let Some(verdict) = convert_subunit_status(event.status) else {
            continue;
        };

        let mut parts = attachments.remove(test_id).unwrap_or_default();
        if let Some((_, content)) = &event.file.file {
            parts.push(String::from_utf8_lossy(content).into_owned());
        }
        let details = (!parts.is_empty()).then(|| parts.concat());
        let message = details
            .as_deref()
            .and_then(|d| d.lines().find(|l| !l.trim().is_empty()))
            .map(|l| l.trim().to_string());

        let run_duration = match (start_times.remove(test_id), event.timestamp) {
            (Some(start), Some(end)) => elapsed_millis(start, convert_timestamp(end, "end event")?),
            _ => 0,
        };

        let mut result = if verdict.skipped {
            TestResult::skipped(test_id.as_str())
        } else if verdict.passed {
            TestResult::passed(test_id.as_str())
        } else {
            TestResult::failed(test_id.as_str())
        }
        .with_duration(run_duration);
        if let Some(message) = message {
            result = result.with_message(message);
        }
        if let Some(details) = details {
            result = result.with_details(details);
        }

        count += 1;
        callback(result)?;
    }

    debug!(results = count, "finished reading subunit stream");
    Ok(count)
}

/// Collect every completed test in the stream, in completion order.
///
/// If the stream is incomplete or interrupted, returns the results read
/// before the damage.
pub fn parse_stream<R: Read>(reader: R) -> Result<Vec<TestResult>> {
    let mut results = Vec::new();
    for_each_result(reader, |result| {
        results.push(result);
        Ok(())
    })?;
    Ok(results)
}
