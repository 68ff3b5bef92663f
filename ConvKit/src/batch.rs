//! Batch conversion
//!
//! Runs many [`ConversionRequest`]s in parallel. A failing request never
//! aborts the batch; its error message is recorded in its entry instead.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::Serialize;

use crate::converter::{ConversionOutcome, ConversionRequest, convert_any};
use crate::error::Result;

/// Progress update sent after each request starts.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// Requests started so far (1-based)
    pub current: usize,
    /// Total requests in the batch
    pub total: usize,
    /// Label of the request being converted
    pub label: Option<String>,
}

impl BatchProgress {
    #[must_use]
    pub fn with_label(current: usize, total: usize, label: impl Into<String>) -> Self {
        Self {
            current,
            total,
            label: Some(label.into()),
        }
    }
}

/// Outcome of one request in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub index: usize,
    pub request: ConversionRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ConversionOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Result of a batch conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// Number of successful conversions
    pub success_count: usize,
    /// Number of failed conversions
    pub fail_count: usize,
    /// One entry per request, in input order
    pub entries: Vec<BatchEntry>,
}

/// Convert every request in parallel.
///
/// # Arguments
/// * `requests` - Requests to convert
/// * `progress` - Callback for progress updates
///
/// # Returns
/// Per-request entries in input order plus success/failure counts.
pub fn convert_batch<F>(requests: &[ConversionRequest], progress: F) -> BatchResult
where
    F: Fn(&BatchProgress) + Send + Sync,
{
    let success_counter = AtomicUsize::new(0);
    let fail_counter = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = requests.len();

    tracing::info!("Converting batch of {} requests", total);

    let entries: Vec<BatchEntry> = requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| {
            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&BatchProgress::with_label(current, total, request.label()));

            match convert_any(request) {
                Ok(outcome) => {
                    success_counter.fetch_add(1, Ordering::SeqCst);
                    BatchEntry {
                        index,
                        request: request.clone(),
                        outcome: Some(outcome),
                        error: None,
                    }
                }
                Err(e) => {
                    fail_counter.fetch_add(1, Ordering::SeqCst);
                    tracing::debug!("Request {} failed: {}", index, e);
                    BatchEntry {
                        index,
                        request: request.clone(),
                        outcome: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    let result = BatchResult {
        success_count: success_counter.load(Ordering::SeqCst),
        fail_count: fail_counter.load(Ordering::SeqCst),
        entries,
    };
    tracing::info!(
        "Batch finished: {} succeeded, {} failed",
        result.success_count,
        result.fail_count
    );
    result
}

/// Read a JSON array of requests.
pub fn read_requests<P: AsRef<Path>>(path: P) -> Result<Vec<ConversionRequest>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a batch result as JSON.
pub fn write_result<P: AsRef<Path>>(path: P, result: &BatchResult, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    std::fs::write(path, json)?;
    Ok(())
}

/// Size the global rayon pool. Only the first call in a process takes effect.
pub fn configure_threads(threads: usize) {
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        tracing::warn!("Could not configure {} worker threads: {}", threads, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn requests() -> Vec<ConversionRequest> {
        serde_json::from_str(
            r##"[
                {"kind": "color", "color": "#FF0000", "to": "rgb"},
                {"kind": "number", "number": "-5", "from": "decimal", "to": "binary"},
                {"kind": "units", "value": 100, "from": "c", "to": "f"},
                {"kind": "coordinate", "coordinate": "40.7128", "to": "dms"}
            ]"##,
        )
        .unwrap()
    }

    #[test]
    fn test_convert_batch_counts_and_order() {
        let seen = Mutex::new(Vec::new());
        let result = convert_batch(&requests(), |p| {
            seen.lock().unwrap().push(p.current);
        });

        assert_eq!(result.success_count, 3);
        assert_eq!(result.fail_count, 1);
        let indices: Vec<usize> = result.entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(!result.entries[1].is_ok());
        assert!(result.entries[1].error.as_deref().unwrap().contains("negative"));

        let mut seen = seen.into_inner().unwrap();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_progress_carries_request_labels() {
        let labels = Mutex::new(Vec::new());
        convert_batch(&requests(), |p| {
            assert_eq!(p.total, 4);
            labels.lock().unwrap().push(p.label.clone().unwrap_or_default());
        });

        let mut labels = labels.into_inner().unwrap();
        labels.sort();
        assert_eq!(
            labels,
            vec![
                "color #FF0000 -> rgb",
                "coordinate 40.7128 -> dms",
                "number -5 -> binary",
                "units 100 c -> f",
            ]
        );
    }

    #[test]
    fn test_empty_batch() {
        let result = convert_batch(&[], |_| {});
        assert_eq!(result.success_count + result.fail_count, 0);
        assert!(result.entries.is_empty());
    }

    #[test]
    fn test_read_and_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.json");
        std::fs::write(&input, r#"[{"kind": "number", "number": "ff", "from": "hex"}]"#).unwrap();

        let requests = read_requests(&input).unwrap();
        let result = convert_batch(&requests, |_| {});
        let output = dir.path().join("out.json");
        write_result(&output, &result, true).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["successCount"], 1);
        assert_eq!(written["entries"][0]["outcome"]["convertedNumber"], "255");
    }
}
