//! asset/batch.rs
//! Decode many assets concurrently.
//!
//! Workers pull jobs from a crossbeam channel and decode with the shared,
//! read-only codecs. Each worker keeps its own counters and merges them into
//! the source once, when its queue runs dry.

use crossbeam::channel::unbounded;

use crate::asset::source::AssetSource;
use crate::telemetry::{StageTimes, TelemetryCounters};
use crate::types::AssetError;

/// Outcome for one requested logical path.
#[derive(Debug)]
pub struct BatchItem {
    pub logical: String,
    pub result: Result<Vec<u8>, AssetError>,
}

impl BatchItem {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Decode `paths` on `workers` threads (`0` → one per CPU).
///
/// Results come back in input order. A failing item does not stop the others;
/// only a panicking worker fails the whole batch.
pub fn decode_all<S>(
    source: &AssetSource,
    paths: &[S],
    workers: usize,
) -> Result<Vec<BatchItem>, AssetError>
where
    S: AsRef<str> + Sync,
{
    if paths.is_empty() {
        return Ok(Vec::new());
    }
    let workers = source
        .config()
        .clone()
        .with_workers(workers)
        .effective_workers()
        .min(paths.len());

    let (job_tx, job_rx) = unbounded::<(usize, &str)>();
    let (res_tx, res_rx) = unbounded::<(usize, Result<Vec<u8>, AssetError>)>();
    for (index, path) in paths.iter().enumerate() {
        job_tx
            .send((index, path.as_ref()))
            .map_err(|_| AssetError::Worker("batch job queue closed".into()))?;
    }
    drop(job_tx);

    crossbeam::scope(|s| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let res_tx = res_tx.clone();
            s.spawn(move |_| {
                let mut counters = TelemetryCounters::default();
                let mut times = StageTimes::default();
                while let Ok((index, logical)) = job_rx.recv() {
                    let result = source.codec_for(logical).and_then(|codec| {
                        source.decode_file(logical, codec.as_ref(), &mut counters, &mut times)
                    });
                    if res_tx.send((index, result)).is_err() {
                        break;
                    }
                }
                source.merge_telemetry(&counters, &times);
            });
        }
    })
    .map_err(|_| AssetError::Worker("batch decode worker panicked".into()))?;
    drop(res_tx);

    let mut slots: Vec<Option<Result<Vec<u8>, AssetError>>> = paths.iter().map(|_| None).collect();
    for (index, result) in res_rx.iter() {
        slots[index] = Some(result);
    }

    let items: Vec<BatchItem> = paths
        .iter()
        .zip(slots)
        .map(|(path, slot)| BatchItem {
            logical: path.as_ref().to_string(),
            result: slot.unwrap_or_else(|| {
                Err(AssetError::Worker(format!("no result for {}", path.as_ref())))
            }),
        })
        .collect();

    let failures = items.iter().filter(|i| !i.is_ok()).count();
    tracing::info!(files = items.len(), failures, workers, "batch decode finished");
    Ok(items)
}
