//! Sequential batched upload.
//!
//! A batch uploads strictly one file at a time, in input order. That bounds
//! backend load and keeps progress reporting deterministic: `current` counts
//! files attempted so far, not files that succeeded. A failed item is logged
//! and the batch moves on to the next one; there is no retry and no mid-batch
//! cancellation.
//!
//! The core is generic over the item type and the send function, so the
//! sequencing rules can be exercised in plain tests without a browser `File`
//! or a live backend. Pages pass a closure that hits the gallery or trip
//! upload endpoint and refresh their parent resource once the batch returns.

use std::fmt::Display;
use std::future::Future;

/// Files attempted so far out of the whole batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadProgress {
    pub current: usize,
    pub total: usize,
}

impl UploadProgress {
    /// Fill percentage for the progress bar.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64 * 100.0
        }
    }
}

/// What happened to a finished batch. Individual failures are only observable
/// in aggregate; the refreshed parent resource simply has fewer new items
/// than files submitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub attempted: usize,
    pub failed: usize,
}

/// Upload `items` one at a time, in order.
///
/// `on_progress` fires once with `current == 0` before the first attempt and
/// once after every attempt, so it always ends at `current == total`.
pub async fn upload_batch<T, F, Fut, E>(
    items: Vec<T>,
    mut send: F,
    mut on_progress: impl FnMut(UploadProgress),
) -> BatchReport
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    let total = items.len();
    on_progress(UploadProgress { current: 0, total });

    let mut failed = 0;
    for (index, item) in items.into_iter().enumerate() {
        if let Err(err) = send(item).await {
            log::error!("Upload {} of {} failed: {}", index + 1, total, err);
            failed += 1;
        }
        on_progress(UploadProgress {
            current: index + 1,
            total,
        });
    }

    BatchReport {
        attempted: total,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn uploads_run_in_input_order_without_overlap() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let log = events.clone();

        let report = block_on(upload_batch(
            vec!["a", "b", "c"],
            |name| {
                let log = log.clone();
                async move {
                    log.borrow_mut().push(format!("start {name}"));
                    log.borrow_mut().push(format!("end {name}"));
                    Ok::<(), String>(())
                }
            },
            |_| {},
        ));

        assert_eq!(report, BatchReport { attempted: 3, failed: 0 });
        assert_eq!(
            *events.borrow(),
            vec!["start a", "end a", "start b", "end b", "start c", "end c"]
        );
    }

    #[test]
    fn progress_reaches_total_even_when_files_fail() {
        let snapshots = Rc::new(RefCell::new(Vec::new()));
        let seen = snapshots.clone();

        // File #2 fails; the batch continues and still attempts all three.
        let report = block_on(upload_batch(
            vec![1, 2, 3],
            |n| async move {
                if n == 2 {
                    Err("boom".to_string())
                } else {
                    Ok(())
                }
            },
            move |p| seen.borrow_mut().push(p),
        ));

        assert_eq!(report, BatchReport { attempted: 3, failed: 1 });
        let snapshots = snapshots.borrow();
        assert_eq!(
            snapshots.iter().map(|p| p.current).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert!(snapshots.iter().all(|p| p.total == 3));
        assert_eq!(snapshots.last().unwrap().current, snapshots.last().unwrap().total);
    }

    #[test]
    fn empty_batch_reports_immediately() {
        let snapshots = Rc::new(RefCell::new(Vec::new()));
        let seen = snapshots.clone();

        let report = block_on(upload_batch(
            Vec::<u8>::new(),
            |_| async move { Ok::<(), String>(()) },
            move |p| seen.borrow_mut().push(p),
        ));

        assert_eq!(report, BatchReport::default());
        assert_eq!(*snapshots.borrow(), vec![UploadProgress { current: 0, total: 0 }]);
    }

    #[test]
    fn percent_is_safe_on_empty_and_exact_on_full() {
        assert_eq!(UploadProgress { current: 0, total: 0 }.percent(), 0.0);
        assert_eq!(UploadProgress { current: 1, total: 4 }.percent(), 25.0);
        assert_eq!(UploadProgress { current: 4, total: 4 }.percent(), 100.0);
    }
}
