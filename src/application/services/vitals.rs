use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};
use std::task::Poll;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::domain::entities::vitals::{CoreWebVitals, sanitize_metric};
use crate::domain::ports::instrumentation::{EntryKind, PerformanceEntry, PerformanceSource};

/// Upper bound on a single measurement.
pub const DEFAULT_MEASURE_TIMEOUT: Duration = Duration::from_millis(1000);

const FIRST_CONTENTFUL_PAINT: &str = "first-contentful-paint";

/// Aggregates Core Web Vitals from asynchronous instrumentation streams.
///
/// One call to [`measure`](Self::measure) is one measurement: no retries,
/// cadence is up to the caller. Layout shifts accumulate on the collector
/// instance for its whole lifetime, so reusing a collector across
/// navigations carries CLS over.
pub struct VitalsCollector<'a> {
    source: &'a dyn PerformanceSource,
    timeout: Duration,
    cls_total: Mutex<f64>,
}

/// One open subscription.
struct Subscription {
    kind: EntryKind,
    stream: Option<UnboundedReceiver<PerformanceEntry>>,
}

enum Signal {
    Entry(PerformanceEntry),
    Closed(EntryKind),
}

/// Counting latch: opens once every armed kind has reported at least once.
#[derive(Default)]
struct CountdownLatch {
    pending: BTreeSet<EntryKind>,
}

impl CountdownLatch {
    fn arm(&mut self, kind: EntryKind) {
        self.pending.insert(kind);
    }

    fn count_down(&mut self, kind: EntryKind) {
        self.pending.remove(&kind);
    }

    fn is_open(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Values gathered during one measurement.
#[derive(Default)]
struct Measurement {
    lcp: Option<f64>,
    fid: Option<f64>,
    cls_delta: f64,
    fcp: Option<f64>,
}

impl Measurement {
    fn apply(&mut self, entry: PerformanceEntry) {
        match entry {
            PerformanceEntry::LargestContentfulPaint {
                render_time,
                load_time,
            } => {
                // Later entries supersede earlier candidates.
                let time = if render_time > 0.0 { render_time } else { load_time };
                self.lcp = Some(time);
            }
            PerformanceEntry::FirstInput {
                start_time,
                processing_start,
            } => {
                if self.fid.is_none() {
                    self.fid = Some(processing_start - start_time);
                }
            }
            PerformanceEntry::LayoutShift {
                value,
                had_recent_input,
            } => {
                if !had_recent_input {
                    self.cls_delta += sanitize_metric(value);
                }
            }
            PerformanceEntry::Paint { name, start_time } => {
                if name == FIRST_CONTENTFUL_PAINT && self.fcp.is_none() {
                    self.fcp = Some(start_time);
                }
            }
        }
    }
}

impl<'a> VitalsCollector<'a> {
    #[must_use]
    pub const fn new(source: &'a dyn PerformanceSource, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            cls_total: Mutex::new(0.0),
        }
    }

    /// Measure the five vitals. Resolves once every observed stream has
    /// reported (or closed), or when the timeout elapses, whichever is first.
    /// Unreported metrics are `0`. Never fails.
    pub async fn measure(&self) -> CoreWebVitals {
        if !self.source.supports_observers() {
            tracing::debug!("No performance instrumentation, reporting zero vitals");
            return CoreWebVitals::zero();
        }

        let ttfb = self
            .source
            .navigation_timing()
            .map_or(0.0, |nav| nav.response_start - nav.request_start);

        let mut latch = CountdownLatch::default();
        let mut subscriptions: Vec<Subscription> = Vec::with_capacity(EntryKind::ALL.len());
        for kind in EntryKind::ALL {
            match self.source.observe(kind) {
                Some(stream) => {
                    latch.arm(kind);
                    subscriptions.push(Subscription {
                        kind,
                        stream: Some(stream),
                    });
                }
                None => tracing::debug!("{kind:?} entries not observable"),
            }
        }

        let mut measurement = Measurement::default();
        let deadline = tokio::time::sleep(self.timeout);
        tokio::pin!(deadline);

        while !latch.is_open() {
            tokio::select! {
                () = &mut deadline => {
                    tracing::debug!(
                        "Vitals measurement timed out after {:?} ({} stream(s) silent)",
                        self.timeout,
                        latch.pending.len()
                    );
                    break;
                }
                signal = next_signal(&mut subscriptions) => match signal {
                    Signal::Entry(entry) => {
                        latch.count_down(entry.kind());
                        measurement.apply(entry);
                    }
                    Signal::Closed(kind) => latch.count_down(kind),
                },
            }
        }

        // Entries already delivered still count, so last-wins LCP sees them.
        drain_buffered(&mut subscriptions, &mut measurement);

        let cls = {
            let mut total = self
                .cls_total
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *total += measurement.cls_delta;
            *total
        };

        let vitals = CoreWebVitals {
            lcp: sanitize_metric(measurement.lcp.unwrap_or(0.0)),
            fid: sanitize_metric(measurement.fid.unwrap_or(0.0)),
            cls: sanitize_metric(cls),
            fcp: sanitize_metric(measurement.fcp.unwrap_or(0.0)),
            ttfb: sanitize_metric(ttfb),
        };
        tracing::debug!(
            "Vitals: lcp={:.0}ms fid={:.0}ms cls={:.3} fcp={:.0}ms ttfb={:.0}ms",
            vitals.lcp,
            vitals.fid,
            vitals.cls,
            vitals.fcp,
            vitals.ttfb
        );
        vitals
    }
}

/// Wait for the next entry or closure on any open subscription.
async fn next_signal(subscriptions: &mut [Subscription]) -> Signal {
    std::future::poll_fn(|cx| {
        for sub in subscriptions.iter_mut() {
            let Some(stream) = sub.stream.as_mut() else {
                continue;
            };
            match stream.poll_recv(cx) {
                Poll::Ready(Some(entry)) => return Poll::Ready(Signal::Entry(entry)),
                Poll::Ready(None) => {
                    sub.stream = None;
                    return Poll::Ready(Signal::Closed(sub.kind));
                }
                Poll::Pending => {}
            }
        }
        Poll::Pending
    })
    .await
}

fn drain_buffered(subscriptions: &mut [Subscription], measurement: &mut Measurement) {
    for sub in subscriptions.iter_mut() {
        let Some(stream) = sub.stream.as_mut() else {
            continue;
        };
        while let Ok(entry) = stream.try_recv() {
            measurement.apply(entry);
        }
    }
}
