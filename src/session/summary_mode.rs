//! One-shot summary mode

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::metrics::ColumnNames;
use crate::slots::{SharedSlots, SlotId};
use crate::source::{ResourceLocator, WorkbookSource};
use crate::workers::core::EventSender;
use crate::workers::loader::{DashboardLoader, LoadOutcome};
use log::debug;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Run a single load and return one `card-id: text` line per card, in slot order.
pub async fn summarize(
    source: Arc<dyn WorkbookSource>,
    columns: ColumnNames,
) -> (Vec<String>, LoadOutcome) {
    let (sender, mut receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let slots = SharedSlots::default();
    let loader = DashboardLoader::new(source, columns, slots.clone(), EventSender::new(sender));

    let outcome = loader.load().await;
    while let Ok(event) = receiver.try_recv() {
        debug!("{}", event);
    }

    let snapshot = slots.snapshot().await;
    let lines = SlotId::ALL
        .iter()
        .map(|slot| format!("{}: {}", slot.id(), snapshot.text(*slot)))
        .collect();
    (lines, outcome)
}

/// Prints the three cards, one per line. Fails when the load failed.
pub async fn run_summary_mode(
    locator: &ResourceLocator,
    columns: ColumnNames,
) -> Result<(), Box<dyn Error>> {
    let (lines, outcome) = summarize(locator.source(), columns).await;
    for line in lines {
        println!("{}", line);
    }

    match outcome {
        LoadOutcome::Completed(metrics) => {
            debug!("Summary of {} complete: {:?}", locator, metrics);
            Ok(())
        }
        LoadOutcome::Failed(e) => Err(Box::new(e)),
        LoadOutcome::Skipped => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockWorkbookSource;
    use crate::source::error::SourceError;
    use crate::test_support::sample_workbook;

    #[tokio::test]
    async fn summarizes_the_sample_workbook() {
        let mut source = MockWorkbookSource::new();
        source
            .expect_describe()
            .return_const("mock://data.xlsx".to_string());
        let bytes = sample_workbook();
        source.expect_fetch().returning(move || Ok(bytes.clone()));

        let (lines, outcome) = summarize(Arc::new(source), ColumnNames::default()).await;
        assert!(outcome.is_completed());
        assert_eq!(
            lines,
            vec![
                "card-tecnicas: 2 técnicas",
                "card-estados: 1 estados",
                "card-municipios: 2 municipios"
            ]
        );
    }

    #[tokio::test]
    async fn failed_summary_prints_error_markers() {
        let mut source = MockWorkbookSource::new();
        source
            .expect_describe()
            .return_const("mock://data.xlsx".to_string());
        source
            .expect_fetch()
            .returning(|| Err(SourceError::Http { status: 503 }));

        let (lines, outcome) = summarize(Arc::new(source), ColumnNames::default()).await;
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert_eq!(
            lines,
            vec![
                "card-tecnicas: Error",
                "card-estados: Error",
                "card-municipios: Error"
            ]
        );
    }
}
