// ============================================================
// Layer 4 — Stratified Splitter (second pass)
// ============================================================
// Re-reads the source row by row and routes every row to train
// or test:
//
//   row ──▶ stratify value ──▶ RowAssigner ──▶ RowSink
//
// Rows are never buffered: each one is written as soon as its
// side is known, so memory use does not depend on file size.
//
// The assigner owns the quota plan for the whole pass. When the
// source runs out every quota must be zero; anything left over
// means the file lost rows between the two passes.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            rand crate documentation

use csv::{Reader, StringRecord};
use rand::Rng;
use std::io::Read;

use crate::data::writer::RowSink;
use crate::domain::assigner::RowAssigner;
use crate::domain::error::StratifyError;
use crate::domain::subset::SubsetTally;
use crate::infra::progress;

/// Stream every row of `reader` into `sink`, stratified on the
/// column at `column_index`.
///
/// Returns what was written per category.
pub fn split_stratified<R, S, G>(
    reader:       &mut Reader<R>,
    column_index: usize,
    assigner:     &mut RowAssigner,
    sink:         &mut S,
    rng:          &mut G,
) -> Result<SubsetTally, StratifyError>
where
    R: Read,
    S: RowSink + ?Sized,
    G: Rng + ?Sized,
{
    let mut tally  = SubsetTally::default();
    let mut record = StringRecord::new();
    let mut rows   = 0usize;
    let pb         = progress::row_spinner("Splitting");

    while reader.read_record(&mut record)? {
        let category = record.get(column_index).ok_or_else(|| {
            // Header names are gone by now; report the position instead
            StratifyError::MissingColumn {
                column: format!("#{column_index}"),
            }
        })?;

        let side = assigner.assign(category, rng)?;
        sink.append(side, &record)?;
        tally.record(category, side);

        rows += 1;
        pb.inc(1);
    }
    pb.finish_and_clear();

    if !assigner.is_exhausted() {
        return Err(StratifyError::IncompletePass {
            remaining: assigner.remaining_total(),
        });
    }

    tracing::info!(
        "Split {} rows: {} train, {} test",
        rows,
        tally.train_rows(),
        tally.test_rows(),
    );
    Ok(tally)
}
