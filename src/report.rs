//! Reporter - text tables for finished runs.

use std::fmt::Write as _;

use crate::reference::ReferenceString;
use crate::simulator::PolicyRun;
use crate::timeline::FrameTimeline;

/// Minimum width of the separator under the header row.
const SEPARATOR_WIDTH: usize = 40;

/// Render a timeline as a frame table.
///
/// Layout: the reference string, a dashed separator, one row per frame
/// (page id or blank per step), a row marking faults with `*`, then the
/// hit and fault totals. Columns are as wide as the widest page id.
///
/// # Example
/// ```
/// use pagesim::{report, simulate, PolicyKind, ReferenceString};
///
/// let refs = ReferenceString::from_ids([1, 2, 1]);
/// let timeline = simulate(&refs, 2, PolicyKind::Fifo).unwrap();
/// let text = report::render(&refs, &timeline);
///
/// assert!(text.starts_with("1 2 1\n"));
/// assert!(text.ends_with("Total Page Hit: 1\nTotal Page Fault: 2\n"));
/// ```
pub fn render(reference: &ReferenceString, timeline: &FrameTimeline) -> String {
    let width = reference
        .iter()
        .map(|page| page.to_string().len())
        .max()
        .unwrap_or(1);
    let cell = |text: &str| format!("{:>width$}", text, width = width);

    let mut out = String::new();

    let header = row(reference.iter().map(|page| cell(&page.to_string())));
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "-".repeat(header.len().max(SEPARATOR_WIDTH)));

    for slot in 0..timeline.capacity() {
        let cells = timeline.steps().iter().map(|record| {
            match record.frames.slots()[slot].page() {
                Some(page) => cell(&page.to_string()),
                None => cell(""),
            }
        });
        let _ = writeln!(out, "{}", row(cells));
    }

    let faults = timeline
        .fault_flags()
        .map(|faulted| cell(if faulted { "*" } else { "" }));
    let _ = writeln!(out, "{}", row(faults));

    let stats = timeline.statistics();
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Page Hit: {}", stats.hits);
    let _ = writeln!(out, "Total Page Fault: {}", stats.faults);

    out
}

/// Render one summary line per run.
pub fn render_comparison(runs: &[PolicyRun]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:>6} {:>7} {:>10} {:>9}",
        "Policy", "Hits", "Faults", "Evictions", "Hit rate"
    );

    for run in runs {
        let stats = run.statistics();
        let _ = writeln!(
            out,
            "{:<8} {:>6} {:>7} {:>10} {:>8.2}%",
            run.kind,
            stats.hits,
            stats.faults,
            stats.evictions,
            stats.hit_rate() * 100.0
        );
    }

    out
}

/// Join cells with single spaces, dropping trailing blanks.
fn row<I: Iterator<Item = String>>(cells: I) -> String {
    let joined = cells.collect::<Vec<_>>().join(" ");
    joined.trim_end().to_string()
}
