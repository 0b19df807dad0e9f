//! Progress indication for batch runs
//!
//! Purely cosmetic: the bar lives on stderr and is suspended while a check
//! writes its results, so it never interleaves with audit output.

use crate::checks::{AuditContext, Check};
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;

const TEMPLATE: &str = "{msg}: {percent:>3}%|{bar:40.cyan/blue}| {pos}/{len} [{elapsed_precise}]";

fn progress_bar(len: usize, message: &'static str) -> ProgressBar {
    let style = ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉ ");
    let bar = ProgressBar::new(len as u64).with_style(style);
    bar.set_message(message);
    bar
}

/// Drive `body` with a progress bar of `len` steps, finishing it afterwards
pub fn with_progress<F>(len: usize, message: &'static str, body: F) -> Result<()>
where
    F: FnOnce(&ProgressBar) -> Result<()>,
{
    let bar = progress_bar(len, message);
    let result = body(&bar);
    bar.finish();
    result
}

/// Run the checks at `positions` of `menu` in order
pub fn run_batch(
    menu: &[Box<dyn Check>],
    positions: &[usize],
    ctx: &AuditContext<'_>,
    out: &mut dyn Write,
    message: &'static str,
) -> Result<()> {
    with_progress(positions.len(), message, |bar| {
        for &position in positions {
            bar.suspend(|| menu[position].run(ctx, &mut *out))?;
            bar.inc(1);
        }
        Ok(())
    })
}
