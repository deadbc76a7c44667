//! The report loop.
use std::io::Write;
use std::time::Duration;
use log::{debug, warn};
use crate::config::Schedule;
use crate::group::Membership;
use crate::report::format_report;

/// Emit reports for `membership` on `out` according to `schedule`.
///
/// The `now` callback supplies the formatted timestamp for each report and
/// `pause` blocks between reports. With an unbounded schedule this never
/// returns; otherwise it returns the number of reports emitted and does not
/// pause after the last one. Write failures are logged and skipped.
pub fn run<W, N, P>(
    membership: &Membership,
    schedule: &Schedule,
    out: &mut W,
    mut now: N,
    mut pause: P,
) -> u64
where
    W: Write,
    N: FnMut() -> String,
    P: FnMut(Duration),
{
    if schedule.iterations == Some(0) {
        return 0;
    }
    let mut count = 0;
    loop {
        let line = format_report(
            &now(),
            membership.host_name(),
            membership.rank(),
            membership.size(),
        );
        if let Err(err) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            warn!("failed to write report: {}", err);
        }
        count += 1;
        debug!("report {} written", count);
        if schedule.is_last(count) {
            return count;
        }
        pause(schedule.interval);
    }
}
