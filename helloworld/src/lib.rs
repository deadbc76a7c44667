//! Hello world reporter for MPI launchers.
//!
//! Every rank joins the world communicator once, then prints a timestamped
//! line naming its processor, rank and the world size, forever.
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use clap::Parser;
use log::info;

mod config;
pub use config::{
    load_config,
    FileConfig,
    Schedule,
    DEFAULT_INTERVAL,
};
mod error;
pub use error::{Error, Result};
mod group;
pub use group::{
    Group,
    Membership,
    MpiGroup,
    StaticGroup,
};
pub mod report;
pub mod reporter;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YAML file with schedule settings
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Seconds to sleep between reports
    #[arg(short, long, value_name = "SECONDS")]
    pub interval: Option<u64>,
    /// Stop after this many reports instead of running forever
    #[arg(short = 'n', long)]
    pub iterations: Option<u64>,
    /// Skip MPI and report as rank 0 of 1 on HOST
    #[arg(long, value_name = "HOST")]
    pub dry_run: Option<String>,
}

/// Run the reporter as configured by the command line.
///
/// Returns only on a fatal setup error or when a bounded schedule finishes.
pub fn main(args: &Args) -> Result<()> {
    let file = match &args.config {
        Some(path) => Some(load_config(path)?),
        None => None,
    };
    let schedule = Schedule::resolve(file.as_ref(), args.interval, args.iterations);
    match &args.dry_run {
        Some(host) => start(StaticGroup::new(host.clone()), &schedule),
        None => start(MpiGroup::new(), &schedule),
    }
}

fn start<G: Group>(mut group: G, schedule: &Schedule) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    join_and_report(
        &mut group,
        schedule,
        &mut out,
        report::local_timestamp,
        thread::sleep,
    )?;
    // `group` is dropped here, which finalizes MPI for bounded runs
    Ok(())
}

/// Join the group and then report on `out` according to `schedule`.
///
/// Nothing is written to `out` unless the join succeeds. Returns the number
/// of reports emitted.
pub fn join_and_report<G, W, N, P>(
    group: &mut G,
    schedule: &Schedule,
    out: &mut W,
    now: N,
    pause: P,
) -> Result<u64>
where
    G: Group,
    W: Write,
    N: FnMut() -> String,
    P: FnMut(Duration),
{
    let membership = group.join()?;
    info!(
        "joined group as rank {} of {} on {}",
        membership.rank(),
        membership.size(),
        membership.host_name(),
    );
    Ok(reporter::run(&membership, schedule, out, now, pause))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_uses_default_schedule() {
        let args = Args::try_parse_from(["helloworld_forever"]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.interval, None);
        assert_eq!(args.iterations, None);
        assert_eq!(args.dry_run, None);
        assert_eq!(
            Schedule::resolve(None, args.interval, args.iterations),
            Schedule::default(),
        );
    }

    #[test]
    fn short_flags() {
        let args = Args::try_parse_from([
            "helloworld_forever", "-c", "sched.yaml", "-i", "5", "-n", "3",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("sched.yaml")));
        assert_eq!(args.interval, Some(5));
        assert_eq!(args.iterations, Some(3));
        assert_eq!(args.dry_run, None);
    }

    #[test]
    fn long_flags() {
        let args = Args::try_parse_from([
            "helloworld_forever",
            "--config", "sched.yaml",
            "--interval", "0",
            "--iterations", "1",
            "--dry-run", "node07",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("sched.yaml")));
        assert_eq!(args.interval, Some(0));
        assert_eq!(args.iterations, Some(1));
        assert_eq!(args.dry_run.as_deref(), Some("node07"));
        let schedule = Schedule::resolve(None, args.interval, args.iterations);
        assert_eq!(schedule.interval, Duration::ZERO);
        assert_eq!(schedule.iterations, Some(1));
    }

    #[test]
    fn bad_flag_values_are_rejected() {
        assert!(Args::try_parse_from(["helloworld_forever", "-i", "soon"]).is_err());
        assert!(Args::try_parse_from(["helloworld_forever", "-n", "-1"]).is_err());
        assert!(Args::try_parse_from(["helloworld_forever", "--dry-run"]).is_err());
    }

    #[test]
    fn missing_config_fails_before_join() {
        let missing = PathBuf::from("/nonexistent/helloworld.yaml");
        let args = Args {
            config: Some(missing.clone()),
            dry_run: Some("node07".to_string()),
            iterations: Some(1),
            ..Args::default()
        };
        match main(&args) {
            Err(Error::Io(path, _)) => assert_eq!(path, missing),
            other => panic!("expected config read error, got {:?}", other),
        }
    }
}
