//! Async poll loop shared by the `watch` and `pipe` commands.
//!
//! Multiplexes the poll interval, a once-a-second check of the config file,
//! `SIGHUP` (Unix only) and Ctrl-C. Every wake-up that produces a new
//! snapshot is handed to the caller's sink.

use std::time::Duration;

use color_eyre::eyre::Result;
use dualbat_engine::PresentationSnapshot;
use dualbat_platform::BatterySource;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::config::{ConfigWatcher, UserConfig};
use crate::indicator::Indicator;

const SETTINGS_CHECK_INTERVAL: Duration = Duration::from_secs(1);

/// Why a snapshot was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Poll,
    SettingsChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub fn run<F>(
    config: &UserConfig,
    source: Box<dyn BatterySource>,
    watcher: ConfigWatcher,
    sink: F,
) -> Result<()>
where
    F: FnMut(&PresentationSnapshot, Trigger) -> Result<Flow>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(config, source, watcher, sink))
}

async fn run_async<F>(
    config: &UserConfig,
    source: Box<dyn BatterySource>,
    mut watcher: ConfigWatcher,
    mut sink: F,
) -> Result<()>
where
    F: FnMut(&PresentationSnapshot, Trigger) -> Result<Flow>,
{
    let poll_interval = config.poll_interval();
    let mut indicator = Indicator::new(source, config.display());

    info!(
        source = indicator.source_name(),
        poll_interval_secs = poll_interval.as_secs(),
        "Scheduler starting"
    );

    let mut poll_tick = tokio::time::interval(poll_interval);
    let mut settings_tick = tokio::time::interval(SETTINGS_CHECK_INTERVAL);
    poll_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    settings_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut hangup = Hangup::new()?;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let trigger = tokio::select! {
            _ = poll_tick.tick() => Trigger::Poll,
            _ = settings_tick.tick() => {
                if !watcher.changed() {
                    continue;
                }
                Trigger::SettingsChanged
            }
            _ = hangup.recv() => {
                debug!("Received SIGHUP");
                Trigger::SettingsChanged
            }
            _ = &mut shutdown => {
                info!("Interrupted, shutting down");
                break;
            }
        };

        let snapshot = match trigger {
            Trigger::Poll => indicator.refresh(),
            Trigger::SettingsChanged => {
                info!(path = %watcher.path().display(), "Reloading display settings");
                let stored = UserConfig::load_from(watcher.path());
                if stored.display() == indicator.display() {
                    debug!("Display settings unchanged");
                }
                indicator.apply_settings(stored.display())
            }
        };

        if sink(snapshot, trigger)? == Flow::Stop {
            break;
        }
    }

    debug!(polls = indicator.poll_count(), "Scheduler stopped");
    Ok(())
}

#[cfg(unix)]
struct Hangup(tokio::signal::unix::Signal);

#[cfg(unix)]
impl Hangup {
    fn new() -> Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self(signal(SignalKind::hangup())?))
    }

    async fn recv(&mut self) {
        if self.0.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
struct Hangup;

#[cfg(not(unix))]
impl Hangup {
    fn new() -> Result<Self> {
        Ok(Self)
    }

    async fn recv(&mut self) {
        std::future::pending::<()>().await;
    }
}
