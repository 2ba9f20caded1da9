use std::fs;

use anyhow::{Context, Result};
use log::info;
use motion_showcase::{Script, Session, ShowcaseSettings};

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings =
        ShowcaseSettings::from_env().context("failed to read SHOWCASE_* settings")?;

    let script = match std::env::args().nth(1) {
        Some(path) => {
            let source =
                fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
            Script::parse(&source).with_context(|| format!("failed to parse {path}"))?
        }
        None => Script::walkthrough().context("built-in walkthrough is malformed")?,
    };

    let mut session = Session::new(settings);
    session.run_script(&script).context("script failed")?;
    info!(
        "finished {} commands in {} frames ({} ms of frame time)",
        script.len(),
        session.frames(),
        session.frame_time_millis()
    );
    Ok(())
}
