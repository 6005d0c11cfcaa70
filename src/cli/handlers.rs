use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::board::BoardContext;
use crate::config::AppConfig;
use crate::models::NextPrayer;
use crate::prayer_times::TickSnapshot;
use crate::utils::format::{format_jummah, format_time};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! writeln_colored {
    ($out:expr, $color:expr, $($arg:tt)*) => {{
        write!($out, "{}", $color)?;
        write!($out, $($arg)*)?;
        writeln!($out, "\x1b[0m")?;
    }};
}

const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;201;166;82m";

// ─── Times ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct NextPrayerJson<'a> {
    location: &'a str,
    #[serde(flatten)]
    next: &'a NextPrayer,
    remaining_secs: i64,
    countdown: String,
}

pub fn handle_times(
    out: &mut impl Write,
    ctx: &BoardContext,
    now: NaiveDateTime,
    json: bool,
) -> Result<()> {
    let location = ctx.active();
    let snap = TickSnapshot::compute(location, now);

    if json {
        let payload = NextPrayerJson {
            location: &location.name,
            next: &snap.next,
            remaining_secs: snap.countdown.total_secs,
            countdown: snap.countdown.to_string(),
        };
        let body = serde_json::to_string_pretty(&payload).context("Serializing next prayer")?;
        writeln!(out, "{}", body)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln_colored!(
        out,
        GOLD,
        "  Prayer Times — {} ({})",
        location.name,
        now.format("%a, %b %d, %Y")
    );
    writeln!(out)?;

    for (prayer, time) in location.times.in_order() {
        let line = format!("  {:<10}  {}", prayer.display_name(), format_time(time));
        if prayer == snap.next.prayer {
            writeln_colored!(out, BOLD, "{}  ◂ next", line);
        } else if now.date().and_time(time) <= now {
            writeln_colored!(out, DIM, "{}", line);
        } else {
            writeln!(out, "{}", line)?;
        }
    }

    if !location.jummah.is_empty() {
        writeln!(out)?;
        writeln!(out, "  {:<10}  {}", "Jummah", format_jummah(&location.jummah))?;
    }

    writeln!(out)?;
    writeln_colored!(
        out,
        AMBER,
        "  Next: {} at {} in {}",
        snap.next.prayer.display_name(),
        snap.next.time,
        snap.countdown
    );
    writeln!(out)?;
    Ok(())
}

// ─── Listings ────────────────────────────────────────────────────────────────

pub fn handle_locations(out: &mut impl Write, ctx: &BoardContext) -> Result<()> {
    writeln!(out)?;
    for (i, loc) in ctx.locations.iter().enumerate() {
        let marker = if i == ctx.active_index() { "●" } else { " " };
        let times: Vec<String> = loc.times.in_order().map(|(_, t)| format_time(t)).collect();
        writeln!(out, "  {} {}. {:<14} {}", marker, i + 1, loc.name, times.join("  "))?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn handle_reminder(out: &mut impl Write, ctx: &BoardContext, index: usize) -> Result<()> {
    if ctx.reminders.is_empty() {
        writeln_colored!(out, DIM, "  No reminders configured");
        return Ok(());
    }
    let r = &ctx.reminders[index % ctx.reminders.len()];
    writeln!(out)?;
    writeln_colored!(out, GOLD, "  {}", r.arabic);
    writeln!(out, "  {}", r.english)?;
    writeln_colored!(out, DIM, "  — {}", r.source);
    writeln!(out)?;
    Ok(())
}

pub fn handle_events(out: &mut impl Write, ctx: &BoardContext) -> Result<()> {
    writeln!(out)?;
    if ctx.events.is_empty() {
        writeln_colored!(out, DIM, "  Nothing scheduled");
    }
    for ev in &ctx.events {
        writeln_colored!(out, AMBER, "  [{}] {}", ev.date, ev.title);
        writeln_colored!(out, DIM, "      {}", ev.desc);
    }
    writeln!(out)?;
    Ok(())
}

pub fn handle_recitations(out: &mut impl Write, ctx: &BoardContext) -> Result<()> {
    writeln!(out)?;
    for r in &ctx.recitations {
        match r.audio_source() {
            Some(src) => writeln!(out, "  ♪ {:<26} {}", r.reciter, src)?,
            None => writeln_colored!(out, DIM, "  · {:<26} (no audio)", r.reciter),
        }
    }
    writeln!(out)?;
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config_init(out: &mut impl Write, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{:?} already exists. Use --force to overwrite.", path);
    }
    AppConfig::default().save_to(path)?;
    writeln!(out, "  Wrote default config to {}", path.display())?;
    Ok(())
}
