//! 墨水屏文字时钟主入口
//! 将文字时钟表盘渲染为 PNG，并为面板准备位平面

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{error, info};

use lxx_wordclock_common::{
    ClockReading, FixedTimeSource, PanelVariant, SystemConfig, SystemError, SystemResult,
    TimeSource,
};
use lxx_wordclock_core::{DisplayManager, RefreshPolicy, RenderReport};
use lxx_wordclock_graphics::{InkThresholds, PanelPlanes, PngGridRenderer, load_rgb};

mod driver;

use driver::time_source::SystemClock;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "epd_wordclock")]
#[command(about = "Word clock face for a 7.5\" e-ink panel")]
struct Args {
    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// 子命令
#[derive(Subcommand, Debug)]
enum Command {
    /// Render the clock face to a PNG
    Render {
        /// Output PNG, overrides the config
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render this time (HH:MM) instead of the current one
        #[arg(long, value_parser = parse_reading)]
        at: Option<ClockReading>,

        /// IANA time zone for the current time, e.g. Europe/Berlin
        #[arg(long)]
        tz: Option<String>,
    },
    /// Split a PNG into panel bit planes
    Planes {
        /// Rendered PNG
        input: PathBuf,

        /// Directory for the .bin planes, defaults to the input's directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Panel revision: 1, 2 or 2B
        #[arg(long)]
        variant: Option<String>,

        /// Hand off as if at this time (HH:MM); decides the daily full refresh
        #[arg(long, value_parser = parse_reading)]
        at: Option<ClockReading>,

        /// IANA time zone for the current time
        #[arg(long)]
        tz: Option<String>,
    },
}

/// 解析 `--at` 参数
fn parse_reading(text: &str) -> Result<ClockReading, String> {
    match ClockReading::parse(text) {
        Some(Ok(reading)) => Ok(reading),
        Some(Err(e)) => Err(e.to_string()),
        None => Err(format!("expected HH:MM, got {text:?}")),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = driver::storage::load_config(args.config.as_deref())?;

    match args.command {
        None => {
            render(&config, None, None, None)?;
        }
        Some(Command::Render { output, at, tz }) => {
            render(&config, output, at, tz.as_deref())?;
        }
        Some(Command::Planes {
            input,
            out_dir,
            variant,
            at,
            tz,
        }) => {
            hand_off(
                &config,
                &input,
                out_dir.as_deref(),
                variant.as_deref(),
                at,
                tz.as_deref(),
            )?;
        }
    }
    Ok(())
}

/// 渲染一帧表盘到 PNG
fn render(
    config: &SystemConfig,
    output: Option<PathBuf>,
    at: Option<ClockReading>,
    tz: Option<&str>,
) -> Result<RenderReport, SystemError> {
    let output = output.unwrap_or_else(|| PathBuf::from(&config.output.path));
    let mut renderer = PngGridRenderer::new(config.display, output)?;
    let policy = RefreshPolicy::from_config(&config.panel)?;

    let report = match at {
        Some(reading) => {
            let mut time = FixedTimeSource::from(reading);
            render_with(&mut time, &mut renderer, policy)?
        }
        None => {
            let mut time = system_clock(tz)?;
            render_with(&mut time, &mut renderer, policy)?
        }
    };

    info!(
        "{} -> {} ({:?} refresh)",
        report.reading,
        renderer.output().display(),
        report.refresh_mode
    );
    Ok(report)
}

/// 面板交接：按刷新策略拆分并写出位平面
fn hand_off(
    config: &SystemConfig,
    input: &Path,
    out_dir: Option<&Path>,
    variant: Option<&str>,
    at: Option<ClockReading>,
    tz: Option<&str>,
) -> SystemResult<Vec<PathBuf>> {
    let variant = variant.map_or(config.panel.variant, PanelVariant::from_version);
    let reading = match at {
        Some(reading) => FixedTimeSource::from(reading).now()?,
        None => system_clock(tz)?.now()?,
    };
    let mode = RefreshPolicy::from_config(&config.panel)?.mode_for(reading);
    info!("Hand-off at {} ({:?} refresh)", reading, mode);

    let image = load_rgb(input)?;
    let planes = PanelPlanes::split(&image, variant, InkThresholds::from_config(&config.panel));
    driver::display::write_planes(&planes, mode, input, out_dir)
}

fn system_clock(tz: Option<&str>) -> SystemResult<SystemClock> {
    match tz {
        Some(name) => SystemClock::with_zone(name),
        None => Ok(SystemClock::new()),
    }
}

fn render_with<T: TimeSource>(
    time: &mut T,
    renderer: &mut PngGridRenderer,
    policy: RefreshPolicy,
) -> Result<RenderReport, SystemError> {
    DisplayManager::new(time, renderer)
        .with_refresh_policy(policy)
        .update_display()
}
