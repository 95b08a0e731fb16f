use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use std::{
    fs,
    future::Future,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::EnvFilter;
use weatherview_core::{
    Config, WeatherDataSource, WeatherView,
    catalog::rain_chance_samples,
    chart::{layout_bars, render_svg},
    source_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherview", version, about = "Current weather, sunscreen advice and travel tips")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the weather endpoint and image directory. Prompts when no flag is given.
    Configure {
        /// Weather endpoint URL.
        #[arg(long)]
        url: Option<String>,

        /// Directory containing the image assets.
        #[arg(long, value_name = "DIR")]
        asset_dir: Option<PathBuf>,
    },

    /// Fetch the current weather and show the screen.
    Show {
        /// Use this endpoint instead of the configured one.
        #[arg(long)]
        url: Option<String>,

        /// Print the resolved screen as JSON.
        #[arg(long)]
        json: bool,

        /// Also write the rain chart as SVG to this path.
        #[arg(long, value_name = "PATH")]
        svg: Option<PathBuf>,
    },

    /// Print the rain-chance chart as an SVG document.
    Chart {
        /// Write to this file instead of stdout.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = resolve_config(&self.command, Config::load())?;
        init_tracing(&config.log_level);

        match self.command {
            Command::Configure { url, asset_dir } => configure(&mut config, url, asset_dir),
            Command::Show { url, json, svg } => show(&mut config, url, json, svg).await,
            Command::Chart { out } => chart(out),
        }
    }
}

/// A broken config file must not lock the user out of `configure`.
fn resolve_config(command: &Command, loaded: anyhow::Result<Config>) -> anyhow::Result<Config> {
    match loaded {
        Ok(config) => Ok(config),
        Err(err) if matches!(command, Command::Configure { .. }) => {
            eprintln!("warning: {err:#}");
            eprintln!("Starting from default settings; saving will replace the file.");
            Ok(Config::default())
        }
        Err(err) => Err(err.context(
            "Could not load configuration.\n\
             Hint: run `weatherview configure` to rewrite the config file.",
        )),
    }
}

/// `RUST_LOG` wins over the configured level. Logs go to stderr.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests); keeping it is fine.
    if tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init().is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn configure(
    config: &mut Config,
    url: Option<String>,
    asset_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    if url.is_none() && asset_dir.is_none() {
        let url = inquire::Text::new("Weather endpoint URL:")
            .with_default(&config.endpoint)
            .prompt()
            .context("Failed to read endpoint URL")?;
        config.set_endpoint(url.trim())?;
    } else {
        if let Some(url) = url {
            config.set_endpoint(&url)?;
        }
        if let Some(dir) = asset_dir {
            config.set_asset_dir(dir);
        }
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

/// Output choices for one `show` run.
#[derive(Debug, Default)]
struct ShowOptions {
    json: bool,
    svg: Option<PathBuf>,
    asset_dir: Option<PathBuf>,
}

async fn show(
    config: &mut Config,
    url: Option<String>,
    json: bool,
    svg: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(url) = url {
        config.set_endpoint(&url)?;
    }
    let source = source_from_config(config)?;
    let opts = ShowOptions { json, svg, asset_dir: config.asset_dir.clone() };

    let dismissed = async {
        // Without a Ctrl-C listener the screen simply cannot be dismissed.
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    run_show(source, &opts, &mut io::stdout(), &mut io::stderr(), dismissed).await
}

/// Mount a view, paint the loading screen to `status`, then paint the
/// resolved screen to `out`.
///
/// If `dismissed` completes first the view is unmounted and nothing more is
/// painted.
async fn run_show(
    source: Arc<dyn WeatherDataSource>,
    opts: &ShowOptions,
    out: &mut dyn Write,
    status: &mut dyn Write,
    dismissed: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let asset_dir = opts.asset_dir.as_deref();

    let mut view = WeatherView::mount();
    let pending =
        view.start_load(source).ok_or_else(|| anyhow!("Weather view refused to start loading"))?;

    if !opts.json {
        status
            .write_all(view.screen().to_text(asset_dir).as_bytes())
            .context("Failed to write loading screen")?;
        status.flush().context("Failed to write loading screen")?;
    }

    tokio::select! {
        outcome = pending.resolve() => {
            view.complete(outcome);
        }
        _ = dismissed => {
            view.unmount();
            return Ok(());
        }
    }

    let screen = view.screen();
    let rendered = if opts.json {
        let mut json =
            serde_json::to_string_pretty(&screen).context("Failed to serialize screen")?;
        json.push('\n');
        json
    } else {
        screen.to_text(asset_dir)
    };
    out.write_all(rendered.as_bytes()).context("Failed to write screen")?;

    if let Some(path) = &opts.svg {
        if screen.is_ready() {
            write_chart(path)?;
        } else {
            tracing::debug!(path = %path.display(), "weather not loaded, skipping chart output");
        }
    }

    Ok(())
}

fn chart(out: Option<PathBuf>) -> anyhow::Result<()> {
    match out {
        Some(path) => write_chart(&path),
        None => {
            print!("{}", chart_svg());
            Ok(())
        }
    }
}

fn chart_svg() -> String {
    render_svg(&layout_bars(rain_chance_samples()))
}

fn write_chart(path: &Path) -> anyhow::Result<()> {
    fs::write(path, chart_svg())
        .with_context(|| format!("Failed to write chart to {}", path.display()))
}
