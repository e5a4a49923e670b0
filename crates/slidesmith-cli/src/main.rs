use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use slidesmith_core::{
    RenderConfig, build_slideshow, format_script, format_slideshow_readable, generate_outline,
    get_cache_dir, get_images_path, get_manifest_path, get_script_path, load_images, load_script,
    save_images, save_manifest, save_script, search_images,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

#[derive(Parser)]
#[command(name = "slidesmith")]
#[command(
    about = "Turn a topic into a captioned slideshow manifest using Wikimedia Commons images"
)]
struct Cli {
    /// Slideshow topic
    topic: String,

    /// Target duration in minutes
    #[arg(short, long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(30..=60))]
    minutes: u32,

    /// Seconds each slide stays on screen
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(5..=20))]
    slide_secs: u32,

    /// Image search query. Defaults to the topic.
    #[arg(short, long)]
    query: Option<String>,

    /// Leave background music out of the render config
    #[arg(long)]
    no_music: bool,

    /// Force re-generation even if cached files exist
    #[arg(short, long)]
    force: bool,

    /// Write the slideshow manifest here instead of the cache
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let topic = cli.topic;
    let query = cli.query.unwrap_or_else(|| topic.clone());

    let config = RenderConfig {
        width: 1280,
        height: 720,
        fps: 24,
        slide_duration_sec: cli.slide_secs,
        total_duration_sec: cli.minutes * 60,
        background_music: !cli.no_music,
    };
    let slides_needed = config.required_slide_count();

    // Setup cache directory
    let cache_dir = get_cache_dir(&topic);
    fs::create_dir_all(&cache_dir).await?;

    println!(
        "\n{}  {}\n",
        style("slidesmith").cyan().bold(),
        style("Slideshow Builder").dim()
    );
    println!("{}", style("─".repeat(60)).dim());

    let total_start = Instant::now();

    // Step 1: Script (check cache; the cached file may have been hand-edited)
    let step_start = Instant::now();
    let script_path = get_script_path(&cache_dir);
    let script = if !cli.force && script_path.exists() {
        let script = load_script(&script_path).await?;
        println!(
            "{} Script ready {}",
            style("✓").green().bold(),
            style("(cached, edits honored)").dim()
        );
        script
    } else {
        let spinner = create_spinner("Generating script...");
        let sections = generate_outline(&topic, cli.minutes);
        let script = format_script(&sections);
        save_script(&script, &script_path).await?;
        spinner.finish_with_message(format!(
            "{} Script generated: {} sections {}",
            style("✓").green().bold(),
            sections.len(),
            style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
        ));
        script
    };

    // Step 2: Images (check cache; a failed search must not stop the build)
    let step_start = Instant::now();
    let images_path = get_images_path(&cache_dir, &query);
    let images = if !cli.force && images_path.exists() {
        let images = load_images(&images_path).await?;
        println!(
            "{} Images loaded: {} {}",
            style("✓").green().bold(),
            images.len(),
            style("(cached)").dim()
        );
        images
    } else {
        let limit = (slides_needed + 10).max(60);
        let spinner = create_spinner("Searching Wikimedia Commons...");
        match search_images(&query, limit).await {
            Ok(images) => {
                save_images(&images, &images_path).await?;
                spinner.finish_with_message(format!(
                    "{} Images found: {} {}",
                    style("✓").green().bold(),
                    images.len(),
                    style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
                ));
                images
            }
            Err(e) => {
                spinner.finish_with_message(format!(
                    "{} Image search failed: {}",
                    style("!").yellow().bold(),
                    style(e.to_string()).dim()
                ));
                // Keep whatever the last run fetched, or fall back to the
                // built-in placeholder at bind time.
                if images_path.exists() {
                    load_images(&images_path).await.unwrap_or_default()
                } else {
                    Vec::new()
                }
            }
        }
    };

    // Step 3: Build slides from the current script text
    let step_start = Instant::now();
    let spinner = create_spinner("Building slides...");
    let manifest = build_slideshow(&script, &images, config, &topic);
    let manifest_path = cli.out.unwrap_or_else(|| get_manifest_path(&cache_dir));
    save_manifest(&manifest, &manifest_path).await?;
    spinner.finish_with_message(format!(
        "{} Slides built: {} {}",
        style("✓").green().bold(),
        manifest.slides.len(),
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    ));

    println!(
        "\n{} {}",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );
    println!(
        "{} {}",
        style("Saved:").dim(),
        style(manifest_path.display()).cyan()
    );
    println!(
        "{} {}\n",
        style("Script:").dim(),
        style(script_path.display()).cyan()
    );
    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    let readable = format_slideshow_readable(&manifest);
    println!("{}", readable);

    Ok(())
}
