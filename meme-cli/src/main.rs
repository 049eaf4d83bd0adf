//! meme: command-line front end for the meme text-layout engine.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use meme_core::{parse_blocks_json, PositionId, SizeClass, TextBlock};
use meme_render::{Compositor, RenderConfig};

use crate::cli::{Cli, Commands, RenderArgs};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => render(args),
        Commands::Positions => {
            print_positions();
            Ok(())
        }
    }
}

/// Config file first, then CLI overrides on top.
fn build_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if !args.fonts.is_empty() {
        config.font_paths = args.fonts.clone();
    }
    if let Some(quality) = args.quality {
        config.jpeg_quality = quality;
    }
    Ok(config)
}

fn collect_blocks(args: &RenderArgs) -> Result<Vec<TextBlock>> {
    let mut blocks = Vec::new();

    if let Some(path) = &args.blocks_file {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading blocks from {}", path.display()))?;
        let parsed = parse_blocks_json(&json)
            .with_context(|| format!("parsing blocks from {}", path.display()))?;
        for (index, block) in parsed.iter().enumerate() {
            block
                .validate()
                .with_context(|| format!("block {index} in {}", path.display()))?;
        }
        blocks.extend(parsed);
    }
    blocks.extend(args.blocks.iter().cloned());

    if blocks.is_empty() {
        bail!("no text blocks given; use --block or --blocks");
    }
    Ok(blocks)
}

fn render(args: RenderArgs) -> Result<()> {
    let config = build_config(&args)?;
    let blocks = collect_blocks(&args)?;

    info!(
        "rendering {} block(s) onto {}",
        blocks.len(),
        args.image.display()
    );

    let compositor = Compositor::new(config);
    let meme = compositor
        .generate(args.image.as_path(), &blocks)
        .with_context(|| format!("generating meme from {}", args.image.display()))?;

    if meme.stats.bitmap_fallback {
        log::warn!("no TrueType font found, used the built-in bitmap font");
    }
    println!("{}", meme.path.display());
    Ok(())
}

fn print_positions() {
    println!("{:<10} {:>6} {:>6}  {:<7} {:<7}", "position", "x", "y", "h", "v");
    for position in PositionId::ALL {
        let g = meme_layout::resolve(position);
        println!(
            "{:<10} {:>6.2} {:>6.2}  {:<7} {:<7}",
            position.as_str(),
            g.x_ratio,
            g.y_ratio,
            format!("{:?}", g.h_align).to_lowercase(),
            format!("{:?}", g.v_align).to_lowercase(),
        );
    }

    println!();
    println!("{:<10} {:>6}", "size", "ratio");
    for size in SizeClass::ALL {
        println!("{:<10} {:>6.2}", size.as_str(), size.height_ratio());
    }
}

// ===================================================================
// Tests
// ===================================================================
