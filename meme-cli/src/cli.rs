//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use meme_core::{PositionId, SizeClass, TextBlock};

/// meme - caption images with classic stroked meme text
#[derive(Parser, Debug)]
#[command(name = "meme")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Caption an image and write the result as JPEG
    #[command(alias = "r")]
    Render(RenderArgs),

    /// List anchor positions and size classes
    Positions,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Source image (JPEG, PNG or WebP)
    #[arg(short = 'i', long = "image")]
    pub image: PathBuf,

    /// Text block as <position>:<size>:<text>, e.g. top:large:hello there
    #[arg(short = 'b', long = "block", value_parser = parse_block)]
    pub blocks: Vec<TextBlock>,

    /// JSON file with a list of {"text", "position", "font_size"} objects
    #[arg(long = "blocks")]
    pub blocks_file: Option<PathBuf>,

    /// Directory for generated memes (overrides the config file)
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// JSON render config
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Font file to try, in order; replaces the configured list
    #[arg(short = 'f', long = "font")]
    pub fonts: Vec<PathBuf>,

    /// JPEG quality, 75-100 (overrides the config file; default 92)
    #[arg(short = 'q', long = "quality", value_parser = clap::value_parser!(u8).range(75..=100))]
    pub quality: Option<u8>,
}

/// Parse `<position>:<size>:<text>`. The text may itself contain colons.
pub fn parse_block(arg: &str) -> Result<TextBlock, String> {
    let mut parts = arg.splitn(3, ':');
    let (Some(position), Some(size), Some(text)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected <position>:<size>:<text>, got {arg:?}"));
    };

    let position: PositionId = position.trim().parse().map_err(|e| format!("{e}"))?;
    let size_class = parse_size_class(size.trim())?;
    let block = TextBlock::new(text, position, size_class);
    block.validate().map_err(|e| e.to_string())?;
    Ok(block)
}

fn parse_size_class(name: &str) -> Result<SizeClass, String> {
    SizeClass::ALL
        .into_iter()
        .find(|size| size.as_str() == name)
        .ok_or_else(|| {
            let known: Vec<_> = SizeClass::ALL.iter().map(|s| s.as_str()).collect();
            format!("unknown size {name:?} (expected one of {})", known.join(", "))
        })
}

// ===================================================================
// Tests
// ===================================================================
