use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use softraster::image_compat::ImageFramebuffer;
use softraster::{ColorEncoding, RenderState, Scene};

/// Rasterize a scene description into a PNG image
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Scene description file
    scene: PathBuf,

    /// Write the image here instead of the file named by the scene's `png` command
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Depth test from the first draw, as if the scene started with `depth`
    #[arg(long)]
    depth: bool,

    /// Encode colors as sRGB from the first draw, as if the scene started with `sRGB`
    #[arg(long)]
    srgb: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let source = fs::read_to_string(&args.scene)
        .with_context(|| format!("unable to read {}", args.scene.display()))?;

    let mut scene = Scene::with_state(RenderState {
        depth_test: args.depth,
        color_encoding: if args.srgb { ColorEncoding::Srgb } else { ColorEncoding::Linear },
    });

    scene.run(&source).with_context(|| format!("failed to render {}", args.scene.display()))?;

    let output = match args.output.as_deref().or_else(|| scene.output()) {
        Some(output) => output.to_path_buf(),
        None => bail!("no `png` command found in {}", args.scene.display()),
    };

    let framebuffer = match scene.pipeline().framebuffer() {
        Some(framebuffer) => framebuffer,
        None => bail!("{} never created a framebuffer", args.scene.display()),
    };

    framebuffer.save_png(&output).with_context(|| format!("unable to save {}", output.display()))?;

    info!("image saved as {}", output.display());

    Ok(())
}
