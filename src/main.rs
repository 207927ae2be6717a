// src/main.rs

//! Terminal previewer: renders text on a blank canvas and prints it as
//! ASCII shades.
//!
//! ```text
//! bioimage-annotate [--antialias] [--center] [--size WxH] [--color NAME] TEXT
//! ```

use anyhow::{bail, Context}; // Context on every fallible step
use bioimage_annotate::{config::CONFIG, Canvas, Color, NamedColor};
use log::info;

const DEFAULT_WIDTH: usize = 64;
const DEFAULT_HEIGHT: usize = 16;

const USAGE: &str =
    "Usage: bioimage-annotate [--antialias] [--center] [--size WxH] [--color NAME] TEXT";

/// Shades from empty to full intensity.
const SHADES: [char; 4] = [' ', '.', '+', '#'];

#[derive(Debug)]
struct Options {
    text: String,
    width: usize,
    height: usize,
    color: Color,
    antialias: bool,
    center: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Options> {
    let mut options = Options {
        text: String::new(),
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        color: CONFIG.text.color,
        antialias: CONFIG.text.antialias,
        center: CONFIG.text.center,
    };
    let mut text = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--antialias" => options.antialias = true,
            "--center" => options.center = true,
            "--size" => {
                let size = args.next().context("--size needs a WxH value")?;
                let (w, h) = size
                    .split_once('x')
                    .with_context(|| format!("Invalid size {:?}, expected WxH", size))?;
                options.width = w.parse().with_context(|| format!("Invalid width {:?}", w))?;
                options.height = h.parse().with_context(|| format!("Invalid height {:?}", h))?;
            }
            "--color" => {
                let name = args.next().context("--color needs a color name")?;
                options.color = NamedColor::from_name(&name)
                    .with_context(|| format!("Unknown color {:?}", name))?
                    .into();
            }
            _ if text.is_none() => text = Some(arg),
            _ => bail!("Unexpected argument {:?}", arg),
        }
    }

    options.text = text.context(USAGE)?;
    // Let shells pass multi-line text as a literal "\n".
    options.text = options.text.replace("\\n", "\n");
    Ok(options)
}

fn shade(intensity: u8) -> char {
    SHADES[(intensity as usize * (SHADES.len() - 1) + 127) / 255]
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let options = parse_args(std::env::args().skip(1))?;
    info!(
        "Rendering {:?} on {}x{} canvas",
        options.text, options.width, options.height
    );

    let mut canvas = Canvas::blank(options.width, options.height)
        .context("Failed to allocate preview canvas")?;
    let (x, y) = if options.center {
        ((options.width / 2) as isize, (options.height / 2) as isize)
    } else {
        (0, 0)
    };
    canvas
        .text_at(
            &options.text,
            x,
            y,
            options.color,
            options.antialias,
            options.center,
        )
        .context("Failed to render text")?;

    // Preview the brightest channel so any text color shows up.
    let planes: Vec<Vec<u8>> = (0..3).map(|c| canvas.channel(c)).collect();
    for row in 0..canvas.height() {
        let line: String = (0..canvas.width())
            .map(|col| {
                let i = row * canvas.width() + col;
                shade(planes.iter().map(|p| p[i]).max().unwrap_or(0))
            })
            .collect();
        println!("{}", line.trim_end());
    }

    Ok(())
}
