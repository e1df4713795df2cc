use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use parallax_core::markup::page_body;
use parallax_core::{page_shell, LayerStack, PageMetadata, ParallaxConfig};

const DEFAULT_SCRIPT: &str = "./pkg/parallax_web.js";

/// Write the pre-rendered parallax page shell
#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// Output file (stdout when omitted)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Module URL of the wasm-bindgen JS glue
    #[arg(long, default_value = DEFAULT_SCRIPT, conflicts_with = "no_script")]
    script: String,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Emit a static page without the wasm bootstrap
    #[arg(long)]
    no_script: bool,
}

impl Options {
    fn script(&self) -> Option<&str> {
        (!self.no_script).then_some(self.script.as_str())
    }
}

fn render(opts: &Options) -> String {
    let stack = LayerStack::default();
    let config = ParallaxConfig::default();
    let mut meta = PageMetadata::default();
    if let Some(title) = &opts.title {
        meta.title = title.clone();
    }
    let body = page_body(&stack, &config, 0.0);
    page_shell(&meta, &body, opts.script())
}

fn main() -> anyhow::Result<()> {
    let opts = Options::parse();
    env_logger::init();
    let html = render(&opts);
    match &opts.out {
        Some(path) => {
            fs::write(path, &html)?;
            log::info!("wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
