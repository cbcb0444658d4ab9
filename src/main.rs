use anyhow::Context;
use browser::BrowserApp;
use gfx::ViewportConfig;
use net::{HttpFetcher, Location};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [url] = args.as_slice() else {
        eprintln!("Usage: leafview <URL>");
        std::process::exit(1);
    };

    let location = Location::parse(url).with_context(|| format!("cannot open {url}"))?;
    log::info!("starting at {location}");

    let fetcher = HttpFetcher::new().context("cannot set up the HTTP client")?;
    let config = ViewportConfig::default();
    let app = BrowserApp::new(location.to_string(), Box::new(fetcher), config);
    platform::run(app, config).context("window closed with an error")?;
    Ok(())
}
