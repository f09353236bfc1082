use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = banner_slideshow::SlideshowConfig::default();
    let path = banner_slideshow::build_slideshow(&config)
        .with_context(|| format!("building {}", config.output.display()))?;

    println!("{}", path.display());
    Ok(())
}
