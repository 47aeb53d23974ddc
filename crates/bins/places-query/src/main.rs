use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use places_query::{render, run, Error, Opts, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let opts = Opts::parse();

    let loglevel = if opts.debug {
        "places_query=debug,places_client=debug,places=debug"
    } else {
        "places_query=warn,places_client=warn"
    };

    // stdout only carries the list of places
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| loglevel.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::new(&opts)?;
    tracing::debug!(?settings, "settings loaded");

    let places = run(&opts, settings).await?;
    println!("{}", render(&places)?);

    Ok(())
}
