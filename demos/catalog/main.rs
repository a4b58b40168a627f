//! Browse a services document in the terminal.
//!
//! ```sh
//! cargo run -- services.json
//! RUST_LOG=catalog_pager=debug cargo run -- services.json 2> catalog.log
//! ```

use bubbletea_rs::{Cmd, Model, Msg, Program};
use catalog_pager::prelude::*;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static DOCUMENT: OnceCell<PathBuf> = OnceCell::new();

struct App {
    browser: Browser<Service>,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let path = DOCUMENT
            .get()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("services.json"));
        let browser = Browser::new().with_title("Our Services");
        (Self { browser }, Some(load_cmd(JsonFile::new(path))))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.browser.update(msg)
    }

    fn view(&self) -> String {
        self.browser.view()
    }
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "catalog_pager=warn".into());

    // stderr, so redirecting it keeps the UI intact
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/services.json")));
    DOCUMENT.set(path).ok();

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
