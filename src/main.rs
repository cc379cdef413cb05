use std::path::Path;

use anyhow::Context;
use capture_plot::{app, config, figure};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = Path::new(config::BIN_CSV_PATH);
    let figure = figure::open_multi_series(path)
        .with_context(|| format!("loading {}", path.display()))?;

    app::show(figure)
}
