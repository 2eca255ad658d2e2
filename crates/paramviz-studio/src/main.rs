mod app;
mod config;
mod shapes;

use paramviz_engine::device::GpuInit;
use paramviz_engine::logging::{init_logging, LoggingConfig};
use paramviz_engine::window::{Runtime, RuntimeConfig};

use crate::app::PlotApp;
use crate::config::PlotConfig;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = PlotConfig::default();
    let batch = shapes::build_batch(&config)?;

    // The dump is a debugging aid; a failed write does not stop the viewer.
    if let Err(err) = shapes::dump_batch(&config.dump_path, &batch) {
        log::error!("vertex dump failed: {:#}", anyhow::Error::from(err));
    }

    let app = PlotApp::new(batch, config.clear_color);
    Runtime::run(RuntimeConfig::default(), GpuInit::default(), app)
}
