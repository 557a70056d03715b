//! `tracing` subscriber writing to the browser console.
//!
//! Events go through [`tracing_wasm::WASMLayer`], which routes them to
//! `console.error/warn/info/debug` by level.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Install the console subscriber. Later calls are ignored.
pub fn init(max_level: Level) {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level)
        .set_report_logs_in_timings(false)
        .build();
    let _ = tracing_subscriber::registry()
        .with(WASMLayer::new(config))
        .try_init();
}
