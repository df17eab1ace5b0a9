pub(crate) mod logging;
pub(crate) mod terminal;

// Public API - utilities used by the binary and commands
pub use logging::init_logging;
pub use terminal::{paint_status, ColorChoice, OutputConfig};
