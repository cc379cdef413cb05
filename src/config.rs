//! Fixed inputs and layout constants. Nothing here is read at runtime.

/// Directory the capture tool (and `generate-sample`) writes into.
pub const BUILD_DIR: &str = "./build";

/// Per-frame spectrum amplitudes: header of bin frequencies, one row per frame.
pub const BIN_CSV_PATH: &str = "./build/bin.csv";

/// Same layout as [`BIN_CSV_PATH`] in decibels. Not read by the viewers.
pub const DB_CSV_PATH: &str = "./build/db.csv";

/// Raw left-channel samples, no header.
pub const LEFT_CHANNEL_CSV_PATH: &str = "./build/left_channel.csv";

/// Visible y-range of the waveform view. Data outside is clipped on screen only.
pub const WAVEFORM_Y_LIMITS: (f64, f64) = (-1.0, 1.0);

/// Legend reference corner in axes-fraction coordinates (top-right).
pub const LEGEND_ANCHOR: (f64, f64) = (1.0, 1.0);

/// Default figure size in logical pixels (6.4 x 4.8 in at 100 dpi).
pub const DEFAULT_FIGURE_SIZE: [f32; 2] = [640.0, 480.0];

/// Waveform figure size, 10:1 (10 x 1 in at 100 dpi).
pub const WAVEFORM_FIGURE_SIZE: [f32; 2] = [1000.0, 100.0];
