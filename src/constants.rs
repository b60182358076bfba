//! Constants used throughout the stencil application

/// Prefix marking a template argument as a path to a template file
pub const FILE_TEMPLATE_PREFIX: &str = "file://";

/// Size of each read from standard input
pub const STDIN_CHUNK_SIZE: usize = 4 * 1024;

/// Deepest nesting of `render()` calls before rendering is aborted
pub const MAX_RENDER_DEPTH: usize = 32;

/// Indentation width of beautified JSON
pub const JSON_INDENT: usize = 2;

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
