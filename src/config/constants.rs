pub const DEFAULT_BUFFER_SIZE: usize = 16 * 1024 * 1024; // 16 MiB
pub const MAX_STREAM_LENGTH: i64 = i64::MAX;

// Environment variables
pub const ENV_BUFFER_SIZE: &str = "RANDSTREAM_BUFFER_SIZE";
pub const ENV_LENGTH: &str = "RANDSTREAM_LENGTH";

// Config keys
pub const KEY_BUFFER_SIZE: &str = "buffer_size";
pub const KEY_LENGTH: &str = "length";
