/// Configuration for input-flood protection on the game WebSocket.
/// All values are in seconds or counts per second.
pub const MAX_REQUESTS_PER_SECOND: u32 = 30;
pub const MAX_ERRORS_PER_SECOND: u32 = 5;
pub const BAN_DURATION_SECONDS: u64 = 60;
