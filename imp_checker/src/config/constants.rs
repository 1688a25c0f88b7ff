pub mod compile_time {
    pub mod file_processing {
        /// Maximum input file size accepted for checking (1MB)
        pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

        /// Threshold for flagging a file as "large" in log output (64KB)
        pub const LARGE_FILE_THRESHOLD: u64 = 64 * 1024;
    }

    pub mod logging {
        /// Maximum events retained by the in-memory test logger
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length; longer messages are truncated
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
