pub const SITE_NAME: &str = "ReadTrack";

/// How long a toast stays visible before dismissing itself.
pub const TOAST_DURATION_MS: u32 = 3_000;
