pub fn default_timeout() -> u64 {
    30
}

pub fn default_user_agent() -> String {
    format!("fpost/{}", env!("CARGO_PKG_VERSION"))
}
