use chrono::DateTime;

/// Branch reported when the build tooling didn't inject one.
pub const DEFAULT_BRANCH: &str = "local";

/// Commit reported when the build tooling didn't inject one.
pub const DEFAULT_COMMIT: &str = "unknown";

/// RFC 822 layout used for the build timestamp.
const BUILD_TIME_FORMAT: &str = "%d %b %y %H:%M UTC";

const UNKNOWN_BUILD_TIME: &str = "unknown";

/// Metadata stamped into the binary at compile time.
///
/// Built once at startup and handed to the commands that report it.
/// `branch`, `commit` and `build_time` come from the `LINTCFG_BRANCH`,
/// `LINTCFG_COMMIT` and `LINTCFG_BUILD_TIME` variables seen by the compiler.
/// When `LINTCFG_BUILD_TIME` is absent the build script's timestamp is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// Branch the binary was built from.
    pub branch: String,

    /// Commit the binary was built from.
    pub commit: String,

    /// When the binary was built.
    pub build_time: String,

    /// `rustc --version` of the compiler that produced the binary, when known.
    pub toolchain: Option<String>,
}

impl BuildInfo {
    /// Collects the values recorded for this build.
    pub fn from_build_env() -> Self {
        Self {
            branch: non_empty(option_env!("LINTCFG_BRANCH"))
                .unwrap_or(DEFAULT_BRANCH)
                .to_string(),
            commit: non_empty(option_env!("LINTCFG_COMMIT"))
                .unwrap_or(DEFAULT_COMMIT)
                .to_string(),
            build_time: non_empty(option_env!("LINTCFG_BUILD_TIME"))
                .map(str::to_string)
                .unwrap_or_else(|| format_build_epoch(option_env!("LINTCFG_BUILD_EPOCH"))),
            toolchain: non_empty(option_env!("LINTCFG_RUSTC_VERSION")).map(str::to_string),
        }
    }
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn format_build_epoch(epoch: Option<&str>) -> String {
    epoch
        .and_then(|secs| secs.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|time| time.format(BUILD_TIME_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN_BUILD_TIME.to_string())
}
