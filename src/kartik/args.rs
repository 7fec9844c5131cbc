use clap::Parser;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

/// Takes no arguments beyond help and version; the card is the whole interface.
#[derive(Parser, Debug)]
#[command(name = "kartik", bin_name = "kartik", version = get_version())]
#[command(about = "Kartik Labhshetwar's business card", long_about = None)]
pub struct Cli {}
