/// Injected at build time by release tooling.
const REVISION: Option<&str> = option_env!("NRDECO_REVISION");

pub fn version_line() -> String {
    format!(
        "[nrdeco] Version {}-{}",
        env!("CARGO_PKG_VERSION"),
        REVISION.unwrap_or("unknown")
    )
}

pub fn run() {
    println!("{}", version_line());
}
