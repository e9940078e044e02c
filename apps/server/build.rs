use chrono::{DateTime, SecondsFormat, Utc};

fn main() {
    // SOURCE_DATE_EPOCH pins the stamp for reproducible builds.
    let stamp = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    println!(
        "cargo:rustc-env=VERSO_BUILD_TIME_UTC={}",
        stamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    );

    // No rerun-if directives here. Emitting one would restrict reruns to that
    // single input and freeze the stamp across rebuilds; cargo's default
    // (rerun when any package input changes) keeps a second build stamped
    // with the second build's time.
}
