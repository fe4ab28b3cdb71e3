//! `quay platforms` command

use anyhow::Result;

use quay::core::platform::Platform;

pub fn execute() -> Result<()> {
    println!(
        "{:<10} {:<8} {:<10} {:<13} {:<20} {}",
        "Platform", "Prefix", "Extension", "Debug suffix", "System libs", "Frameworks"
    );

    for platform in Platform::ALL {
        let profile = platform.profile();
        println!(
            "{:<10} {:<8} {:<10} {:<13} {:<20} {}",
            platform.name(),
            if profile.lib_prefix.is_empty() {
                "(none)"
            } else {
                profile.lib_prefix
            },
            profile.lib_extension,
            profile.debug_suffix,
            join_or_dash(profile.system_libs),
            join_or_dash(profile.frameworks),
        );
    }

    Ok(())
}

fn join_or_dash(items: &[&str]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
