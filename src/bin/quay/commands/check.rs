//! `quay check` command

use anyhow::Result;

use crate::cli::CheckArgs;
use quay::core::manifest::{ManifestEntry, ModuleDescriptor};

pub fn execute(args: CheckArgs) -> Result<()> {
    let descriptor = ModuleDescriptor::load(&args.descriptor)?;

    let explicit = descriptor
        .libraries
        .iter()
        .filter(|e| matches!(e, ManifestEntry::Explicit { .. }))
        .count();
    let globs = descriptor.libraries.len() - explicit;

    println!("ok: {}", args.descriptor.display());
    println!(
        "  module `{}`: {} explicit manifest(s), {} glob manifest(s)",
        descriptor.module.name, explicit, globs
    );
    if !descriptor.platform.is_empty() {
        let platforms: Vec<&str> = descriptor.platform.keys().map(String::as_str).collect();
        println!("  platform sections: {}", platforms.join(", "));
    }

    Ok(())
}
