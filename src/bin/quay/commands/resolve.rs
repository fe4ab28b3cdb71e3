//! `quay resolve` command

use std::path::Path;

use anyhow::{bail, Result};

use crate::cli::ResolveArgs;
use quay::core::configuration::BuildConfiguration;
use quay::core::manifest::ModuleDescriptor;
use quay::util::diagnostic;
use quay::util::fs::RealFs;

pub fn execute(args: ResolveArgs, color: bool) -> Result<()> {
    let descriptor = ModuleDescriptor::load(&args.descriptor)?;
    let configuration: BuildConfiguration = args.config.parse()?;

    let descriptor_dir = args.descriptor.parent().unwrap_or(Path::new("."));
    let lib_dir = args
        .lib_dir
        .clone()
        .unwrap_or_else(|| descriptor_dir.join("ThirdParty").join("Lib"));

    let resolution = match quay::resolve_descriptor(
        &descriptor,
        &args.platform,
        configuration,
        lib_dir,
        &RealFs,
    ) {
        Ok(resolution) => resolution,
        Err(err) => {
            diagnostic::emit(&err.to_diagnostic(), color);
            bail!("resolution failed for `{}`", descriptor.module.name);
        }
    };

    for diag in &resolution.diagnostics {
        diagnostic::emit(diag, color);
    }

    match args.format.as_str() {
        "json" => print_json(&descriptor, &args, configuration, &resolution)?,
        "text" => print_text(&descriptor, &args, configuration, &resolution),
        other => bail!("unknown output format `{}` (expected text or json)", other),
    }

    Ok(())
}

fn print_json(
    descriptor: &ModuleDescriptor,
    args: &ResolveArgs,
    configuration: BuildConfiguration,
    resolution: &quay::Resolution,
) -> Result<()> {
    let out = serde_json::json!({
        "module": descriptor.module.name,
        "platform": args.platform,
        "configuration": configuration.name(),
        "resolution": resolution,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn print_text(
    descriptor: &ModuleDescriptor,
    args: &ResolveArgs,
    configuration: BuildConfiguration,
    resolution: &quay::Resolution,
) {
    println!(
        "Link plan for '{}' ({} {}, {} archives):",
        descriptor.module.name, args.platform, configuration, resolution.variant
    );
    println!();

    if resolution.link.libraries.is_empty() {
        println!("  (no libraries resolved)");
    }
    for (index, path) in resolution.link.libraries.iter().enumerate() {
        println!("  {}. {}", index + 1, path.display());
    }

    print_section("System libraries", &resolution.link.system_libs);
    print_section("Frameworks", &resolution.link.frameworks);
    print_section("Defines", &resolution.link.defines);

    if !resolution.link.include_dirs.is_empty() {
        println!();
        println!("Include dirs:");
        for dir in &resolution.link.include_dirs {
            println!("  - {}", dir.display());
        }
    }
}

fn print_section(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}:", title);
    for item in items {
        println!("  - {}", item);
    }
}
