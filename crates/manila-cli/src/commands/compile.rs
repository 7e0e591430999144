//! Compile command implementation
//!
//! Merges the manifest layers and overrides, compiles the selected feature
//! areas, and prints the directives as text or JSON.

use std::path::PathBuf;

use colored::Colorize;

use manila_core::{
    Compilation, Compiler, Directive, FeatureArea, ManifestResolver, PlatformDescriptor,
};

use crate::error::{CliError, Result};

/// Inputs of the compile command
#[derive(Debug, Clone, Default)]
pub struct CompileArgs {
    pub areas: Vec<String>,
    pub manifests: Vec<PathBuf>,
    pub overrides: Vec<String>,
    pub os_family: Option<String>,
    pub json: bool,
    pub show_secrets: bool,
    pub config_dir: Option<PathBuf>,
}

/// Run the compile command
pub fn run_compile(args: &CompileArgs) -> Result<()> {
    let compilations = compile(args)?;

    for compilation in &compilations {
        for notice in &compilation.deprecations {
            eprintln!(
                "{} [{}] {}",
                "warning:".yellow().bold(),
                compilation.area,
                notice
            );
        }
    }

    if args.json {
        let output: Vec<Compilation> = if args.show_secrets {
            compilations
        } else {
            compilations.iter().map(Compilation::redacted).collect()
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_compilations(&compilations, args.show_secrets);
    }

    Ok(())
}

/// Resolve every input layer and compile the selected areas
pub fn compile(args: &CompileArgs) -> Result<Vec<Compilation>> {
    let areas = args
        .areas
        .iter()
        .map(|name| name.parse::<FeatureArea>())
        .collect::<manila_core::Result<Vec<_>>>()?;

    if !args.overrides.is_empty() && areas.len() != 1 {
        return Err(CliError::user("--set requires exactly one --area"));
    }

    let resolver = match &args.config_dir {
        Some(dir) => ManifestResolver::with_global_config_dir(args.manifests.clone(), dir.clone()),
        None => ManifestResolver::new(args.manifests.clone()),
    };
    let mut manifest = resolver.resolve()?;

    if !areas.is_empty() {
        manifest.retain_areas(&areas);
        for area in &areas {
            manifest.declare(*area);
        }
    }
    for raw in &args.overrides {
        manifest.apply_override(areas[0], raw)?;
    }

    if manifest.areas().next().is_none() {
        return Err(CliError::user(
            "Nothing to compile: pass --area or a manifest with area tables",
        ));
    }

    let platform = match &args.os_family {
        Some(family) => PlatformDescriptor::new(family.parse()?),
        None => manifest.platform()?,
    };

    Ok(Compiler::new(platform).compile_manifest(&manifest)?)
}

fn print_compilations(compilations: &[Compilation], show_secrets: bool) {
    let mut total = 0;
    for compilation in compilations {
        println!(
            "{} {} ({})",
            "Area".blue().bold(),
            compilation.area.to_string().yellow(),
            compilation.platform.family.to_string().cyan()
        );

        for directive in &compilation.directives {
            let line = if show_secrets {
                match directive {
                    Directive::ConfigWrite { key, value, .. } => format!("{key} = {value}"),
                    other => other.to_string(),
                }
            } else {
                directive.to_string()
            };
            match directive {
                Directive::ConfigWrite { .. } => println!("  {} {}", "+".green(), line),
                Directive::PackageEnsure { .. } => println!("  {} {}", "*".cyan(), line.cyan()),
            }
        }
        println!();
        total += compilation.directives.len();
    }

    println!("{} {} directives", "Total:".dimmed(), total);
}

#[cfg(test)]
mod tests {
    use super::*;
    use manila_core::{OsFamily, ParamValue};
    use tempfile::TempDir;

    fn args_in(dir: &TempDir) -> CompileArgs {
        CompileArgs {
            config_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_compile_area_with_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let args = CompileArgs {
            areas: vec!["nova".into()],
            overrides: vec!["auth_type=password".into(), "timeout=30".into()],
            os_family: Some("Debian".into()),
            ..args_in(&temp_dir)
        };

        let compilations = compile(&args).unwrap();
        assert_eq!(compilations.len(), 1);
        assert_eq!(compilations[0].platform.family, OsFamily::Debian);
        assert_eq!(
            compilations[0].settings.value("nova/timeout"),
            Some(&ParamValue::Int(30))
        );
        assert!(compilations[0].settings.contains("nova/password"));
    }

    #[test]
    fn test_set_requires_single_area() {
        let temp_dir = TempDir::new().unwrap();
        let args = CompileArgs {
            overrides: vec!["timeout=30".into()],
            ..args_in(&temp_dir)
        };
        assert!(matches!(compile(&args), Err(CliError::User { .. })));
    }

    #[test]
    fn test_nothing_to_compile() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(compile(&args_in(&temp_dir)), Err(CliError::User { .. })));
    }

    #[test]
    fn test_area_flag_filters_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("site.toml");
        std::fs::write(&manifest, "[nova]\ntimeout = 5\n[ganesha]\nganesha_config_dir = \"/etc/ganesha\"\n").unwrap();

        let args = CompileArgs {
            areas: vec!["ganesha".into()],
            manifests: vec![manifest],
            os_family: Some("RedHat".into()),
            ..args_in(&temp_dir)
        };

        let compilations = compile(&args).unwrap();
        assert_eq!(compilations.len(), 1);
        assert_eq!(compilations[0].area, FeatureArea::Ganesha);
        assert_eq!(compilations[0].package_ensures().count(), 1);
    }

    #[test]
    fn test_run_compile_json() {
        let temp_dir = TempDir::new().unwrap();
        let args = CompileArgs {
            areas: vec!["ganesha".into()],
            json: true,
            ..args_in(&temp_dir)
        };
        assert!(run_compile(&args).is_ok());
    }
}
