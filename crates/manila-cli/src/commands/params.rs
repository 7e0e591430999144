//! Params command: list what each feature area accepts

use colored::Colorize;

use manila_core::area::Builtin;
use manila_core::{FeatureArea, SERVICE_DEFAULT};

use crate::error::Result;

/// Run the params command
pub fn run_params(area_filter: Option<&str>) -> Result<()> {
    let areas = match area_filter {
        Some(name) => vec![name.parse::<FeatureArea>()?],
        None => FeatureArea::ALL.to_vec(),
    };

    for area in areas {
        println!("{}:", area.to_string().cyan().bold());
        for spec in area.params() {
            let default = match spec.fallback {
                Builtin::Bool(b) => b.to_string(),
                Builtin::Str(s) => s.to_string(),
                Builtin::ServiceDefault => SERVICE_DEFAULT.to_string(),
            };
            match spec.replaced_by {
                Some(replacement) => println!(
                    "  {:<28} {:<8} {}",
                    spec.name.dimmed(),
                    spec.kind,
                    format!("deprecated, use {replacement}").yellow()
                ),
                None => println!(
                    "  {:<28} {:<8} {} (default: {})",
                    spec.name.green(),
                    spec.kind,
                    spec.key,
                    default.dimmed()
                ),
            }
        }
        let packages = area.packages();
        if !packages.is_empty() {
            for package in packages {
                println!(
                    "  {} package {} => {} ({:?})",
                    "*".cyan(),
                    package.name,
                    package.ensure,
                    package.when
                );
            }
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_runs() {
        assert!(run_params(None).is_ok());
    }

    #[test]
    fn test_params_single_area() {
        assert!(run_params(Some("ganesha")).is_ok());
    }

    #[test]
    fn test_params_unknown_area() {
        assert!(run_params(Some("cinder")).is_err());
    }
}
