use std::path::PathBuf;

use crate::domain::{AssetSpec, BundleConfig};
use crate::environment::BuildEnvironment;
use crate::error::Result;
use crate::output::{print_command, print_info, print_warning};

/// Name of the packaging tool on PATH, also the pip package name
pub const PYINSTALLER: &str = "pyinstaller";

/// Output directory PyInstaller writes the bundled executable to
const DIST_DIR: &str = "dist";

/// Optional localization package providing the Japanese UI font
const FONT_PACKAGE: &str = "japanize_kivy";
const FONT_RELATIVE_PATH: [&str; 3] = ["resources", "ipaexg00401", "ipaexg.ttf"];
const FONT_BUNDLE_DEST: &str = "japanize_kivy/resources/ipaexg00401";

// PyInstaller uses the platform path-list separator in --add-data pairs
const ADD_DATA_SEP: char = if cfg!(windows) { ';' } else { ':' };

/// Verify PyInstaller is available, installing it via pip when missing.
///
/// Runs on every invocation; pip is idempotent when the tool is already
/// satisfied, so there is no cached "verified" state. An install failure
/// propagates to the caller.
pub fn ensure_packager<E: BuildEnvironment>(env: &E) -> Result<()> {
    if env.tool_available(PYINSTALLER) {
        return Ok(());
    }

    print_info("PyInstaller is not installed. Installing...");
    env.install_package(PYINSTALLER)
}

/// Resolve the bundled font asset from the installed japanize_kivy
/// package. Absence is non-fatal: the viewer still builds, without
/// Japanese font support, and a warning tells the operator why.
pub fn locate_font<E: BuildEnvironment>(env: &E) -> Option<AssetSpec> {
    match env.resolve_package_dir(FONT_PACKAGE) {
        Some(package_dir) => {
            let mut font_path = package_dir;
            for part in FONT_RELATIVE_PATH {
                font_path.push(part);
            }
            Some(AssetSpec::new(
                font_path.to_string_lossy().into_owned(),
                FONT_BUNDLE_DEST,
            ))
        }
        None => {
            print_warning(&format!(
                "{} not found; building without Japanese font support",
                FONT_PACKAGE
            ));
            None
        }
    }
}

fn add_data_arg(asset: &AssetSpec) -> String {
    format!("--add-data={}{}{}", asset.source, ADD_DATA_SEP, asset.dest)
}

/// Assemble the PyInstaller argument list.
///
/// Pure and deterministic. The entry point is always the final
/// argument; the font directive, when present, goes right before it.
pub fn build_args(config: &BundleConfig, font: Option<&AssetSpec>) -> Vec<String> {
    let mut args = vec![format!("--name={}", config.output_name)];

    if config.onefile {
        args.push("--onefile".to_string());
    }
    if config.windowed {
        args.push("--windowed".to_string());
    }

    for asset in &config.assets {
        args.push(add_data_arg(asset));
    }

    for import in &config.hidden_imports {
        args.push(format!("--hidden-import={}", import));
    }

    if let Some(font) = font {
        args.push(add_data_arg(font));
    }

    args.push(config.entry_point.clone());
    args
}

/// Expected location of the bundled executable
pub fn artifact_path(config: &BundleConfig) -> PathBuf {
    PathBuf::from(DIST_DIR).join(format!(
        "{}{}",
        config.output_name,
        std::env::consts::EXE_SUFFIX
    ))
}

/// Run the whole packaging pipeline: ensure the tool, locate the
/// optional font, assemble the command, invoke PyInstaller. Returns the
/// expected artifact path on success.
pub fn run<E: BuildEnvironment>(env: &E, config: &BundleConfig) -> Result<PathBuf> {
    ensure_packager(env)?;

    let font = locate_font(env);
    let args = build_args(config, font.as_ref());

    print_command(PYINSTALLER, &args);
    env.run_tool(PYINSTALLER, &args)?;

    Ok(artifact_path(config))
}
