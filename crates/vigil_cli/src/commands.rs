//! Command implementations

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vigil_theme::{
    resolve, ComponentKind, Density, PrimaryColor, RadiusLevel, ShadowMode, Size, StyleError,
    StyleRequest, ThemeConfig, ThemeError, ThemeSettings, CONFIG_FILE,
};

/// Theme settings from `config`, or from `./vigil.toml`, or the defaults
pub fn load_settings(config: Option<&Path>) -> Result<ThemeSettings> {
    match config {
        Some(path) => {
            let config = ThemeConfig::load_from_dir(path)
                .with_context(|| format!("loading theme from {}", path.display()))?;
            Ok(config.theme)
        }
        None => match ThemeConfig::load_from_dir(Path::new(".")) {
            Ok(config) => Ok(config.theme),
            Err(ThemeError::NotFound(_)) => {
                tracing::debug!("no {CONFIG_FILE} in working directory, using default theme");
                Ok(ThemeSettings::default())
            }
            Err(err) => Err(err).context("loading ./vigil.toml"),
        },
    }
}

/// Write the default theme to `dir/vigil.toml`
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let content = ThemeConfig::default().to_toml()?;
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn describe_theme(settings: &ThemeSettings) -> String {
    let primary = settings.primary();
    format!(
        "primary_color = {} ({})\nborder_radius = {}\ndensity       = {}\nshadow_mode   = {}\n",
        settings.primary_color,
        primary.base.to_css(),
        settings.border_radius,
        settings.density,
        settings.shadow_mode,
    )
}

pub fn describe_style(settings: &ThemeSettings, request: &StyleRequest) -> Result<String> {
    let spec = resolve(settings, request)?;
    let mut out = String::new();
    writeln!(out, "class = \"{}\"", spec.classes().join(" "))?;
    writeln!(out, "style = \"{}\"", spec.inline_style())?;
    if let Some(hover) = spec.hover_background {
        writeln!(out, "hover = \"{}\"", hover.to_css())?;
    }
    if let Some(lift) = &spec.hover_lift {
        writeln!(
            out,
            "lift  = \"{} {} {}\"",
            lift.translate_class,
            lift.shadow.class,
            lift.border_tint.to_css()
        )?;
    }
    if let Some(dot) = spec.indicator {
        writeln!(out, "dot   = \"{}\"", dot.to_css())?;
    }
    if let Some(focus) = spec.focus {
        writeln!(out, "focus = \"{} {}\"", focus.class, focus.border.to_css())?;
    }
    Ok(out)
}

/// Outcome of resolving the full variant matrix
#[derive(Debug, Default)]
pub struct MatrixReport {
    pub themes: usize,
    pub resolved: usize,
    pub failures: Vec<StyleError>,
}

pub fn matrix() -> MatrixReport {
    let mut report = MatrixReport::default();
    for &primary_color in PrimaryColor::all() {
        for &border_radius in RadiusLevel::all() {
            for &density in Density::all() {
                for &shadow_mode in ShadowMode::all() {
                    let settings = ThemeSettings {
                        primary_color,
                        border_radius,
                        density,
                        shadow_mode,
                    };
                    report.themes += 1;
                    resolve_all(&settings, &mut report);
                }
            }
        }
    }
    report
}

fn resolve_all(settings: &ThemeSettings, report: &mut MatrixReport) {
    for &kind in ComponentKind::all() {
        for &variant in kind.variants() {
            for &size in Size::all() {
                for disabled in [false, true] {
                    let request = StyleRequest::new(kind, variant)
                        .size(size)
                        .disabled(disabled)
                        .hoverable(true);
                    match resolve(settings, &request) {
                        Ok(_) => report.resolved += 1,
                        Err(err) => report.failures.push(err),
                    }
                }
            }
        }
    }
}
