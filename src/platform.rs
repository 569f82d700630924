//! Host platform detection and home-directory resolution.
//!
//! Every probe reads through an injected [`Environment`] so detection stays
//! deterministic under test. Probes never fail outward: an unreadable
//! pseudo-file or a missing `uname` binary degrades to "not WSL".

use std::path::PathBuf;
use std::process::Command;

/// Kernel-release pseudo-file consulted for the WSL marker.
pub const KERNEL_RELEASE_PATH: &str = "/proc/sys/kernel/osrelease";
/// Marker substring WSL kernels carry in their release string.
const WSL_KERNEL_MARKER: &str = "microsoft";

pub const OS_VAR: &str = "OS";
pub const WINDOWS_HOME_VAR: &str = "APPDATA";
pub const LINUX_HOME_VAR: &str = "HOME";
pub const XDG_CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";
pub const WSL_ENV_VAR: &str = "WSLENV";

/// Read-only view of the process environment used by detection and path
/// resolution.
///
/// `SystemEnvironment` is the production implementation; tests substitute a
/// fixed snapshot so results do not depend on the machine running them.
pub trait Environment: Send + Sync {
    /// Value of an environment variable, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
    /// Contents of [`KERNEL_RELEASE_PATH`], or `None` when absent/unreadable.
    fn kernel_release_file(&self) -> Option<String>;
    /// Stdout of `uname -r`, or `None` when the command cannot run or fails.
    fn kernel_release_command(&self) -> Option<String>;
}

/// Environment backed by the real process state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    fn kernel_release_file(&self) -> Option<String> {
        std::fs::read_to_string(KERNEL_RELEASE_PATH).ok()
    }

    fn kernel_release_command(&self) -> Option<String> {
        let output = Command::new("uname").arg("-r").output().ok()?;
        if !output.status.success() {
            return None;
        }
        String::from_utf8(output.stdout).ok()
    }
}

/// Host OS family relevant to Alacritty config placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    NativeWindows,
    Wsl,
    Unix,
}

impl Platform {
    /// True when a Windows-side `%APPDATA%` config may apply.
    pub fn has_windows_home(self) -> bool {
        matches!(self, Self::NativeWindows | Self::Wsl)
    }

    /// Separator convention used when joining candidate paths.
    pub fn path_style(self) -> PathStyle {
        match self {
            Self::NativeWindows => PathStyle::Windows,
            Self::Wsl | Self::Unix => PathStyle::Posix,
        }
    }
}

/// Classify the host. Native Windows wins; the WSL probes only run when the
/// `OS` check is negative.
pub fn detect(env: &dyn Environment) -> Platform {
    let platform = if is_native_windows(env) {
        Platform::NativeWindows
    } else if is_wsl(env) {
        Platform::Wsl
    } else {
        Platform::Unix
    };
    tracing::debug!(?platform, "detected host platform");
    platform
}

/// True iff `OS` is exactly `Windows_NT`.
pub fn is_native_windows(env: &dyn Environment) -> bool {
    env.var(OS_VAR).as_deref() == Some("Windows_NT")
}

/// True when any WSL signal is present.
///
/// Checks run cheapest first and stop at the first positive: the
/// kernel-release file, then `WSLENV` presence, then `uname -r`.
pub fn is_wsl(env: &dyn Environment) -> bool {
    kernel_release_file_marks_wsl(env)
        || wsl_env_present(env)
        || kernel_release_command_marks_wsl(env)
}

fn kernel_release_file_marks_wsl(env: &dyn Environment) -> bool {
    let hit = env
        .kernel_release_file()
        .is_some_and(|release| contains_wsl_marker(&release));
    tracing::debug!(hit, path = KERNEL_RELEASE_PATH, "wsl probe: kernel release file");
    hit
}

fn wsl_env_present(env: &dyn Environment) -> bool {
    let hit = env.var(WSL_ENV_VAR).is_some();
    tracing::debug!(hit, "wsl probe: WSLENV");
    hit
}

fn kernel_release_command_marks_wsl(env: &dyn Environment) -> bool {
    let hit = env
        .kernel_release_command()
        .is_some_and(|release| contains_wsl_marker(&release));
    tracing::debug!(hit, "wsl probe: uname -r");
    hit
}

fn contains_wsl_marker(release: &str) -> bool {
    release.to_lowercase().contains(WSL_KERNEL_MARKER)
}

/// Windows application-data root (`APPDATA`).
pub fn windows_home(env: &dyn Environment) -> Option<String> {
    non_empty_var(env, WINDOWS_HOME_VAR)
}

/// User home (`HOME`).
pub fn linux_home(env: &dyn Environment) -> Option<String> {
    non_empty_var(env, LINUX_HOME_VAR)
}

/// XDG config root override (`XDG_CONFIG_HOME`).
pub fn xdg_config_home(env: &dyn Environment) -> Option<String> {
    non_empty_var(env, XDG_CONFIG_HOME_VAR)
}

fn non_empty_var(env: &dyn Environment, name: &str) -> Option<String> {
    env.var(name).filter(|value| !value.is_empty())
}

/// Separator convention for building candidate paths from raw env values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Posix,
    Windows,
}

impl PathStyle {
    fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Join `segments` under `root` using this style's separator.
    ///
    /// Windows style also normalizes forward slashes in `root`.
    pub fn join(self, root: &str, segments: &[&str]) -> PathBuf {
        let sep = self.separator();
        let root = match self {
            Self::Posix => root.to_string(),
            Self::Windows => root.replace('/', "\\"),
        };
        let mut out = root.trim_end_matches(sep).to_string();
        for segment in segments {
            out.push(sep);
            out.push_str(segment);
        }
        PathBuf::from(out)
    }
}
