//! Alacritty config-file discovery.
//!
//! Candidate order implements Alacritty's lookup precedence:
//! home config dir > home dotfile > Windows `%APPDATA%` > XDG root.
//! The locator returns the first candidate that exists; nothing is cached,
//! so every call reflects the filesystem at call time.

use std::path::PathBuf;

use crate::error::LocateError;
use crate::platform::{self, Environment};

const ALACRITTY_DIR: &str = "alacritty";
const CONFIG_FILE: &str = "alacritty.toml";
const HOME_DOTFILE: &str = ".alacritty.toml";

/// Ordered list of plausible config locations for this environment.
///
/// The list is not deduplicated. When Windows/WSL is detected but `APPDATA`
/// is unset, the Windows candidate is skipped with a warning rather than
/// producing a path rooted at nothing.
pub fn possible_locations(env: &dyn Environment) -> Vec<PathBuf> {
    let host = platform::detect(env);
    let style = host.path_style();
    let mut locations = Vec::new();

    // 1) Home-relative locations take priority.
    if let Some(home) = platform::linux_home(env) {
        locations.push(style.join(&home, &[".config", ALACRITTY_DIR, CONFIG_FILE]));
        locations.push(style.join(&home, &[HOME_DOTFILE]));
    }

    // 2) Windows-side config, reachable from native Windows and from WSL.
    if host.has_windows_home() {
        match platform::windows_home(env) {
            Some(app_data) => {
                locations.push(style.join(&app_data, &[ALACRITTY_DIR, CONFIG_FILE]));
            }
            None => tracing::warn!(
                ?host,
                "{} is unset; skipping the Windows config location",
                platform::WINDOWS_HOME_VAR
            ),
        }
    }

    // 3) XDG config root.
    if let Some(xdg) = platform::xdg_config_home(env) {
        locations.push(style.join(&xdg, &[ALACRITTY_DIR, CONFIG_FILE]));
        locations.push(style.join(&xdg, &[CONFIG_FILE]));
    }

    tracing::debug!(count = locations.len(), "resolved candidate config locations");
    locations
}

/// True iff any candidate location exists on disk.
pub fn config_exists(env: &dyn Environment) -> bool {
    possible_locations(env).iter().any(|path| path.exists())
}

/// First existing candidate, or `NotFound` carrying every path checked.
pub fn config_path(env: &dyn Environment) -> Result<PathBuf, LocateError> {
    let checked = possible_locations(env);
    match checked.iter().find(|path| path.exists()) {
        Some(found) => {
            tracing::debug!(path = %found.display(), "using alacritty config");
            Ok(found.clone())
        }
        None => Err(LocateError::NotFound { checked }),
    }
}

/// Default location for a newly created config on this host.
///
/// Native Windows uses `%APPDATA%`; everything else prefers the home config
/// dir and falls back to the XDG root when `HOME` is unset.
pub fn default_config_path(env: &dyn Environment) -> Option<PathBuf> {
    let host = platform::detect(env);
    let style = host.path_style();
    if host == platform::Platform::NativeWindows {
        return platform::windows_home(env)
            .map(|app_data| style.join(&app_data, &[ALACRITTY_DIR, CONFIG_FILE]));
    }
    if let Some(home) = platform::linux_home(env) {
        return Some(style.join(&home, &[".config", ALACRITTY_DIR, CONFIG_FILE]));
    }
    platform::xdg_config_home(env).map(|xdg| style.join(&xdg, &[ALACRITTY_DIR, CONFIG_FILE]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{FakeEnvironment, TestTempDir};

    #[test]
    fn home_only_yields_two_home_candidates_in_order() {
        let env = FakeEnvironment::new().with_var("HOME", "/home/u");
        assert_eq!(
            possible_locations(&env),
            vec![
                PathBuf::from("/home/u/.config/alacritty/alacritty.toml"),
                PathBuf::from("/home/u/.alacritty.toml"),
            ]
        );
    }

    #[test]
    fn native_windows_includes_appdata_candidate() {
        let env = FakeEnvironment::new()
            .with_var("OS", "Windows_NT")
            .with_var("APPDATA", r"C:\Users\u\AppData");
        assert_eq!(
            possible_locations(&env),
            vec![PathBuf::from(r"C:\Users\u\AppData\alacritty\alacritty.toml")]
        );
    }

    #[test]
    fn xdg_candidates_follow_home_candidates() {
        let env = FakeEnvironment::new()
            .with_var("HOME", "/home/u")
            .with_var("XDG_CONFIG_HOME", "/etc/xdg");
        let locations = possible_locations(&env);
        assert_eq!(locations.len(), 4);
        assert_eq!(locations[2], PathBuf::from("/etc/xdg/alacritty/alacritty.toml"));
        assert_eq!(locations[3], PathBuf::from("/etc/xdg/alacritty.toml"));
    }

    #[test]
    fn wsl_places_windows_candidate_between_home_and_xdg() {
        let env = FakeEnvironment::new()
            .with_var("HOME", "/home/u")
            .with_var("WSLENV", "")
            .with_var("APPDATA", "/mnt/c/Users/u/AppData/Roaming")
            .with_var("XDG_CONFIG_HOME", "/home/u/.xdg");
        let locations = possible_locations(&env);
        assert_eq!(
            locations[2],
            PathBuf::from("/mnt/c/Users/u/AppData/Roaming/alacritty/alacritty.toml")
        );
        assert_eq!(locations.len(), 5);
    }

    #[test]
    fn windows_candidate_skipped_when_appdata_unset() {
        let env = FakeEnvironment::new()
            .with_var("OS", "Windows_NT")
            .with_var("HOME", r"C:\Users\u");
        assert_eq!(
            possible_locations(&env),
            vec![
                PathBuf::from(r"C:\Users\u\.config\alacritty\alacritty.toml"),
                PathBuf::from(r"C:\Users\u\.alacritty.toml"),
            ]
        );
    }

    #[test]
    fn locations_are_deterministic_for_same_environment() {
        let env = FakeEnvironment::new()
            .with_var("HOME", "/home/u")
            .with_var("XDG_CONFIG_HOME", "/etc/xdg")
            .with_kernel_release_file("6.8.0-generic");
        assert_eq!(possible_locations(&env), possible_locations(&env));
    }

    #[test]
    fn config_missing_everywhere() {
        let dir = TestTempDir::new("locate-missing");
        let env = FakeEnvironment::new().with_var("HOME", &dir.root());
        assert!(!config_exists(&env));
        let err = config_path(&env).expect_err("must not find config");
        let LocateError::NotFound { checked } = err;
        assert_eq!(checked, possible_locations(&env));
    }

    #[test]
    fn config_path_returns_first_existing_even_if_lower_priority() {
        let home = TestTempDir::new("locate-home");
        let xdg = TestTempDir::new("locate-xdg");
        let only = xdg.write_text("alacritty.toml", "");
        let env = FakeEnvironment::new()
            .with_var("HOME", &home.root())
            .with_var("XDG_CONFIG_HOME", &xdg.root());
        assert!(config_exists(&env));
        assert_eq!(config_path(&env).expect("found"), only);
    }

    #[test]
    fn config_path_prefers_higher_priority_when_several_exist() {
        let home = TestTempDir::new("locate-priority");
        home.write_text(".alacritty.toml", "");
        let first = home.write_text(".config/alacritty/alacritty.toml", "");
        let env = FakeEnvironment::new().with_var("HOME", &home.root());
        assert_eq!(config_path(&env).expect("found"), first);
    }

    #[test]
    fn default_config_path_per_platform() {
        let unix = FakeEnvironment::new().with_var("HOME", "/home/u");
        assert_eq!(
            default_config_path(&unix),
            Some(PathBuf::from("/home/u/.config/alacritty/alacritty.toml"))
        );
        let windows = FakeEnvironment::new()
            .with_var("OS", "Windows_NT")
            .with_var("APPDATA", r"C:\Users\u\AppData");
        assert_eq!(
            default_config_path(&windows),
            Some(PathBuf::from(r"C:\Users\u\AppData\alacritty\alacritty.toml"))
        );
        let xdg_only = FakeEnvironment::new().with_var("XDG_CONFIG_HOME", "/etc/xdg");
        assert_eq!(
            default_config_path(&xdg_only),
            Some(PathBuf::from("/etc/xdg/alacritty/alacritty.toml"))
        );
        assert_eq!(default_config_path(&FakeEnvironment::new()), None);
    }

    #[cfg(feature = "fuzz-tests")]
    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resolver_is_deterministic_and_home_first(
                home in proptest::option::of("/[a-z]{1,8}(/[a-z]{1,8}){0,2}"),
                xdg in proptest::option::of("/[a-z]{1,8}(/[a-z]{1,8}){0,2}"),
                wsl in any::<bool>(),
            ) {
                let mut env = FakeEnvironment::new();
                if let Some(home) = &home {
                    env = env.with_var("HOME", home);
                }
                if let Some(xdg) = &xdg {
                    env = env.with_var("XDG_CONFIG_HOME", xdg);
                }
                if wsl {
                    env = env.with_var("WSLENV", "").with_var("APPDATA", "/mnt/c/AppData");
                }
                let first = possible_locations(&env);
                prop_assert_eq!(&first, &possible_locations(&env));
                if let Some(home) = &home {
                    prop_assert!(first[0].starts_with(home));
                }
            }
        }
    }
}
