//! Install layouts: where a component keeps its config directory

/// Where a component's config directory may live
///
/// Candidates are probed in order: `$home_env/home_subdir` first (when the
/// variable is set), then each of `default_dirs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentLayout {
    /// Home environment variable (`HADOOP_HOME`, `FLINK_HOME`, ...)
    pub home_env: &'static str,
    /// Config subdirectory below the home directory (may be empty)
    pub home_subdir: &'static str,
    /// OS-convention directories: Debian-style, RedHat-style, then generic fallbacks
    pub default_dirs: &'static [&'static str],
}

impl ComponentLayout {
    /// Declare a layout
    #[inline]
    #[must_use]
    pub const fn new(
        home_env: &'static str,
        home_subdir: &'static str,
        default_dirs: &'static [&'static str],
    ) -> Self {
        Self {
            home_env,
            home_subdir,
            default_dirs,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::component::Component;
    use crate::data;

    #[test]
    fn every_layout_has_defaults_and_home() {
        for c in Component::ALL {
            let layout = data::table(c).layout;
            assert!(!layout.home_env.is_empty(), "{c} has no home variable");
            assert!(!layout.default_dirs.is_empty(), "{c} has no default dirs");
            assert!(
                layout.default_dirs.iter().all(|d| d.starts_with('/')),
                "{c} default dirs must be absolute"
            );
        }
    }
}
