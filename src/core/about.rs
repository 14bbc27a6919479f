/// Static information shown in the about box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub license: &'static str,
}

impl AboutInfo {
    #[must_use]
    pub fn current() -> Self {
        Self {
            name: "Steno Taskbar",
            version: env!("CARGO_PKG_VERSION"),
            description: "A taskbar shell that pauses and resumes stenotype \
                          translation and hosts configuration.",
            url: "https://github.com/almostmachines/steno_taskbar",
            license: "GPLv2+",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_the_crate() {
        assert_eq!(AboutInfo::current().version, env!("CARGO_PKG_VERSION"));
    }
}
