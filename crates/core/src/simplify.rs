//! Task name shortening for condensed lines

/// Leading words stripped from a task name, checked in order
pub const DEFAULT_PREFIXES: &[&str] = &[
    "Install ", "Set ", "Update ", "Enable ", "Generate ", "Download ", "Change ",
];

/// Substring triggers that replace the whole display name, checked in order
pub const DEFAULT_OVERRIDES: &[(&str, &str)] = &[
    ("base system packages", "Base packages (25)"),
    ("global npm packages", "Global packages (5)"),
    ("additional APT packages", "Additional packages"),
];

/// Shortens task names in two stages.
///
/// First, at most one leading prefix is removed. Then, if the original name
/// contains an override trigger, the display name becomes that override's
/// label instead. Both lookups are case-sensitive.
#[derive(Debug, Clone)]
pub struct NameSimplifier {
    prefixes: Vec<String>,
    overrides: Vec<(String, String)>,
}

impl NameSimplifier {
    pub fn new<P, T, L>(
        prefixes: impl IntoIterator<Item = P>,
        overrides: impl IntoIterator<Item = (T, L)>,
    ) -> Self
    where
        P: Into<String>,
        T: Into<String>,
        L: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            overrides: overrides
                .into_iter()
                .map(|(trigger, label)| (trigger.into(), label.into()))
                .collect(),
        }
    }

    /// Compute the condensed display name for a task
    pub fn simplify(&self, task_name: &str) -> String {
        if let Some((_, label)) = self
            .overrides
            .iter()
            .find(|(trigger, _)| task_name.contains(trigger.as_str()))
        {
            return label.clone();
        }

        self.prefixes
            .iter()
            .find_map(|prefix| task_name.strip_prefix(prefix.as_str()))
            .unwrap_or(task_name)
            .to_string()
    }
}

impl Default for NameSimplifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_PREFIXES.iter().copied(),
            DEFAULT_OVERRIDES.iter().copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Install NVM", "NVM")]
    #[case("Set system timezone", "system timezone")]
    #[case("Update apt cache", "apt cache")]
    #[case("Enable corepack", "corepack")]
    #[case("Generate .zshrc", ".zshrc")]
    #[case("Create user", "Create user")]
    #[case("install lowercase", "install lowercase")]
    fn test_default_prefix_stripping(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(NameSimplifier::default().simplify(input), expected);
    }

    #[rstest]
    #[case("Install base system packages", "Base packages (25)")]
    #[case("Install global npm packages", "Global packages (5)")]
    #[case("Retry global npm packages for user vagrant", "Global packages (5)")]
    #[case("Install additional APT packages", "Additional packages")]
    fn test_overrides_win_over_prefix_stripping(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(NameSimplifier::default().simplify(input), expected);
    }

    #[test]
    fn test_only_one_prefix_is_removed() {
        let simplifier = NameSimplifier::new(["Install ", "Set "], Vec::<(&str, &str)>::new());
        assert_eq!(simplifier.simplify("Install Set tools"), "Set tools");
    }

    #[test]
    fn test_prefix_order_decides_which_prefix_is_removed() {
        let simplifier = NameSimplifier::new(["Up", "Update "], Vec::<(&str, &str)>::new());
        assert_eq!(simplifier.simplify("Update npm"), "date npm");
    }

    #[test]
    fn test_override_checks_original_name() {
        // The trigger spans the stripped prefix, so only the original name contains it
        let simplifier = NameSimplifier::new(["Install "], [("Install Rust", "Rust toolchain")]);
        assert_eq!(simplifier.simplify("Install Rust"), "Rust toolchain");
    }

    #[test]
    fn test_first_override_wins() {
        let simplifier = NameSimplifier::new(
            Vec::<&str>::new(),
            [("npm", "first"), ("npm packages", "second")],
        );
        assert_eq!(simplifier.simplify("npm packages"), "first");
    }

    #[test]
    fn test_override_is_case_sensitive() {
        assert_eq!(
            NameSimplifier::default().simplify("Install Global NPM Packages"),
            "Global NPM Packages"
        );
    }
}
