//! Built-in category table for the provisioning playbook

/// Categories in priority order, each with its authored patterns.
///
/// Patterns are authored strings; see `PatternSpec::from_authored` for how a
/// wildcard form is recognised.
pub(crate) const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "System Configuration",
        &[
            "Set hostname",
            "Update /etc/hosts",
            "Generate en_US.UTF-8 locale",
            "Set system locale",
            "Set system timezone",
            "Update apt cache",
            "Install locale packages",
            "Install base system packages",
        ],
    ),
    (
        "Development Tools",
        &[
            "Install NVM",
            "Install Node.js",
            "Update npm",
            "Enable corepack",
            "Install pnpm",
            "Install global npm packages",
            "Install additional APT packages",
            "Install Rust",
            "Install cargo packages",
            "Install pyenv",
        ],
    ),
    (
        "Final Setup",
        &[
            "Change.*shell",
            "Generate .zshrc",
            "shell configuration",
            "permissions",
        ],
    ),
];
