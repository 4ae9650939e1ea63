//! Completions command implementation
//!
//! Handles the `bundle-diff completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// bundle-diff completions bash > /etc/bash_completion.d/bundle-diff
///
/// # Zsh
/// bundle-diff completions zsh > ~/.zfunc/_bundle-diff
/// ```
pub fn cmd_completions(shell: Shell) {
    // Re-create the command structure here since Cli lives in main.rs
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("bundle-diff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bundle analysis snapshot comparator")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("compare").about("Compare two bundle snapshots"))
        .subcommand(Command::new("url").about("Derive a report URL from a bundle descriptor"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "bundle-diff".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use clap_complete::Shell;

    #[test]
    fn test_cmd_completions_all_shells_supported() {
        // Verify all major shells are available
        let _bash = Shell::Bash;
        let _zsh = Shell::Zsh;
        let _fish = Shell::Fish;
        let _powershell = Shell::PowerShell;
    }
}
