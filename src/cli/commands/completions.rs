use crate::cli::{Cli, Shell};
use clap::CommandFactory;
use clap_complete::{generate, Shell as ClapShell};
use std::io::{self, Write};

const BIN_NAME: &str = "ec2prefs";

impl From<&Shell> for ClapShell {
    fn from(shell: &Shell) -> Self {
        match shell {
            Shell::Bash => ClapShell::Bash,
            Shell::Zsh => ClapShell::Zsh,
            Shell::Fish => ClapShell::Fish,
            Shell::PowerShell => ClapShell::PowerShell,
            Shell::Elvish => ClapShell::Elvish,
        }
    }
}

fn install_hint(shell: &Shell) -> &'static str {
    match shell {
        Shell::Bash => "# Add to ~/.bashrc:\n#   eval \"$(ec2prefs completions bash)\"",
        Shell::Zsh => "# Add to ~/.zshrc:\n#   eval \"$(ec2prefs completions zsh)\"",
        Shell::Fish => {
            "# Save to fish completion directory:\n#   ec2prefs completions fish > ~/.config/fish/completions/ec2prefs.fish"
        }
        Shell::PowerShell => {
            "# Add to PowerShell profile:\n#   ec2prefs completions powershell | Out-String | Invoke-Expression"
        }
        Shell::Elvish => "# Add to Elvish config:\n#   eval (ec2prefs completions elvish | slurp)",
    }
}

fn write_completions(shell: &Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(ClapShell::from(shell), &mut cmd, BIN_NAME, out);
}

/// Script goes to stdout, installation hints to stderr
pub fn execute(shell: Shell) {
    eprintln!("Generating completion file for {:?}...", shell);
    write_completions(&shell, &mut io::stdout());
    eprintln!("\n# Installation instructions:\n{}", install_hint(&shell));
}
