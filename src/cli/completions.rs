use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    gl-launcher completions bash > ~/.bash_completion.d/gl-launcher\n\n\
                  Generate zsh completions:\n    gl-launcher completions zsh > ~/.zfunc/_gl-launcher\n\n\
                  Generate fish completions:\n    gl-launcher completions fish > ~/.config/fish/completions/gl-launcher.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
