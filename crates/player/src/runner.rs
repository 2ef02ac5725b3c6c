/// Configuration types for the player runner.
pub mod config {
    use std::str::FromStr;

    /// Environment variable selecting the layout shell
    pub const SHELL_ENV: &str = "HEROSHEET_SHELL";
    /// Environment variable overriding the window title
    pub const TITLE_ENV: &str = "HEROSHEET_TITLE";

    pub const DEFAULT_TITLE: &str = "HeroSheet - Create Character";

    /// Shell variant for UI layout selection.
    /// This is passed via Dioxus context from the runner.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum ShellKind {
        #[default]
        Desktop,
        Mobile,
    }

    impl ShellKind {
        /// Class of the outermost layout element
        pub fn layout_class(&self) -> &'static str {
            match self {
                ShellKind::Desktop => "app-shell app-shell--desktop",
                ShellKind::Mobile => "app-shell app-shell--mobile",
            }
        }
    }

    impl FromStr for ShellKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "desktop" => Ok(Self::Desktop),
                "mobile" => Ok(Self::Mobile),
                other => Err(format!("unknown shell kind: {other}")),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RunnerConfig {
        pub shell: ShellKind,
        pub title: String,
    }

    impl Default for RunnerConfig {
        fn default() -> Self {
            Self {
                shell: ShellKind::default(),
                title: DEFAULT_TITLE.to_string(),
            }
        }
    }

    impl RunnerConfig {
        /// Read configuration from the process environment
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Build configuration from any key lookup. Unknown or blank values
        /// fall back to the defaults.
        pub fn from_lookup<F>(lookup: F) -> Self
        where
            F: Fn(&str) -> Option<String>,
        {
            let shell = match lookup(SHELL_ENV) {
                Some(raw) => raw.parse::<ShellKind>().unwrap_or_else(|e: String| {
                    tracing::warn!(error = %e, "Ignoring {}", SHELL_ENV);
                    ShellKind::default()
                }),
                None => ShellKind::default(),
            };

            let title = lookup(TITLE_ENV)
                .map(|raw| raw.trim().to_string())
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string());

            Self { shell, title }
        }
    }

}

use config::RunnerConfig;

pub fn run(config: RunnerConfig) {
    let RunnerConfig { shell, title } = config;

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!("<style>{}</style>", FORM_CSS);
        let window = dioxus_desktop::WindowBuilder::new().with_title(title.as_str());
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(window);
        builder = builder.with_cfg(cfg);
    }

    #[cfg(target_arch = "wasm32")]
    tracing::debug!(%title, "Window title is owned by the host page");

    builder.with_context(shell).launch(crate::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
const FORM_CSS: &str = r#"
body { margin: 0; background: #111827; color: #f9fafb; font-family: sans-serif; }
.app-shell { display: flex; flex-direction: column; gap: 1rem; padding: 1.5rem; }
.app-shell--desktop { max-width: 40rem; margin: 0 auto; }
.app-shell--mobile { padding: 0.75rem; }
.character-form { display: flex; flex-direction: column; gap: 0.75rem; }
.form-field { display: flex; flex-direction: column; gap: 0.25rem; }
.form-field input, .form-field select { padding: 0.5rem; border-radius: 0.25rem; }
"#;
