use clap::{Parser, Subcommand};
use revpdf::config::DEFAULT_SETTINGS_PATH;
use revpdf::{
    FilesystemLocaleProvider, FormInput, FormState, LocaleProvider, PipelineError, ReportGenerator,
    Settings, available_languages,
};
use std::path::PathBuf;

/// Generates code review reports as PDF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a form description to a PDF report
    Generate {
        /// JSON form description
        #[arg(short, long)]
        form: PathBuf,

        /// Destination file (defaults to the settings' output path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
        settings: PathBuf,

        /// Language code overriding the settings
        #[arg(short, long)]
        language: Option<String>,
    },
    /// List the available report languages
    Languages {
        #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
        settings: PathBuf,
    },
    /// Store the report language in the settings file
    SetLanguage {
        /// Language code, one of those listed by `languages`
        code: String,

        #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
        settings: PathBuf,
    },
    /// Print the segment captions of a fresh form
    Labels {
        #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
        settings: PathBuf,

        #[arg(short, long)]
        language: Option<String>,
    },
}

fn main() -> Result<(), PipelineError> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match cli.command {
        Command::Generate {
            form,
            output,
            settings,
            language,
        } => {
            let mut settings = Settings::load(settings)?;
            if let Some(language) = language {
                settings.language = language;
            }
            let output = output.unwrap_or_else(|| settings.output_path.clone());

            let labels = FilesystemLocaleProvider::new(&settings.lang_dir).load(&settings.language)?;
            let form = FormInput::load(&form)?.to_form_state(settings.initial_segments)?;
            let generator = ReportGenerator::new(labels)
                .with_styles(settings.styles)
                .with_author(settings.author.as_str());
            let snapshot = generator.generate(&form, &output)?;
            println!(
                "Generated {} with {} segment(s)",
                output.display(),
                snapshot.segments.len()
            );
        }
        Command::Languages { settings } => {
            let settings = Settings::load(settings)?;
            for code in available_languages(&settings.lang_dir)? {
                println!("{}", code);
            }
        }
        Command::SetLanguage { code, settings: path } => {
            let mut settings = Settings::load(&path)?;
            settings.set_language(&code)?;
            settings.save(&path)?;
            println!("Report language set to {}", code);
        }
        Command::Labels { settings, language } => {
            let settings = Settings::load(settings)?;
            let language = language.unwrap_or(settings.language);
            let labels = FilesystemLocaleProvider::new(&settings.lang_dir).load(&language)?;
            let form = FormState::with_initial_segments(settings.initial_segments);
            for caption in form.segments.display_labels(&labels) {
                println!("{}", caption);
            }
        }
    }
    Ok(())
}
