use anyhow::Result;
use clap::Parser;

use git_semver::cli::derive_version;
use git_semver::config::{self, Config, ConfigOverlay};
use git_semver::git::Git2Repository;
use git_semver::{output, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    about = "Derive a semantic version for a branch from commit history and tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, env = "INPUT_BRANCH", help = "Branch or ref to version")]
    branch: Option<String>,

    #[arg(long, env = "INPUT_TAG_PREFIX", help = "Tag prefix, e.g. \"v\"")]
    tag_prefix: Option<String>,

    #[arg(
        long,
        env = "INPUT_MAJOR_PATTERN",
        help = "Substring marking a major bump commit"
    )]
    major_pattern: Option<String>,

    #[arg(
        long,
        env = "INPUT_MINOR_PATTERN",
        help = "Substring marking a minor bump commit"
    )]
    minor_pattern: Option<String>,

    #[arg(
        long,
        env = "INPUT_MAIN_FORMAT",
        help = "Main version template, default ${major}.${minor}.${patch}"
    )]
    main_format: Option<String>,

    #[arg(
        long,
        env = "INPUT_INCREMENT_FORMAT",
        help = "Increment template, default ${increment}"
    )]
    increment_format: Option<String>,

    #[arg(
        long,
        env = "INPUT_INCREMENT_DELIMITER",
        help = "Delimiter between main version and increment, e.g. \"dev\""
    )]
    increment_delimiter: Option<String>,

    #[arg(
        long,
        env = "INPUT_CHANGE_PATH",
        help = "Only report changed=true when paths under this filter changed"
    )]
    change_path: Option<String>,

    #[arg(long, help = "Repository location (defaults to the working directory)")]
    repo: Option<String>,

    #[arg(short, long, help = "Suppress the human-readable summary")]
    quiet: bool,
}

fn main() {
    if let Err(e) = run() {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Configuration problems must surface before any git interaction
    let file = config::load_config_file(args.config.as_deref())?;
    let cli = ConfigOverlay {
        branch: args.branch,
        tag_prefix: args.tag_prefix,
        major_pattern: args.major_pattern,
        minor_pattern: args.minor_pattern,
        main_format: args.main_format,
        increment_format: args.increment_format,
        increment_delimiter: args.increment_delimiter,
        change_path: args.change_path,
    };
    let config = Config::resolve(cli, file)?;

    let repo = Git2Repository::open(args.repo.as_deref().unwrap_or("."))?;
    let report = derive_version(&repo, &config)?;

    for warning in &report.warnings {
        ui::display_warning(&warning.to_string());
    }

    if !args.quiet {
        ui::display_version_summary(&report.rendered.version, &report.rendered.tag);

        if let Ok(repository) = std::env::var("GITHUB_REPOSITORY") {
            let target = config.branch.rsplit('/').next().unwrap_or(&config.branch);
            ui::display_status(&format!(
                "To create a release for this version, go to \
                 https://github.com/{}/releases/new?tag={}&target={}",
                repository, report.rendered.release_tag, target
            ));
        }
    }

    output::write_outputs(&mut std::io::stdout(), &report)?;
    output::append_github_output(&report)?;

    Ok(())
}
