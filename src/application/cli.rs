use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::Arg;
use clap::ArgGroup;
use clap::Command;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::Drafts;

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

async fn print_drafts_list() -> Result<()> {
    let problem_ids = Drafts::default().list().await?;
    if problem_ids.is_empty() {
        println!("There are no drafts stored yet.");
        return Ok(());
    }

    for problem_id in problem_ids {
        println!(
            "- Problem {problem_id} ({})",
            Drafts::storage_key(&problem_id)
        );
    }

    return Ok(());
}

async fn print_draft(problem_id: &str) -> Result<()> {
    match Drafts::default().load(problem_id).await? {
        Some(draft) => println!("{draft}"),
        None => bail!(format!("No draft found for problem {problem_id}")),
    }

    return Ok(());
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_drafts_delete() -> Command {
    return Command::new("delete")
        .about("Delete one or all stored drafts.")
        .arg(
            clap::Arg::new("problem-id")
                .short('i')
                .long("id")
                .help("Problem ID")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("all")
                .long("all")
                .help("Delete all stored drafts.")
                .num_args(0),
        )
        .group(
            ArgGroup::new("delete-args")
                .args(["problem-id", "all"])
                .required(true),
        );
}

fn subcommand_drafts() -> Command {
    return Command::new("drafts")
        .about("Manage locally stored drafts.")
        .subcommand(Command::new("dir").about("Print the directory drafts are stored in."))
        .subcommand(Command::new("list").about("List problems with a stored draft."))
        .subcommand(
            Command::new("show")
                .about("Print the stored draft for a problem.")
                .arg(
                    clap::Arg::new("problem-id")
                        .short('i')
                        .long("id")
                        .help("Problem ID")
                        .required(true)
                        .num_args(1),
                ),
        )
        .subcommand(subcommand_drafts_delete());
}

fn arg_code_file() -> Arg {
    return Arg::new(ConfigKey::CodeFile.to_string())
        .short('f')
        .long(ConfigKey::CodeFile.to_string())
        .env("PCTRACK_CODE_FILE")
        .num_args(1)
        .help("Path to the local file holding your solution code. Draft persistence is skipped when unset.");
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("PCTRACK_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

fn arg_csrf_token() -> Arg {
    return Arg::new(ConfigKey::CsrfToken.to_string())
        .long(ConfigKey::CsrfToken.to_string())
        .env("PCTRACK_CSRF_TOKEN")
        .num_args(1)
        .help("CSRF token echoed back on time reports. Sent as an empty string when unset.");
}

fn arg_poll_interval() -> Arg {
    return Arg::new(ConfigKey::PollInterval.to_string())
        .long(ConfigKey::PollInterval.to_string())
        .env("PCTRACK_POLL_INTERVAL")
        .num_args(1)
        .help(format!(
            "Seconds between checks of the code file for changes. [default: {}]",
            Config::default(ConfigKey::PollInterval)
        ));
}

fn arg_problem_id() -> Arg {
    return Arg::new(ConfigKey::ProblemId.to_string())
        .short('p')
        .long(ConfigKey::ProblemId.to_string())
        .env("PCTRACK_PROBLEM_ID")
        .num_args(1)
        .help("Identifier of the problem to track. The tracker does nothing without one.");
}

fn arg_report_interval() -> Arg {
    return Arg::new(ConfigKey::ReportInterval.to_string())
        .long(ConfigKey::ReportInterval.to_string())
        .env("PCTRACK_REPORT_INTERVAL")
        .num_args(1)
        .help(format!(
            "Seconds between time reports to the server. [default: {}]",
            Config::default(ConfigKey::ReportInterval)
        ));
}

fn arg_server_url() -> Arg {
    return Arg::new(ConfigKey::ServerUrl.to_string())
        .short('s')
        .long(ConfigKey::ServerUrl.to_string())
        .env("PCTRACK_SERVER_URL")
        .num_args(1)
        .help(format!(
            "Base URL of the practice-code server. [default: {}]",
            Config::default(ConfigKey::ServerUrl)
        ));
}

pub fn build() -> Command {
    return Command::new("pctrack")
        .about("Tracks editor sessions for the practice-code site. Autosaves problem drafts locally, and reports active editing time to the server.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(arg_code_file())
        .arg(arg_config_file())
        .arg(arg_csrf_token())
        .arg(arg_poll_interval())
        .arg(arg_problem_id())
        .arg(arg_report_interval())
        .arg(arg_server_url())
        .subcommand(subcommand_config())
        .subcommand(subcommand_drafts());
}

/// Handles one-shot subcommands in place. Returns true when the tracker
/// itself should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("drafts", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("dir", _)) => {
                let dir = Drafts::default().cache_dir.to_string_lossy().to_string();
                println!("{dir}");
                return Ok(false);
            }
            Some(("list", _)) => {
                print_drafts_list().await?;
                return Ok(false);
            }
            Some(("show", show_matches)) => {
                let problem_id = show_matches.get_one::<String>("problem-id").unwrap();
                print_draft(problem_id).await?;
                return Ok(false);
            }
            Some(("delete", delete_matches)) => {
                if let Some(problem_id) = delete_matches.get_one::<String>("problem-id") {
                    Drafts::default().delete(problem_id).await?;
                    println!("Deleted draft for problem {problem_id}");
                } else if delete_matches.get_one::<bool>("all").is_some() {
                    Drafts::default().delete_all().await?;
                    println!("Deleted all drafts");
                } else {
                    subcommand_drafts_delete().print_long_help()?;
                }
                return Ok(false);
            }
            _ => {
                subcommand_drafts().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(true);
}
