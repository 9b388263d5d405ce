use addrbook::api::{CmdResult, ConfigAction, ContactsApi};
use addrbook::config::BookConfig;
use addrbook::error::{BookError, Result};
use addrbook::store::fs::FileStore;
use chrono::Local;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_birthdays, print_days, print_messages, print_page_footer, print_records};

const HOME_ENV: &str = "ADDRBOOK_HOME";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("addrbook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(&cli)?;
    let config = BookConfig::load(&data_dir)?;
    let book_path = cli
        .book
        .clone()
        .unwrap_or_else(|| config.book_path(&data_dir));
    let mut api = ContactsApi::open(FileStore::new(book_path), data_dir, config.page_size)?;
    tracing::debug!(
        data_dir = %api.config_dir().display(),
        book = %api.store().path().display(),
        "starting"
    );

    dispatch(&mut api, cli.command)?;
    if api.close()? {
        tracing::debug!("address book saved on exit");
    }
    Ok(())
}

fn dispatch(api: &mut ContactsApi<FileStore>, command: Option<Commands>) -> Result<()> {
    let today = Local::now().date_naive();

    match command {
        Some(Commands::Add {
            name,
            phones,
            birthday,
        }) => {
            let result = api.add_contact(&name, &phones, birthday.as_deref())?;
            print_messages(&result.messages);
        }
        Some(Commands::Change { name, phone, old }) => {
            let result = api.change_phone(&name, old.as_deref(), &phone)?;
            print_messages(&result.messages);
        }
        Some(Commands::Phone { name }) => {
            let result = api.show_contact(&name)?;
            print_listing(&result);
        }
        Some(Commands::Remove { name }) => {
            let result = api.remove_contact(&name)?;
            print_messages(&result.messages);
        }
        Some(Commands::RemovePhone { name, phone }) => {
            let result = api.remove_phone(&name, &phone)?;
            print_messages(&result.messages);
        }
        Some(Commands::Birthday { name, date, clear }) => {
            let date = if clear { None } else { date };
            let result = api.set_birthday(&name, date.as_deref())?;
            print_messages(&result.messages);
        }
        Some(Commands::Days { name }) => {
            let result = api.days_to_birthday(&name, today)?;
            if let (Some(days), Some(record)) =
                (result.days_to_birthday, result.listed_records.first())
            {
                print_days(record.name(), days);
            }
            print_messages(&result.messages);
        }
        Some(Commands::List { page, page_size }) => {
            let result = api.list_contacts(page, page_size)?;
            print_listing(&result);
        }
        Some(Commands::Search { term }) => {
            let result = api.search_contacts(&term)?;
            print_listing(&result);
        }
        Some(Commands::Birthdays { days }) => {
            let result = api.upcoming_birthdays(today, days)?;
            print_birthdays(&result.birthdays);
            print_messages(&result.messages);
        }
        Some(Commands::Config { key, value }) => handle_config(api, key, value)?,
        Some(Commands::Save) => {
            let result = api.save()?;
            print_messages(&result.messages);
        }
        None => {
            let result = api.list_contacts(1, None)?;
            print_listing(&result);
        }
    }
    Ok(())
}

fn handle_config(
    api: &ContactsApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        for key in BookConfig::keys() {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_listing(result: &CmdResult) {
    print_records(&result.listed_records);
    if let Some(page) = &result.page {
        print_page_footer(page);
    }
    print_messages(&result.messages);
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(home) = &cli.home {
        return Ok(home.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            BookError::Io(std::io::Error::other(
                "could not determine a data directory; set ADDRBOOK_HOME",
            ))
        })
}
