use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook")]
#[command(about = "Command-line contact book", long_about = None, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $ADDRBOOK_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Address book file, overriding the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub book: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact, or add phones to an existing one
    #[command(alias = "a")]
    Add {
        /// Contact name
        name: String,

        /// Phone numbers (6 digits each)
        phones: Vec<String>,

        /// Birthday as YYYY-MM-DD
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Change a phone number (the first one unless --old is given)
    #[command(alias = "edit")]
    Change {
        name: String,

        /// New phone number
        phone: String,

        /// Phone number to replace
        #[arg(long)]
        old: Option<String>,
    },

    /// Show a contact's phones and birthday
    #[command(alias = "show")]
    Phone { name: String },

    /// Remove a contact
    #[command(alias = "rm")]
    Remove { name: String },

    /// Remove one phone number from a contact
    RemovePhone { name: String, phone: String },

    /// Set or clear a contact's birthday
    Birthday {
        name: String,

        /// Birthday as YYYY-MM-DD
        #[arg(required_unless_present = "clear")]
        date: Option<String>,

        /// Remove the birthday
        #[arg(long, conflicts_with = "date")]
        clear: bool,
    },

    /// Days until a contact's next birthday
    Days { name: String },

    /// List contacts one page at a time
    #[command(alias = "ls")]
    List {
        /// Page number, starting at 1
        #[arg(default_value_t = 1)]
        page: usize,

        /// Contacts per page (defaults to the configured page size)
        #[arg(short = 'n', long)]
        page_size: Option<usize>,
    },

    /// Search contacts by name or phone
    Search { term: String },

    /// Birthdays coming up soon
    Birthdays {
        /// How many days ahead to look
        #[arg(short, long, default_value_t = 7)]
        days: u32,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, book-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Write the address book to disk now
    Save,
}
