use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kardex")]
#[command(about = "File-backed inventory record manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the inventory data file
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a record
    #[command(alias = "a")]
    Add {
        /// Unique ID of the record
        id: String,

        /// Name of the item
        name: String,

        /// Condition of the item (free text)
        condition: String,
    },

    /// List all records
    #[command(alias = "ls")]
    List,

    /// Overwrite a record's name and condition, optionally renaming it
    Update {
        /// ID of the record to update
        id: String,

        /// New name
        name: String,

        /// New condition
        condition: String,

        /// Rename the record to this ID
        #[arg(long)]
        new_id: Option<String>,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete {
        /// ID of the record to delete
        id: String,
    },
}
