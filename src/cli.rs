// Clap definitions in derive style

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mucat", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Album CSV file (name,year)
    #[arg(short = 'a', long = "albums", value_name = "CSV")]
    pub albums: PathBuf,

    /// Song CSV file (name,album,duration)
    #[arg(short = 's', long = "songs", value_name = "CSV")]
    pub songs: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print an overview of every album and the longest entries
    Summary {
        /// Print as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List song names in alphabetical order
    Songs,

    /// List album names
    Albums {
        /// Only albums released in this year
        #[arg(short = 'y', long = "year")]
        year: Option<i32>,
    },

    /// Count the songs of an album
    Count {
        #[arg(value_name = "ALBUM", required_unless_present = "no_album")]
        album: Option<String>,

        /// Count the songs that belong to no album instead
        #[arg(long = "no-album", conflicts_with = "album")]
        no_album: bool,
    },

    /// Average song duration of an album
    Average {
        #[arg(value_name = "ALBUM")]
        album: String,
    },

    /// Longest song and longest album
    Longest,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
