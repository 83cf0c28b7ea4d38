#![allow(clippy::uninlined_format_args)]

mod cli;

use clap::Parser;
use log::error;
use mucat::{
    import,
    report::{ABSENT, Summary},
};

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let catalog = match import::load(&cli.albums, &cli.songs) {
        Ok((catalog, _)) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Summary { json } => {
            let summary = Summary::from(&catalog);
            if json {
                match summary.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize summary: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", summary);
            }
        }
        Commands::Songs => {
            for name in catalog.ordered_song_names() {
                println!("{}", name);
            }
        }
        Commands::Albums { year } => {
            let names: Vec<&str> = match year {
                Some(year) => catalog.albums_in_year(year).collect(),
                None => catalog.album_names().collect(),
            };
            for name in names {
                println!("{}", name);
            }
        }
        Commands::Count { album, no_album } => {
            let count = match album {
                Some(ref album) if !no_album => catalog.count_songs(album),
                _ => catalog.count_songs_in_no_album(),
            };
            println!("{}", count);
        }
        Commands::Average { album } => match catalog.average_duration_of_songs(&album) {
            Some(average) => println!("{:.2}", average),
            None => println!("No songs in album: {}", album),
        },
        Commands::Longest => {
            println!(
                "Longest song: {}",
                catalog.longest_song().unwrap_or(ABSENT)
            );
            println!(
                "Longest album: {}",
                catalog.longest_album().unwrap_or(ABSENT)
            );
        }
    }
}
