use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "astro-data-prep")]
#[command(about = "Offline converters for timezone centroids and the lunar feature catalog")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress spinners")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Settings file (TOML)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Average every timezone boundary into a CSV lookup table
    Timezones {
        #[arg(short, long, help = "Timezone boundary GeoJSON file")]
        input: PathBuf,

        #[arg(short, long, help = "Output CSV path [default: tz_coords.csv]")]
        output: Option<PathBuf>,
    },

    /// Print the timezone table as Swift dictionary entries
    SwiftDict {
        #[arg(short, long, help = "Timezone CSV [default: tz_coords.csv]")]
        input: Option<PathBuf>,

        #[arg(short, long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Write an uncurated membership file from the nomenclature shapefile
    Seed {
        #[arg(short, long, help = "Nomenclature shapefile (.shp)")]
        shapefile: Option<PathBuf>,

        #[arg(short, long, help = "Output path [default: initial_cat.txt]")]
        output: Option<PathBuf>,
    },

    /// Build the desktop and Android lunar feature catalogs
    Catalog {
        #[arg(short, long, help = "Nomenclature shapefile (.shp)")]
        shapefile: Option<PathBuf>,

        #[arg(short, long, help = "Curated membership file")]
        membership: Option<PathBuf>,

        #[arg(long, help = "Desktop SQLite output [default: moon.db]")]
        desktop_db: Option<PathBuf>,

        #[arg(long, help = "Android SQLite output [default: moon_android.db]")]
        android_db: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_catalog_overrides() {
        let cli = Cli::parse_from([
            "astro-data-prep",
            "--quiet",
            "catalog",
            "--membership",
            "club.txt",
            "--android-db",
            "out/android.db",
        ]);

        assert!(cli.quiet);
        match cli.command {
            Commands::Catalog {
                shapefile,
                membership,
                desktop_db,
                android_db,
            } => {
                assert_eq!(shapefile, None);
                assert_eq!(membership, Some(PathBuf::from("club.txt")));
                assert_eq!(desktop_db, None);
                assert_eq!(android_db, Some(PathBuf::from("out/android.db")));
            }
            _ => panic!("expected catalog command"),
        }
    }
}
