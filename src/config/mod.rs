pub mod toml_config;

pub use toml_config::ArchiveConfig;

#[cfg(feature = "cli")]
pub use cli::*;

#[cfg(feature = "cli")]
mod cli {
    use crate::utils::error::ArchiveError;
    use crate::utils::validation::{parse_date, validate_positive_number};
    use chrono::NaiveDate;
    use clap::{Args, Parser, Subcommand};

    fn date_arg(value: &str) -> Result<NaiveDate, ArchiveError> {
        parse_date("date", value)
    }

    fn iso_arg(value: &str) -> Result<u32, String> {
        let iso = value.parse::<u32>().map_err(|e| e.to_string())?;
        validate_positive_number("iso", iso).map_err(|e| e.to_string())?;
        Ok(iso)
    }

    #[derive(Debug, Clone, Parser)]
    #[command(name = "analog-archive")]
    #[command(about = "Keep track of film cameras and the rolls shot with them")]
    pub struct CliConfig {
        /// Path to TOML configuration file
        #[arg(short, long, default_value = "analog-archive.toml")]
        pub config: String,

        /// Archive file to use instead of the configured one
        #[arg(long)]
        pub archive: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Create an empty archive file
        Init {
            /// Overwrite an existing archive
            #[arg(long)]
            force: bool,
        },
        /// Manage the camera collection
        #[command(subcommand)]
        Cameras(CameraCommand),
        /// Manage the film collection
        #[command(subcommand)]
        Films(FilmCommand),
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum CameraCommand {
        List,
        Add {
            #[arg(long)]
            name: String,
            #[arg(long)]
            film_type: String,
            #[arg(long)]
            manufacturer: String,
        },
        Remove {
            index: usize,
        },
        #[command(subcommand)]
        Filter(CameraFilter),
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum CameraFilter {
        Name { value: String },
        FilmType { value: String },
        Manufacturer { value: String },
    }

    #[derive(Debug, Clone, Args)]
    pub struct NewFilm {
        #[arg(long)]
        pub name: String,
        #[arg(long, value_parser = iso_arg)]
        pub iso: u32,
        #[arg(long)]
        pub film_type: String,
        /// Index of the camera in the camera collection
        #[arg(long)]
        pub camera: usize,
        #[arg(long)]
        pub brand: String,
        #[arg(long, value_parser = date_arg)]
        pub expiry: Option<NaiveDate>,
        #[arg(long, value_parser = date_arg)]
        pub develop_date: Option<NaiveDate>,
        #[arg(long)]
        pub develop_location: Option<String>,
        #[arg(long)]
        pub directory: Option<String>,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum FilmCommand {
        List,
        Add(NewFilm),
        Remove {
            index: usize,
        },
        Show {
            index: usize,
        },
        /// Move a roll to another camera of the same film type
        SetCamera {
            index: usize,
            camera: usize,
        },
        SetDates {
            index: usize,
            #[arg(long, value_parser = date_arg, conflicts_with = "clear_expiry")]
            expiry: Option<NaiveDate>,
            #[arg(long, value_parser = date_arg, conflicts_with = "clear_develop_date")]
            develop_date: Option<NaiveDate>,
            #[arg(long)]
            clear_expiry: bool,
            #[arg(long)]
            clear_develop_date: bool,
        },
        SetLocation {
            index: usize,
            /// Omit to clear the location
            location: Option<String>,
        },
        SetDirectory {
            index: usize,
            /// Omit to clear the directory
            directory: Option<String>,
        },
        /// List the images in a roll's directory
        Photos {
            index: usize,
        },
        /// Rolls developed after their expiry date
        Expired,
        #[command(subcommand)]
        Filter(FilmFilter),
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum FilmFilter {
        Name { value: String },
        Iso { value: u32 },
        Type { value: String },
        Brand { value: String },
        /// Rolls shot with a camera of this name
        Camera { name: String },
        Expiry {
            #[arg(value_parser = date_arg)]
            date: NaiveDate,
        },
        DevelopDate {
            #[arg(value_parser = date_arg)]
            date: NaiveDate,
        },
        DevelopLocation { value: String },
        /// Rolls with an images directory recorded
        WithPhotos,
    }

    impl Command {
        /// Whether running the command changes the archive on disk.
        pub fn mutates(&self) -> bool {
            match self {
                Command::Init { .. } => true,
                Command::Cameras(cmd) => {
                    matches!(cmd, CameraCommand::Add { .. } | CameraCommand::Remove { .. })
                }
                Command::Films(cmd) => matches!(
                    cmd,
                    FilmCommand::Add(_)
                        | FilmCommand::Remove { .. }
                        | FilmCommand::SetCamera { .. }
                        | FilmCommand::SetDates { .. }
                        | FilmCommand::SetLocation { .. }
                        | FilmCommand::SetDirectory { .. }
                ),
            }
        }
    }

}
