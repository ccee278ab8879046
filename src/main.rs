use analog_archive::config::{
    CameraCommand, CameraFilter, Command, FilmCommand, FilmFilter, NewFilm,
};
use analog_archive::utils::error::ErrorSeverity;
use analog_archive::utils::logger;
use analog_archive::utils::validation::{validate_non_empty_string, Validate};
use analog_archive::{
    Archive, ArchiveConfig, ArchiveError, ArchiveSession, ArchiveStore, Camera, CliConfig, Film,
    JsonArchiveStore, Result,
};
use clap::Parser;

type Session = ArchiveSession<JsonArchiveStore>;

fn main() {
    let cli = CliConfig::parse();

    let config = match ArchiveConfig::from_file_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file is valid TOML");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let level = config.logging.level.as_deref();
    if config.logging.json {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger_with_level(cli.verbose, level);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let archive_path = cli
        .archive
        .clone()
        .unwrap_or_else(|| config.archive_path().to_string());
    let store = JsonArchiveStore::new(archive_path);

    if let Err(e) = run(&cli, &config, store) {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig, config: &ArchiveConfig, store: JsonArchiveStore) -> Result<()> {
    if let Command::Init { force } = cli.command {
        return init_archive(&store, force);
    }

    let mut session = open_session(store)?;
    match &cli.command {
        Command::Cameras(cmd) => camera_command(&mut session, cmd)?,
        Command::Films(cmd) => film_command(&mut session, cmd, config)?,
        Command::Init { .. } => {}
    }

    if cli.command.mutates() {
        session.save()?;
    }
    Ok(())
}

fn init_archive(store: &JsonArchiveStore, force: bool) -> Result<()> {
    if store.exists() && !force {
        return Err(ArchiveError::ValidationError {
            field: "archive".to_string(),
            reason: format!(
                "{} already exists; pass --force to overwrite",
                store.path().display()
            ),
        });
    }
    store.save(&Archive::empty())?;
    println!("✅ Created empty archive at {}", store.path().display());
    Ok(())
}

fn open_session(store: JsonArchiveStore) -> Result<Session> {
    if store.exists() {
        ArchiveSession::open(store)
    } else {
        tracing::warn!(
            "No archive at {}, starting with an empty one",
            store.path().display()
        );
        Ok(ArchiveSession::new(store))
    }
}

fn camera_command(session: &mut Session, cmd: &CameraCommand) -> Result<()> {
    match cmd {
        CameraCommand::List => {
            print_cameras(session, session.archive().cameras().iter().collect());
        }
        CameraCommand::Add {
            name,
            film_type,
            manufacturer,
        } => {
            validate_non_empty_string("name", name)?;
            validate_non_empty_string("film_type", film_type)?;
            validate_non_empty_string("manufacturer", manufacturer)?;

            let camera = Camera::new(name.as_str(), film_type.as_str(), manufacturer.as_str());
            println!("Added camera {}", camera);
            session.archive_mut().cameras_mut().add(camera);
        }
        CameraCommand::Remove { index } => {
            let id = session.archive().cameras().get(*index)?.id();
            if let Some(camera) = session.archive_mut().cameras_mut().remove(id) {
                println!("Removed camera {}", camera);
            }
        }
        CameraCommand::Filter(filter) => {
            let cameras = session.archive().cameras();
            let matches = match filter {
                CameraFilter::Name { value } => cameras.filter_by_name(value),
                CameraFilter::FilmType { value } => cameras.filter_by_film_type(value),
                CameraFilter::Manufacturer { value } => cameras.filter_by_manufacturer(value),
            };
            print_cameras(session, matches);
        }
    }
    Ok(())
}

fn film_command(session: &mut Session, cmd: &FilmCommand, config: &ArchiveConfig) -> Result<()> {
    match cmd {
        FilmCommand::List => print_films(session, session.archive().films().iter().collect()),
        FilmCommand::Add(new_film) => add_film(session, new_film)?,
        FilmCommand::Remove { index } => {
            let id = session.archive().films().get(*index)?.id();
            if let Some(film) = session.remove_film(id) {
                println!("Removed {}", film);
            }
        }
        FilmCommand::Show { index } => print_film_details(session.archive().films().get(*index)?),
        FilmCommand::SetCamera { index, camera } => {
            let camera = session.archive().cameras().get(*camera)?.clone();
            let film = session.archive_mut().films_mut().get_mut(*index)?;
            let rejected = ArchiveError::IncompatibleFilmType {
                camera: camera.to_string(),
                expected: film.film_type().to_string(),
                found: camera.film_type().to_string(),
            };
            if !film.set_camera(camera) {
                return Err(rejected);
            }
            println!("{} is now shot with {}", film, film.camera());
        }
        FilmCommand::SetDates {
            index,
            expiry,
            develop_date,
            clear_expiry,
            clear_develop_date,
        } => {
            let film = session.archive_mut().films_mut().get_mut(*index)?;
            if let Some(date) = expiry {
                film.set_expiry(*date);
            }
            if *clear_expiry {
                film.clear_expiry();
            }
            if let Some(date) = develop_date {
                film.set_develop_date(*date);
            }
            if *clear_develop_date {
                film.clear_develop_date();
            }
            print_film_details(film);
        }
        FilmCommand::SetLocation { index, location } => {
            let film = session.archive_mut().films_mut().get_mut(*index)?;
            match location {
                Some(location) => film.set_develop_location(location.as_str()),
                None => film.clear_develop_location(),
            }
            print_film_details(film);
        }
        FilmCommand::SetDirectory { index, directory } => {
            let film = session.archive_mut().films_mut().get_mut(*index)?;
            match directory {
                Some(directory) => film.set_directory(directory.as_str()),
                None => film.clear_directory(),
            }
            print_film_details(film);
        }
        FilmCommand::Photos { index } => {
            let id = session.archive().films().get(*index)?.id();
            session.set_active_film(id);
            let images = session.active_film_images(config.image_extensions())?;
            if images.is_empty() {
                println!("No images found");
            }
            for image in images {
                println!("{}", image.display());
            }
        }
        FilmCommand::Expired => print_films(session, session.archive().films().filter_expired()),
        FilmCommand::Filter(filter) => {
            let films = session.archive().films();
            let matches = match filter {
                FilmFilter::Name { value } => films.filter_by_name(value),
                FilmFilter::Iso { value } => films.filter_by_iso(*value),
                FilmFilter::Type { value } => films.filter_by_type(value),
                FilmFilter::Brand { value } => films.filter_by_brand(value),
                FilmFilter::Camera { name } => {
                    films.filter_by_camera(&Camera::new(name.as_str(), "", ""))
                }
                FilmFilter::Expiry { date } => films.filter_by_expiry(Some(*date)),
                FilmFilter::DevelopDate { date } => films.filter_by_develop_date(Some(*date)),
                FilmFilter::DevelopLocation { value } => films.filter_by_develop_location(value),
                FilmFilter::WithPhotos => films.filter_by_photos_path_exist(),
            };
            print_films(session, matches);
        }
    }
    Ok(())
}

fn add_film(session: &mut Session, new_film: &NewFilm) -> Result<()> {
    validate_non_empty_string("name", &new_film.name)?;
    validate_non_empty_string("brand", &new_film.brand)?;

    let camera = session.archive().cameras().get(new_film.camera)?.clone();
    if camera.film_type() != new_film.film_type {
        return Err(ArchiveError::IncompatibleFilmType {
            camera: camera.to_string(),
            expected: new_film.film_type.clone(),
            found: camera.film_type().to_string(),
        });
    }

    let mut film = Film::new(
        new_film.name.as_str(),
        new_film.iso,
        new_film.film_type.as_str(),
        camera,
        new_film.brand.as_str(),
    );
    if let Some(date) = new_film.expiry {
        film.set_expiry(date);
    }
    if let Some(date) = new_film.develop_date {
        film.set_develop_date(date);
    }
    if let Some(location) = &new_film.develop_location {
        film.set_develop_location(location.as_str());
    }
    if let Some(directory) = &new_film.directory {
        film.set_directory(directory.as_str());
    }

    println!("Added {}", film);
    session.archive_mut().films_mut().add(film);
    Ok(())
}

fn print_cameras(session: &Session, cameras: Vec<&Camera>) {
    if cameras.is_empty() {
        println!("No cameras");
    }
    for camera in cameras {
        let index = session.archive().cameras().position(camera.id());
        println!(
            "{:>3}  {} ({})",
            index.map(|i| i.to_string()).unwrap_or_default(),
            camera,
            camera.film_type()
        );
    }
}

fn print_films(session: &Session, films: Vec<&Film>) {
    if films.is_empty() {
        println!("No film");
    }
    for film in films {
        let index = session.archive().films().position(film.id());
        println!(
            "{:>3}  {}  ISO {}  [{}]",
            index.map(|i| i.to_string()).unwrap_or_default(),
            film,
            film.iso(),
            film.camera()
        );
    }
}

fn print_film_details(film: &Film) {
    let date = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "-".into());

    println!("Name:             {}", film.name());
    println!("ISO:              {}", film.iso());
    println!("Type:             {}", film.film_type());
    println!("Brand:            {}", film.brand());
    println!("Camera:           {}", film.camera());
    println!("Expiry:           {}", date(film.expiry()));
    println!("Developed:        {}", date(film.develop_date()));
    println!(
        "Develop location: {}",
        film.develop_location().unwrap_or("-")
    );
    println!("Directory:        {}", film.directory().unwrap_or("-"));
    match film.is_expired() {
        Some(true) => println!("Expired when developed"),
        Some(false) => println!("Developed before expiry"),
        None => {}
    }
}
