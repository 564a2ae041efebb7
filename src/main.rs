mod cli;

use cli::{Args, Command, DateArg};
use license_builder::config::{discover_config, load_config_from_path, ConfigFile};
use license_builder::license_generation::domain::license_date::format_license_date;
use license_builder::prelude::*;
use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };
    let state_path = args.state.clone().unwrap_or_else(|| config.state_file());
    let store = || {
        JsonStateStore::new(state_path.clone()).with_server_defaults(config.server_defaults())
    };
    let presenter = StdoutPresenter::new();

    match args.command {
        Command::List => {
            let state = store().load()?;
            presenter.present(&render_product_list(&state))?;
        }
        Command::Products => {
            presenter.present(&render_catalog())?;
        }
        Command::Preview => {
            let state = store().load()?;
            presenter.present(&state.generate_license_file())?;
        }
        Command::Generate { output, dir } => {
            let destination = match (output, dir) {
                (Some(path), _) => Destination::File(path),
                (None, Some(Some(directory))) => Destination::Directory(directory),
                (None, Some(None)) => {
                    let remembered = store().load()?.preferences.destination_folder_path;
                    let directory = config
                        .destination_folder
                        .clone()
                        .or(remembered)
                        .ok_or_else(|| LicenseError::InvalidInput {
                            message: "No destination folder is configured or remembered".to_string(),
                            hint: "Pass a folder with --dir <DIR> or set destination_folder in the config file".to_string(),
                        })?;
                    Destination::Directory(directory)
                }
                (None, None) => Destination::Stdout,
            };

            let use_case = GenerateLicenseUseCase::new(
                store(),
                FileSystemWriter::new(),
                presenter,
                StderrProgressReporter::new(),
            );
            use_case.execute(GenerateRequest::new(destination))?;
        }
        Command::Load {
            file,
            fallback_product,
        } => {
            let options = config.parse_options(fallback_product)?;
            let use_case =
                LoadLicenseUseCase::new(store(), FileSystemReader::new(), StderrProgressReporter::new());
            use_case.execute(LoadRequest::new(file, options))?;
        }
        Command::Search { term, dir } => {
            return search(&config, store(), term, dir);
        }
        Command::Prefs {
            theme: None,
            zoom: None,
            font_size: None,
            destination: None,
            search_folder: None,
            toggle_theme: false,
        } => {
            let state = store().load()?;
            presenter.present(&render_preferences(&state.preferences))?;
        }
        command => {
            let edit = to_edit(command)?;
            let added = matches!(edit, LicenseEdit::AddProduct(_));

            let use_case = EditLicenseUseCase::new(store(), StderrProgressReporter::new())
                .with_server_defaults(config.server_defaults());
            let state = use_case.execute(edit)?;

            // Print the new id so scripts can refer to the product
            if added {
                if let Some(parent) = state.license.products.iter().rev().find(|p| !p.is_dependent()) {
                    presenter.present(&parent.id.to_string())?;
                }
            }
        }
    }

    Ok(ExitCode::Success)
}

fn search(
    config: &ConfigFile,
    store: JsonStateStore,
    term: String,
    dir: Option<PathBuf>,
) -> Result<ExitCode> {
    let state = store.load()?;
    let directory = match &dir {
        Some(directory) => directory.clone(),
        None => config
            .search_folder
            .clone()
            .or_else(|| state.preferences.search_folder_path.clone())
            .ok_or_else(|| LicenseError::InvalidInput {
                message: "No search folder is configured or remembered".to_string(),
                hint: "Pass a folder with --dir <DIR> or set search_folder in the config file"
                    .to_string(),
            })?,
    };

    let use_case = SearchLicensesUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(SearchRequest::new(
        directory.clone(),
        term,
        config.license_extension(),
    ))?;

    // Remember an explicitly chosen folder
    if dir.is_some() {
        let state = state.with_preferences(&PreferencesPatch {
            search_folder_path: Some(directory),
            ..Default::default()
        })?;
        store.save(&state)?;
    }

    if !response.has_matches() {
        return Ok(ExitCode::NoMatches);
    }

    let listing = response
        .matches
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    StdoutPresenter::new().present(&listing)?;
    Ok(ExitCode::Success)
}

/// Maps a mutating command onto its state edit
fn to_edit(command: Command) -> Result<LicenseEdit> {
    let date = |arg: Option<DateArg>| arg.map(|DateArg(date)| date);

    let edit = match command {
        Command::Server {
            hostname,
            mac_address,
            customer_id,
            communication_port,
            isv_port,
        } => LicenseEdit::ServerInfo(ServerInfoPatch {
            hostname,
            mac_address,
            customer_id,
            communication_port,
            isv_port,
        }),
        Command::Global {
            issue_date,
            start_date,
            end_date,
            year_month,
            opportunity_id,
        } => LicenseEdit::GlobalInfo(GlobalInfoPatch {
            issue_date: date(issue_date),
            start_date: date(start_date),
            end_date: date(end_date),
            year_month,
            opportunity_id,
        }),
        Command::ApplyGlobals { ids } => {
            let targets = if ids.is_empty() {
                None
            } else {
                Some(ids.into_iter().collect::<HashSet<_>>())
            };
            LicenseEdit::ApplyGlobals(targets)
        }
        Command::Vm {
            enabled,
            start_date,
            end_date,
            permanent,
            issue_date,
            year_month,
        } => LicenseEdit::VmToken(VmTokenPatch {
            enabled,
            start_date: date(start_date),
            end_date: date(end_date),
            is_permanent: permanent,
            issue_date: date(issue_date),
            year_month,
        }),
        Command::Add { product } => LicenseEdit::AddProduct(product),
        Command::Remove { id } => LicenseEdit::RemoveProduct(id),
        Command::Update {
            id,
            seats,
            start_date,
            end_date,
            permanent,
            issue_date,
            year_month,
            opportunity_id,
            named_user,
        } => LicenseEdit::UpdateProduct {
            id,
            patch: ProductPatch {
                seats,
                start_date: date(start_date),
                end_date: date(end_date),
                is_permanent: permanent,
                issue_date: date(issue_date),
                year_month,
                opportunity_id,
                named_user,
                notes: None,
            },
        },
        Command::Note { id, text } => LicenseEdit::UpdateNotes { id, notes: text },
        Command::Notes { text } => LicenseEdit::GlobalNotes(text),
        Command::Move { id, over } => LicenseEdit::Reorder { active: id, over },
        Command::Arrange => LicenseEdit::Arrange,
        Command::Prefs {
            toggle_theme: true,
            ..
        } => LicenseEdit::ToggleTheme,
        Command::Prefs {
            theme,
            zoom,
            font_size,
            destination,
            search_folder,
            toggle_theme: false,
        } => LicenseEdit::Preferences(PreferencesPatch {
            theme,
            app_zoom_factor: zoom,
            preview_font_size: font_size,
            search_folder_path: search_folder,
            destination_folder_path: destination,
        }),
        Command::Clear => LicenseEdit::ClearAll,
        Command::List
        | Command::Products
        | Command::Preview
        | Command::Generate { .. }
        | Command::Load { .. }
        | Command::Search { .. } => {
            anyhow::bail!("Command does not change the license state")
        }
    };
    Ok(edit)
}

fn render_product_list(state: &LicenseState) -> String {
    if state.license.products.is_empty() {
        return "No products. Add one with `license-builder add <PRODUCT>`.".to_string();
    }

    state
        .license
        .products
        .iter()
        .map(|product| {
            let indent = if product.is_dependent() { "    " } else { "" };
            let end = if product.is_permanent {
                "permanent".to_string()
            } else {
                or_dash(format_license_date(product.end_date))
            };
            let mut line = format!(
                "{}{}  {}  seats={}  version={}  start={}  end={}",
                indent,
                product.id,
                product.product,
                product.seats,
                or_dash(product.year_month.clone()),
                or_dash(format_license_date(product.start_date)),
                end
            );
            if product.named_user {
                line.push_str("  named-user");
            }
            if !product.notes.is_empty() {
                line.push_str(&format!("  notes=\"{}\"", product.notes));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_catalog() -> String {
    ProductType::ALL
        .iter()
        .map(|&product| {
            let version = if Catalog::is_fixed_version(product) {
                " (fixed version)"
            } else {
                ""
            };
            let dependencies = Catalog::expanded_dependencies(product)
                .iter()
                .map(|d| format!("{} x{}", d.product, d.seat_multiplier))
                .collect::<Vec<_>>();
            if dependencies.is_empty() {
                format!("{}{}", product, version)
            } else {
                format!("{}{} -> {}", product, version, dependencies.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_preferences(preferences: &Preferences) -> String {
    let folder = |path: &Option<PathBuf>| {
        path.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    };
    format!(
        "theme: {}\nzoom: {}\npreview font size: {}\ndestination folder: {}\nsearch folder: {}",
        preferences.theme,
        preferences.app_zoom_factor,
        preferences.preview_font_size,
        folder(&preferences.destination_folder_path),
        folder(&preferences.search_folder_path)
    )
}

fn or_dash(value: String) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value
    }
}
