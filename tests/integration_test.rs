/// Integration tests for the use cases wired to mock ports
mod test_utilities;

use chrono::NaiveDate;
use license_builder::prelude::*;
use std::path::PathBuf;
use test_utilities::mocks::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn edit_use_case(
    repository: &MockStateRepository,
    reporter: &MockProgressReporter,
) -> EditLicenseUseCase<MockStateRepository, MockProgressReporter> {
    EditLicenseUseCase::new(repository.clone(), reporter.clone())
}

fn top_level_id(state: &LicenseState) -> ProductId {
    state
        .license
        .products
        .iter()
        .find(|p| !p.is_dependent())
        .map(|p| p.id)
        .unwrap()
}

#[test]
fn test_add_product_expands_dependents() {
    let repository = MockStateRepository::new();
    let reporter = MockProgressReporter::new();

    let state = edit_use_case(&repository, &reporter)
        .execute(LicenseEdit::AddProduct(ProductType::Cinema4D))
        .unwrap();

    let products: Vec<(ProductType, u32)> = state
        .license
        .products
        .iter()
        .map(|p| (p.product, p.seats))
        .collect();
    assert_eq!(
        products,
        vec![
            (ProductType::Cinema4D, 1),
            (ProductType::Commandline, 2),
            (ProductType::RedshiftCpu, 2),
        ]
    );
    assert_eq!(repository.state(), state);
    assert_eq!(repository.save_count(), 1);
    assert_eq!(
        reporter.get_messages(),
        vec!["Completed: ✅ Added Cinema 4D".to_string()]
    );
}

#[test]
fn test_build_and_generate_license_to_stdout() {
    let repository = MockStateRepository::new();
    let reporter = MockProgressReporter::new();
    let edit = edit_use_case(&repository, &reporter);

    edit.execute(LicenseEdit::ServerInfo(ServerInfoPatch {
        hostname: Some("srv1".to_string()),
        mac_address: Some("AA:BB:CC:DD:EE:FF".to_string()),
        customer_id: Some("ACME-01".to_string()),
        ..Default::default()
    }))
    .unwrap();
    edit.execute(LicenseEdit::GlobalInfo(GlobalInfoPatch {
        start_date: Some(Some(date(2025, 3, 1))),
        ..Default::default()
    }))
    .unwrap();
    let state = edit
        .execute(LicenseEdit::AddProduct(ProductType::Cinema4D))
        .unwrap();
    let id = top_level_id(&state);
    edit.execute(LicenseEdit::UpdateProduct {
        id,
        patch: ProductPatch {
            seats: Some(3),
            end_date: Some(Some(date(2025, 12, 31))),
            year_month: Some("2025.03".to_string()),
            ..Default::default()
        },
    })
    .unwrap();

    let presenter = MockOutputPresenter::new();
    let writer = MockLicenseFileWriter::new();
    let response = GenerateLicenseUseCase::new(
        repository.clone(),
        writer.clone(),
        presenter.clone(),
        reporter.clone(),
    )
    .execute(GenerateRequest::to_stdout())
    .unwrap();

    assert_eq!(response.feature_count, 3);
    assert!(response.written_to.is_none());
    assert!(writer.writes().is_empty());
    assert_eq!(presenter.output(), vec![response.content.clone()]);

    let lines: Vec<&str> = response.content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "SERVER srv1 AA:BB:CC:DD:EE:FF 5053");
    assert_eq!(lines[1], "ISV maxon port=50053");
    assert_eq!(
        lines[2],
        "FEATURE Cinema 4D maxon 2025.03 31-dec-2025 3 01-mar-2025"
    );
    assert_eq!(
        lines[3],
        "FEATURE Commandline maxon 9999.9 31-dec-2025 6 01-mar-2025"
    );
    assert!(lines[4].starts_with("FEATURE Redshift CPU maxon "));
    assert!(lines[4].ends_with(" 31-dec-2025 6 01-mar-2025"));
    assert!(!response.content.ends_with('\n'));
}

#[test]
fn test_generate_into_directory_remembers_destination() {
    let mut initial = LicenseState::default().with_server_info(&ServerInfoPatch {
        customer_id: Some("ACME-01".to_string()),
        ..Default::default()
    });
    initial = initial.add_product(ProductType::ZBrush);
    let repository = MockStateRepository::with_state(initial);
    let writer = MockLicenseFileWriter::new();
    let reporter = MockProgressReporter::new();

    let response = GenerateLicenseUseCase::new(
        repository.clone(),
        writer.clone(),
        MockOutputPresenter::new(),
        reporter.clone(),
    )
    .execute(GenerateRequest::new(Destination::Directory(PathBuf::from(
        "/srv/licenses",
    ))))
    .unwrap();

    let expected = PathBuf::from("/srv/licenses/ACME-01.lic");
    assert_eq!(response.written_to.as_ref(), Some(&expected));
    let writes = writer.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, expected);
    assert_eq!(writes[0].1, response.content);
    assert_eq!(
        repository.state().preferences.destination_folder_path,
        Some(PathBuf::from("/srv/licenses"))
    );
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Completed: ✅ Wrote 1 feature line(s)")));
}

#[test]
fn test_generate_empty_license_warns() {
    let repository = MockStateRepository::new();
    let reporter = MockProgressReporter::new();

    let response = GenerateLicenseUseCase::new(
        repository,
        MockLicenseFileWriter::new(),
        MockOutputPresenter::new(),
        reporter.clone(),
    )
    .execute(GenerateRequest::to_stdout())
    .unwrap();

    assert_eq!(response.feature_count, 0);
    assert_eq!(response.content.lines().count(), 2);
    assert_eq!(reporter.errors().len(), 1);
}

#[test]
fn test_load_replaces_products_and_reports_skipped_lines() {
    let content = "SERVER srv1 AA:BB 5053\n\
                   ISV maxon port=50053\n\
                   FEATURE Houdini maxon 2024.01 31-dec-2024 1 01-jan-2024\n\
                   FEATURE Redshift maxon 2024.06 permanent 4 01-jun-2024\n\
                   FEATURE broken line\n";
    let existing = LicenseState::default().add_product(ProductType::Cinema4D);
    let repository = MockStateRepository::with_state(existing);
    let reporter = MockProgressReporter::new();

    let response = LoadLicenseUseCase::new(
        repository.clone(),
        MockLicenseFileReader::new(content),
        reporter.clone(),
    )
    .execute(LoadRequest::new(
        PathBuf::from("acme.lic"),
        ParseOptions::default(),
    ))
    .unwrap();

    assert_eq!(response.product_count, 1);
    assert_eq!(response.diagnostics.len(), 2);
    assert_eq!(response.diagnostics[0].line_number, 3);

    let state = repository.state();
    assert_eq!(state.license.products.len(), 1);
    let redshift = &state.license.products[0];
    assert_eq!(redshift.product, ProductType::Redshift);
    assert_eq!(redshift.seats, 4);
    assert!(redshift.is_permanent);
    assert_eq!(redshift.start_date, Some(date(2024, 6, 1)));
    assert!(!redshift.is_dependent());

    assert_eq!(
        reporter.errors()[0],
        "Error: ⚠️  Warning: Skipped line 3: unknown product 'Houdini'"
    );
}

#[test]
fn test_load_with_fallback_product() {
    let content = "FEATURE Houdini maxon 2024.01 31-dec-2024 2 01-jan-2024";
    let repository = MockStateRepository::new();

    let response = LoadLicenseUseCase::new(
        repository.clone(),
        MockLicenseFileReader::new(content),
        MockProgressReporter::new(),
    )
    .execute(LoadRequest::new(
        PathBuf::from("acme.lic"),
        ParseOptions {
            unknown_product: UnknownProductPolicy::Fallback(ProductType::Cinema4D),
        },
    ))
    .unwrap();

    assert_eq!(response.product_count, 1);
    assert!(response.diagnostics.is_empty());
    assert_eq!(
        repository.state().license.products[0].product,
        ProductType::Cinema4D
    );
}

#[test]
fn test_load_empty_file_keeps_state() {
    let existing = LicenseState::default().add_product(ProductType::ZBrush);
    let repository = MockStateRepository::with_state(existing.clone());

    let result = LoadLicenseUseCase::new(
        repository.clone(),
        MockLicenseFileReader::new("  \n"),
        MockProgressReporter::new(),
    )
    .execute(LoadRequest::new(
        PathBuf::from("empty.lic"),
        ParseOptions::default(),
    ));

    assert!(result.is_err());
    assert_eq!(repository.state(), existing);
    assert_eq!(repository.save_count(), 0);
}

#[test]
fn test_load_missing_file_fails() {
    let repository = MockStateRepository::new();
    let result = LoadLicenseUseCase::new(
        repository.clone(),
        MockLicenseFileReader::missing(),
        MockProgressReporter::new(),
    )
    .execute(LoadRequest::new(
        PathBuf::from("missing.lic"),
        ParseOptions::default(),
    ));

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LicenseError>(),
        Some(LicenseError::FileReadError { .. })
    ));
    assert_eq!(repository.save_count(), 0);
}

#[test]
fn test_generated_text_loads_back_as_top_level_products() {
    let state = LicenseState::default()
        .with_global_info(&GlobalInfoPatch {
            start_date: Some(Some(date(2025, 1, 1))),
            ..Default::default()
        })
        .unwrap()
        .add_product(ProductType::MaxonOne)
        .add_product(ProductType::ZBrush);
    let text = state.generate_license_file();

    let outcome = LicenseParser::parse(&text);

    assert!(outcome.diagnostics.is_empty());
    let original: Vec<(ProductType, u32, Option<NaiveDate>)> = state
        .license
        .products
        .iter()
        .map(|p| (p.product, p.seats, p.start_date))
        .collect();
    let loaded: Vec<(ProductType, u32, Option<NaiveDate>)> = outcome
        .products
        .iter()
        .map(|p| (p.product, p.seats, p.start_date))
        .collect();
    assert_eq!(loaded, original);
    assert!(outcome.products.iter().all(|p| !p.is_dependent()));
}

#[test]
fn test_every_product_round_trips_through_license_text() {
    let products: Vec<ProductInstance> = ProductType::ALL
        .into_iter()
        .enumerate()
        .map(|(i, product)| {
            let mut instance = ProductInstance::new(product);
            instance.seats = i as u32 + 1;
            instance.start_date = Some(date(2025, 1, i as u32 + 1));
            if i % 3 == 0 {
                instance.is_permanent = true;
            } else {
                instance.end_date = Some(date(2026, (i % 12) as u32 + 1, 28));
            }
            instance.named_user = i % 2 == 1;
            if !instance.is_fixed_version() {
                instance.year_month = format!("2025.{:02}", i + 1);
            }
            instance
        })
        .collect();
    let license = LicenseData {
        products: products.clone(),
        ..Default::default()
    };

    let outcome = LicenseParser::parse(&LicenseSerializer::serialize(&license));

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.products.len(), products.len());
    for (loaded, original) in outcome.products.iter().zip(&products) {
        assert_eq!(loaded.product, original.product);
        assert_eq!(loaded.seats, original.seats, "{}", original.product);
        assert_eq!(loaded.year_month, original.year_month, "{}", original.product);
        assert_eq!(loaded.is_permanent, original.is_permanent, "{}", original.product);
        assert_eq!(loaded.end_date, original.end_date, "{}", original.product);
        assert_eq!(loaded.start_date, original.start_date, "{}", original.product);
        assert_eq!(loaded.named_user, original.named_user, "{}", original.product);
    }
    assert!(outcome.products.iter().any(|p| p.is_permanent));
    assert!(outcome.products.iter().any(|p| p.end_date.is_some()));
    assert!(outcome.products.iter().any(|p| p.named_user));
}

#[test]
fn test_search_matches_case_insensitively() {
    let directory = MockLicenseDirectory::new()
        .with_file("/lic/b.lic", "SERVER srv ACME-01 5053")
        .with_file("/lic/a.lic", "SERVER srv acme-01 5053")
        .with_file("/lic/c.lic", "SERVER other 00:11 5053")
        .with_file("/lic/notes.txt", "ACME-01")
        .with_unreadable_file("/lic/d.lic");
    let reporter = MockProgressReporter::new();

    let response = SearchLicensesUseCase::new(directory, reporter.clone())
        .execute(SearchRequest::new(
            PathBuf::from("/lic"),
            "Acme-01".to_string(),
            "lic".to_string(),
        ))
        .unwrap();

    assert_eq!(
        response.matches,
        vec![PathBuf::from("/lic/a.lic"), PathBuf::from("/lic/b.lic")]
    );
    assert_eq!(response.scanned, 4);
    assert_eq!(response.skipped, 1);
    assert!(reporter
        .get_messages()
        .contains(&"Progress: 4/4 - d.lic".to_string()));
    assert_eq!(reporter.errors().len(), 1);
}

#[test]
fn test_search_without_matches() {
    let directory = MockLicenseDirectory::new().with_file("/lic/a.lic", "SERVER srv 00:11 5053");

    let response = SearchLicensesUseCase::new(directory, MockProgressReporter::new())
        .execute(SearchRequest::new(
            PathBuf::from("/lic"),
            "ACME".to_string(),
            "lic".to_string(),
        ))
        .unwrap();

    assert!(!response.has_matches());
    assert_eq!(response.scanned, 1);
}

#[test]
fn test_search_unreadable_directory_fails() {
    let result = SearchLicensesUseCase::new(
        MockLicenseDirectory::unreadable(),
        MockProgressReporter::new(),
    )
    .execute(SearchRequest::new(
        PathBuf::from("/lic"),
        "ACME".to_string(),
        "lic".to_string(),
    ));

    assert!(result.is_err());
}

#[test]
fn test_clear_all_keeps_preferences_and_restores_server_defaults() {
    let repository = MockStateRepository::new();
    let reporter = MockProgressReporter::new();
    let edit = EditLicenseUseCase::new(repository.clone(), reporter.clone()).with_server_defaults(
        ServerInfoPatch {
            isv_port: Some("7001".to_string()),
            ..Default::default()
        },
    );

    edit.execute(LicenseEdit::AddProduct(ProductType::Redshift))
        .unwrap();
    edit.execute(LicenseEdit::ToggleTheme).unwrap();
    let state = edit.execute(LicenseEdit::ClearAll).unwrap();

    assert!(state.license.products.is_empty());
    assert_eq!(state.license.server_info.isv_port, "7001");
    assert_eq!(state.preferences.theme, ThemeMode::Dark);
    assert_eq!(repository.save_count(), 3);
}

#[test]
fn test_failed_edit_leaves_saved_state_untouched() {
    let repository = MockStateRepository::new();
    let reporter = MockProgressReporter::new();
    let edit = edit_use_case(&repository, &reporter);
    edit.execute(LicenseEdit::AddProduct(ProductType::ZBrush))
        .unwrap();
    let before = repository.state();

    let result = edit.execute(LicenseEdit::RemoveProduct(ProductId::new()));

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LicenseError>(),
        Some(LicenseError::ProductNotFound { .. })
    ));
    assert_eq!(repository.state(), before);
    assert_eq!(repository.save_count(), 1);
}
