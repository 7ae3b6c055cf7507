use super::*;

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from(["upsloc-cli", "search", "--unit", "KM"])
        .expect("expected valid cli args");

    let Commands::Search(args) = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(args.radius, 5);
    assert_eq!(args.unit, upsloc_core::DistanceUnit::Kilometers);
    assert_eq!(args.option, upsloc_core::RequestOption::LOCATIONS);
    assert_eq!(args.max, 15);
    assert_eq!(args.language, "eng");
    assert_eq!(args.locale, "en-US");
}

#[test]
fn parses_render_with_overrides() {
    let cli = Cli::try_parse_from([
        "upsloc-cli",
        "render",
        "--unit",
        "MI",
        "--radius",
        "25",
        "--option",
        "64",
        "--max",
        "3",
        "--locale",
        "fr-CA",
        "--city",
        "Montreal",
    ])
    .expect("expected valid cli args");

    let Commands::Render(args) = cli.command else {
        panic!("expected render command");
    };
    assert_eq!(args.radius().radius(), 25);
    assert_eq!(args.radius().unit(), upsloc_core::DistanceUnit::Miles);
    let options = args.options();
    assert_eq!(options.request_option, upsloc_core::RequestOption::UPS_ACCESS_POINT);
    assert_eq!(options.max_list_size, 3);
    assert_eq!(options.locale, "fr-CA");
    assert_eq!(args.address.city.as_deref(), Some("Montreal"));
}

#[test]
fn rejects_unknown_unit() {
    let result = Cli::try_parse_from(["upsloc-cli", "search", "--unit", "FT"]);
    assert!(result.is_err(), "FT should not be accepted as a unit");
}

#[test]
fn rejects_undocumented_request_option() {
    let result = Cli::try_parse_from(["upsloc-cli", "search", "--unit", "KM", "--option", "65"]);
    assert!(result.is_err(), "65 should not be accepted as a request option");
}

#[test]
fn unit_is_required() {
    let result = Cli::try_parse_from(["upsloc-cli", "search"]);
    assert!(result.is_err());
}

#[test]
fn address_flags_build_address() {
    let cli = Cli::try_parse_from([
        "upsloc-cli",
        "render",
        "--unit",
        "KM",
        "--line1",
        "1 Main St",
        "--state",
        "GA",
        "--postal-code",
        "30301",
    ])
    .unwrap();
    let Commands::Render(args) = cli.command else {
        panic!("expected render command");
    };

    let address = args.address.resolve().expect("flags alone should resolve");
    assert_eq!(address.address_line1.as_deref(), Some("1 Main St"));
    assert_eq!(address.state_province_code.as_deref(), Some("GA"));
    assert_eq!(address.postal_code.as_deref(), Some("30301"));
    assert!(address.city.is_none());
}

#[test]
fn address_flags_override_file_fields() {
    let path = std::env::temp_dir().join(format!("upsloc-cli-address-{}.yaml", std::process::id()));
    std::fs::write(&path, "city: Atlanta\npostal_code: '30301'\n").unwrap();

    let cli = Cli::try_parse_from([
        "upsloc-cli",
        "render",
        "--unit",
        "KM",
        "--address-file",
        path.to_str().unwrap(),
        "--city",
        "Decatur",
    ])
    .unwrap();
    let Commands::Render(args) = cli.command else {
        panic!("expected render command");
    };

    let address = args.address.resolve().expect("file plus flags should resolve");
    std::fs::remove_file(&path).ok();

    assert_eq!(address.city.as_deref(), Some("Decatur"));
    assert_eq!(address.postal_code.as_deref(), Some("30301"));
}
