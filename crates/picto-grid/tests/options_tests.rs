use picto_grid::*;
use std::path::PathBuf;

#[test]
fn test_options_default() {
    let options = RenderOptions::default();
    assert_eq!(options.assets, AssetLocation::None);
    assert_eq!(options.palette, PaletteMode::Random { seed: None });
    assert!(options.validate().is_ok());
}

#[test]
fn test_validate_rejects_unknown_theme() {
    let options = RenderOptions {
        palette: PaletteMode::Theme {
            name: "neon".to_string(),
        },
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(GridError::Config(_))));
    assert!(options.palette_provider().is_err());
}

#[test]
fn test_validate_rejects_empty_url() {
    let options = RenderOptions {
        assets: AssetLocation::Http {
            base_url: "  ".to_string(),
        },
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(GridError::Config(_))));
}

#[test]
fn test_theme_palette_provider() {
    let options = RenderOptions {
        palette: PaletteMode::Theme {
            name: "slate".to_string(),
        },
        ..Default::default()
    };
    let provider = options.palette_provider().unwrap();
    assert_eq!(provider.palette(), find_theme("slate").unwrap().palette);
}

#[tokio::test]
async fn test_options_save_and_load() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    let options = RenderOptions {
        title: "Week 12".to_string(),
        assets: AssetLocation::Directory {
            path: PathBuf::from("/srv/picto2"),
        },
        palette: PaletteMode::Fixed {
            palette: Palette {
                background_secondary: Rgb::from_hex("#eeeeee").unwrap(),
                text: Rgb::from_hex("#111111").unwrap(),
                border: Rgb::from_hex("#336699").unwrap(),
            },
        },
    };

    options.save(temp.path()).await.unwrap();
    let loaded = RenderOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_options_partial_file() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        temp.path(),
        r#"{ "assets": { "kind": "http", "base_url": "https://example.com/picto2" },
             "palette": { "kind": "random", "seed": 3 } }"#,
    )
    .unwrap();

    let loaded = RenderOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded.title, RenderOptions::default().title);
    assert_eq!(
        loaded.assets,
        AssetLocation::Http {
            base_url: "https://example.com/picto2".to_string()
        }
    );
    assert_eq!(loaded.palette, PaletteMode::Random { seed: Some(3) });
}

#[tokio::test]
async fn test_options_bad_color() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        temp.path(),
        r##"{ "palette": { "kind": "fixed", "palette": {
            "background_secondary": "#nothex", "text": "#000000", "border": "#000000" } } }"##,
    )
    .unwrap();

    let result = RenderOptions::load(temp.path()).await;
    assert!(matches!(result, Err(GridError::Config(_))));
}
