//! Log output of a render. Kept in its own test binary because it installs
//! the global logger.

use log::{Level, Metadata, Record};
use picto_grid::*;
use std::sync::Mutex;

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

#[tokio::test]
async fn test_missing_pictogram_logged_as_warning() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    let palette = FixedPalette(Palette {
        background_secondary: Rgb::new(1.0, 1.0, 1.0),
        text: Rgb::new(0.0, 0.0, 0.0),
        border: Rgb::new(0.0, 0.0, 0.0),
    });
    let grid = Grid::from_codes(vec![vec![5, 0]]);
    let doc = render_grids(&[grid], &NoAssets, &palette, "test")
        .await
        .unwrap();
    assert_eq!(doc.missing_images(), 1);

    let records = LOGGER.records.lock().unwrap();
    assert!(
        records
            .iter()
            .any(|(level, msg)| *level == Level::Warn && msg.contains("code 5"))
    );
}
