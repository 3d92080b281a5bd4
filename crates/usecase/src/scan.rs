// crates/usecase/src/scan.rs
use log::info;
use project_radar_domain::ScanConfiguration;
use project_radar_ports::filesystem::FileScanner;

use crate::dto::ScanOutput;

pub struct ScanProjects<'a> {
    scanner: &'a dyn FileScanner,
}

impl<'a> ScanProjects<'a> {
    pub fn new(scanner: &'a dyn FileScanner) -> Self {
        Self { scanner }
    }

    pub fn run(&self, config: &ScanConfiguration) -> ScanOutput {
        let files = self.scanner.scan(config);
        info!("scan found {} files under {} roots", files.len(), config.roots.len());
        ScanOutput { files }
    }
}
