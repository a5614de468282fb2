//! Shared fixture: a temp directory holding every artifact the Medicaid
//! report binds, plus a `narrative.toml` pointing at them.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::PathBuf;

use narrative::config::ArtifactCatalog;
use tempfile::TempDir;

pub const STATES: [&str; 5] = ["Alabama", "Alaska", "Arizona", "Ohio", "Texas"];

/// JPEG SOI/APP0 prefix; the renderer never decodes images.
pub const JPEG_BYTES: [u8; 8] = [0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, b'J', b'F'];

/// `(logical name, path under data/)`
pub const ARTIFACT_FILES: [(&str, &str); 13] = [
    ("dis_rate", "main/dis_rate_agg.csv"),
    ("ptype_rate", "main/ptype_rate.csv"),
    ("prior_rate", "main/prior_rate.csv"),
    ("homeless_rate", "main/homeless_rate.csv"),
    ("age_groups", "main/age_groups.csv"),
    ("race_agg", "main/race_agg2.csv"),
    ("gender_agg", "main/gender_agg.csv"),
    ("imp_yr_agg", "eda_sets/imp_yr_agg.csv"),
    ("imp_yr_agg_1m", "eda_sets/imp_yr_agg_1m.csv"),
    ("parallel_trends_outp", "img/paral_outp.jpg"),
    ("parallel_trends_dis_rate", "img/para_dis_rate.jpg"),
    ("did_results", "img/dd_modsf.jpg"),
    ("fe_results", "img/fe_modsf.jpg"),
];

/// Yearly per-state rates between 2009 and 2019.
pub fn yearly_rates(measure: &str) -> String {
    let mut csv = format!("year,{measure},state\n");
    for year in 2009..=2019u32 {
        for (i, state) in STATES.iter().enumerate() {
            let rate = 0.30 + f64::from((year * 7 + i as u32 * 13) % 20) / 100.0;
            let _ = writeln!(csv, "{year},{rate:.2},{state}");
        }
    }
    csv
}

/// Yearly counts split by a grouping column.
pub fn yearly_counts(group_column: &str, groups: &[&str]) -> String {
    let mut csv = format!("DISYR,{group_column},count\n");
    for year in 2009..=2019u32 {
        for (i, group) in groups.iter().enumerate() {
            let count = 1000 + (year - 2009) * 10 + i as u32 * 250;
            let _ = writeln!(csv, "{year},{group},{count}");
        }
    }
    csv
}

pub fn artifact_contents(name: &str) -> Vec<u8> {
    let text = match name {
        "dis_rate" => yearly_rates("tmp_rate"),
        "ptype_rate" => yearly_rates("medicaid_use"),
        "prior_rate" => yearly_rates("discharge_rate"),
        "homeless_rate" => yearly_rates("homeless_rate"),
        "age_groups" => "AGE_GRP\n12-20\n21-34\n35-49\n21-34\n50+\n12-20\n".to_string(),
        "race_agg" => yearly_counts("Race_Categ", &["White", "Black", "Hispanic", "Other"]),
        "gender_agg" => yearly_counts("Gender_Type", &["Male", "Female"]),
        "imp_yr_agg" | "imp_yr_agg_1m" => {
            yearly_counts("Imp_Year", &["2014", "2015", "2016", "Never"])
        }
        _ => return JPEG_BYTES.to_vec(),
    };
    text.into_bytes()
}

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Write every artifact and the config file.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let fixture = Self { dir };

        let mut config = String::from("base_dir = \"data\"\n\n[artifacts]\n");
        for (name, rel) in ARTIFACT_FILES {
            fixture.write_artifact(name, &artifact_contents(name));
            let _ = writeln!(config, "{name} = \"{rel}\"");
        }
        std::fs::write(fixture.config_path(), config).expect("write config");
        fixture
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("narrative.toml")
    }

    pub fn artifact_path(&self, name: &str) -> PathBuf {
        let (_, rel) = ARTIFACT_FILES
            .iter()
            .find(|(n, _)| *n == name)
            .expect("known artifact");
        self.dir.path().join("data").join(rel)
    }

    pub fn write_artifact(&self, name: &str, contents: &[u8]) {
        let path = self.artifact_path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create artifact dir");
        }
        std::fs::write(path, contents).expect("write artifact");
    }

    pub fn remove_artifact(&self, name: &str) {
        std::fs::remove_file(self.artifact_path(name)).expect("remove artifact");
    }

    pub fn catalog(&self) -> ArtifactCatalog {
        ARTIFACT_FILES
            .iter()
            .fold(ArtifactCatalog::default(), |catalog, (name, _)| {
                catalog.with(*name, self.artifact_path(name))
            })
    }
}
