//! Quality control of hydrographic profile data.
//!
//! Reads a tab separated profile export (float or bottle data with QF quality
//! flag columns), keeps only the samples where every tracer used downstream is
//! flagged good, derives N*, in situ density and sigma0, and writes the cleaned
//! table as CSV.
use super::seawater::density;
use crate::Utils::number_format::float_repr;
use crate::errors::{StoichError, StoichResult};
use log::{info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// export column -> short name
pub const COLUMN_RENAMES: [(&str, &str); 22] = [
    ("Station", "station"),
    ("Lat [°N]", "lat"),
    ("Lon [°E]", "lon"),
    ("Pressure[dbar]", "press"),
    ("Temperature[°C]", "temperature"),
    ("QF.2", "temp_flag"),
    ("Salinity[pss]", "sal"),
    ("QF.3", "sal_flag"),
    ("Oxygen[µmol/kg]", "O2"),
    ("QF.6", "O2_flag"),
    ("Nitrate[µmol/kg]", "NO3"),
    ("QF.8", "NO3_flag"),
    ("Nitrite[µmol/kg]", "NO2"),
    ("QF.17", "NO2_flag"),
    ("PO4_CANY[µmol/kg]", "phosphate"),
    ("QF.19", "phosphate_flag"),
    ("pHinsitu[Total]", "pH_insitu"),
    ("QF.12", "pH_insitu_flag"),
    ("TALK_LIAR[µmol/kg]", "TA"),
    ("QF.14", "TA_flag"),
    ("DIC_LIAR[µmol/kg]", "DIC"),
    ("QF.15", "DIC_flag"),
];

pub const DEPTH_COLUMN: &str = "Depth[m]";
pub const DATE_COLUMN: &str = "mon/day/yr";

/// flags which must all be good for a sample to be kept
pub const REQUIRED_FLAGS: [&str; 8] = [
    "temp_flag",
    "sal_flag",
    "O2_flag",
    "NO3_flag",
    "phosphate_flag",
    "pH_insitu_flag",
    "TA_flag",
    "NO2_flag",
];

/// header of the cleaned CSV after the unnamed index column
pub const OUTPUT_COLUMNS: [&str; 18] = [
    "Depth", "Date", "Station", "lat", "lon", "T", "S", "P", "rho", "sigma0", "DIC", "DIP", "NO3",
    "NO2", "Nstar", "TA", "pH", "O2",
];

/// offset added to N*
pub const NSTAR_OFFSET: f64 = 2.9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    /// comment lines before the header row
    pub skip_rows: usize,
    /// quality flag values accepted as good
    pub good_flags: Vec<i64>,
    /// phosphate multiplier of N*, 16 (Redfield) or the N:P of the local OM
    pub nstar_phosphate_coeff: f64,
    /// fill value of missing data
    pub missing_value: f64,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            skip_rows: 71,
            good_flags: vec![0],
            nstar_phosphate_coeff: 16.0,
            missing_value: -10000000000.0,
        }
    }
}

/// One quality controlled sample, µmol/kg for all chemical tracers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct ProfileSample {
    pub depth: Option<f64>,
    pub date: String,
    pub station: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// in situ temperature, °C
    pub T: Option<f64>,
    /// practical salinity
    pub S: Option<f64>,
    /// pressure, dbar
    pub P: Option<f64>,
    /// in situ density, kg/m3
    pub rho: Option<f64>,
    /// potential density anomaly referenced to 0 dbar, kg/m3
    pub sigma0: Option<f64>,
    pub DIC: Option<f64>,
    pub DIP: Option<f64>,
    pub NO3: Option<f64>,
    pub NO2: Option<f64>,
    pub Nstar: Option<f64>,
    pub TA: Option<f64>,
    pub pH: Option<f64>,
    pub O2: Option<f64>,
}

impl ProfileSample {
    fn record(&self, index: usize) -> Vec<String> {
        let num = |x: Option<f64>| x.map(float_repr).unwrap_or_default();
        vec![
            index.to_string(),
            num(self.depth),
            self.date.clone(),
            self.station.clone(),
            num(self.lat),
            num(self.lon),
            num(self.T),
            num(self.S),
            num(self.P),
            num(self.rho),
            num(self.sigma0),
            num(self.DIC),
            num(self.DIP),
            num(self.NO3),
            num(self.NO2),
            num(self.Nstar),
            num(self.TA),
            num(self.pH),
            num(self.O2),
        ]
    }
}

/// N* nitrogen deficit tracer: (NO2 + NO3) - k*PO4 + 2.9
#[allow(non_snake_case)]
pub fn nstar(NO3: f64, NO2: f64, phosphate: f64, k: f64) -> f64 {
    (NO2 + NO3) - k * phosphate + NSTAR_OFFSET
}

/// `mm/dd/yyyy` -> `yyyy-mm-dd`; anything else is kept as it is
fn normalize_date(date_re: &Regex, raw: &str) -> String {
    let raw = raw.trim();
    if let Some(caps) = date_re.captures(raw) {
        let month: u32 = caps[1].parse().unwrap_or(0);
        let day: u32 = caps[2].parse().unwrap_or(0);
        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            return format!("{}-{:02}-{:02}", &caps[3], month, day);
        }
    }
    raw.to_string()
}

pub struct ProfileCleaner {
    pub options: CleaningOptions,
}

impl ProfileCleaner {
    pub fn new(options: CleaningOptions) -> Self {
        Self { options }
    }

    fn parse_value(&self, raw: &str, line: usize) -> StoichResult<Option<f64>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let value: f64 = raw.parse().map_err(|_| StoichError::MalformedNumber {
            line,
            value: raw.to_string(),
        })?;
        if value.is_nan() || value == self.options.missing_value {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }

    fn flag_is_good(&self, flag: Option<f64>) -> bool {
        match flag {
            Some(flag) if flag.fract() == 0.0 => self.options.good_flags.contains(&(flag as i64)),
            _ => false,
        }
    }

    /// Cleans the text of a profile export.
    #[allow(non_snake_case)]
    pub fn clean_str(&self, text: &str) -> StoichResult<Vec<ProfileSample>> {
        let body: String = text
            .lines()
            .skip(self.options.skip_rows)
            .collect::<Vec<_>>()
            .join("\n");
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(body.as_bytes());

        let renames: HashMap<&str, &str> = COLUMN_RENAMES.iter().copied().collect();
        let mut columns: HashMap<String, usize> = HashMap::new();
        for (i, name) in reader.headers()?.iter().enumerate() {
            let name = name.trim();
            let short = renames.get(name).copied().unwrap_or(name);
            columns.insert(short.to_string(), i);
        }
        let column = |name: &str| -> StoichResult<usize> {
            columns
                .get(name)
                .copied()
                .ok_or_else(|| StoichError::MissingColumn(name.to_string()))
        };
        let flag_columns = REQUIRED_FLAGS
            .iter()
            .map(|&name| column(name))
            .collect::<StoichResult<Vec<usize>>>()?;
        let depth = column(DEPTH_COLUMN)?;
        let date = column(DATE_COLUMN)?;
        let station = column("station")?;
        let lat = column("lat")?;
        let lon = column("lon")?;
        let temperature = column("temperature")?;
        let sal = column("sal")?;
        let press = column("press")?;
        let dic = column("DIC")?;
        let phosphate = column("phosphate")?;
        let no3 = column("NO3")?;
        let no2 = column("NO2")?;
        let ta = column("TA")?;
        let ph = column("pH_insitu")?;
        let o2 = column("O2")?;
        let date_re = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$")?;

        let mut samples = Vec::new();
        let mut dropped = 0usize;
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            // header is line skip_rows + 1
            let line = self.options.skip_rows + i + 2;
            let field = |idx: usize| record.get(idx).unwrap_or("");
            let value = |idx: usize| self.parse_value(field(idx), line);

            let mut good = true;
            for &idx in &flag_columns {
                if !self.flag_is_good(value(idx)?) {
                    good = false;
                    break;
                }
            }
            if !good {
                dropped += 1;
                continue;
            }

            let NO3 = value(no3)?;
            let NO2 = value(no2)?;
            let DIP = value(phosphate)?;
            let Nstar = match (NO3, NO2, DIP) {
                (Some(no3), Some(no2), Some(dip)) => {
                    Some(nstar(no3, no2, dip, self.options.nstar_phosphate_coeff))
                }
                _ => None,
            };
            let (T, S, P) = (value(temperature)?, value(sal)?, value(press)?);
            let (rho, sigma0) = match (T, S, P) {
                (Some(t), Some(sp), Some(p)) => match density(sp, t, p) {
                    Ok((rho, sigma0)) => (Some(rho), Some(sigma0)),
                    Err(e) => {
                        warn!("line {}: {}", line, e);
                        (None, None)
                    }
                },
                _ => (None, None),
            };
            samples.push(ProfileSample {
                depth: value(depth)?,
                date: normalize_date(&date_re, field(date)),
                station: field(station).trim().to_string(),
                lat: value(lat)?,
                lon: value(lon)?,
                T,
                S,
                P,
                rho,
                sigma0,
                DIC: value(dic)?,
                DIP,
                NO3,
                NO2,
                Nstar,
                TA: value(ta)?,
                pH: value(ph)?,
                O2: value(o2)?,
            });
        }
        if dropped > 0 {
            warn!("{} samples dropped because of bad quality flags", dropped);
        }
        info!("{} samples passed quality control", samples.len());
        Ok(samples)
    }

    pub fn clean_file(&self, input: &Path) -> StoichResult<Vec<ProfileSample>> {
        let text = fs::read_to_string(input)?;
        self.clean_str(&text)
    }

    /// Cleans `input` and writes the result to `output`, returns the number of samples kept.
    pub fn run(&self, input: &Path, output: &Path) -> StoichResult<usize> {
        let samples = self.clean_file(input)?;
        write_clean_csv(&samples, output)?;
        info!("cleaned profile data written to {}", output.display());
        Ok(samples.len())
    }
}

/// CSV with an unnamed leading index column
pub fn write_clean_csv(samples: &[ProfileSample], output: &Path) -> StoichResult<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::Writer::from_path(output)?;
    let mut header = vec![""];
    header.extend(OUTPUT_COLUMNS.iter());
    writer.write_record(&header)?;
    for (i, sample) in samples.iter().enumerate() {
        writer.write_record(&sample.record(i))?;
    }
    writer.flush()?;
    Ok(())
}
