use crate::Stoichiometry::R_matrix::RMatrix;
use crate::Stoichiometry::coefficients::ReactionCoefficients;
use crate::Stoichiometry::reaction_format::UNKNOWN;
use crate::errors::{StoichError, StoichResult};
use crate::settings::StoichTask;
use log::{error, info};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

pub struct LoadData {
    pub file_name: PathBuf,
}

#[allow(non_snake_case)]
impl LoadData {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        LoadData {
            file_name: file_name.into(),
        }
    }
    pub fn load_task(&self) -> StoichResult<StoichTask> {
        load_task_from_file(&self.file_name)
    }
    pub fn load_R_matrix(&self) -> StoichResult<RMatrix> {
        load_R_matrix_from_file(&self.file_name)
    }
    pub fn load_reactions(&self) -> StoichResult<ReactionCoefficients> {
        load_reactions_from_file(&self.file_name)
    }
}

/// Reads a JSON task file, see [`StoichTask`] for the fields.
pub fn load_task_from_file(path: &Path) -> StoichResult<StoichTask> {
    let text = fs::read_to_string(path)?;
    match StoichTask::from_json_str(&text) {
        Ok(task) => {
            info!("Successfully parsed task from file '{}'", path.display());
            Ok(task)
        }
        Err(e) => {
            error!("Error parsing task file '{}': {}", path.display(), e);
            Err(e)
        }
    }
}

/// Parses delimited numeric text as written by `savetxt`. Blank lines are skipped.
pub fn parse_savetxt(text: &str, delimiter: char) -> StoichResult<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(delimiter)
            .map(|field| {
                let field = field.trim();
                field.parse::<f64>().map_err(|_| StoichError::MalformedNumber {
                    line: i + 1,
                    value: field.to_string(),
                })
            })
            .collect::<StoichResult<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

#[allow(non_snake_case)]
pub fn load_R_matrix_from_file(path: &Path) -> StoichResult<RMatrix> {
    let text = fs::read_to_string(path)?;
    RMatrix::from_rows(&parse_savetxt(&text, ',')?)
}

fn parse_coefficient(value: &str, line: usize) -> StoichResult<Option<f64>> {
    if value == UNKNOWN {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| StoichError::MalformedNumber {
            line,
            value: value.to_string(),
        })
}

fn required(value: Option<f64>, line: usize) -> StoichResult<f64> {
    value.ok_or_else(|| StoichError::MalformedNumber {
        line,
        value: UNKNOWN.to_string(),
    })
}

/// Reads the coefficients back from the text of reactions.txt
#[allow(non_snake_case)]
pub fn parse_reactions(text: &str) -> StoichResult<ReactionCoefficients> {
    let dnrn_re = Regex::new(
        r"^DNRN: OM \+ (\S+) NO3- \+ \S+ H\+ -> \S+ CO2 \+ \S+ NH4\+ \+ \S+ H3PO4 \+ (\S+) NO2- \+ (\S+) H20$",
    )?;
    let denit_re = Regex::new(
        r"^Denitrification: OM \+ (\S+) NO2- \+ \S+  H\+ -> \S+ CO2 \+ \S+ NH4\+ \+ \S+ H3PO4 \+ (\S+) N2 \+ (\S+) H2O$",
    )?;
    let two_o_minus_h_re = Regex::new(r"^2b-a = (\S+)$")?;

    let mut dnrn = None;
    let mut denit = None;
    let mut twoO_minus_H = None;
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if let Some(caps) = dnrn_re.captures(line) {
            dnrn = Some((
                required(parse_coefficient(&caps[1], line_no)?, line_no)?,
                required(parse_coefficient(&caps[2], line_no)?, line_no)?,
                parse_coefficient(&caps[3], line_no)?,
            ));
        } else if let Some(caps) = denit_re.captures(line) {
            denit = Some((
                required(parse_coefficient(&caps[1], line_no)?, line_no)?,
                required(parse_coefficient(&caps[2], line_no)?, line_no)?,
                parse_coefficient(&caps[3], line_no)?,
            ));
        } else if let Some(caps) = two_o_minus_h_re.captures(line) {
            twoO_minus_H = parse_coefficient(&caps[1], line_no)?;
        } else if !line.starts_with("OM C:H:O:N:P ratio is") && !line.trim().is_empty() {
            return Err(StoichError::UnrecognizedReaction(line.to_string()));
        }
    }

    let (DNRN_NO3, DNRN_NO2, DNRN_water) =
        dnrn.ok_or_else(|| StoichError::UnrecognizedReaction("DNRN equation is missing".to_string()))?;
    let (denit_NO2, denit_N2, denit_water) = denit.ok_or_else(|| {
        StoichError::UnrecognizedReaction("denitrification equation is missing".to_string())
    })?;
    Ok(ReactionCoefficients {
        DNRN_NO3,
        DNRN_NO2,
        DNRN_water,
        denit_NO2,
        denit_N2,
        denit_water,
        twoO_minus_H,
    })
}

pub fn load_reactions_from_file(path: &Path) -> StoichResult<ReactionCoefficients> {
    let text = fs::read_to_string(path)?;
    parse_reactions(&text)
}
