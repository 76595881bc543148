use color_eyre::eyre::{Result, eyre};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScenarioRecord {
    pub op: Op,
    #[serde(rename = "account")]
    pub account_id: String,
    pub holder: Option<String>,
    pub amount: Option<Decimal>,
    pub rate: Option<Decimal>,
    pub limit: Option<Decimal>,
    #[serde(rename = "to")]
    pub to_account_id: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    OpenBasic,
    OpenSavings,
    OpenCurrent,
    Deposit,
    Withdraw,
    Interest,
    Transfer,
    Show,
}

pub fn read_input<D: serde::de::DeserializeOwned>(
    file_path: &str,
) -> Result<impl Iterator<Item = Result<D>>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(file_path)
        .map_err(|e| eyre!("Could not read input file: {}", e))?;

    Ok(reader
        .into_deserialize()
        .map(|r| r.map_err(|ee| eyre!("Error parsing row: {}", ee))))
}
