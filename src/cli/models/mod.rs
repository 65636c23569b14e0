//! Models command - prints the selectable model list

use crate::infrastructure::chatgpt::models;

pub async fn run() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(models::model_options())?);
    Ok(())
}
