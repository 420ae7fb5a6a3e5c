use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use colored::Colorize;

use crate::catalog;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Target directory for generated files
    #[arg(short, long, default_value = "./artifacts/remote-ui")]
    pub output: PathBuf,
}

pub fn export(args: ExportArgs) -> anyhow::Result<()> {
    let output = &args.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let library_text = catalog::create_library_text()?;
    let data_json = catalog::data::create_catalog_json()?;

    let library_path = output.join("catalog.rfwtxt");
    let data_path = output.join("catalog.json");

    fs::write(&library_path, library_text)
        .with_context(|| format!("Failed to write {}", library_path.display()))?;
    fs::write(&data_path, data_json)
        .with_context(|| format!("Failed to write {}", data_path.display()))?;

    let mut detail_paths = Vec::new();
    for id in catalog::data::product_ids() {
        if let Some(detail_json) = catalog::data::create_detail_json(id)? {
            let detail_path = output.join(format!("detail-{id}.json"));
            fs::write(&detail_path, detail_json)
                .with_context(|| format!("Failed to write {}", detail_path.display()))?;
            detail_paths.push(detail_path);
        }
    }

    println!(
        "{} Remote UI assets generated in {}",
        "✓".green().bold(),
        output.display()
    );
    println!("   Library: {}", library_path.display());
    println!("   Data:    {}", data_path.display());
    for detail_path in &detail_paths {
        println!("   Detail:  {}", detail_path.display());
    }

    Ok(())
}
