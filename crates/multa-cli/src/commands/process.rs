//! Process command - extract data from a single notice file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use multa_core::NoticeRecord;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let record = multa_core::extract_from_bytes(&data)?;

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Render a record in the selected output format.
pub fn format_record(record: &NoticeRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_text(record: &NoticeRecord) -> String {
    fn line(label: &str, value: &Option<String>) -> String {
        format!("{}: {}\n", label, value.as_deref().unwrap_or("-"))
    }

    let mut output = String::new();

    output.push_str(&line("Auto", &record.numero_auto));
    output.push_str(&line("Empresa", &record.empresa));
    output.push_str(&line("SPE", &record.spe));
    output.push_str(&line("Data", &record.data_infracao));
    output.push_str(&line("Hora", &record.hora_infracao));
    output.push_str(&line("Veículo", &record.veiculo_prefixo));
    output.push_str(&line("UF", &record.uf));
    output.push_str(&line("Linha", &record.linha));
    output.push_str(&line("Descrição da linha", &record.linha_descricao));
    output.push_str(&line("Valor", &record.valor_multa_formatado));
    output.push_str(&line("Vencimento", &record.data_vencimento));
    output.push_str(&line("DAM", &record.numero_dam));
    output.push_str(&line("Artigo", &record.artigo));
    output.push_str(&line("Inciso", &record.artigo_item));
    output.push_str(&line("Grupo", &record.grupo));
    output.push_str(&line("Infração", &record.descricao_infracao));
    output.push_str(&line("Logradouro", &record.logradouro));
    output.push_str(&line("Bairro", &record.bairro));
    output.push_str(&line("Emissão", &record.data_emissao));
    output.push_str(&line("Matrícula do agente", &record.matricula_agente));

    if let Some(observacao) = &record.observacao {
        output.push_str(&format!("\nObservação:\n{}\n", observacao));
    }

    output.push_str(&format!(
        "\nCampos extraídos: {}/20\n",
        record.campos_extraidos
    ));

    output
}
