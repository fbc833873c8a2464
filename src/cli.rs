//! Interface de linha de comando do bot baseada em clap.
//!
//! Sem argumentos o bot faz polling para sempre; as flags só ajustam
//! intervalo, janela inicial e destino dos logs.

use std::path::PathBuf;

use clap::Parser;

/// Acompanha o status de revisão das tarefas e avisa no Telegram.
#[derive(Debug, Parser)]
#[command(name = "homework-bot", version, about)]
pub struct Cli {
    /// Intervalo entre consultas, em segundos (sobrepõe RETRY_TIME).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Timestamp Unix inicial da janela de consulta (padrão: uma semana atrás).
    #[arg(long)]
    pub from_date: Option<i64>,

    /// Executa uma única iteração e sai.
    #[arg(long, default_value_t = false)]
    pub once: bool,

    /// Arquivo de log (append).
    #[arg(long, default_value = "homework_bot.log", conflicts_with = "no_log_file")]
    pub log_file: PathBuf,

    /// Registra apenas na saída padrão.
    #[arg(long, default_value_t = false)]
    pub no_log_file: bool,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Caminho do arquivo de log, se habilitado.
    pub fn log_path(&self) -> Option<&PathBuf> {
        (!self.no_log_file).then_some(&self.log_file)
    }
}
