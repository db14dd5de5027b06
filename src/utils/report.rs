//! Salida de consola del runner
//!
//! Banners de paso y veredicto final. El diagnóstico detallado va por
//! tracing; esto es solo el reporte visible para quien ejecuta el runner.

use colored::*;

const BANNER_WIDTH: usize = 40;

/// Imprime el banner de inicio de un paso del recorrido
pub fn print_step(name: &str) {
    let line = "=".repeat(BANNER_WIDTH);
    println!();
    println!("{}", line.bright_blue());
    println!("{}", format!("STEP: {}", name).bright_blue().bold());
    println!("{}", line.bright_blue());
}

/// Banner inicial del runner
pub fn print_start() {
    println!("{}", "🚀 STARTING INTEGRATION RUN".bright_cyan().bold());
}

/// Veredicto final: recorrido completo
pub fn print_pass() {
    println!();
    println!(
        "{}",
        "🎉 INTEGRATION RUN PASSED SUCCESSFULLY! 🎉"
            .bright_green()
            .bold()
    );
}

/// Veredicto final: recorrido fallido en una etapa concreta
pub fn print_fail(stage: &str) {
    println!();
    println!(
        "{}",
        format!("❌ INTEGRATION RUN FAILED AT {} STAGE.", stage)
            .bright_red()
            .bold()
    );
}
