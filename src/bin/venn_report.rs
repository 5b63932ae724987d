use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let stdout = std::io::stdout();
    fssr_venn::report_app::run_venn_report(std::env::args().skip(1), &mut stdout.lock())
}
