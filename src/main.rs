use std::io;

fn main() {
    bs_call::logging::init_tracing();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = bs_call::cli::run(std::env::args(), &mut stdout.lock(), &mut stderr.lock());
    std::process::exit(code);
}
