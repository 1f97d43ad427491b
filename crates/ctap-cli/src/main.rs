use ctap_cli::{Cli, error_exit_code, is_broken_pipe, logging, run};
use clap::Parser;

fn main() {
    // Reset SIGPIPE to default behavior so `ctap file.tap | head` ends quietly
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.log_level) {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(exit_code) => std::process::exit(exit_code.code()),
        Err(e) if is_broken_pipe(&e) => std::process::exit(error_exit_code(&e)),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(error_exit_code(&e));
        }
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
