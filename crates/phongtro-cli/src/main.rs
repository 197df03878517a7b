use clap::Parser;
use phongtro::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so piping into `head` or `less`
    // that exits early terminates us instead of panicking.
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    match phongtro::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
