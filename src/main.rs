use clap::Parser;
use nextpub::args::Args;
use nextpub::logging;
use nextpub::run;
use nextpub::status::ExitStatus;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init_logging();

    match run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            use std::io::Write;

            // Use `writeln` instead of `eprintln` to avoid panicking when the stderr pipe is broken.
            let mut stderr = std::io::stderr().lock();

            // This communicates that this isn't a typical finding but nextpub itself
            // hard-errored for some reason (e.g. failed to resolve the working directory)
            writeln!(stderr, "nextpub failed").ok();

            for cause in err.chain() {
                writeln!(stderr, "  Cause: {cause}").ok();
            }

            ExitStatus::Error.into()
        }
    }
}
