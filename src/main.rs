use std::process::ExitCode;

fn main() -> ExitCode {
    eventpro_lib::run()
}
