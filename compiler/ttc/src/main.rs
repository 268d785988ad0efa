//! `ttc`: render a bundled kernel, optionally caching it.

use std::io::Write;

fn main() {
    tt_dsl::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match ttc::Options::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{}", ttc::driver::USAGE);
            std::process::exit(2);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = ttc::run(&options, &mut out) {
        let _ = out.flush();
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
