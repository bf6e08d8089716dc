use log::*;
use structopt::StructOpt;
use vectool::{run, Opt, Session};

fn main() {
    pretty_env_logger::init_timed();
    let opt = Opt::from_args();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    if let Err(e) = run(&mut session, opt.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}
