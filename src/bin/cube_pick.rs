use raypick::app::{run, Demo, Opt};
use structopt::StructOpt;

fn main() -> Result<(), raypick::Error> {
    run(Demo::Cube, Opt::from_args())
}
