use raypick::app::{run, Demo, Opt};
use structopt::StructOpt;

fn main() -> Result<(), raypick::Error> {
    run(Demo::Sphere, Opt::from_args())
}
