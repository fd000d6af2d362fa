//! Print the exploration and path of each requested search on a generated
//! board.
//!
//! Run: cargo run --bin maze-demo -- [bfs|dfs|astar|all] [--level N | --maze RxC] [--seed N]
//!
//! Set `RUST_LOG=debug` to see the engine's search log.

use maze_demo::{Options, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let opts = Options::parse(std::env::args().skip(1))?;
    let out = run(&opts)?;
    print!("{out}");
    Ok(())
}
